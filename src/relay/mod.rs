//! Relay core
//!
//! Request normalization and upstream result mapping, independent of HTTP
//! transport.

pub mod payload;
pub mod response;
pub mod types;

pub use payload::build_payload;
pub use response::{shape_success, upstream_failure, UpstreamErrorMessage};
pub use types::{InboundRequest, Part, Role, Turn, UpstreamPayload};
