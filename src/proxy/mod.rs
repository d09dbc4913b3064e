//! Proxy module
//!
//! Handles request forwarding to the upstream generation API.

pub mod gemini;
pub mod logging;
pub mod provider;

pub use gemini::GeminiClient;
pub use logging::RequestContext;
pub use provider::GenerativeProvider;
