//! Upstream provider abstraction
//!
//! The chat route talks to the upstream generation API only through this
//! trait, so tests and alternative deployments can swap the implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RelayResult;
use crate::proxy::logging::RequestContext;
use crate::relay::UpstreamPayload;

/// Trait defining the interface for the upstream generation API
///
/// # Security
///
/// Implementations MUST:
/// - Never return or log the upstream credential
/// - Strip request URLs from transport errors when the URL carries the key
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Get the provider name for logging and metrics
    fn name(&self) -> &'static str;

    /// Whether the provider has a credential to call upstream with
    fn is_configured(&self) -> bool;

    /// Send one non-streaming generation request.
    ///
    /// Returns the parsed upstream JSON body on a 2xx status. A non-2xx
    /// status becomes `RelayError::Upstream` with the same status code.
    async fn generate_content(
        &self,
        payload: &UpstreamPayload,
        ctx: &RequestContext,
    ) -> RelayResult<Value>;
}
