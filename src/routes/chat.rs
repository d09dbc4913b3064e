//! Chat relay endpoint
//!
//! `POST /api/chat` accepts a prompt and/or chat history, forwards it to the
//! upstream generation API with the server-held key, and relays the result.

use std::sync::Arc;

use axum::{
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::Instrument;

use crate::{
    error::{RelayError, RelayResult},
    proxy::RequestContext,
    relay::{build_payload, shape_success, InboundRequest},
    routes::metrics::{record_request, record_upstream_error},
    AppState,
};

/// Path of the relay route
pub const CHAT_PATH: &str = "/api/chat";

/// Handle chat relay requests
pub async fn relay_chat(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let ctx = RequestContext::new(state.provider.name(), CHAT_PATH)
        .with_model(state.config.gemini_model.clone());
    let span = ctx.create_span();

    async move {
        ctx.log_request_start();
        let result = relay(&state, &ctx, body).await;
        let duration = ctx.elapsed_secs();

        match result {
            Ok(value) => {
                record_request("success", duration);
                ctx.log_request_complete();
                (StatusCode::OK, Json(value)).into_response()
            }
            Err(err) => {
                record_request(err.kind(), duration);
                match &err {
                    RelayError::InvalidInput(reason)
                    | RelayError::BodyRejected {
                        message: reason, ..
                    } => ctx.log_rejected(err.kind(), reason),
                    RelayError::Upstream { status, .. } => {
                        record_upstream_error(status.as_u16());
                        ctx.log_error(err.kind(), &err.to_string());
                    }
                    _ => ctx.log_error(err.kind(), &err.to_string()),
                }
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

/// Validate, forward and shape one request
async fn relay(
    state: &AppState,
    ctx: &RequestContext,
    body: Result<Bytes, BytesRejection>,
) -> RelayResult<Value> {
    // Checked before the body so a missing key reports 500 for any input
    if !state.provider.is_configured() {
        return Err(RelayError::ServerMisconfigured);
    }

    let body = body.map_err(|rejection| RelayError::BodyRejected {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;

    let request: InboundRequest = serde_json::from_slice(&body)
        .map_err(|e| RelayError::InvalidInput(format!("Invalid request body: {}", e)))?;

    let payload = build_payload(request, state.config.prompt_placement)?;
    ctx.log_payload_built(payload.contents.len());

    let upstream_body = state.provider.generate_content(&payload, ctx).await?;

    shape_success(upstream_body, state.config.response_mode)
}

/// Fallback for every method other than POST on the relay route
pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}
