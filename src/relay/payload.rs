//! Inbound request normalization
//!
//! Turns an [`InboundRequest`] into the `contents` list sent upstream.

use crate::config::PromptPlacement;
use crate::error::{RelayError, RelayResult};
use crate::relay::types::{InboundRequest, Turn, UpstreamPayload};

/// Build the upstream payload for a request.
///
/// - prompt only: a single user turn
/// - prompt and history: the prompt turn placed before or after the history
/// - history only: the history as-is
///
/// A blank prompt counts as absent. Fails with `InvalidInput` when neither a
/// prompt nor a non-empty history is present.
pub fn build_payload(
    request: InboundRequest,
    placement: PromptPlacement,
) -> RelayResult<UpstreamPayload> {
    let prompt = request
        .user_prompt
        .filter(|p| !p.trim().is_empty())
        .map(Turn::user);
    let history = request.chat_history.unwrap_or_default();

    let contents = match (prompt, history.is_empty()) {
        (None, true) => {
            return Err(RelayError::InvalidInput(
                "Request must include a non-empty prompt or chat history".to_string(),
            ))
        }
        (Some(prompt), true) => vec![prompt],
        (None, false) => history,
        (Some(prompt), false) => match placement {
            PromptPlacement::First => std::iter::once(prompt).chain(history).collect(),
            PromptPlacement::Last => history.into_iter().chain(std::iter::once(prompt)).collect(),
        },
    };

    Ok(UpstreamPayload { contents })
}
