//! Wire types for the relay
//!
//! Inbound request bodies, the Gemini `generateContent` payload, and the
//! upstream success and error envelopes.

use serde::{Deserialize, Serialize};

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A text fragment of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// One exchange unit in a conversation, in the upstream content format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    /// A single-part user turn
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// A single-part model turn
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request body accepted by `POST /api/chat`
///
/// `prompt` is the legacy name of `userPrompt`; both names map to the same
/// field and sending both is rejected by serde as a duplicate field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    #[serde(default, alias = "prompt")]
    pub user_prompt: Option<String>,
    #[serde(default)]
    pub chat_history: Option<Vec<Turn>>,
}

/// Request body sent to `generateContent`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpstreamPayload {
    pub contents: Vec<Turn>,
}

/// Upstream success envelope, as far as the text extraction needs it
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Upstream error envelope: `{ "error": { "code", "message", "status" } }`
#[derive(Debug, Deserialize)]
pub struct UpstreamErrorBody {
    pub error: UpstreamErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamErrorDetail {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub status: Option<String>,
}

/// Body of a text-mode success response
#[derive(Debug, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}
