//! Mock infrastructure for testing external services
//!
//! This module provides mock servers and test helpers for the upstream
//! Gemini API. Mocks are reusable across test files and support success,
//! error and malformed-response scenarios.

pub mod gemini;

pub use gemini::*;
