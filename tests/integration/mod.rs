//! Integration tests for Prompt Relay
//!
//! These tests drive the real router in-process against a mock Gemini
//! upstream and verify the complete request/response flow.
