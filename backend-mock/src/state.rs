//! Seedable in-memory state for the mock service.

use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Failure injected on every subsequent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Respond with HTTP 500.
    Http500,
    /// Outer envelope carries a non-zero code.
    OuterError,
    /// Inner envelope carries a non-zero code.
    InnerError,
}

/// Items are raw JSON so tests control the exact wire shapes.
#[derive(Default)]
pub struct MockState {
    pub assets: Vec<Value>,
    pub transactions: Vec<Value>,
    pub transfers: Vec<Value>,
    pub currencies: Vec<Value>,
    pub failure: Option<FailureMode>,
}

pub type SharedState = Arc<Mutex<MockState>>;

pub fn shared() -> SharedState {
    Arc::new(Mutex::new(MockState::default()))
}
