//! In-memory mock of the remote wallet service, for integration tests and
//! local development.
//!
//! Serves the four `/grpc/*` endpoints with the two-level response envelope.
//! State is seeded by the caller; history endpoints paginate with
//! numeric-offset cursors, and a failure mode can be injected to exercise
//! the client's degradation paths.

pub mod handlers;
pub mod server;
pub mod state;

pub use server::{create_router, run_server, spawn};
pub use state::{shared, FailureMode, MockState, SharedState};
