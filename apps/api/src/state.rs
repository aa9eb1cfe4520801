use std::sync::Arc;

use crate::llm_client::GenerativeBackend;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no mutable data: concurrent requests share one client and never
/// interact with each other.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generative backend. Production uses `GeminiClient`;
    /// tests swap in stubs.
    pub llm: Arc<dyn GenerativeBackend>,
}
