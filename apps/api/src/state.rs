use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generative-text backend. `GeminiClient` in production, mocks in tests.
    pub llm: Arc<dyn LlmGateway>,
    pub config: Config,
}
