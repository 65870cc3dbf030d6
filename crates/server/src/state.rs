use std::sync::Arc;

use service::quotes::QuoteRepository;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteRepository>,
}

impl AppState {
    pub fn new(quotes: Arc<dyn QuoteRepository>) -> Self {
        Self { quotes }
    }
}
