use std::sync::Arc;

use crate::content::PortfolioContent;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The content is built once at startup and never mutated for the process
/// lifetime — a restart is the only way it changes.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<PortfolioContent>,
}
