use axum::{extract::State, response::Html};

use crate::render::render_page;
use crate::scrollspy::NavController;
use crate::state::AppState;

/// GET /
/// Renders the full single-page portfolio. The initial sidebar highlight is
/// the controller's default active section — the client script takes over
/// once visibility events start arriving.
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let initial_active = NavController::new().active_section();
    Html(render_page(&state.content, initial_active))
}
