pub mod assets;
pub mod health;
pub mod page;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_index))
        .route("/health", get(health::health_handler))
        .route("/assets/:name", get(assets::handle_asset))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::content;

    fn test_router() -> Router {
        build_router(AppState {
            content: content::portfolio(),
        })
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_serves_full_page() {
        let (status, body) = get_body(test_router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        for id in [
            "id=\"about\"",
            "id=\"experience\"",
            "id=\"projects\"",
            "id=\"skills\"",
            "id=\"education\"",
            "id=\"certifications\"",
        ] {
            assert!(body.contains(id), "page missing {id}");
        }
        // Initial highlight is the first section, before any visibility event.
        assert!(body.contains("class=\"nav-item active\" data-section=\"about\""));
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let (status, body) = get_body(test_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_scrollspy_asset_embeds_contract_constants() {
        let (status, body) = get_body(test_router(), "/assets/scrollspy.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("const VISIBILITY_THRESHOLD = 0.3;"));
        assert!(body.contains("\"certifications\""));
    }

    #[tokio::test]
    async fn test_stylesheet_is_served() {
        let (status, body) = get_body(test_router(), "/assets/site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(".nav-item.active"));
    }

    #[tokio::test]
    async fn test_unknown_asset_is_404_with_error_envelope() {
        let (status, body) = get_body(test_router(), "/assets/favicon.ico").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
