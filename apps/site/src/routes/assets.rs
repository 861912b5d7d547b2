//! Generated assets — the client script and the stylesheet.
//!
//! Nothing here is read from disk: the script is generated from the
//! scroll-spy constants at request time, the stylesheet is a literal.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::scrollspy;

/// GET /assets/:name
pub async fn handle_asset(Path(name): Path<String>) -> Result<Response, AppError> {
    match name.as_str() {
        "scrollspy.js" => Ok((
            [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
            scrollspy::client_script(),
        )
            .into_response()),
        "site.css" => Ok((
            [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
            STYLESHEET,
        )
            .into_response()),
        _ => Err(AppError::NotFound(format!("asset '{name}' does not exist"))),
    }
}

const STYLESHEET: &str = r#"* { box-sizing: border-box; margin: 0; }
body { font-family: system-ui, sans-serif; color: #1a1a2e; background: linear-gradient(135deg, #eef2ff, #ede9fe); display: flex; }
.sidebar { position: fixed; left: 0; top: 0; height: 100vh; width: 16rem; padding: 2rem; background: linear-gradient(#4f46e5, #7c3aed); color: #fff; display: flex; flex-direction: column; align-items: center; }
.photo { width: 10rem; height: 10rem; border-radius: 50%; border: 4px solid #fff; background-size: cover; background-position: center; margin-bottom: 1.5rem; }
.name { font-size: 1.6rem; text-align: center; }
.headline { color: #c7d2fe; margin: 0.5rem 0 1.5rem; }
.social { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
.social a { color: #e0e7ff; }
.nav { width: 100%; display: flex; flex-direction: column; gap: 0.5rem; }
.nav-item { display: flex; align-items: center; gap: 0.75rem; width: 100%; padding: 0.75rem; border: 0; border-radius: 0.5rem; background: transparent; color: inherit; font: inherit; cursor: pointer; transition: background 0.3s; }
.nav-item:hover { background: rgba(255, 255, 255, 0.15); }
.nav-item.active { background: #fff; color: #4338ca; }
.content { margin-left: 16rem; width: calc(100% - 16rem); padding: 2rem; max-width: 60rem; }
.page-section { padding-top: 6rem; scroll-margin-top: 6rem; }
.section-header { display: flex; align-items: center; gap: 1rem; border-bottom: 2px solid #c7d2fe; padding-bottom: 0.5rem; margin-bottom: 1.5rem; color: #4338ca; }
.card { background: #fff; border: 1px solid #eef2ff; border-radius: 0.75rem; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06); padding: 1.5rem; margin-bottom: 1.5rem; }
.card-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
.card h3 { color: #4338ca; margin-bottom: 0.5rem; }
.subtitle { color: #555; margin-bottom: 0.5rem; }
.duration { display: flex; align-items: center; gap: 0.5rem; color: #777; margin-bottom: 0.75rem; }
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.75rem; }
.tag { background: #e0e7ff; color: #3730a3; font-size: 0.75rem; padding: 0.25rem 0.75rem; border-radius: 9999px; }
.contact-row { display: flex; gap: 1.5rem; margin-top: 1.5rem; color: #4f46e5; }
.contact { display: flex; align-items: center; gap: 0.5rem; }
ul { padding-left: 1.25rem; }
li { margin-bottom: 0.4rem; }
.icon { width: 1.25rem; height: 1.25rem; fill: none; stroke: currentColor; stroke-width: 2; }
"#;
