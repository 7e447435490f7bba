//! Web router using Axum

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};
use chunjun_site_types::NavConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

#[derive(Clone)]
struct AppState {
    nav: Arc<NavConfig>,
    frontend: bool,
}

/// Create the web router.
///
/// `dist` is the Trunk output directory; without an `index.html` in it every
/// non-API path answers with a setup page instead of the SPA.
pub fn create_router(nav: Arc<NavConfig>, dist: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let dist = dist.filter(|dir| {
        let has_index = dir.join("index.html").is_file();
        if !has_index {
            warn!(dist = %dir.display(), "Frontend build not found, serving setup page");
        }
        has_index
    });

    let api = Router::new()
        .route("/api/nav", get(nav_handler))
        .route("/api/health", get(health_handler))
        .with_state(AppState {
            nav,
            frontend: dist.is_some(),
        });

    let router = match dist {
        Some(dir) => {
            info!(dist = %dir.display(), "Serving frontend");
            // Unknown paths are client-side routes
            let index = ServeFile::new(dir.join("index.html"));
            api.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => api.fallback(setup_handler),
    };

    router.layer(cors)
}

async fn nav_handler(State(state): State<AppState>) -> Json<NavConfig> {
    Json(state.nav.as_ref().clone())
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "links": state.nav.len(),
        "frontend": state.frontend,
    }))
}

async fn setup_handler() -> Html<&'static str> {
    Html(SETUP_PAGE)
}

const SETUP_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ChunJun - Build Required</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 2rem; margin-bottom: 1rem; color: #1a1a1a; }
        p { margin-bottom: 1rem; color: #333; line-height: 1.6; }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }
        .step {
            margin: 1.5rem 0;
            padding: 1rem;
            background: #f8f8f8;
            border-left: 3px solid #4f46e5;
        }
        a { color: #4f46e5; text-decoration: none; }
        a:hover { text-decoration: underline; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>ChunJun website - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the site can be displayed.</p>

        <div class="step">
            <strong>Setup Instructions:</strong>
            <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
                <li>Install Trunk: <code>cargo install trunk</code></li>
                <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
                <li>Build frontend: <code>cd crates/chunjun-site-web &amp;&amp; trunk build --release</code></li>
                <li>Restart server: <code>cargo run -p chunjun-site -- serve</code></li>
            </ol>
        </div>

        <p><strong>API Endpoints (available now):</strong></p>
        <ul style="margin-left: 1.5rem;">
            <li><a href="/api/health">/api/health</a> - Health check</li>
            <li><a href="/api/nav">/api/nav</a> - Header navigation JSON</li>
        </ul>
    </div>
</body>
</html>"#;
