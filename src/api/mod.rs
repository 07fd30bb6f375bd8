//! HTTP routes and request handling

pub mod contact;
pub mod helpers;
pub mod repos;
pub mod state;

use std::time::Duration;

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use state::AppState;

/// Builds the application router: API routes, the optional static frontend,
/// CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    let static_dir = state.config.static_dir.clone();

    let mut app = Router::new()
        .route("/api/github/repos", get(repos::list_repos))
        .route(
            "/api/contact",
            get(contact::list_contacts).post(contact::submit_contact),
        )
        .with_state(state);

    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(cors).layer(TraceLayer::new_for_http())
}
