use aiui_templates::Dispatcher;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
/// Everything inside is immutable after startup.
pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route("/ui/code", post(crate::http::ui::generate_handler))
        .route("/api/inventory", get(crate::http::inventory::list_handler))
        .route(
            "/api/me/change-password",
            post(crate::http::me::change_password_handler),
        )
        .with_state(state)
        // the web client is served from a separate dev origin
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
