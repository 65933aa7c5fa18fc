//! HTTP routes

use crate::config::CorsOrigins;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed when none are configured
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let page_routes = Router::new()
        .route("/", get(handlers::home))
        .route("/genre/:genre", get(handlers::genre))
        .route("/book/:book_id", get(handlers::book_detail))
        .route("/reader/:book_id", get(handlers::reader))
        .route("/support", get(handlers::support_page))
        .route("/chrome", get(handlers::chrome));

    let action_routes = Router::new()
        .route("/book/:book_id/cart", post(handlers::add_to_cart))
        .route("/book/:book_id/purchase", post(handlers::buy_now))
        .route("/book/:book_id/quick-buy", post(handlers::quick_buy))
        .route("/purchases/:ticket", delete(handlers::cancel_purchase))
        .route("/support/contact", post(handlers::contact));

    Router::new()
        .merge(page_routes)
        .merge(action_routes)
        // SSE endpoint
        .route("/sync", get(handlers::sync_events))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => {
            let allowed: Vec<HeaderValue> = list
                .iter()
                .filter_map(|s| match s.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", s);
                        None
                    }
                })
                .collect();
            AllowOrigin::list(allowed)
        }
        CorsOrigins::Localhost => AllowOrigin::list(DEV_ORIGINS.map(HeaderValue::from_static)),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
