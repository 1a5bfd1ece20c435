use crate::{
    AppState, check_user, create_claim, create_offer, delete_claim, delete_offer, flow_summary,
    get_claim, get_offer, get_user, health, list_claims, list_offers, register_user,
    request_logging, update_offer, update_user,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Offers
        .route("/offers", get(list_offers).post(create_offer))
        .route(
            "/offers/{id}",
            get(get_offer).put(update_offer).delete(delete_offer),
        )
        // Claims
        .route("/claims", get(list_claims).post(create_claim))
        .route("/claims/{id}", get(get_claim).delete(delete_claim))
        // Users
        .route("/users", post(register_user))
        .route("/users/check", get(check_user))
        .route("/users/{id}", get(get_user).put(update_user))
        // Dashboard
        .route("/analytics/flow", get(flow_summary));

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_requests))
        // The browser dashboard is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
