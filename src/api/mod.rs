pub mod dto;
pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use handlers::ApiDoc;

pub fn router(pool: PgPool) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route(
            "/readings",
            get(handlers::get_readings).post(handlers::insert_reading),
        )
        .route(
            "/thresholds",
            get(handlers::get_thresholds).post(handlers::set_thresholds),
        )
        .route("/login", post(handlers::login))
        .with_state(pool)
        .split_for_parts();

    router
        .route("/health", get(handlers::health))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { axum::Json(api) }),
        )
        // Devices and dashboards call in from anywhere; pre-flight OPTIONS
        // requests are answered by the layer itself.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
