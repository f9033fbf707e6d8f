use crate::state::AppState;
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get,
};
use shared::{config::ConnectionPool, domain::responses::HealthResponse};
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    )
)]
pub async fn healthcheck(Extension(db): Extension<ConnectionPool>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(&db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                ok: true,
                database: "up".to_string(),
            }),
        ),
        Err(e) => {
            error!("💾 Health check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    ok: false,
                    database: e.to_string(),
                }),
            )
        }
    }
}

pub fn health_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/health", get(healthcheck))
        .layer(Extension(app_state.db.clone()))
}
