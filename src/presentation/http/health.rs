use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResp {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/ping",
    tag = "Health",
    responses((status = 200, description = "Process is alive", body = String, content_type = "text/plain"))
)]
pub async fn ping() -> &'static str {
    "pong"
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(ctx): State<AppContext>) -> Json<HealthResp> {
    let db_ok = match ctx.gateway().execute("SELECT 1", &[]).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = ?e, "health_store_check_failed");
            false
        }
    };
    let status = if db_ok { "ok" } else { "degraded" };
    Json(HealthResp {
        status: status.to_string(),
    })
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/health", get(health)).with_state(ctx)
}
