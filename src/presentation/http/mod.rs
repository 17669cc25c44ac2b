use axum::{Router, routing::get};

use crate::bootstrap::app_context::AppContext;

pub mod error;
pub mod health;
pub mod users;

/// All routes, without transport layers (tracing, CORS) which `main` adds.
pub fn router(ctx: AppContext) -> Router {
    Router::new().route("/ping", get(health::ping)).nest(
        "/api",
        users::routes(ctx.clone()).merge(health::routes(ctx)),
    )
}
