use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use users_api::bootstrap::app_context::AppContext;
use users_api::bootstrap::config::Config;
use users_api::infrastructure::db::sql_gateway_sqlx::PgSqlGateway;

#[derive(OpenApi)]
#[openapi(
        paths(
            users_api::presentation::http::health::ping,
            users_api::presentation::http::health::health,
            users_api::presentation::http::users::list_users,
            users_api::presentation::http::users::get_user,
            users_api::presentation::http::users::create_user,
            users_api::presentation::http::users::update_user,
            users_api::presentation::http::users::delete_user,
        ),
        components(schemas(
            users_api::presentation::http::users::User,
            users_api::presentation::http::users::UserPayload,
            users_api::presentation::http::error::ErrorBody,
            users_api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Users", description = "Users management"),
            (name = "Health", description = "Liveness and readiness checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "users_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting users API");

    // Database
    let pool = users_api::infrastructure::db::connect_pool(&cfg.database).await?;
    let gateway = Arc::new(PgSqlGateway::new(pool));

    let ctx = AppContext::new(cfg.clone(), gateway.clone());

    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::OPTIONS,
    ];
    let cors = match cfg.cors_origin.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers([http::header::CONTENT_TYPE]),
        Some(Err(_)) => {
            warn!(origin = ?cfg.cors_origin, "Invalid CORS_ORIGIN, mirroring request origin");
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(methods)
                .allow_headers([http::header::CONTENT_TYPE])
        }
        None => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods)
            .allow_headers([http::header::CONTENT_TYPE]),
    };

    let app = users_api::presentation::http::router(ctx)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    gateway.close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = ?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = ?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
