use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};

use crate::bootstrap::config::DatabaseConfig;

pub type PgPool = Pool<Postgres>;

pub async fn connect_pool(cfg: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let mut options = PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.user);
    if let Some(password) = cfg.password.as_deref() {
        options = options.password(password);
    }
    if let Some(database) = cfg.database.as_deref() {
        options = options.database(database);
    }
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub mod sql_gateway_sqlx;
