use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub cors_origin: Option<String>,
    pub database: DatabaseConfig,
}

/// Store connection settings, read from the libpq-style `PG*` variables.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_port: u16 = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {raw:?}"))?,
            None => 3000,
        };
        let cors_origin =
            non_empty("CORS_ORIGIN").map(|v| v.trim().trim_end_matches('/').to_string());

        let db_port: u16 = match non_empty("PGPORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PGPORT must be a valid port number, got {raw:?}"))?,
            None => 5432,
        };
        let database = DatabaseConfig {
            host: non_empty("PGHOST").unwrap_or_else(|| "localhost".into()),
            port: db_port,
            user: non_empty("PGUSER").unwrap_or_else(|| "postgres".into()),
            password: lookup("PGPASSWORD"),
            database: non_empty("PGDATABASE"),
        };

        Ok(Self {
            api_port,
            cors_origin,
            database,
        })
    }
}
