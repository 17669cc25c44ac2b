use async_trait::async_trait;
use serde_json::{Map, Value};

/// One result row: column name to scalar value.
pub type Row = Map<String, Value>;

/// Rows in the order the store returned them.
pub type RowSet = Vec<Row>;

/// A positional bind value (`$1`, `$2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_owned())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("store query failed")]
    Store(#[from] sqlx::Error),
    #[error("column `{column}` has unsupported type {type_name}")]
    UnsupportedColumn { column: String, type_name: String },
    #[error("row does not match the expected shape")]
    Decode(#[from] serde_json::Error),
}

/// Executes one parameterized statement as its own unit of work.
///
/// SELECT, INSERT, UPDATE and DELETE all go through `execute`; the SQL text alone
/// decides whether durable state changes. Store errors are returned as-is.
#[async_trait]
pub trait SqlGateway: Send + Sync {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<RowSet, GatewayError>;
}
