use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgColumn, PgRow};
use sqlx::{Column, Row as _, TypeInfo};

use crate::application::ports::sql_gateway::{GatewayError, Row, RowSet, SqlGateway, SqlParam};
use crate::infrastructure::db::PgPool;

pub struct PgSqlGateway {
    pub pool: PgPool,
}

impl PgSqlGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SqlGateway for PgSqlGateway {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<RowSet, GatewayError> {
        tracing::debug!(sql, params = params.len(), "sql_execute");
        let mut query = sqlx::query(sql);
        for param in params {
            query = match param {
                SqlParam::Null => query.bind(None::<String>),
                SqlParam::Bool(v) => query.bind(*v),
                SqlParam::Int(v) => query.bind(*v),
                SqlParam::Float(v) => query.bind(*v),
                SqlParam::Text(v) => query.bind(v.clone()),
            };
        }
        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(decode_row).collect()
    }
}

fn decode_row(row: &PgRow) -> Result<Row, GatewayError> {
    let mut out = Row::new();
    for column in row.columns() {
        out.insert(column.name().to_owned(), decode_column(row, column)?);
    }
    Ok(out)
}

fn decode_column(row: &PgRow, column: &PgColumn) -> Result<Value, GatewayError> {
    let idx = column.ordinal();
    let value = match column.type_info().name() {
        "BOOL" => row.try_get::<Option<bool>, _>(idx)?.map(Value::from),
        "INT2" => row.try_get::<Option<i16>, _>(idx)?.map(Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(idx)?.map(Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(idx)?.map(Value::from),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(idx)?
            .map(|v| Value::from(f64::from(v))),
        "FLOAT8" => row.try_get::<Option<f64>, _>(idx)?.map(Value::from),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(idx)?.map(Value::from)
        }
        "JSON" | "JSONB" => row.try_get::<Option<Value>, _>(idx)?,
        other => {
            return Err(GatewayError::UnsupportedColumn {
                column: column.name().to_owned(),
                type_name: other.to_owned(),
            });
        }
    };
    Ok(value.unwrap_or(Value::Null))
}
