use serde_json::Value;

use crate::application::ports::sql_gateway::{GatewayError, Row};
use crate::domain::users::user::User;

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

fn decode_user(row: Row) -> Result<User, GatewayError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}

/// Decodes at most the first row; `None` means the targeted row does not exist.
fn first_user(rows: Vec<Row>) -> Result<Option<User>, GatewayError> {
    rows.into_iter().next().map(decode_user).transpose()
}
