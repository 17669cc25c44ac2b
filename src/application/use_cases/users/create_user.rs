use crate::application::ports::sql_gateway::{GatewayError, SqlGateway, SqlParam};
use crate::domain::users::user::{User, UserDraft};

use super::decode_user;

pub const CREATE_USER_SQL: &str =
    "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email";

pub struct CreateUser<'a, G: SqlGateway + ?Sized> {
    pub gateway: &'a G,
}

impl<'a, G: SqlGateway + ?Sized> CreateUser<'a, G> {
    pub async fn execute(&self, draft: &UserDraft) -> Result<User, GatewayError> {
        let rows = self
            .gateway
            .execute(
                CREATE_USER_SQL,
                &[SqlParam::from(draft.name()), SqlParam::from(draft.email())],
            )
            .await?;
        // INSERT ... RETURNING always yields the inserted row
        let row = rows.into_iter().next().ok_or_else(|| {
            GatewayError::Decode(<serde_json::Error as serde::de::Error>::custom(
                "insert returned no row",
            ))
        })?;
        decode_user(row)
    }
}
