use crate::application::ports::sql_gateway::{GatewayError, SqlGateway, SqlParam};
use crate::domain::users::user::{User, UserDraft};

use super::first_user;

pub const UPDATE_USER_SQL: &str =
    "UPDATE users SET name = $1, email = $2 WHERE id = $3 RETURNING id, name, email";

pub struct UpdateUser<'a, G: SqlGateway + ?Sized> {
    pub gateway: &'a G,
}

impl<'a, G: SqlGateway + ?Sized> UpdateUser<'a, G> {
    /// Replaces both fields. Returns `None` when no row has `id`.
    pub async fn execute(&self, id: i64, draft: &UserDraft) -> Result<Option<User>, GatewayError> {
        let params = [
            SqlParam::from(draft.name()),
            SqlParam::from(draft.email()),
            SqlParam::Int(id),
        ];
        let rows = self.gateway.execute(UPDATE_USER_SQL, &params).await?;
        first_user(rows)
    }
}
