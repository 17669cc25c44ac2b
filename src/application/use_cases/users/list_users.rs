use crate::application::ports::sql_gateway::{GatewayError, SqlGateway};
use crate::domain::users::user::User;

use super::decode_user;

pub const LIST_USERS_SQL: &str = "SELECT id, name, email FROM users";

pub struct ListUsers<'a, G: SqlGateway + ?Sized> {
    pub gateway: &'a G,
}

impl<'a, G: SqlGateway + ?Sized> ListUsers<'a, G> {
    pub async fn execute(&self) -> Result<Vec<User>, GatewayError> {
        let rows = self.gateway.execute(LIST_USERS_SQL, &[]).await?;
        rows.into_iter().map(decode_user).collect()
    }
}
