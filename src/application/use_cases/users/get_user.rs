use crate::application::ports::sql_gateway::{GatewayError, SqlGateway, SqlParam};
use crate::domain::users::user::User;

use super::first_user;

pub const GET_USER_SQL: &str = "SELECT id, name, email FROM users WHERE id = $1";

pub struct GetUser<'a, G: SqlGateway + ?Sized> {
    pub gateway: &'a G,
}

impl<'a, G: SqlGateway + ?Sized> GetUser<'a, G> {
    pub async fn execute(&self, id: i64) -> Result<Option<User>, GatewayError> {
        let rows = self
            .gateway
            .execute(GET_USER_SQL, &[SqlParam::Int(id)])
            .await?;
        first_user(rows)
    }
}
