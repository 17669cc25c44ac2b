use crate::application::ports::sql_gateway::{GatewayError, SqlGateway, SqlParam};

pub const DELETE_USER_SQL: &str = "DELETE FROM users WHERE id = $1 RETURNING id, name, email";

pub struct DeleteUser<'a, G: SqlGateway + ?Sized> {
    pub gateway: &'a G,
}

impl<'a, G: SqlGateway + ?Sized> DeleteUser<'a, G> {
    /// `false` when nothing was deleted.
    pub async fn execute(&self, id: i64) -> Result<bool, GatewayError> {
        let rows = self
            .gateway
            .execute(DELETE_USER_SQL, &[SqlParam::Int(id)])
            .await?;
        Ok(!rows.is_empty())
    }
}
