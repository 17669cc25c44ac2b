use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::users::create_user::CreateUser;
use crate::application::use_cases::users::delete_user::DeleteUser;
use crate::application::use_cases::users::get_user::GetUser;
use crate::application::use_cases::users::list_users::ListUsers;
use crate::application::use_cases::users::update_user::UpdateUser;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::{self as domain, UserDraft};
use crate::presentation::http::error::{ApiError, ErrorBody};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<domain::User> for User {
    fn from(u: domain::User) -> Self {
        User {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// Body of create and update. Both fields are required; update replaces both.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// An unreadable body counts as one with no fields.
fn validate(payload: Result<Json<UserPayload>, JsonRejection>) -> Result<UserDraft, ApiError> {
    let payload = match payload {
        Ok(Json(p)) => p,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "user_payload_unreadable");
            UserPayload::default()
        }
    };
    Ok(UserDraft::new(payload.name, payload.email)?)
}

/// Ids that are not integers cannot match a row.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

#[utoipa::path(get, path = "/api/users", tag = "Users",
    responses(
        (status = 200, body = [User]),
        (status = 500, body = ErrorBody)
    ))]
pub async fn list_users(State(ctx): State<AppContext>) -> Result<Json<Vec<User>>, ApiError> {
    let gateway = ctx.gateway();
    let uc = ListUsers {
        gateway: gateway.as_ref(),
    };
    let users = uc.execute().await.map_err(ApiError::store("list_users"))?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/users/{id}", tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, body = User),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn get_user(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    let gateway = ctx.gateway();
    let uc = GetUser {
        gateway: gateway.as_ref(),
    };
    let user = uc
        .execute(id)
        .await
        .map_err(ApiError::store("get_user"))?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(user.into()))
}

#[utoipa::path(post, path = "/api/users", tag = "Users", request_body = UserPayload,
    responses(
        (status = 201, body = User),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn create_user(
    State(ctx): State<AppContext>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let draft = validate(payload)?;
    let gateway = ctx.gateway();
    let uc = CreateUser {
        gateway: gateway.as_ref(),
    };
    let user = uc
        .execute(&draft)
        .await
        .map_err(ApiError::store("create_user"))?;
    tracing::info!(user_id = user.id, "user_created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(put, path = "/api/users/{id}", tag = "Users", request_body = UserPayload,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, body = User),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn update_user(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let draft = validate(payload)?;
    let id = parse_id(&id)?;
    let gateway = ctx.gateway();
    let uc = UpdateUser {
        gateway: gateway.as_ref(),
    };
    let user = uc
        .execute(id, &draft)
        .await
        .map_err(ApiError::store("update_user"))?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(user.into()))
}

#[utoipa::path(delete, path = "/api/users/{id}", tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn delete_user(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let gateway = ctx.gateway();
    let uc = DeleteUser {
        gateway: gateway.as_ref(),
    };
    let deleted = uc
        .execute(id)
        .await
        .map_err(ApiError::store("delete_user"))?;
    if deleted {
        tracing::info!(user_id = id, "user_deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(ctx)
}
