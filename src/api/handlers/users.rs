//! User CRUD request handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USER_TAG;
use crate::api::dto::{
    CreateUserRequest, ErrorResponse, MessageResponse, UpdateUserRequest, UserResponse,
};
use crate::error::AppResult;
use crate::models::{User, parse_id};
use crate::state::AppState;
use crate::utils::validate::AppJson;

/// Creates user-related routes.
///
/// Routes:
/// - GET /users          - List all users
/// - POST /users         - Create a new user
/// - PUT /users/{id}     - Update user by ID
/// - DELETE /users/{id}  - Delete user by ID
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_users))
        .routes(routes!(create_user))
        .routes(routes!(update_user))
        .routes(routes!(delete_user))
}

/// GET /users - List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.services.users.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users - Create new user
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.services.users.create_user(req.into_new_user()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /users/{id} - Update user
///
/// Responds 200 with `null` when no user has the given id.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ObjectId as 24 hex characters")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user, or null if it does not exist", body = Option<UserResponse>),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> AppResult<Json<Option<UserResponse>>> {
    let id = parse_id::<User>(&id)?;
    let user = state.services.users.update_user(id, req.into_patch()).await?;
    Ok(Json(user.map(UserResponse::from)))
}

/// DELETE /users/{id} - Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ObjectId as 24 hex characters")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id::<User>(&id)?;
    state.services.users.delete_user(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
