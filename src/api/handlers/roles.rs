//! Role CRUD request handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::ROLE_TAG;
use crate::api::dto::{
    CreateRoleRequest, ErrorResponse, MessageResponse, RoleResponse, UpdateRoleRequest,
};
use crate::error::AppResult;
use crate::models::{Role, parse_id};
use crate::state::AppState;
use crate::utils::validate::{AppJson, ValidatedJson};

/// Creates role-related routes.
///
/// Routes:
/// - GET /roles          - List all roles
/// - POST /roles         - Create a new role
/// - PUT /roles/{id}     - Update role by ID
/// - DELETE /roles/{id}  - Delete role by ID
pub fn role_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_roles))
        .routes(routes!(create_role))
        .routes(routes!(update_role))
        .routes(routes!(delete_role))
}

/// GET /roles - List all roles
#[utoipa::path(
    get,
    path = "/roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All roles", body = Vec<RoleResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<RoleResponse>>> {
    let roles = state.services.roles.list_roles().await?;
    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

/// POST /roles - Create new role
#[utoipa::path(
    post,
    path = "/roles",
    tag = ROLE_TAG,
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = RoleResponse),
        (status = 400, description = "Missing name or malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_role(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateRoleRequest>,
) -> AppResult<(StatusCode, Json<RoleResponse>)> {
    let role = state.services.roles.create_role(req.into_new_role()).await?;
    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

/// PUT /roles/{id} - Update role
///
/// Responds 200 with `null` when no role has the given id.
#[utoipa::path(
    put,
    path = "/roles/{id}",
    tag = ROLE_TAG,
    params(
        ("id" = String, Path, description = "Role ObjectId as 24 hex characters")
    ),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Updated role, or null if it does not exist", body = Option<RoleResponse>),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateRoleRequest>,
) -> AppResult<Json<Option<RoleResponse>>> {
    let id = parse_id::<Role>(&id)?;
    let role = state.services.roles.update_role(id, req.into_patch()).await?;
    Ok(Json(role.map(RoleResponse::from)))
}

/// DELETE /roles/{id} - Delete role
#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = ROLE_TAG,
    params(
        ("id" = String, Path, description = "Role ObjectId as 24 hex characters")
    ),
    responses(
        (status = 200, description = "Role deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id::<Role>(&id)?;
    state.services.roles.delete_role(id).await?;
    Ok(Json(MessageResponse::new("Role deleted successfully")))
}
