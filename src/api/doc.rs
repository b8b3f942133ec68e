use utoipa::OpenApi;

pub const USER_TAG: &str = "User";
pub const ROLE_TAG: &str = "Role";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster",
        description = "User and role management API",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::error::ValidationFieldError,
        )
    ),
    tags(
        (name = USER_TAG, description = "User management endpoints"),
        (name = ROLE_TAG, description = "Role management endpoints"),
    )
)]
pub struct ApiDoc;
