//! Router configuration for the API.
//!
//! Centralizes route registration, the OpenAPI document and middleware.

use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::config::{Environment, Settings};
use crate::state::AppState;

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
/// Path of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Switches that shape the router around the routes themselves.
#[derive(Debug, Clone, Copy)]
pub struct RouterOptions {
    /// Allow any origin, method and header
    pub cors_enabled: bool,
    /// Mount Swagger UI and the OpenAPI document
    pub api_docs: bool,
}

impl RouterOptions {
    pub fn from_settings(settings: &Settings, environment: Environment) -> Self {
        Self {
            cors_enabled: settings.server.cors_enabled,
            api_docs: environment.serves_api_docs(),
        }
    }
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_enabled: true,
            api_docs: true,
        }
    }
}

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. CORS (when enabled) answers preflight requests before anything else
/// 2. Request ID middleware generates/propagates request IDs
/// 3. Logging middleware logs requests with request IDs
///
/// # Routes
/// - `/users`, `/users/{id}` - User CRUD operations
/// - `/roles`, `/roles/{id}` - Role CRUD operations
pub fn create_router(state: AppState, options: RouterOptions) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::users::user_routes())
        .merge(handlers::roles::role_routes())
        .split_for_parts();

    let mut router = router.with_state(state);

    if options.api_docs {
        router = router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, api));
    }

    // Middleware is applied in reverse order - last added runs first
    // So logging runs after request_id has set the ID
    let router = router
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware));

    if options.cors_enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::middleware::REQUEST_ID_HEADER;
    use crate::error::{AppError, AppResult};
    use crate::models::Document;
    use crate::repositories::{DocumentRepository, Repositories};
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(Repositories::memory()), RouterOptions::default())
    }

    /// Backend whose every call fails the way a lost connection would.
    struct UnavailableRepository;

    fn unavailable<D: Document>(operation: String) -> AppError {
        AppError::Database {
            operation,
            source: anyhow::anyhow!("connection to {} refused", D::COLLECTION),
        }
    }

    #[async_trait]
    impl<D: Document> DocumentRepository<D> for UnavailableRepository {
        async fn list_all(&self) -> AppResult<Vec<D>> {
            Err(unavailable::<D>(format!("fetching {}s", D::ENTITY.to_lowercase())))
        }

        async fn insert(&self, _document: D) -> AppResult<D> {
            Err(unavailable::<D>(format!("creating the {}", D::ENTITY.to_lowercase())))
        }

        async fn update(&self, _id: ObjectId, _patch: D::Patch) -> AppResult<Option<D>> {
            Err(unavailable::<D>(format!("updating the {}", D::ENTITY.to_lowercase())))
        }

        async fn delete(&self, _id: ObjectId) -> AppResult<Option<D>> {
            Err(unavailable::<D>(format!("deleting the {}", D::ENTITY.to_lowercase())))
        }
    }

    fn unavailable_app() -> Router {
        let repos = Repositories {
            users: Arc::new(UnavailableRepository),
            roles: Arc::new(UnavailableRepository),
        };
        create_router(AppState::new(repos), RouterOptions::default())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn id_of(value: &Value) -> String {
        value["_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let app = app();
        assert_eq!(send(&app, Method::GET, "/users", None).await, (StatusCode::OK, json!([])));
        assert_eq!(send(&app, Method::GET, "/roles", None).await, (StatusCode::OK, json!([])));
    }

    #[tokio::test]
    async fn test_create_user_then_list() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Ann", "email": "ann@example.com", "roles": ["admin"], "status": "active"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(id_of(&created).len(), 24);
        assert_eq!(created["name"], "Ann");
        assert_eq!(created["roles"], json!(["admin"]));

        let (_, users) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(users, json!([created]));
    }

    #[tokio::test]
    async fn test_create_user_with_empty_body_object() {
        let app = app();
        let (status, created) = send(&app, Method::POST, "/users", Some(json!({}))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["roles"], json!([]));
        assert_eq!(created["name"], Value::Null);
    }

    #[tokio::test]
    async fn test_update_user_overwrites_only_given_fields() {
        let app = app();
        let (_, created) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Ann", "status": "active"})),
        )
        .await;
        let uri = format!("/users/{}", id_of(&created));

        let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({"status": "inactive"}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["_id"], created["_id"]);
        assert_eq!(updated["name"], "Ann");
        assert_eq!(updated["status"], "inactive");
    }

    #[tokio::test]
    async fn test_create_user_casts_loose_values() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": 42, "roles": "admin"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "42");
        assert_eq!(created["roles"], json!(["admin"]));
    }

    #[tokio::test]
    async fn test_update_user_null_clears_field() {
        let app = app();
        let (_, created) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Ann", "email": "a@x"})),
        )
        .await;
        let uri = format!("/users/{}", id_of(&created));

        let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({"email": null}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["email"], Value::Null);
        assert_eq!(updated["name"], "Ann");

        let (_, users) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(users[0]["email"], Value::Null);
    }

    #[tokio::test]
    async fn test_update_unknown_user_returns_null() {
        let app = app();
        let uri = format!("/users/{}", mongodb::bson::oid::ObjectId::new().to_hex());

        let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"name": "Ghost"}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_delete_user_then_not_found() {
        let app = app();
        let (_, created) = send(&app, Method::POST, "/users", Some(json!({"name": "Ann"}))).await;
        let uri = format!("/users/{}", id_of(&created));

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "User deleted successfully"}));

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");

        let (_, users) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(users, json!([]));
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, Method::DELETE, "/roles/not-an-id", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_role_lifecycle() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/roles",
            Some(json!({"name": "editor", "permissions": ["read"]})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["permissions"], json!(["read"]));

        let uri = format!("/roles/{}", id_of(&created));
        let (status, updated) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({"permissions": ["read", "write"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "editor");
        assert_eq!(updated["permissions"], json!(["read", "write"]));

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Role deleted successfully"}));

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Role not found");
    }

    #[tokio::test]
    async fn test_create_role_ignores_extra_fields() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/roles",
            Some(json!({"name": "admin", "permissions": ["read", "write"], "level": 9})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let keys: Vec<&String> = created.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(created.get("level").is_none());

        let (_, roles) = send(&app, Method::GET, "/roles", None).await;
        assert_eq!(roles, json!([created]));
    }

    #[tokio::test]
    async fn test_empty_update_returns_record_unchanged() {
        let app = app();
        let (_, created) = send(
            &app,
            Method::POST,
            "/roles",
            Some(json!({"name": "viewer", "permissions": ["read"]})),
        )
        .await;
        let uri = format!("/roles/{}", id_of(&created));

        let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_create_role_without_name_is_rejected() {
        let app = app();
        for payload in [json!({"permissions": ["read"]}), json!({"name": ""})] {
            let (status, body) = send(&app, Method::POST, "/roles", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["code"], "VALIDATION_ERROR");
        }

        let (_, roles) = send(&app, Method::GET, "/roles", None).await;
        assert_eq!(roles, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_storage_failure_is_database_error() {
        let app = unavailable_app();
        let id = ObjectId::new().to_hex();
        let cases = [
            (Method::GET, "/users".to_string(), None, "fetching users"),
            (
                Method::PUT,
                format!("/users/{}", id),
                Some(json!({"name": "Ann"})),
                "updating the user",
            ),
            (Method::POST, "/users".to_string(), Some(json!({})), "creating the user"),
            (Method::DELETE, format!("/roles/{}", id), None, "deleting the role"),
            (Method::GET, "/roles".to_string(), None, "fetching roles"),
        ];

        for (method, uri, body, operation) in cases {
            let (status, body) = send(&app, method, &uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
            assert_eq!(
                body,
                json!({
                    "error": format!("An error occurred while {}", operation),
                    "code": "DATABASE_ERROR",
                })
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, _) = send(&app(), Method::GET, "/users/extra/segment", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = app()
            .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/users")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_lists_paths() {
        let (status, doc) = send(&app(), Method::GET, OPENAPI_JSON_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"].get("/users").is_some());
        assert!(doc["paths"].get("/roles/{id}").is_some());
    }

    #[tokio::test]
    async fn test_api_docs_can_be_disabled() {
        let app = create_router(
            AppState::new(Repositories::memory()),
            RouterOptions {
                cors_enabled: false,
                api_docs: false,
            },
        );
        let (status, _) = send(&app, Method::GET, OPENAPI_JSON_PATH, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
