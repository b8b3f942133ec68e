use crate::error::{AppError, AppResult};
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body whose rejections are reported as `AppError`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

/// JSON body that must also pass `Validate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, message = "Title is required"))]
        title: String,
        #[validate(range(min = 1, max = 10, message = "Priority must be between 1 and 10"))]
        priority: u8,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_json() {
        let request = json_request(r#"{"title":"write docs","priority":3}"#);

        let ValidatedJson(body) = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap();

        assert_eq!(body.title, "write docs");
        assert_eq!(body.priority, 3);
    }

    #[tokio::test]
    async fn test_validation_error_multiple_fields() {
        let request = json_request(r#"{"title":"","priority":42}"#);

        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();

        match error {
            AppError::ValidationErrors { errors } => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["priority", "title"]);
            }
            _ => panic!("Expected ValidationErrors error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_syntax_error() {
        let request = json_request(r#"{"title": "#);

        let error = AppJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();

        match error {
            AppError::InvalidJson { code, .. } => assert_eq!(code, "JSON_SYNTAX_ERROR"),
            _ => panic!("Expected InvalidJson error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .body(Body::from(r#"{"title":"x","priority":1}"#))
            .unwrap();

        let error = AppJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();

        match error {
            AppError::InvalidJson { code, .. } => assert_eq!(code, "MISSING_CONTENT_TYPE"),
            _ => panic!("Expected InvalidJson error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_wrong_field_type() {
        let request = json_request(r#"{"title":"x","priority":"high"}"#);

        let error = AppJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::InvalidJson { code: "INVALID_JSON", .. }));
    }
}
