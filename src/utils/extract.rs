use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::utils::error::{AppError, PARAMS_ERROR_MSG};

/// Accepts a request body as either JSON or urlencoded form data,
/// matching the surface the frontend posts to. Any body that fails to
/// deserialize is a parameter error, not a 415/422.
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|_| AppError::BadRequest(PARAMS_ERROR_MSG.to_string()))?;
            Ok(FormOrJson(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|_| AppError::BadRequest(PARAMS_ERROR_MSG.to_string()))?;
            Ok(FormOrJson(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct VotePayload {
        vote: Option<String>,
    }

    fn request(content_type: &str, body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn deserializes_json_bodies() {
        let req = request("application/json", r#"{"vote":"Vanilla"}"#);
        let FormOrJson(payload) = FormOrJson::<VotePayload>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.vote.as_deref(), Some("Vanilla"));
    }

    #[tokio::test]
    async fn deserializes_form_bodies() {
        let req = request("application/x-www-form-urlencoded", "vote=Chocolate");
        let FormOrJson(payload) = FormOrJson::<VotePayload>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.vote.as_deref(), Some("Chocolate"));
    }

    #[tokio::test]
    async fn malformed_json_is_a_parameter_error() {
        let req = request("application/json", "{not json");
        let err = FormOrJson::<VotePayload>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
