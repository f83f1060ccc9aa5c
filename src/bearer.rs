use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AppError;

/// Credential from `Authorization: Bearer <token>`.
///
/// Only presence is checked here. The upstream that receives the forwarded
/// token decides whether it is valid or expired.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::unauthorized("authorization token missing"))?;

        Ok(BearerToken(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<BearerToken, AppError> {
        let mut builder = Request::builder().uri("/api/profile");
        if let Some(value) = header {
            builder = builder.header("authorization", value);
        }
        let (mut parts, _) = builder.body(()).expect("request").into_parts();
        BearerToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn accepts_any_present_token() {
        let token = extract(Some("Bearer expired.or.forged")).await.expect("present");
        assert_eq!(token.as_str(), "expired.or.forged");
    }

    #[tokio::test]
    async fn rejects_missing_or_blank_tokens() {
        for header in [None, Some("Bearer "), Some("Basic dXNlcjpwYXNz"), Some("token")] {
            let err = extract(header).await.expect_err("should be rejected");
            assert!(matches!(err, AppError::Unauthorized(_)));
        }
    }
}
