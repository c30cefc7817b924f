//! Shared request plumbing for backend calls.

use gloo_net::http::{RequestBuilder, Response};
use serde::Deserialize;

use crate::types::{AppError, AppResult};

/// Attach the bearer token.
pub fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Error body produced by the backend services.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Turn a backend error body into a one-line message.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return body.trim().to_string();
    };
    match (parsed.detail, parsed.message) {
        (Some(serde_json::Value::String(detail)), _) => detail,
        (Some(detail), _) => detail.to_string(),
        (None, Some(message)) => message,
        (None, None) => body.trim().to_string(),
    }
}

/// Pass successful responses through, map the rest to [`AppError`].
pub async fn check(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 401 {
        return Err(AppError::Unauthorized);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::Http {
        status,
        message: error_message(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_detail() {
        let body = r#"{"message": "Internal server error", "detail": "file is not a CSV"}"#;
        assert_eq!(error_message(body), "file is not a CSV");
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message(r#"{"message": "Not found"}"#), "Not found");
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");

        let body = r#"{"detail": [{"loc": ["body", "name"], "msg": "field required"}]}"#;
        assert!(error_message(body).contains("field required"));
    }
}
