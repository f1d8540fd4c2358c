use crate::error::AppError;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Build the shared HTTP client for one remote service.
///
/// # Errors
///
/// Will return `Err` if the bearer token is not a valid header value or the
/// client cannot be constructed.
pub fn build_client(timeout: Duration, bearer_token: Option<&str>) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = bearer_token {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| AppError::Validation(format!("invalid bearer token: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }

    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(AppError::from)
}

/// Pass 2xx responses through; turn anything else into `AppError::Remote`
/// carrying whatever reason the remote put in its body.
///
/// # Errors
///
/// Will return `Err` for every non-2xx status.
pub async fn check_status(resp: Response) -> Result<Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(AppError::Remote {
        status: status.as_u16(),
        message: remote_reason(&body),
    })
}

/// The `error` (or `message`) field of a JSON error body, if there is one.
#[must_use]
pub fn remote_reason(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return String::new();
    };
    ["error", "message", "detail"]
        .iter()
        .find_map(|key| json.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::remote_reason;

    #[test]
    fn reason_comes_from_json_error_fields() {
        assert_eq!(remote_reason(r#"{"error":"Tee not rated"}"#), "Tee not rated");
        assert_eq!(remote_reason(r#"{"message":"Bad date"}"#), "Bad date");
        assert_eq!(remote_reason("<html>502</html>"), "");
    }
}
