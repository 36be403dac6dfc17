//! HTTP helpers for the vendor JSON API with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request
//! setup and to enforce a predictable timeout policy. Every response body is
//! parsed as JSON regardless of status code so a failure `message` can be
//! surfaced to the UI.

use super::{config::AppConfig, errors::AppError};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Fallback banner text when a failure body carries no usable `message`.
const GENERIC_REQUEST_ERROR: &str = "Request failed";

/// Posts JSON and parses a JSON response.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, AppError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let response = post_request(path, body, None).await?;
    handle_json_response(response).await
}

/// Posts JSON with a bearer credential and parses a JSON response. Used for
/// the password-set call, which is authenticated by the short-lived setup
/// token rather than a session token.
#[cfg(target_arch = "wasm32")]
pub async fn post_json_with_bearer<B, T>(path: &str, body: &B, bearer: &str) -> Result<T, AppError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let response = post_request(path, body, Some(bearer)).await?;
    handle_json_response(response).await
}

/// Posts JSON and discards the response body; only the status matters.
#[cfg(target_arch = "wasm32")]
pub async fn post_json_discard<B>(path: &str, body: &B) -> Result<(), AppError>
where
    B: serde::Serialize,
{
    let response = post_request(path, body, None).await?;
    handle_status_response(response).await
}

#[cfg(target_arch = "wasm32")]
async fn post_request<B: serde::Serialize>(
    path: &str,
    body: &B,
    bearer: Option<&str>,
) -> Result<gloo_net::http::Response, AppError> {
    use gloo_net::http::Request;

    let url = build_url(path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let authorization = bearer.map(|token| format!("Bearer {token}"));

    send_with_timeout(move |signal| {
        let mut builder = Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        if let Some(value) = authorization.as_deref() {
            builder = builder.header("Authorization", value);
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses successful JSON responses and extracts the failure `message` otherwise.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if response.ok() {
        serde_json::from_str(&body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(AppError::Http {
            status,
            message: error_message(&body),
        })
    }
}

/// Checks the status only, still mining failure bodies for a `message`.
#[cfg(target_arch = "wasm32")]
async fn handle_status_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Http {
        status,
        message: error_message(&body),
    })
}

/// Extracts the `message` field from a failure body, falling back to a generic
/// string when the body is empty, undecodable, or carries a blank message.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_REQUEST_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, error_message};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.vendora.app/", "/vendor/send-otp"),
            "https://api.vendora.app/vendor/send-otp"
        );
        assert_eq!(
            build_url_with_base("https://api.vendora.app", "vendor/login"),
            "https://api.vendora.app/vendor/login"
        );
    }

    #[test]
    fn build_url_with_empty_base_keeps_path() {
        assert_eq!(build_url_with_base("", "/vendor/login"), "/vendor/login");
        assert_eq!(build_url_with_base("   ", "/vendor/login"), "/vendor/login");
    }

    #[test]
    fn error_message_prefers_the_message_field() {
        assert_eq!(error_message(r#"{"message":"Invalid code"}"#), "Invalid code");
    }

    #[test]
    fn error_message_falls_back_on_unusable_bodies() {
        assert_eq!(error_message(""), "Request failed");
        assert_eq!(error_message("not json"), "Request failed");
        assert_eq!(error_message(r#"{"error":"nope"}"#), "Request failed");
        assert_eq!(error_message(r#"{"message":"   "}"#), "Request failed");
    }
}
