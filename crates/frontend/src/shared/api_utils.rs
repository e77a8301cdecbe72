//! HTTP helpers for talking to the school REST API.
//!
//! Every call goes through [`ApiClient`], which carries the base URL and the
//! bearer token taken from the session. Errors are human-readable strings.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    /// Build a full API URL from a path starting with "/api/"
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        parse_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        parse_json(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        parse_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), String> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        ensure_ok(&response).await
    }
}

async fn ensure_ok(response: &Response) -> Result<(), String> {
    if response.ok() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_message(response.status(), &body))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    ensure_ok(&response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Prefers a `message` field from a JSON error body, then the raw body.
pub fn error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());
    if detail.is_empty() {
        format!("Request failed: {}", status)
    } else {
        format!("Request failed ({}): {}", status, detail)
    }
}

/// The server's own text from a message built by [`error_message`]. `None`
/// for transport and parse failures.
pub fn server_detail(message: &str) -> Option<&str> {
    message
        .strip_prefix("Request failed (")
        .and_then(|rest| rest.split_once("): "))
        .map(|(_, detail)| detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:3000", None);
        assert_eq!(client.url("/api/classrooms"), "http://localhost:3000/api/classrooms");
        assert!(!client.has_token());
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        assert_eq!(
            error_message(400, r#"{"message":"Email already taken"}"#),
            "Request failed (400): Email already taken"
        );
        assert_eq!(error_message(500, "boom"), "Request failed (500): boom");
        assert_eq!(error_message(404, ""), "Request failed: 404");
    }

    #[test]
    fn test_server_detail_only_for_server_rejections() {
        let message = error_message(409, r#"{"message":"Email already taken"}"#);
        assert_eq!(server_detail(&message), Some("Email already taken"));
        assert_eq!(server_detail(&error_message(404, "")), None);
        assert_eq!(server_detail("Failed to send request: name not resolved"), None);
    }
}
