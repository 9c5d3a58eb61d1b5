use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RuntimeConfig;

const RETRY_BACKOFF_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("http {status}: {message}")]
    Status { status: u16, message: String },
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("unauthorized")]
    Unauthorized,
}

impl ApiError {
    /// Worth another attempt: connection trouble, throttling or a server-side failure.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status { status, .. } => *status == 429 || *status >= 500,
            ApiError::Decode(_) | ApiError::Unauthorized => false,
        }
    }
}

pub fn should_retry(err: &ApiError, attempt: u32, max_attempts: u32) -> bool {
    attempt < max_attempts && err.is_transient()
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub speaker: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Announcement {
    #[serde(alias = "_id")]
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Raw status and body of a finished request.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Delete,
}

struct Outgoing<'a> {
    method: Method,
    url: String,
    body: Option<String>,
    bearer: Option<&'a str>,
}

/// `{error}` field of a JSON error body, if the server sent one.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}

fn decode_reply<T: DeserializeOwned>(reply: Reply) -> Result<T, ApiError> {
    check_reply(&reply)?;
    serde_json::from_str(&reply.body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn check_reply(reply: &Reply) -> Result<(), ApiError> {
    match reply.status {
        401 | 403 => Err(ApiError::Unauthorized),
        _ if reply.ok() => Ok(()),
        status => Err(ApiError::Status {
            status,
            message: error_message(&reply.body).unwrap_or_else(|| format!("status {status}")),
        }),
    }
}

/// Backend and link-preview client built from the runtime config.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    preview_base_url: String,
    attempts: u32,
}

impl ApiClient {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            base_url: config.backend_base_url.clone(),
            preview_base_url: config.link_preview_base_url.clone(),
            attempts: config.fetch_attempts.max(1),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn preview_url(&self, article_url: &str) -> String {
        format!(
            "{}/?url={}",
            self.preview_base_url,
            urlencoding::encode(article_url)
        )
    }

    pub async fn events(&self) -> Result<Vec<EventRecord>, ApiError> {
        self.get_json(self.url("/api/events")).await
    }

    pub async fn announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        self.get_json(self.url("/api/announcements")).await
    }

    pub async fn link_preview<T: DeserializeOwned>(&self, article_url: &str) -> Result<T, ApiError> {
        self.get_json(self.preview_url(article_url)).await
    }

    /// Single attempt; the caller interprets the reply.
    pub async fn send_contact(&self, payload: &ContactPayload) -> Result<Reply, ApiError> {
        let body = serde_json::to_string(payload).map_err(|err| ApiError::Decode(err.to_string()))?;
        send(&Outgoing {
            method: Method::Post,
            url: self.url("/api/send-email"),
            body: Some(body),
            bearer: None,
        })
        .await
    }

    pub async fn admin_login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::to_string(&LoginRequest { username, password })
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let reply = send(&Outgoing {
            method: Method::Post,
            url: self.url("/api/admin/login"),
            body: Some(body),
            bearer: None,
        })
        .await?;
        let response: LoginResponse = decode_reply(reply)?;
        if response.token.trim().is_empty() {
            return Err(ApiError::Decode("empty token".to_string()));
        }
        Ok(response.token)
    }

    pub async fn delete_event(&self, id: &str, token: &str) -> Result<(), ApiError> {
        self.delete(format!("/api/events/{}", urlencoding::encode(id)), token)
            .await
    }

    pub async fn delete_announcement(&self, id: &str, token: &str) -> Result<(), ApiError> {
        self.delete(format!("/api/announcements/{}", urlencoding::encode(id)), token)
            .await
    }

    async fn delete(&self, path: String, token: &str) -> Result<(), ApiError> {
        let reply = send(&Outgoing {
            method: Method::Delete,
            url: self.url(&path),
            body: None,
            bearer: Some(token),
        })
        .await?;
        check_reply(&reply)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let request = Outgoing {
            method: Method::Get,
            url,
            body: None,
            bearer: None,
        };
        let mut attempt = 1;
        loop {
            let result = match send(&request).await {
                Ok(reply) => decode_reply(reply),
                Err(err) => Err(err),
            };
            match result {
                Err(err) if should_retry(&err, attempt, self.attempts) => {
                    tracing::warn!(url = %request.url, attempt, error = %err, "api.retry");
                    backoff().await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn send(request: &Outgoing<'_>) -> Result<Reply, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    if let Some(token) = request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let response = match &request.body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(body.as_str())
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|err| ApiError::Network(err.to_string()))?;

    let status = response.status();
    let body = read_body(&request.url, response.text().await)?;
    tracing::debug!(url = %request.url, status, "api.response");
    Ok(Reply { status, body })
}

/// A body that fails to arrive is a transport failure, not an empty payload.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn read_body<E: std::fmt::Display>(url: &str, body: Result<String, E>) -> Result<String, ApiError> {
    body.map_err(|err| {
        tracing::warn!(url, error = %err, "api.body_read_failed");
        ApiError::Network(format!("reading body from {url}: {err}"))
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn send(request: &Outgoing<'_>) -> Result<Reply, ApiError> {
    let _ = (request.method, &request.body, request.bearer);
    Err(ApiError::Network(format!(
        "no fetch available for {} on this target",
        request.url
    )))
}

#[cfg(target_arch = "wasm32")]
async fn backoff() {
    gloo_timers::future::TimeoutFuture::new(RETRY_BACKOFF_MS).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn backoff() {
    let _ = RETRY_BACKOFF_MS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reply(status: u16, body: &str) -> Reply {
        Reply {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn events_accept_mongo_style_ids() {
        let body = r#"[{"_id":"64f","title":"RISC-V Night","speaker":"Dr. Rao","date":"2025-07-26","time":"5 PM","location":"Lab 3","description":"Pipelines"}]"#;
        let events: Vec<EventRecord> = decode_reply(reply(200, body)).unwrap();
        assert_eq!(events[0].id, "64f");
        assert_eq!(events[0].speaker, "Dr. Rao");

        let plain: Vec<EventRecord> = decode_reply(reply(200, r#"[{"id":"7","title":"x"}]"#)).unwrap();
        assert_eq!(plain[0].id, "7");
        assert_eq!(plain[0].location, "");
    }

    #[test]
    fn auth_failures_map_to_unauthorized() {
        assert_eq!(check_reply(&reply(401, "")), Err(ApiError::Unauthorized));
        assert_eq!(check_reply(&reply(403, "{}")), Err(ApiError::Unauthorized));
    }

    #[test]
    fn error_bodies_surface_their_message() {
        assert_eq!(
            check_reply(&reply(400, r#"{"error":"Invalid email"}"#)),
            Err(ApiError::Status {
                status: 400,
                message: "Invalid email".to_string()
            })
        );
        assert_eq!(
            check_reply(&reply(502, "<html>bad gateway</html>")),
            Err(ApiError::Status {
                status: 502,
                message: "status 502".to_string()
            })
        );
        assert_eq!(error_message(r#"{"error":"  "}"#), None);
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let result: Result<Vec<Announcement>, _> = decode_reply(reply(200, "not json"));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn retries_are_bounded_and_only_for_transient_failures() {
        let network = ApiError::Network("offline".to_string());
        assert!(should_retry(&network, 1, 2));
        assert!(!should_retry(&network, 2, 2));

        let server = ApiError::Status {
            status: 503,
            message: String::new(),
        };
        assert!(should_retry(&server, 1, 3));

        let client = ApiError::Status {
            status: 404,
            message: String::new(),
        };
        assert!(!should_retry(&client, 1, 5));
        assert!(!should_retry(&ApiError::Unauthorized, 1, 5));
    }

    #[test]
    fn unreadable_bodies_are_network_errors() {
        let read: Result<String, &str> = Err("stream closed");
        let err = read_body("https://api.example/api/events", read).unwrap_err();
        assert_eq!(
            err,
            ApiError::Network("reading body from https://api.example/api/events: stream closed".to_string())
        );
        assert!(err.is_transient());

        let ok: Result<String, &str> = Ok("[]".to_string());
        assert_eq!(read_body("https://api.example", ok), Ok("[]".to_string()));
    }

    #[test]
    fn urls_are_built_from_config() {
        let config = RuntimeConfig {
            backend_base_url: "https://api.chipsbytes.club".to_string(),
            ..RuntimeConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.url("/api/events"), "https://api.chipsbytes.club/api/events");
        assert_eq!(
            client.preview_url("https://medium.com/@club/a b"),
            "https://api.microlink.io/?url=https%3A%2F%2Fmedium.com%2F%40club%2Fa%20b"
        );
    }

    #[test]
    fn contact_payload_serializes_flat() {
        let payload = ContactPayload {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"A","email":"a@b.com","message":"hi"}"#
        );
    }
}
