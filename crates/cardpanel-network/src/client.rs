//! HTTP client for the device card API.
//!
//! The device exposes a small REST API under `/cards`. This module wraps it
//! behind [`CardService`], translating HTTP status codes and the firmware's
//! JSON conventions into [`ServiceError`]s.
//!
//! # Endpoints
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | count | `GET /cards/count` | `{"card_count": n}` |
//! | list defaults | `GET /cards/defaults` | `{"cards": [...]}` |
//! | list all | `GET /cards/get` | `{"cards": [...]}` |
//! | add | `POST /cards/add` `{"id", "nm"}` | 200 or 201 |
//! | remove | `DELETE /cards/remove?id=n` | 200 or 204 |
//! | check | `GET /cards/check` `{"card_id"}` | `{"exists": bool}` |
//! | reset | `POST /cards/reset` | `{"status": "success"}` |
//!
//! # Design Principles
//!
//! - **No automatic retry**: a failed call is reported once, the caller decides
//! - **No caching**: every call reaches the device
//! - **No validation**: identifiers and names are validated before they get here
//!
//! # Error Bodies
//!
//! Error replies are JSON objects with an optional `message`. When the body
//! is not JSON (the firmware's built-in error pages are plain text) the HTTP
//! status line is reported instead, e.g. `HTTP 404: Not Found`.

use crate::{error::ServiceError, service::CardService};
use cardpanel_core::{
    CardId, CardListing, CardName, CardRecord, CardSource, Result,
    constants::{
        DEFAULT_DEVICE_URL, DEFAULT_REQUEST_TIMEOUT_MS, PATH_CARD_ADD, PATH_CARD_CHECK,
        PATH_CARD_COUNT, PATH_CARD_REMOVE, PATH_CARDS_ALL, PATH_CARDS_DEFAULTS, PATH_CARDS_RESET,
    },
};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, trace, warn};

/// Configuration for the device client
///
/// # Example
///
/// ```
/// use cardpanel_network::HttpCardServiceConfig;
/// use std::time::Duration;
///
/// let config = HttpCardServiceConfig {
///     base_url: "http://10.0.0.7".to_string(),
///     timeout: Duration::from_millis(5000),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct HttpCardServiceConfig {
    /// Device base URL, without the `/cards` path
    pub base_url: String,

    /// Timeout for each request, connect included
    pub timeout: Duration,
}

impl Default for HttpCardServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DEVICE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

/// Card service backed by the device's HTTP API
///
/// # Example
///
/// ```no_run
/// use cardpanel_network::{CardService, HttpCardService, HttpCardServiceConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = HttpCardService::new(HttpCardServiceConfig::default())?;
/// println!("{} cards stored", service.card_count().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpCardService {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    #[serde(default)]
    card_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    cards: Option<Vec<CardRecord>>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    exists: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct AddCardRequest<'a> {
    id: u32,
    nm: &'a str,
}

#[derive(Debug, Serialize)]
struct CheckCardRequest {
    card_id: String,
}

impl HttpCardService {
    /// Create a client for the device at `config.base_url`.
    ///
    /// No request is sent until an operation is called.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidUrl` if the base URL is not an absolute
    /// `http`/`https` URL, or `ServiceError::Http` if the HTTP client cannot be built.
    pub fn new(config: HttpCardServiceConfig) -> std::result::Result<Self, ServiceError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();

        let parsed =
            Url::parse(&base_url).map_err(|e| ServiceError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ServiceError::InvalidUrl(base_url));
        }

        debug!("Creating card service for device {}", base_url);

        // The device sits on the local network; system proxies never apply.
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .no_proxy()
            .build()?;

        Ok(Self {
            http,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Device base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        request: RequestBuilder,
    ) -> std::result::Result<(StatusCode, String), ServiceError> {
        let response: Response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        trace!(status = status.as_u16(), body_len = body.len(), "Device replied");
        Ok((status, body))
    }

    fn transport_error(&self, e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            warn!("Device request timeout after {}ms", self.timeout.as_millis());
            ServiceError::Timeout(self.timeout.as_millis() as u64)
        } else {
            error!("Device request failed: {}", e);
            ServiceError::Http(e)
        }
    }
}

impl CardService for HttpCardService {
    async fn card_count(&self) -> Result<u32> {
        let (status, body) = self.send(self.http.get(self.url(PATH_CARD_COUNT))).await?;
        if !status.is_success() {
            return Err(api_error(status, &body, "Error loading count").into());
        }

        let reply: CountResponse = parse_json(&body)?;
        let count = reply.card_count.unwrap_or_default();
        debug!(count, "Card count received");
        Ok(count)
    }

    async fn list_cards(&self, source: CardSource) -> Result<CardListing> {
        let (path, fallback) = match source {
            CardSource::Defaults => (PATH_CARDS_DEFAULTS, "Error loading default cards"),
            CardSource::All => (PATH_CARDS_ALL, "Error loading cards"),
        };

        debug!(%source, "Fetching card list");
        let (status, body) = self.send(self.http.get(self.url(path))).await?;
        if !status.is_success() {
            return Err(api_error(status, &body, fallback).into());
        }

        let reply: ListResponse = parse_json(&body)?;

        // The firmware reports database failures as 200 with an error status.
        if reply.status.as_deref() == Some("error") {
            let message = reply.message.unwrap_or_else(|| fallback.to_string());
            warn!(%source, "Device rejected card listing: {}", message);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let cards = reply.cards.unwrap_or_default();
        info!(%source, count = cards.len(), "Card list received");
        Ok(CardListing::new(source, cards))
    }

    async fn add_card(&self, id: CardId, name: &CardName) -> Result<()> {
        let request = AddCardRequest {
            id: id.as_u32(),
            nm: name.as_str(),
        };

        debug!(card_id = %id, name = %name, "Adding card");
        let (status, body) = self
            .send(self.http.post(self.url(PATH_CARD_ADD)).json(&request))
            .await?;

        match status {
            StatusCode::OK | StatusCode::CREATED => {
                info!(card_id = %id, "Card added");
                Ok(())
            }
            s if s.is_success() => Err(ServiceError::Api {
                status: s.as_u16(),
                message: body_message(&body).unwrap_or_else(|| "Failed to add card".to_string()),
            }
            .into()),
            s => Err(api_error(s, &body, "Error adding card").into()),
        }
    }

    async fn remove_card(&self, id: CardId) -> Result<()> {
        debug!(card_id = %id, "Removing card");
        let request = self
            .http
            .delete(self.url(PATH_CARD_REMOVE))
            .query(&[("id", id.as_u32())]);
        let (status, body) = self.send(request).await?;

        match status {
            StatusCode::OK | StatusCode::NO_CONTENT => {
                info!(card_id = %id, "Card removed");
                Ok(())
            }
            s if s.is_success() => Err(ServiceError::Api {
                status: s.as_u16(),
                message: body_message(&body)
                    .unwrap_or_else(|| "Failed to remove card".to_string()),
            }
            .into()),
            s => Err(api_error(s, &body, "Error removing card").into()),
        }
    }

    async fn card_exists(&self, id: CardId) -> Result<bool> {
        let request = CheckCardRequest {
            card_id: id.as_u32().to_string(),
        };

        let (status, body) = self
            .send(self.http.get(self.url(PATH_CARD_CHECK)).json(&request))
            .await?;
        if !status.is_success() {
            return Err(api_error(status, &body, "Error checking card").into());
        }

        let reply: CheckResponse = parse_json(&body)?;
        let exists = reply.exists.unwrap_or_default();
        debug!(card_id = %id, exists, "Card check completed");
        Ok(exists)
    }

    async fn reset_cards(&self) -> Result<()> {
        debug!("Resetting card database to defaults");
        let (status, body) = self.send(self.http.post(self.url(PATH_CARDS_RESET))).await?;

        if !status.is_success() {
            let message = if body.trim().is_empty() {
                status_text(status)
            } else {
                match serde_json::from_str::<ErrorBody>(&body) {
                    Ok(parsed) => parsed.message.unwrap_or_else(|| "Server error".to_string()),
                    Err(_) => body.trim().to_string(),
                }
            };
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let reply = parse_reset_reply(&body)?;
        if reply.status.as_deref() == Some("success") {
            info!("Card database reset to defaults");
            return Ok(());
        }

        Err(ServiceError::Api {
            status: status.as_u16(),
            message: reply.message.unwrap_or_else(|| "Unknown error".to_string()),
        }
        .into())
    }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> std::result::Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::InvalidResponse(e.to_string()))
}

/// The reset reply is either a JSON object or a JSON string holding one.
fn parse_reset_reply(body: &str) -> std::result::Result<StatusResponse, ServiceError> {
    let value: Value = parse_json(body)?;
    let value = match value {
        Value::String(inner) => parse_json(&inner)?,
        other => other,
    };
    serde_json::from_value(value).map_err(|e| ServiceError::InvalidResponse(e.to_string()))
}

fn body_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
}

fn status_text(status: StatusCode) -> String {
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

/// JSON bodies supply the message (or `fallback` when they carry none);
/// anything else falls back to the status line.
fn api_error(status: StatusCode, body: &str, fallback: &str) -> ServiceError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => status_text(status),
    };

    ServiceError::Api {
        status: status.as_u16(),
        message,
    }
}
