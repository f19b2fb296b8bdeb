//! # Response Envelope Normalizer
//!
//! The single boundary that converts every outcome of a backend call into
//! the tagged [`ApiResult`]. Nothing above this module ever sees a raw
//! `reqwest::Error` or an unparsed status code.
//!
//! ## Status Code Policy (checked in order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  transport error ──────────► ApiFailure { error's message, 500 }       │
//! │  401 ──────────────────────► ApiFailure { UNAUTHORIZED key }           │
//! │  404 / 500 / 503 ──────────► ApiFailure { fixed key per status }       │
//! │                              (body intentionally not parsed)           │
//! │  204 or content-length 0 ──► Envelope  { data: {}, "Success" }         │
//! │  other non-2xx ────────────► ApiFailure { body.message (joined if     │
//! │                              array), code, details, data,              │
//! │                              validationErrors }                        │
//! │  2xx with body ────────────► Envelope  { body.data, body.message }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries, no timeout beyond the transport default, no circuit
//! breaking. One call in, one tagged result out.

use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::context::RequestContext;
use crate::response::{messages, ApiFailure, ApiResult, Envelope};

/// Multi-store scoping header sent on every request.
const TENANT_HEADER: &str = "x-tenant-id";

/// An outgoing request body.
///
/// Multipart payloads are sent as-is and reqwest supplies the boundary
/// header; everything else is serialized to JSON text.
pub enum Payload {
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

/// HTTP client for the backend storefront API.
///
/// Cheap to clone: the underlying `reqwest::Client` is an `Arc` around a
/// connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a client for the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        ApiClient {
            http: Client::new(),
            config,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Performs one request and normalizes the outcome.
    ///
    /// This is the only place a network call happens; the `get`/`post`/
    /// `put`/`delete` façades below all funnel into it.
    pub async fn request<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        method: Method,
        endpoint: &str,
        body: Option<Payload>,
    ) -> ApiResult<T> {
        debug!(%method, endpoint, "api request");

        let url = self
            .config
            .base_url
            .join(endpoint)
            .map_err(|e| ApiFailure::transport(e.to_string()))?;

        let mut request = self
            .http
            .request(method, url)
            .header(TENANT_HEADER, &self.config.tenant_id)
            .header(
                ACCEPT_LANGUAGE,
                ctx.locale.as_deref().unwrap_or(&self.config.default_locale),
            );

        if let Some(token) = &ctx.token {
            request = request.bearer_auth(token);
        }

        request = match body {
            Some(Payload::Json(value)) => request
                .header(CONTENT_TYPE, "application/json")
                .json(&value),
            // Multipart: no JSON content-type; reqwest sets the boundary
            Some(Payload::Multipart(form)) => request.multipart(form),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(endpoint, error = %e, "transport failure");
                return Err(ApiFailure::transport(e.to_string()));
            }
        };

        normalize(response).await
    }

    /// GET a resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
    ) -> ApiResult<T> {
        self.request(ctx, Method::GET, endpoint, None).await
    }

    /// POST a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let value = serde_json::to_value(body).map_err(|e| ApiFailure::transport(e.to_string()))?;
        self.request(ctx, Method::POST, endpoint, Some(Payload::Json(value)))
            .await
    }

    /// POST a multipart form.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        self.request(ctx, Method::POST, endpoint, Some(Payload::Multipart(form)))
            .await
    }

    /// PUT a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let value = serde_json::to_value(body).map_err(|e| ApiFailure::transport(e.to_string()))?;
        self.request(ctx, Method::PUT, endpoint, Some(Payload::Json(value)))
            .await
    }

    /// DELETE a resource.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
    ) -> ApiResult<T> {
        self.request(ctx, Method::DELETE, endpoint, None).await
    }
}

/// Classifies one response into the tagged result.
async fn normalize<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiFailure::new(messages::UNAUTHORIZED, status.as_u16()));
    }

    // Infrastructure failures get a fixed key; the body is not parsed
    if let Some(key) = messages::common_error_key(status.as_u16()) {
        warn!(status = status.as_u16(), key, "backend infrastructure failure");
        return Err(ApiFailure::new(key, status.as_u16()));
    }

    // Bodyless success (edit/delete acknowledgements)
    if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
        let data = serde_json::from_value(Value::Object(serde_json::Map::new()))
            .map_err(|e| ApiFailure::transport(e.to_string()))?;
        return Ok(Envelope {
            data,
            message: messages::SUCCESS.to_string(),
            status: status.as_u16(),
        });
    }

    // Parse after the fixed-status checks so domain errors can surface
    // their own message
    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => return Err(ApiFailure::transport(e.to_string())),
    };

    if !status.is_success() {
        return Err(failure_from_body(&body, status.as_u16()));
    }

    let data_value = body.get("data").cloned().unwrap_or(Value::Null);
    let data =
        serde_json::from_value(data_value).map_err(|e| ApiFailure::transport(e.to_string()))?;
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(messages::SUCCESS)
        .to_string();

    Ok(Envelope {
        data,
        message,
        status: status.as_u16(),
    })
}

/// Builds the error variant for a non-2xx response with a parsed body.
fn failure_from_body(body: &Value, status: u16) -> ApiFailure {
    let error = match body.get("message") {
        Some(Value::Array(parts)) => parts
            .iter()
            .map(|part| match part {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" | "),
        Some(Value::String(s)) => s.clone(),
        _ => messages::AN_ERROR_OCCURRED.to_string(),
    };

    ApiFailure {
        error,
        status,
        code: non_null(body.get("code")),
        details: non_null(body.get("details")),
        data: body
            .get("data")
            .cloned()
            .unwrap_or(Value::Object(serde_json::Map::new())),
        validation_errors: non_null(body.get("validationErrors")),
    }
}

fn non_null(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}
