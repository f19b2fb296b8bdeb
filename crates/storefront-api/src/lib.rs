//! # storefront-api: HTTP Request Layer
//!
//! Everything that touches the network lives here: configuration, the
//! per-request session context, the response envelope normalizer, the
//! endpoint path templates, and the typed resource action functions.
//!
//! ## The Boundary Guarantee
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     storefront-api boundary                             │
//! │                                                                         │
//! │  caller ──► action fn ──► ApiClient::request ──► reqwest ──► backend   │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │          every outcome (2xx, 4xx, 5xx, DNS failure, timeout,           │
//! │          unparseable body) becomes the tagged ApiResult.               │
//! │          No panic, no raw reqwest::Error, ever.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven [`config::ApiConfig`]
//! - [`context`] - Explicit per-request session context
//! - [`response`] - [`response::ApiResult`] and fixed message keys
//! - [`client`] - The normalizer ([`client::ApiClient`])
//! - [`endpoints`] - Literal backend path templates
//! - [`actions`] - One typed function per resource operation

pub mod actions;
pub mod client;
pub mod config;
pub mod context;
pub mod endpoints;
pub mod response;

pub use client::{ApiClient, Payload};
pub use config::{ApiConfig, ConfigError};
pub use context::RequestContext;
pub use response::{ApiFailure, ApiResult, Envelope};
