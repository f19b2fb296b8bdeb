//! # storefront-core: Pure Domain Logic for the Storefront
//!
//! This crate is the **heart** of the storefront client. It contains the
//! domain types and rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storefront-client                              │   │
//! │  │    Cart store ──► Stepper ──► Add form ──► Checkout            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  storefront-api                                 │   │
//! │  │    Envelope normalizer, endpoints, resource actions            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌──────────────┐               │   │
//! │  │   │   types   │  │  options  │  │  validation  │               │   │
//! │  │   │CartProduct│  │ defaults  │  │   quantity   │               │   │
//! │  │   │ OptGroup  │  │ min/max   │  │  promo code  │               │   │
//! │  │   └───────────┘  └───────────┘  └──────────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (CartProduct, ProductOptionGroup, ...)
//! - [`options`] - Default pre-selection and recursive constraint checks
//! - [`validation`] - Early input checks
//! - [`error`] - Domain error types

pub mod error;
pub mod options;
pub mod types;
pub mod validation;

pub use error::{SelectionError, ValidationError};
pub use types::*;

/// Quantity an add-to-cart call defaults to when the caller omits one.
pub const DEFAULT_ADD_QUANTITY: u32 = 1;
