//! # Flow Error Type
//!
//! Unified error type for the control flows: everything a control can
//! surface to the UI as an inline notification.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SelectionError (local, pre-submit) ──┐                                │
//! │  ValidationError (local, pre-submit) ─┼──► FlowError ──► notification  │
//! │  ApiFailure (normalized backend) ─────┘                                │
//! │                                                                         │
//! │  A FlowError never crashes the page and never leaves the cart store    │
//! │  partially updated: the store is only touched after an Ok.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use storefront_api::ApiFailure;
use storefront_core::{SelectionError, ValidationError};

/// What a control flow can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// Normalized backend failure, passed through unchanged
    #[error(transparent)]
    Api(#[from] ApiFailure),

    /// Option-group constraint violated before submission
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Local input check failed before submission
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced line is not in the local store
    #[error("cart line {0} not found")]
    NotInCart(String),

    /// Quantity already at the line's maximum; the control should be
    /// disabled in this state
    #[error("quantity is already at the maximum of {max}")]
    AtMaxQuantity { max: u32 },

    /// This control instance already has a call in flight
    #[error("operation already in progress")]
    Busy,
}

impl FlowError {
    /// Message for the transient inline notification.
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}
