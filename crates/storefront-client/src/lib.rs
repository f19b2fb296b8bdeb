//! # storefront-client: Session Layer
//!
//! The session-scoped half of the storefront: the in-memory cart store and
//! the control flows that keep it synchronized with the backend through
//! the request layer.
//!
//! ## Consistency Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cart Synchronization                                │
//! │                                                                         │
//! │  The backend owns the cart. The CartState here is a best-effort        │
//! │  cache, updated ONLY when a mutating call succeeds:                    │
//! │                                                                         │
//! │    add succeeds ─────► upsert returned line                            │
//! │    update succeeds ──► upsert returned line                            │
//! │    remove succeeds ──► remove line                                     │
//! │    page load ────────► replace_all with the server's cart              │
//! │                                                                         │
//! │  A failed call changes nothing. There is no retry, no offline queue,   │
//! │  no versioning: concurrent calls on the same line resolve to           │
//! │  whichever response arrives last.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`] - [`state::Cart`] collection and the injected
//!   [`state::CartState`] handle
//! - [`controls`] - Quantity stepper, product add form, checkout flow
//! - [`error`] - [`error::FlowError`], everything a control surfaces

pub mod controls;
pub mod error;
pub mod state;

pub use controls::{Checkout, ProductAddForm, QuantityStepper, StepOutcome};
pub use error::FlowError;
pub use state::{Cart, CartState};
