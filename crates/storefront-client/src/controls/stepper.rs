//! # Quantity Stepper
//!
//! The +/− control on a cart line.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Quantity Stepper Policy                             │
//! │                                                                         │
//! │  increment:  quantity < max_order_quantity                             │
//! │                  └──► update call for quantity + 1                     │
//! │              quantity ≥ max_order_quantity                             │
//! │                  └──► AtMaxQuantity (control disabled)                 │
//! │                                                                         │
//! │  decrement:  quantity > min_order_quantity                             │
//! │                  └──► update call for quantity − 1                     │
//! │              quantity ≤ min_order_quantity                             │
//! │                  └──► removal call INSTEAD of a decrement              │
//! │                                                                         │
//! │  The control disables itself while one call is in flight (per-widget  │
//! │  debounce); two different controls on the same line are not guarded   │
//! │  against, and the last response to arrive wins in the store.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use storefront_api::actions::cart::{remove_cart_product, update_cart_product};
use storefront_api::{ApiClient, RequestContext};
use storefront_core::CartProduct;

use crate::error::FlowError;
use crate::state::CartState;

/// What a decrement should do for the current quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Issue an update call for this quantity
    Update(u32),
    /// Quantity is at (or below) the minimum: issue a removal instead
    Remove,
}

/// Decides a decrement: update while above the minimum, removal at it.
pub fn next_decrement(quantity: u32, min_order_quantity: u32) -> Step {
    if quantity > min_order_quantity {
        Step::Update(quantity - 1)
    } else {
        Step::Remove
    }
}

/// Whether an increment is allowed for the current quantity.
pub fn can_increase(quantity: u32, max_order_quantity: u32) -> bool {
    quantity < max_order_quantity
}

/// Outcome of a completed decrement.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The line was updated to a new quantity
    Updated(CartProduct),
    /// The line was removed from cart and store
    Removed,
}

/// One stepper widget instance bound to a cart line.
///
/// Holds its own `busy` flag: the advisory per-widget debounce that keeps
/// a double-click from issuing two calls from the *same* control.
pub struct QuantityStepper {
    api: ApiClient,
    ctx: RequestContext,
    cart: CartState,
    busy: AtomicBool,
}

impl QuantityStepper {
    /// Creates a stepper bound to the given session and store handle.
    pub fn new(api: ApiClient, ctx: RequestContext, cart: CartState) -> Self {
        QuantityStepper {
            api,
            ctx,
            cart,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether this control currently has a call in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Issues an update call for `quantity + 1` and upserts the returned
    /// line on success.
    pub async fn increase(&self, cart_product_id: &str) -> Result<CartProduct, FlowError> {
        let _guard = self.begin()?;
        let item = self.line(cart_product_id)?;

        if !can_increase(item.quantity, item.max_order_quantity) {
            return Err(FlowError::AtMaxQuantity {
                max: item.max_order_quantity,
            });
        }

        debug!(cart_product_id, from = item.quantity, "stepper increase");
        let updated = update_cart_product(&self.api, &self.ctx, &item.id, item.quantity + 1).await?;
        Ok(self.apply_update(item, updated))
    }

    /// Issues an update call for `quantity − 1` while above the minimum;
    /// at the minimum, issues a removal call instead.
    pub async fn decrease(&self, cart_product_id: &str) -> Result<StepOutcome, FlowError> {
        let _guard = self.begin()?;
        let item = self.line(cart_product_id)?;

        match next_decrement(item.quantity, item.min_order_quantity) {
            Step::Update(quantity) => {
                debug!(cart_product_id, quantity, "stepper decrease");
                let updated = update_cart_product(&self.api, &self.ctx, &item.id, quantity).await?;
                Ok(StepOutcome::Updated(self.apply_update(item, updated)))
            }
            Step::Remove => {
                debug!(cart_product_id, "stepper remove");
                remove_cart_product(&self.api, &self.ctx, &item.id).await?;
                self.cart.with_cart_mut(|cart| cart.remove(cart_product_id));
                Ok(StepOutcome::Removed)
            }
        }
    }

    fn line(&self, cart_product_id: &str) -> Result<CartProduct, FlowError> {
        self.cart
            .with_cart(|cart| cart.get(cart_product_id).cloned())
            .ok_or_else(|| FlowError::NotInCart(cart_product_id.to_string()))
    }

    fn apply_update(&self, previous: CartProduct, mut updated: CartProduct) -> CartProduct {
        // Update responses omit the line's options; keep the ones captured
        // at add time so the cart keeps rendering them
        if updated.options.is_empty() {
            updated.options = previous.options;
        }
        self.cart.with_cart_mut(|cart| cart.upsert(updated.clone()));
        updated
    }

    fn begin(&self) -> Result<BusyGuard<'_>, FlowError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FlowError::Busy);
        }
        Ok(BusyGuard(&self.busy))
    }
}

/// Clears the busy flag when the call completes or fails.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
