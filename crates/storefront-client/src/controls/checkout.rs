//! # Checkout Flow
//!
//! Thin façade over the checkout actions: slot listing, payment methods,
//! promo validation, order placement. Errors pass through unchanged; the
//! cart store is not mutated here (after an order the page reload
//! refetches the server's cart).

use tracing::debug;

use storefront_api::actions::checkout::{
    create_order, fetch_payment_methods, fetch_promo_code, fetch_time_slots, CreateOrderBody,
};
use storefront_api::{ApiClient, RequestContext};
use storefront_core::validation::validate_promo_code;
use storefront_core::{PaymentMethod, PromoCode, TimeSlot};

use crate::error::FlowError;

/// Checkout page flow bound to one session.
pub struct Checkout {
    api: ApiClient,
    ctx: RequestContext,
}

impl Checkout {
    pub fn new(api: ApiClient, ctx: RequestContext) -> Self {
        Checkout { api, ctx }
    }

    /// Lists delivery slots for the chosen day.
    pub async fn load_time_slots(&self, delivery_day: &str) -> Result<Vec<TimeSlot>, FlowError> {
        Ok(fetch_time_slots(&self.api, &self.ctx, delivery_day).await?)
    }

    /// Lists the payment methods offered at checkout.
    pub async fn load_payment_methods(&self) -> Result<Vec<PaymentMethod>, FlowError> {
        Ok(fetch_payment_methods(&self.api, &self.ctx).await?)
    }

    /// Validates a promo code against the chosen payment method.
    ///
    /// The code is trimmed and checked non-empty locally before the call.
    pub async fn apply_promo_code(
        &self,
        code: &str,
        payment_method_id: &str,
    ) -> Result<PromoCode, FlowError> {
        let code = validate_promo_code(code)?;
        Ok(fetch_promo_code(&self.api, &self.ctx, &code, payment_method_id).await?)
    }

    /// Places the order. The platform tag is injected by the action.
    pub async fn place_order(&self, body: CreateOrderBody) -> Result<serde_json::Value, FlowError> {
        debug!(section_id = %body.section_id, "place order");
        Ok(create_order(&self.api, &self.ctx, body).await?)
    }
}
