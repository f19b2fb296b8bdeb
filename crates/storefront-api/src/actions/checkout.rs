//! # Checkout Actions
//!
//! Resource actions for checkout: delivery slots, payment methods, promo
//! validation, and order creation.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use storefront_core::{PaymentMethod, PromoCode, TimeSlot};

use crate::client::ApiClient;
use crate::context::RequestContext;
use crate::endpoints;
use crate::response::ApiFailure;

/// Platform tag injected into every order payload.
pub const ORDER_PLATFORM: &str = "WEB";

/// Payment method detail inside an order body.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPaymentMethod {
    pub payment_method_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_number: Option<String>,

    /// Always serialized, `null` when absent (backend contract)
    pub wallet_number: Option<String>,
}

/// Selected delivery slot inside an order body.
#[derive(Debug, Clone, Serialize)]
pub struct SlotDay {
    pub slot_id: String,
    pub day: String,
}

/// Composite body for order creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderBody {
    pub section_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,

    pub note: String,
    pub payment_method: OrderPaymentMethod,
    pub delivery_type: String,
    pub slot_day: SlotDay,
}

/// Lists the delivery time slots available for a given day.
pub async fn fetch_time_slots(
    api: &ApiClient,
    ctx: &RequestContext,
    delivery_day: &str,
) -> Result<Vec<TimeSlot>, ApiFailure> {
    let res = api
        .get::<Vec<TimeSlot>>(ctx, &endpoints::time_slots(delivery_day))
        .await?;
    Ok(res.data)
}

/// Lists the payment methods offered at checkout.
pub async fn fetch_payment_methods(
    api: &ApiClient,
    ctx: &RequestContext,
) -> Result<Vec<PaymentMethod>, ApiFailure> {
    let res = api
        .get::<Vec<PaymentMethod>>(ctx, endpoints::PAYMENT_METHODS)
        .await?;
    Ok(res.data)
}

/// Validates a promo code against a payment method.
pub async fn fetch_promo_code(
    api: &ApiClient,
    ctx: &RequestContext,
    code: &str,
    payment_method_id: &str,
) -> Result<PromoCode, ApiFailure> {
    debug!(code, payment_method_id, "fetch_promo_code");

    let res = api
        .get::<PromoCode>(ctx, &endpoints::promo_code(code, payment_method_id))
        .await?;
    Ok(res.data)
}

/// Creates an order.
///
/// The fixed `"platform": "WEB"` tag is injected into the outgoing payload
/// unconditionally; callers cannot override it.
pub async fn create_order(
    api: &ApiClient,
    ctx: &RequestContext,
    body: CreateOrderBody,
) -> Result<Value, ApiFailure> {
    debug!(section_id = %body.section_id, "create_order");

    let mut payload =
        serde_json::to_value(&body).map_err(|e| ApiFailure::transport(e.to_string()))?;
    payload["platform"] = Value::String(ORDER_PLATFORM.to_string());

    let res = api
        .post::<Value, _>(ctx, endpoints::CREATE_ORDER, &payload)
        .await?;
    Ok(res.data)
}
