//! # Cart Actions
//!
//! Resource actions for the cart: fetch, add, update quantity, remove.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI control ──► action function ──► ApiClient ──► backend              │
//! │                                                                         │
//! │  Ok(entity)      success envelope unwrapped to its data                │
//! │  Err(ApiFailure) error variant passed through UNCHANGED                │
//! │                                                                         │
//! │  The caller decides what a result means for the local store; a         │
//! │  failed call must leave the store untouched.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `update_cart_product` performs no min/max guard: deciding whether a
//! decrement below the minimum should become a removal is the stepper's
//! job, not this layer's.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use storefront_core::{CartProduct, DEFAULT_ADD_QUANTITY};

use crate::client::ApiClient;
use crate::context::RequestContext;
use crate::endpoints;
use crate::response::ApiFailure;

/// Body for an add-to-cart call.
#[derive(Debug, Clone, Serialize)]
pub struct AddToCartBody {
    /// Price row of the product measurement being added
    pub product_category_price_id: String,

    /// Selected option ids (validated before this call is made)
    pub options: Vec<String>,

    /// Quantity to add; `None` defaults to 1 at dispatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Fetches the server's cart contents.
pub async fn fetch_cart_products(
    api: &ApiClient,
    ctx: &RequestContext,
) -> Result<Vec<CartProduct>, ApiFailure> {
    let res = api
        .get::<Vec<CartProduct>>(ctx, endpoints::FETCH_CART)
        .await?;
    Ok(res.data)
}

/// Adds a product to the cart.
///
/// An omitted quantity is filled in as 1 before dispatch, so the backend
/// always receives an explicit quantity.
pub async fn add_product_to_cart(
    api: &ApiClient,
    ctx: &RequestContext,
    body: AddToCartBody,
) -> Result<CartProduct, ApiFailure> {
    debug!(
        product_category_price_id = %body.product_category_price_id,
        options = body.options.len(),
        "add_product_to_cart"
    );

    let payload = serde_json::json!({
        "product_category_price_id": body.product_category_price_id,
        "options": body.options,
        "quantity": body.quantity.unwrap_or(DEFAULT_ADD_QUANTITY),
    });

    let res = api
        .post::<CartProduct, _>(ctx, endpoints::ADD_TO_CART, &payload)
        .await?;
    Ok(res.data)
}

/// Updates a cart line's quantity.
///
/// No bounds guard here; the server re-validates and the stepper decides
/// removal-vs-decrement before calling.
pub async fn update_cart_product(
    api: &ApiClient,
    ctx: &RequestContext,
    cart_product_id: &str,
    quantity: u32,
) -> Result<CartProduct, ApiFailure> {
    debug!(cart_product_id, quantity, "update_cart_product");

    let body = serde_json::json!({
        "cart_product_id": cart_product_id,
        "quantity": quantity,
    });

    let res = api
        .put::<CartProduct, _>(ctx, endpoints::UPDATE_CART, &body)
        .await?;
    Ok(res.data)
}

/// Removes a cart line by id. The acknowledgement payload is opaque.
pub async fn remove_cart_product(
    api: &ApiClient,
    ctx: &RequestContext,
    cart_product_id: &str,
) -> Result<Value, ApiFailure> {
    debug!(cart_product_id, "remove_cart_product");

    let res = api
        .delete::<Value>(ctx, &endpoints::delete_cart_product(cart_product_id))
        .await?;
    Ok(res.data)
}
