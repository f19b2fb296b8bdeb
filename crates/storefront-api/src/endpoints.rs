//! # Endpoint Paths
//!
//! Literal path templates for the backend storefront API, relative to the
//! configured base URL. Kept in one place so the resource actions never
//! hand-build paths.
//!
//! The `{cart}` and `{id}` braces in the update and promo templates are
//! part of the backend's route contract and are sent literally
//! (percent-encoded on the wire).

/// GET - current cart contents
pub const FETCH_CART: &str = "cart";

/// POST - add a product to the cart
pub const ADD_TO_CART: &str = "cart/add";

/// PUT - update a cart line's quantity
pub const UPDATE_CART: &str = "cart/update/{cart}-product";

/// GET - payment methods offered at checkout
pub const PAYMENT_METHODS: &str = "payment-method";

/// POST - create an order from the current cart
pub const CREATE_ORDER: &str = "order";

/// DELETE - remove a cart line by id
pub fn delete_cart_product(cart_product_id: &str) -> String {
    format!("cart/delete/{}", cart_product_id)
}

/// GET - delivery time slots for a given day
pub fn time_slots(delivery_day: &str) -> String {
    format!("slot/{}/all-slots", delivery_day)
}

/// GET - validate a promo code against a payment method
pub fn promo_code(code: &str, payment_method_id: &str) -> String {
    format!(
        "promo-code/valid/{{id}}?code={}&payment_method_id={}",
        code, payment_method_id
    )
}
