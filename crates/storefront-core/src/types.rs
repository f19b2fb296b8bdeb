//! # Domain Types
//!
//! Wire types shared with the backend storefront API.
//!
//! ## Naming Convention
//! The backend speaks snake_case JSON, which matches Rust field naming
//! directly, so no `#[serde(rename_all)]` is needed on these types.
//!
//! ## Entity Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     CartProduct Lifecycle                               │
//! │                                                                         │
//! │  POST cart/add succeeds ───────► created (returned by server)          │
//! │  PUT cart/update succeeds ─────► quantity mutated (server is source    │
//! │                                  of truth, client upserts the copy)    │
//! │  DELETE cart/delete succeeds ──► destroyed                             │
//! │                                                                         │
//! │  Invariant: min_order_quantity ≤ quantity ≤ max_order_quantity         │
//! │  (enforced server-side; the stepper policy respects it client-side)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// One line in a session's cart: a product, its selected options, and a
/// quantity.
///
/// ## Design Notes
/// - `id` identifies the cart row; `product_id` identifies the product it
///   represents. Membership checks ("is this product already in the cart")
///   go through `product_id`, mutations go through `id`.
/// - `name`, `image`, `unit` are frozen display copies returned by the
///   server so the cart renders consistently even if the catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    /// Cart row ID (server-assigned)
    pub id: String,

    /// Product this row represents
    pub product_id: String,

    /// Options selected when the product was added
    #[serde(default)]
    pub options: Vec<CartOption>,

    /// Quantity in cart
    pub quantity: u32,

    /// Effective unit price (offers applied)
    pub price: f64,

    /// Unit price before offers
    pub original_price: f64,

    /// Measurement unit label ("kg", "piece", ...)
    pub unit: String,

    /// Smallest quantity the server accepts for this row
    pub min_order_quantity: u32,

    /// Largest quantity the server accepts for this row
    pub max_order_quantity: u32,

    /// Display name at time of adding (frozen)
    pub name: String,

    /// Display image at time of adding (frozen)
    pub image: String,
}

/// A selected option attached to a cart line, as echoed back by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartOption {
    pub id: String,
    pub name: String,
    /// Price surcharge for this option (0 for free options)
    pub price: f64,
}

/// A named set of selectable product options with selection constraints.
///
/// ## Constraints
/// - `min_selection`: at least this many options must be selected
/// - `max_selection`: at most this many may be selected; `0` means unlimited
///
/// Groups can nest: an option may own `child_groups` whose constraints only
/// apply while that option is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOptionGroup {
    pub id: String,
    pub name: String,
    pub min_selection: u32,
    pub max_selection: u32,
    /// Display/traversal order within the product
    #[serde(default)]
    pub order_by: u32,
    pub options: Vec<ProductOption>,
}

/// A single selectable option inside a [`ProductOptionGroup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Pre-selected on initial render
    #[serde(default)]
    pub is_default: bool,
    /// Nested groups whose constraints apply only while this option is
    /// selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_groups: Option<Vec<ProductOptionGroup>>,
}

/// A delivery time slot for a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub is_available: bool,
}

/// A payment method offered at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
}

/// A validated promo code, as returned by the promo validation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub discount_type: Option<String>,
    #[serde(default)]
    pub discount_value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_product_round_trips_snake_case() {
        let json = serde_json::json!({
            "id": "c1",
            "product_id": "P1",
            "options": [{"id": "o1", "name": "Large", "price": 1.5}],
            "quantity": 2,
            "price": 9.5,
            "original_price": 10.0,
            "unit": "piece",
            "min_order_quantity": 1,
            "max_order_quantity": 5,
            "name": "Cola 330ml",
            "image": "https://cdn.example/cola.png"
        });

        let product: CartProduct = serde_json::from_value(json).unwrap();
        assert_eq!(product.id, "c1");
        assert_eq!(product.product_id, "P1");
        assert_eq!(product.options.len(), 1);
        assert_eq!(product.quantity, 2);

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["min_order_quantity"], 1);
    }

    #[test]
    fn test_options_field_defaults_to_empty() {
        let json = serde_json::json!({
            "id": "c1",
            "product_id": "P1",
            "quantity": 1,
            "price": 2.0,
            "original_price": 2.0,
            "unit": "kg",
            "min_order_quantity": 1,
            "max_order_quantity": 9,
            "name": "Apples",
            "image": ""
        });

        let product: CartProduct = serde_json::from_value(json).unwrap();
        assert!(product.options.is_empty());
    }

    #[test]
    fn test_option_group_nesting_deserializes() {
        let json = serde_json::json!({
            "id": "g1",
            "name": "Size",
            "min_selection": 1,
            "max_selection": 1,
            "options": [{
                "id": "o1",
                "name": "Large",
                "price": 0.0,
                "is_default": true,
                "child_groups": [{
                    "id": "g2",
                    "name": "Crust",
                    "min_selection": 1,
                    "max_selection": 1,
                    "options": [
                        {"id": "o2", "name": "Thin", "price": 0.0}
                    ]
                }]
            }]
        });

        let group: ProductOptionGroup = serde_json::from_value(json).unwrap();
        let child = group.options[0].child_groups.as_ref().unwrap();
        assert_eq!(child[0].name, "Crust");
        assert!(!child[0].options[0].is_default);
    }
}
