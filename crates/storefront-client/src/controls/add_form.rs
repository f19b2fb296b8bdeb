//! # Product Add Form
//!
//! The add-to-cart form on a product page: option selection with default
//! pre-population, local constraint validation, and submission.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit()                                                               │
//! │     │                                                                   │
//! │     ├── busy? ───────────────────────► FlowError::Busy                 │
//! │     │                                                                   │
//! │     ├── validate_selection ──────────► FlowError::Selection            │
//! │     │   (first violated constraint;    (never reaches the network)     │
//! │     │    traversal order, recursive)                                   │
//! │     │                                                                   │
//! │     ├── POST cart/add ───────────────► FlowError::Api on failure       │
//! │     │                                  (store untouched)               │
//! │     │                                                                   │
//! │     └── Ok(line) ────────────────────► upsert into the cart store      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use storefront_api::actions::cart::{add_product_to_cart, AddToCartBody};
use storefront_api::{ApiClient, RequestContext};
use storefront_core::options::{default_selection, validate_selection};
use storefront_core::validation::validate_quantity;
use storefront_core::{CartProduct, ProductOptionGroup, DEFAULT_ADD_QUANTITY};

use crate::error::FlowError;
use crate::state::CartState;

/// Add-to-cart form state for one product.
pub struct ProductAddForm {
    product_id: String,
    product_category_price_id: String,
    option_groups: Vec<ProductOptionGroup>,
    selected: Vec<String>,
    quantity: u32,
    busy: AtomicBool,
}

impl ProductAddForm {
    /// Creates the form with defaults pre-selected, including defaults of
    /// nested child groups under a default-selected parent.
    pub fn new(
        product_id: impl Into<String>,
        product_category_price_id: impl Into<String>,
        option_groups: Vec<ProductOptionGroup>,
    ) -> Self {
        let selected = default_selection(&option_groups);
        ProductAddForm {
            product_id: product_id.into(),
            product_category_price_id: product_category_price_id.into(),
            option_groups,
            selected,
            quantity: DEFAULT_ADD_QUANTITY,
            busy: AtomicBool::new(false),
        }
    }

    /// The product this form adds.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Currently selected option ids.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Selects an option id (no-op if already selected).
    pub fn select(&mut self, option_id: impl Into<String>) {
        let option_id = option_id.into();
        if !self.selected.contains(&option_id) {
            self.selected.push(option_id);
        }
    }

    /// Deselects an option id.
    pub fn deselect(&mut self, option_id: &str) {
        self.selected.retain(|id| id != option_id);
    }

    /// Sets the quantity to submit.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Runs the local option-group validation without submitting.
    ///
    /// Returns the first violated constraint in traversal order; the UI
    /// blocks submission until it is resolved.
    pub fn validate(&self) -> Result<(), FlowError> {
        validate_selection(&self.option_groups, &self.selected)?;
        Ok(())
    }

    /// Validates and submits, upserting the created line into the store
    /// on success.
    pub async fn submit(
        &self,
        api: &ApiClient,
        ctx: &RequestContext,
        cart: &CartState,
    ) -> Result<CartProduct, FlowError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FlowError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        validate_quantity(self.quantity)?;
        validate_selection(&self.option_groups, &self.selected)?;

        debug!(
            product_id = %self.product_id,
            selected = self.selected.len(),
            quantity = self.quantity,
            "add form submit"
        );

        let added = add_product_to_cart(
            api,
            ctx,
            AddToCartBody {
                product_category_price_id: self.product_category_price_id.clone(),
                options: self.selected.clone(),
                quantity: Some(self.quantity),
            },
        )
        .await?;

        cart.with_cart_mut(|c| c.upsert(added.clone()));
        Ok(added)
    }
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
