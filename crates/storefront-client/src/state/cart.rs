//! # Cart State
//!
//! The in-memory cart store for the active session.
//!
//! ## Ownership Model
//! The backend is the source of truth; this store is a best-effort cache
//! synchronized only at the moments a mutating call succeeds. There is no
//! background refresh and no push channel; a page reload refetches.
//!
//! ## Cart Store Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Store Operations                              │
//! │                                                                         │
//! │  UI Event                 Control Flow             Store Change         │
//! │  ────────                 ────────────             ────────────         │
//! │                                                                         │
//! │  Add succeeds ───────────► form.submit() ────────► upsert(line)        │
//! │                                                                         │
//! │  Update succeeds ────────► stepper.increase() ───► upsert(line)        │
//! │                                                                         │
//! │  Remove succeeds ────────► stepper.decrease() ───► remove(id)          │
//! │                                                                         │
//! │  Initial page load ──────► fetch cart ───────────► replace_all(items)  │
//! │                                                                         │
//! │  Membership reads ("is P in the cart?") decide whether the UI          │
//! │  renders an add control or a quantity stepper.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::CartProduct;

/// The ordered collection of cart line items.
///
/// ## Invariants
/// - Lines are unique by cart row `id` (upsert replaces in place)
/// - Insertion order is preserved; a replaced line keeps its position
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartProduct>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// All lines in insertion order.
    pub fn items(&self) -> &[CartProduct] {
        &self.items
    }

    /// Inserts a line, or replaces the existing line with the same `id`.
    ///
    /// Used after successful add and update calls; the server's copy wins.
    pub fn upsert(&mut self, product: CartProduct) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => *existing = product,
            None => self.items.push(product),
        }
    }

    /// Removes a line by cart row id. Returns whether a line was removed.
    pub fn remove(&mut self, cart_product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|item| item.id != cart_product_id);
        self.items.len() != initial_len
    }

    /// Replaces the whole collection (initial page load).
    pub fn replace_all(&mut self, items: Vec<CartProduct>) {
        self.items = items;
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Looks up a line by cart row id.
    pub fn get(&self, cart_product_id: &str) -> Option<&CartProduct> {
        self.items.iter().find(|item| item.id == cart_product_id)
    }

    /// Looks up a line by the product it represents.
    pub fn find_by_product(&self, product_id: &str) -> Option<&CartProduct> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Whether any line represents the given product.
    pub fn contains_product(&self, product_id: &str) -> bool {
        self.find_by_product(product_id).is_some()
    }

    /// Number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Subtotal over `original_price × quantity`, the figure the cart
    /// drawer displays per line.
    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.original_price * f64::from(item.quantity))
            .sum()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Shared handle to the session's cart.
///
/// ## Design Notes
/// An explicit, injected state container: every control receives a clone
/// of this handle, there is no ambient global. `Arc<Mutex<_>>` because
/// several controls on one page share the cart and a multi-threaded
/// runtime may complete their calls on different worker threads.
///
/// Lock recovery uses `PoisonError::into_inner`: a poisoned cart is still
/// structurally valid (every mutation is a single assignment), and a cache
/// must never take the page down.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a handle to a new empty cart.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}
