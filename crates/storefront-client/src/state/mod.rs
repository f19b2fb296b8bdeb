//! Session-scoped state containers.

mod cart;

pub use cart::{Cart, CartState};
