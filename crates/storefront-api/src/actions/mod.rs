//! # Resource Action Functions
//!
//! One narrow, typed function per backend resource operation. Each is a
//! thin façade: fixed endpoint, fixed verb, pass-through of the
//! normalizer's result with the success envelope unwrapped to its `data`.
//! None retries, none transforms errors.

pub mod cart;
pub mod checkout;
