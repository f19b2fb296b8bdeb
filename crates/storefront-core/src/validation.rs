//! # Validation Module
//!
//! Early input checks performed before a value is handed to an action
//! function. These are advisory client-side checks; the backend re-validates
//! everything.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a requested quantity.
///
/// ## Rules
/// - Must be at least 1 (a zero quantity is a removal, not an update)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a promo code string.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed code.
pub fn validate_promo_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "promo code".to_string(),
        });
    }

    Ok(code.to_string())
}
