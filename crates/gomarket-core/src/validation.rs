//! # Validation Module
//!
//! Checks for the cart invariants.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  add_to_cart(item) ──► validate_item_id(item.id)                       │
//! │                        validate_price(item.price)                      │
//! │                        (rejects before any state change)               │
//! │                                                                         │
//! │  mount / load ───────► decode_sequence(text)                           │
//! │                        └── validate_sequence(items)                    │
//! │                            (a broken stored cart counts as unreadable) │
//! │                                                                         │
//! │  increment / decrement cannot create ids; decrement drops any line     │
//! │  that reaches zero, increment refuses to overflow.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::CartItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must not carry leading/trailing whitespace (ids are compared exactly)
///
/// ## Example
/// ```rust
/// use gomarket_core::validation::validate_item_id;
///
/// assert!(validate_item_id("sku-1").is_ok());
/// assert!(validate_item_id("").is_err());
/// assert!(validate_item_id(" 1").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.trim() != id {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not start or end with whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// JSON has no representation for NaN or infinity, so a non-finite price
/// would make the whole persisted cart unreadable.
///
/// ## Example
/// ```rust
/// use gomarket_core::validation::validate_price;
///
/// assert!(validate_price(10.0).is_ok());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("must be a finite number, got {price}"),
        });
    }
    Ok(())
}

/// Validates a line quantity (must be ≥ 1).
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: quantity,
        });
    }
    Ok(())
}

/// Validates a whole cart sequence: every id valid and unique, every
/// price finite, every quantity positive.
pub fn validate_sequence(items: &[CartItem]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        validate_item_id(&item.id)?;
        validate_price(item.price)?;
        validate_quantity(item.quantity)?;

        if !seen.insert(item.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: item.id.clone(),
            });
        }
    }

    Ok(())
}
