//! # Error Types
//!
//! Domain-specific error types for gomarket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gomarket-core errors (this file)                                      │
//! │  ├── CoreError        - Codec and domain failures                      │
//! │  └── ValidationError  - Cart invariant violations                      │
//! │                                                                         │
//! │  gomarket-db errors (separate crate)                                   │
//! │  └── DbError          - Key-value store failures                       │
//! │                                                                         │
//! │  gomarket-cart errors                                                  │
//! │  └── CartError        - What store callers see                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CartError ← DbError               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core cart logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The persisted text is not a valid cart sequence.
    ///
    /// ## When This Occurs
    /// - Stored value is not JSON (truncated write, manual edit)
    /// - JSON has the wrong shape (missing `id`, `quantity` is a string, ...)
    #[error("Failed to decode cart: {0}")]
    Decode(String),

    /// The cart sequence could not be encoded.
    #[error("Failed to encode cart: {0}")]
    Encode(String),

    /// Adding a unit would overflow the line quantity.
    #[error("Quantity of '{id}' cannot grow past {max}")]
    QuantityTooLarge { id: String, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Cart invariant violations.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: i64 },

    /// Duplicate value (two lines with the same product id).
    #[error("{field} '{value}' appears more than once")]
    Duplicate { field: String, value: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: 0,
        };
        assert_eq!(err.to_string(), "quantity must be positive, got 0");
    }

    #[test]
    fn test_quantity_too_large_message() {
        let err = CoreError::QuantityTooLarge {
            id: "7".to_string(),
            max: i64::MAX,
        };
        assert_eq!(
            err.to_string(),
            format!("Quantity of '7' cannot grow past {}", i64::MAX)
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "42".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation error: id '42' appears more than once"
        );
    }
}
