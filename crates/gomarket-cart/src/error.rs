//! # Cart Error Types
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Failure Handling                          │
//! │                                                                         │
//! │  Failure              Where            Handling                         │
//! │  ───────              ─────            ────────                         │
//! │  Load (read/decode)   mount            logged at warn, cart stays []    │
//! │  Persist (write)      mutations        returned as Err(Persist);        │
//! │                                        in-memory state keeps the change │
//! │  Validation           add_to_cart      returned before any change       │
//! │  Quantity overflow    add / increment  returned before any change       │
//! │  Misuse               use_cart()       panic (programmer error)         │
//! │                                                                         │
//! │  Reads degrade gracefully, writes do not.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use gomarket_core::{CoreError, ValidationError};
use gomarket_db::DbError;
use thiserror::Error;

/// Result type alias for cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Errors surfaced by the Cart Store.
#[derive(Debug, Error)]
pub enum CartError {
    // =========================================================================
    // Storage Errors
    // =========================================================================
    /// Reading the persisted cart failed.
    ///
    /// Only ever observed in logs: mount swallows it.
    #[error("Failed to read persisted cart: {0}")]
    Load(#[source] DbError),

    /// Writing the cart to storage failed.
    ///
    /// ## User-Visible Effect
    /// The in-memory cart already shows the change; after a restart the cart
    /// rolls back to the last write that succeeded.
    #[error("Failed to persist cart: {0}")]
    Persist(#[source] DbError),

    // =========================================================================
    // Data Errors
    // =========================================================================
    /// The cart could not be encoded or decoded.
    #[error("Cart codec error: {0}")]
    Codec(CoreError),

    /// The request breaks a cart invariant.
    #[error("Invalid cart request: {0}")]
    Validation(#[from] ValidationError),

    /// The line already holds the largest representable quantity.
    #[error("Cannot add another unit of '{id}': quantity is at its maximum")]
    QuantityTooLarge { id: String },

    // =========================================================================
    // Usage Errors
    // =========================================================================
    /// The accessor was called without a mounted provider.
    #[error("use_cart must be used within a CartProvider")]
    OutsideProvider,

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration values.
    #[error("Invalid cart configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

impl From<CoreError> for CartError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => CartError::Validation(e),
            CoreError::QuantityTooLarge { id, .. } => CartError::QuantityTooLarge { id },
            other => CartError::Codec(other),
        }
    }
}

impl From<std::io::Error> for CartError {
    fn from(err: std::io::Error) -> Self {
        CartError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CartError {
    fn from(err: toml::de::Error) -> Self {
        CartError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CartError {
    fn from(err: toml::ser::Error) -> Self {
        CartError::ConfigSaveFailed(err.to_string())
    }
}

impl CartError {
    /// Returns true if the failure came from the storage engine.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, CartError::Load(_) | CartError::Persist(_))
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CartError::InvalidConfig(_)
                | CartError::ConfigLoadFailed(_)
                | CartError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_validation_becomes_cart_validation() {
        let core = CoreError::Validation(ValidationError::Required {
            field: "id".into(),
        });
        assert!(matches!(CartError::from(core), CartError::Validation(_)));

        let core = CoreError::Decode("eof".into());
        assert!(matches!(CartError::from(core), CartError::Codec(_)));

        let core = CoreError::QuantityTooLarge {
            id: "1".into(),
            max: i64::MAX,
        };
        assert!(matches!(
            CartError::from(core),
            CartError::QuantityTooLarge { ref id } if id == "1"
        ));
    }

    #[test]
    fn test_error_categories() {
        assert!(CartError::Persist(DbError::PoolExhausted).is_storage_error());
        assert!(!CartError::OutsideProvider.is_storage_error());
        assert!(CartError::InvalidConfig("empty key".into()).is_config_error());
    }

    #[test]
    fn test_outside_provider_message() {
        assert_eq!(
            CartError::OutsideProvider.to_string(),
            "use_cart must be used within a CartProvider"
        );
    }
}
