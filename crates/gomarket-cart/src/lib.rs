//! # gomarket-cart: The Cart Store
//!
//! Holds the shopping cart in memory, mirrors every change into device-local
//! storage, and hands the cart to consumers through an explicit provider /
//! scope / context chain.
//!
//! ## Modules
//!
//! - [`store`] - `CartStore`: reactive state, load, mutations, persistence
//! - [`provider`] - `CartProvider`, `CartScope`, `CartContext`
//! - [`config`] - `CartConfig` (TOML file + environment)
//! - [`error`] - `CartError`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gomarket_cart::{CartConfig, CartProvider};
//! use gomarket_core::NewCartItem;
//! use gomarket_db::MemoryStore;
//!
//! let provider = CartProvider::mount(MemoryStore::new(), &CartConfig::default()).await;
//! let scope = provider.scope();
//!
//! let cart = scope.use_cart();
//! let mut changes = cart.subscribe();
//!
//! cart.add_to_cart(NewCartItem::new("1", "Apple", "https://img/1.png", 10.0)).await?;
//! changes.changed().await?;
//! assert_eq!(changes.borrow()[0].quantity, 1);
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod store;

pub use config::{CartConfig, StorageSettings};
pub use error::{CartError, CartResult};
pub use provider::{CartContext, CartProvider, CartScope};
pub use store::CartStore;
