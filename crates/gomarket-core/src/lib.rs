//! # gomarket-core: Pure Cart Logic for GoMarketplace
//!
//! This crate holds the cart rules as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     GoMarketplace Cart Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Consumers (UI screens, CLI)                    │   │
//! │  │      Product list ──► Cart badge ──► Cart screen                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartScope::use_cart()                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 gomarket-cart (Cart Store)                      │   │
//! │  │   products, subscribe, add_to_cart, increment, decrement        │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼────────────────┐  ┌──────────▼──────────────────┐    │
//! │  │ ★ gomarket-core (THIS CRATE) ★│  │  gomarket-db                │    │
//! │  │  CartItem, transforms,        │  │  KeyValueStore (SQLite,     │    │
//! │  │  validation, JSON codec       │  │  in-memory)                 │    │
//! │  │  NO I/O • PURE FUNCTIONS      │  │                             │    │
//! │  └───────────────────────────────┘  └─────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `CartItem` and `NewCartItem`
//! - [`cart`] - Sequence transforms (add, increment, decrement) and codec
//! - [`error`] - Domain error types
//! - [`validation`] - Cart invariant checks
//!
//! ## Example Usage
//!
//! ```rust
//! use gomarket_core::cart;
//! use gomarket_core::types::NewCartItem;
//!
//! let item = NewCartItem::new("1", "Apple", "https://img/1.png", 10.0);
//! let products = cart::add_to_cart(&[], item.clone()).unwrap();
//! let products = cart::add_to_cart(&products, item).unwrap();
//! assert_eq!(products[0].quantity, 2);
//!
//! let products = cart::decrement(&products, "1");
//! let products = cart::decrement(&products, "1");
//! assert!(products.is_empty());
//! ```

pub mod cart;
pub mod error;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::{CartItem, CartSequence, NewCartItem};

/// Storage key the cart sequence is persisted under.
///
/// The misspelling is load-bearing: installed apps already hold carts under
/// this exact key.
pub const STORAGE_CART: &str = "@GoMartketPlace_cart";
