//! # Domain Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Types                                      │
//! │                                                                         │
//! │  ┌─────────────────┐  add_to_cart   ┌─────────────────┐                 │
//! │  │   NewCartItem   │ ─────────────► │    CartItem     │                 │
//! │  │  ─────────────  │  quantity = 1  │  ─────────────  │                 │
//! │  │  id             │  or += 1       │  id             │                 │
//! │  │  title          │                │  title          │                 │
//! │  │  image_url      │                │  image_url      │                 │
//! │  │  price          │                │  price          │                 │
//! │  └─────────────────┘                │  quantity (≥1)  │                 │
//! │                                     └─────────────────┘                 │
//! │                                                                         │
//! │  CartSequence = Vec<CartItem>  (ordered, ids unique)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted Shape
//! Field names are the wire names: the persisted JSON is
//! `[{"id":"1","title":"A","image_url":"u","price":10.0,"quantity":1}]`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Cart Item
// =============================================================================

/// One product line in the cart.
///
/// `title`, `image_url` and `price` are opaque here: they are carried for the
/// UI and never inspected or computed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Stable external product identifier, unique within the cart.
    pub id: String,

    /// Display name.
    pub title: String,

    /// Display image reference.
    pub image_url: String,

    /// Unit price as shown by the catalog.
    pub price: f64,

    /// Units of this product in the cart. Always ≥ 1 while present.
    pub quantity: i64,
}

impl CartItem {
    /// Builds a cart line from an add request with the given quantity.
    pub fn from_new(item: NewCartItem, quantity: i64) -> Self {
        CartItem {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
            quantity,
        }
    }
}

/// The ordered cart contents.
pub type CartSequence = Vec<CartItem>;

// =============================================================================
// New Cart Item
// =============================================================================

/// Input to `add_to_cart`: a product without a quantity.
///
/// The quantity of an add request is always decided by the cart (1 for a new
/// line, +1 for an existing one), so it is not part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCartItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

impl NewCartItem {
    /// Creates an add request.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        NewCartItem {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }
}

/// Drops the quantity of an existing line so it can be re-added.
impl From<CartItem> for NewCartItem {
    fn from(item: CartItem) -> Self {
        NewCartItem {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
        }
    }
}
