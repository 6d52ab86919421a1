//! # Cart Store
//!
//! Owns the in-memory cart sequence and mirrors it into a [`KeyValueStore`].
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Mutation                                  │
//! │                                                                         │
//! │  add_to_cart / increment / decrement                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  acquire mutation lock  ◄── one mutation at a time, in call order       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  snapshot products ──► gomarket_core::cart transform ──► next sequence  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  publish next on the watch channel  (subscribers see it immediately)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storage.set_item(key, json).await                                      │
//! │       │                                                                 │
//! │       ├── Ok  ──► Ok(())                                                │
//! │       └── Err ──► Err(CartError::Persist)   (in-memory change is kept)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  release mutation lock                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Holding the lock across the write means each mutation starts from the
//! state the previous one published, and writes reach storage in the same
//! order as the in-memory updates.

use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, warn};

use gomarket_core::{cart, CartItem, NewCartItem};
use gomarket_db::KeyValueStore;

use crate::error::{CartError, CartResult};

/// Operation tags written to the persist log line.
const OP_ADD: &str = "addtocart";
const OP_INCREMENT: &str = "inc";
const OP_DECREMENT: &str = "dec";

/// Reactive cart state backed by a key-value store.
pub struct CartStore<S> {
    /// Storage engine the cart is mirrored into.
    storage: S,
    /// Key the cart is stored under.
    key: String,
    /// Current products; receivers are the subscribers.
    products_tx: watch::Sender<Vec<CartItem>>,
    /// Serializes mutations (snapshot through write).
    mutation: Mutex<()>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Creates an empty store. Nothing is read until [`load`](Self::load).
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        let (products_tx, _) = watch::channel(Vec::new());

        CartStore {
            storage,
            key: key.into(),
            products_tx,
            mutation: Mutex::new(()),
        }
    }

    /// Replaces the in-memory cart with the persisted one, if any.
    ///
    /// ## Recovery Policy
    /// - Key absent: the cart stays empty
    /// - Read fails or the value doesn't decode: logged, the cart stays empty
    ///
    /// Never fails.
    pub async fn load(&self) {
        let _guard = self.mutation.lock().await;

        match self.read_persisted().await {
            Ok(Some(products)) => {
                info!(key = %self.key, count = products.len(), "Loaded persisted cart");
                self.products_tx.send_replace(products);
            }
            Ok(None) => {
                debug!(key = %self.key, "No persisted cart");
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to load persisted cart, starting empty");
            }
        }
    }

    async fn read_persisted(&self) -> CartResult<Option<Vec<CartItem>>> {
        let Some(text) = self
            .storage
            .get_item(&self.key)
            .await
            .map_err(CartError::Load)?
        else {
            return Ok(None);
        };

        Ok(Some(cart::decode_sequence(&text)?))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns a snapshot of the current products.
    pub fn products(&self) -> Vec<CartItem> {
        self.products_tx.borrow().clone()
    }

    /// Subscribes to product changes.
    ///
    /// The receiver starts at the current value; every mutation (including a
    /// no-op one) publishes a new value.
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.products_tx.subscribe()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        cart::item_count(&self.products_tx.borrow())
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        cart::total_quantity(&self.products_tx.borrow())
    }

    /// Storage key this store persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `item`: appends a new line with quantity 1, or bumps
    /// the quantity of the line with the same id.
    ///
    /// ## Errors
    /// - `Validation` if the id is empty or the price is not finite
    /// - `QuantityTooLarge` if the line cannot take another unit
    /// - `Persist` if the write fails (the in-memory cart keeps the change)
    ///
    /// Nothing is published or written on the first two.
    pub async fn add_to_cart(&self, item: impl Into<NewCartItem>) -> CartResult<()> {
        let item = item.into();

        let _guard = self.mutation.lock().await;
        let next = cart::add_to_cart(&self.products_tx.borrow(), item)?;
        self.store_products(next, OP_ADD).await
    }

    /// Adds one unit to the line matching `id`. Unknown ids change nothing
    /// but are still published and persisted.
    pub async fn increment(&self, id: &str) -> CartResult<()> {
        let _guard = self.mutation.lock().await;
        let next = cart::increment(&self.products_tx.borrow(), id)?;
        self.store_products(next, OP_INCREMENT).await
    }

    /// Removes one unit from the line matching `id`; a line at quantity 1 is
    /// removed. Unknown ids change nothing but are still published and
    /// persisted.
    pub async fn decrement(&self, id: &str) -> CartResult<()> {
        let _guard = self.mutation.lock().await;
        let next = cart::decrement(&self.products_tx.borrow(), id);
        self.store_products(next, OP_DECREMENT).await
    }

    /// Publishes `products` and writes them to storage.
    ///
    /// Caller must hold the mutation lock.
    async fn store_products(&self, products: Vec<CartItem>, operation: &str) -> CartResult<()> {
        let json = cart::encode_sequence(&products)?;
        debug!(operation, products = %json, "Storing cart");

        self.products_tx.send_replace(products);

        self.storage
            .set_item(&self.key, &json)
            .await
            .map_err(|e| {
                error!(operation, key = %self.key, error = %e, "Failed to persist cart");
                CartError::Persist(e)
            })
    }
}
