//! # Cart Provider
//!
//! Scopes a [`CartStore`] to a mount lifetime and hands it to consumers.
//!
//! ## Lifetime
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Provider Scope                                       │
//! │                                                                         │
//! │  CartProvider::mount(storage, &config).await                            │
//! │       │  store created empty, persisted cart loaded                     │
//! │       ▼                                                                 │
//! │  provider.scope() ──► CartScope (clone freely, hand to screens)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  scope.use_cart() ──► CartContext { products, subscribe,                │
//! │       │                             add_to_cart, increment, decrement } │
//! │       ▼                                                                 │
//! │  provider.unmount() / drop                                              │
//! │       │  store dropped, persisted value left as is                      │
//! │       ▼                                                                 │
//! │  scope.use_cart() ──► panic: "use_cart must be used within a            │
//! │                               CartProvider"                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `CartContext` resolved while mounted keeps its store alive until the
//! context itself is dropped, so a mutation already in flight completes.

use std::sync::{Arc, Weak};

use tokio::sync::watch;
use tracing::info;

use gomarket_core::{CartItem, NewCartItem};
use gomarket_db::KeyValueStore;

use crate::config::CartConfig;
use crate::error::{CartError, CartResult};
use crate::store::CartStore;

/// Shared state of a mounted provider.
struct Mounted<S> {
    store: Arc<CartStore<S>>,
}

/// Owner of a mounted Cart Store.
pub struct CartProvider<S> {
    mounted: Arc<Mounted<S>>,
}

impl<S: KeyValueStore> CartProvider<S> {
    /// Mounts a Cart Store over `storage` and loads the persisted cart.
    ///
    /// Load failures are logged and leave the cart empty; mounting itself
    /// cannot fail.
    pub async fn mount(storage: S, config: &CartConfig) -> Self {
        let store = CartStore::new(storage, config.storage_key());
        store.load().await;

        info!(
            key = %config.storage_key(),
            items = store.item_count(),
            "Cart provider mounted"
        );

        CartProvider {
            mounted: Arc::new(Mounted {
                store: Arc::new(store),
            }),
        }
    }
}

impl<S> CartProvider<S> {
    /// Returns a scope token for consumers of this provider.
    pub fn scope(&self) -> CartScope<S> {
        CartScope {
            mounted: Arc::downgrade(&self.mounted),
        }
    }

    /// Returns the context directly, for the code that owns the provider.
    pub fn context(&self) -> CartContext<S> {
        CartContext {
            store: Arc::clone(&self.mounted.store),
        }
    }

    /// Unmounts the provider. Outstanding scopes stop resolving.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<S> Drop for CartProvider<S> {
    fn drop(&mut self) {
        info!("Cart provider unmounted");
    }
}

// =============================================================================
// Scope
// =============================================================================

/// A consumer's link to a provider.
///
/// Resolving it after the provider is gone is a programmer error.
pub struct CartScope<S> {
    mounted: Weak<Mounted<S>>,
}

impl<S> CartScope<S> {
    /// A scope that was never inside a provider.
    pub fn detached() -> Self {
        CartScope {
            mounted: Weak::new(),
        }
    }

    /// Returns the cart context.
    ///
    /// # Panics
    /// If the provider was never mounted or has been unmounted.
    pub fn use_cart(&self) -> CartContext<S> {
        match self.try_use_cart() {
            Ok(context) => context,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the cart context, or `OutsideProvider` without a live provider.
    pub fn try_use_cart(&self) -> CartResult<CartContext<S>> {
        let mounted = self.mounted.upgrade().ok_or(CartError::OutsideProvider)?;

        Ok(CartContext {
            store: Arc::clone(&mounted.store),
        })
    }

    /// Returns true while the provider is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.strong_count() > 0
    }
}

impl<S> Clone for CartScope<S> {
    fn clone(&self) -> Self {
        CartScope {
            mounted: Weak::clone(&self.mounted),
        }
    }
}

impl<S> Default for CartScope<S> {
    fn default() -> Self {
        Self::detached()
    }
}

// =============================================================================
// Context
// =============================================================================

/// What consumers work with: current products, change subscription and the
/// three mutations.
pub struct CartContext<S> {
    store: Arc<CartStore<S>>,
}

impl<S: KeyValueStore> CartContext<S> {
    /// Snapshot of the current products.
    pub fn products(&self) -> Vec<CartItem> {
        self.store.products()
    }

    /// Subscribes to product changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.store.subscribe()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.store.item_count()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.store.total_quantity()
    }

    /// See [`CartStore::add_to_cart`].
    pub async fn add_to_cart(&self, item: impl Into<NewCartItem>) -> CartResult<()> {
        self.store.add_to_cart(item).await
    }

    /// See [`CartStore::increment`].
    pub async fn increment(&self, id: &str) -> CartResult<()> {
        self.store.increment(id).await
    }

    /// See [`CartStore::decrement`].
    pub async fn decrement(&self, id: &str) -> CartResult<()> {
        self.store.decrement(id).await
    }
}

impl<S> Clone for CartContext<S> {
    fn clone(&self) -> Self {
        CartContext {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomarket_db::MemoryStore;

    #[tokio::test]
    async fn test_scope_resolves_while_mounted() {
        let provider = CartProvider::mount(MemoryStore::new(), &CartConfig::default()).await;
        let scope = provider.scope();

        assert!(scope.is_mounted());
        assert!(scope.try_use_cart().is_ok());
        assert!(scope.clone().use_cart().products().is_empty());
    }

    #[tokio::test]
    async fn test_scope_fails_after_unmount() {
        let provider = CartProvider::mount(MemoryStore::new(), &CartConfig::default()).await;
        let scope = provider.scope();

        provider.unmount();

        assert!(!scope.is_mounted());
        assert!(matches!(
            scope.try_use_cart(),
            Err(CartError::OutsideProvider)
        ));
    }

    #[test]
    #[should_panic(expected = "use_cart must be used within a CartProvider")]
    fn test_detached_scope_panics() {
        let scope: CartScope<MemoryStore> = CartScope::detached();
        let _ = scope.use_cart();
    }

    #[tokio::test]
    async fn test_resolved_context_outlives_unmount() {
        let storage = MemoryStore::new();
        let provider = CartProvider::mount(storage.clone(), &CartConfig::default()).await;
        let cart = provider.scope().use_cart();

        provider.unmount();

        cart.add_to_cart(NewCartItem::new("1", "A", "u", 1.0))
            .await
            .unwrap();
        assert!(!storage.is_empty().await);
    }
}
