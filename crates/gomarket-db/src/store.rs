//! # Key-Value Store Trait
//!
//! The persistence seam of the cart: a string-keyed store of string values
//! with asynchronous get / set / remove / clear.
//!
//! ## Contract
//! - `get_item` of a key never written returns `Ok(None)`
//! - `set_item` overwrites any previous value for the key
//! - `remove_item` of a missing key is not an error
//! - `clear` removes every key the engine holds

use std::future::Future;

use crate::error::DbResult;

/// Asynchronous string-keyed persistence.
///
/// Futures are `Send` so a store can be driven from any tokio worker.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    fn get_item(&self, key: &str) -> impl Future<Output = DbResult<Option<String>>> + Send;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Deletes `key` if present.
    fn remove_item(&self, key: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Deletes every key.
    fn clear(&self) -> impl Future<Output = DbResult<()>> + Send;
}
