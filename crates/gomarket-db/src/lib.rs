//! # gomarket-db: Device-Local Storage for the Cart
//!
//! This crate provides the key-value persistence the Cart Store mirrors its
//! state into. The store only sees the [`KeyValueStore`] trait; which engine
//! sits behind it is a startup decision.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Persistence Flow                            │
//! │                                                                         │
//! │  CartStore::add_to_cart / increment / decrement                        │
//! │       │  set_item("@GoMartketPlace_cart", "[...json...]")              │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   gomarket-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ KeyValueStore │    │   Database    │    │ MemoryStore  │  │   │
//! │  │   │   (trait)     │◄───│ (pool.rs)     │    │ (memory.rs)  │  │   │
//! │  │   │ get/set/      │    │ SqlitePool +  │    │ HashMap in   │  │   │
//! │  │   │ remove/clear  │◄───│ KeyValueRepo  │    │ an RwLock    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  SQLite file  (platform data dir)/cart.db, table kv_store       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `KeyValueStore` trait
//! - [`pool`] - SQLite connection pool and the `Database` engine
//! - [`memory`] - In-memory engine
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - SQL for the `kv_store` table
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gomarket_db::{Database, DbConfig, KeyValueStore};
//!
//! let db = Database::new(DbConfig::new("path/to/cart.db")).await?;
//! db.set_item("greeting", "hello").await?;
//! assert_eq!(db.get_item("greeting").await?.as_deref(), Some("hello"));
//! ```

pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

pub use error::{DbError, DbResult};
pub use memory::MemoryStore;
pub use pool::{Database, DbConfig};
pub use repository::kv::KeyValueRepository;
pub use store::KeyValueStore;
