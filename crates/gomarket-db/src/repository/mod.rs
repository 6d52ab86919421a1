//! # Repository Module
//!
//! SQL for the SQLite engine, kept behind small repository types so the
//! queries live in one place.
//!
//! ## Available Repositories
//!
//! - [`kv::KeyValueRepository`] - `kv_store` table access

pub mod kv;
