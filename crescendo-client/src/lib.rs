//! # Crescendo Client Core
//!
//! Client-side runtime for the Crescendo distribution dashboard: persisted
//! state containers, upload-draft persistence and reconstruction, and the
//! typed REST collaborator client. No UI lives here — this crate is the state
//! layer the views sit on top of.
//!
//! ## Module Organization
//!
//! - `storage`: persisted key-value store adapter (SQLite + in-memory)
//! - `stores`: state containers (session, artists, theme, notifications, ...)
//! - `drafts`: upload-draft persistence and base64 file reconstruction
//! - `api`: REST collaborator client
//! - `config`: environment-driven client configuration
//! - `context`: application context wiring stores, storage, and the API
//!
//! ## Control flow
//!
//! UI events mutate a store → the store replaces its snapshot and writes the
//! persisted projection through the storage adapter → on restart, stores
//! rehydrate from the adapter before first read → upload flows additionally
//! decode persisted base64 payloads back into binary files.

pub mod api;
pub mod config;
pub mod context;
pub mod drafts;
pub mod storage;
pub mod stores;

/// Current version of the Crescendo client core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
