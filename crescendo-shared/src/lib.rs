//! # Crescendo Shared Library
//!
//! This crate contains the domain types and pure business rules shared by the
//! Crescendo dashboard client: user/artist/notification/upload models, typed
//! REST payload shapes, and the role/permission resolver.
//!
//! ## Module Organization
//!
//! - `models`: Domain models and REST payload shapes
//! - `permissions`: Role-based capability tables and route gating
//!
//! Nothing in this crate performs I/O; persistence and networking live in
//! `crescendo-client`.

pub mod models;
pub mod permissions;

/// Current version of the Crescendo shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
