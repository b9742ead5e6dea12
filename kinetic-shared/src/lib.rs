//! # Kinetic Shared Library
//!
//! Domain types and waitlist logic used by the Kinetic API server.
//!
//! ## Module Organization
//!
//! - `models`: The signup record and its validation rules
//! - `store`: Store trait, hosted REST client and in-memory store
//! - `waitlist`: Signup submission and count retrieval
//! - `error`: Waitlist error taxonomy

pub mod error;
pub mod models;
pub mod store;
pub mod waitlist;

/// Current version of the Kinetic shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
