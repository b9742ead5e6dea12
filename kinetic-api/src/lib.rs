//! # Kinetic API Server Library
//!
//! This library provides the core functionality for the Kinetic waitlist
//! server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `middleware`: Security headers
//! - `page`: Landing page state and rendering
//! - `routes`: Route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod page;
pub mod routes;
