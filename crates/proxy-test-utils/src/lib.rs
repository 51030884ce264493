//! Shared test utilities for the proxyctl workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`sandbox`]: [`Sandbox`] pairs a fake system root with a fake home

pub mod sandbox;

pub use sandbox::Sandbox;
