//! # wp-core
//!
//! Core types, traits, and utilities for the Packwork timeline engine.
//!
//! This crate provides the foundational building blocks used across all
//! other crates:
//! - Common error types and the validation error collection
//! - Result type alias
//! - Core traits (Identifiable, Positioned)
//! - Engine configuration

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use config::*;
pub use error::*;
pub use result::*;
pub use traits::*;
