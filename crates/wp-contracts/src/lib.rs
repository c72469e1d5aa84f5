//! # wp-contracts
//!
//! Input validation contracts for the timeline engine.
//!
//! A contract inspects a snapshot before any computation runs and collects
//! every violation into a single [`wp_core::ValidationErrors`], so a caller
//! sees the full set of problems at once instead of the first.

pub mod base;
pub mod work_packages;

pub use base::{Contract, ValidationResult};
pub use work_packages::HydrationContract;
