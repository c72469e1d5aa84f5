//! # wp-services
//!
//! Service seam composing the store boundary with the engine: one awaited
//! snapshot read, one hydration run. An HTTP layer (out of scope here)
//! would call into this after routing `GET /workpackages/{id}?view=...`.

pub mod hydration;

pub use hydration::{HydrationService, View};
