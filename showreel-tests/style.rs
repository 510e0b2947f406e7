//! Style Enforcement Tests
//!
//! Rules clippy cannot express on its own.

#[path = "style/production_panics.rs"]
pub mod production_panics;
