//! Kora Tablature WASM API
//!
//! JavaScript-facing API for the tablature tab.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and label parsing
//! - `types`: result structures returned to JavaScript
//! - `tablature`: session lifecycle and the tab's button handlers

pub mod helpers;
pub mod types;
pub mod tablature;

pub use tablature::*;
