//! Models module for the kora tablature editor
//!
//! This module contains the data models used by the tablature tab:
//! instrument strings, selectors, tokens and the tablature buffer.

pub mod kora;
pub mod token;
pub mod tablature;

// Re-export commonly used types
pub use kora::{Side, StringId, FingerMode, RhythmSymbol};
pub use token::{FixedTool, Action};
pub use tablature::TablatureBuffer;
