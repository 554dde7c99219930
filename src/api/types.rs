//! Shared types for the WASM API
//!
//! Result structures handed back to JavaScript after each call.

use serde::{Deserialize, Serialize};

use crate::appender::ActionOutcome;
use crate::models::{FingerMode, RhythmSymbol};
use crate::notify::Notification;

/// Result of a tablature action
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EditResult {
    pub outcome: ActionOutcome,
    pub line_count: usize,
    pub notifications: Vec<Notification>,
}

/// Current state of the tab, for a full re-render
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SessionSnapshot {
    pub lines: Vec<String>,
    pub rhythm: RhythmSymbol,
    pub finger_mode: FingerMode,
}
