//! Tablature Token Appender
//!
//! Turns tablature actions into buffer mutations. The buffer and the
//! notification sink are passed into every call; the appender itself only
//! owns the finger resolver.
//!
//! Buffer invariant: each note or tool action appends exactly one line, and
//! undo removes exactly the last appended line (nothing when empty).

use serde::{Deserialize, Serialize};

use crate::fingering::{FingerResolver, FingeringTable};
use crate::models::token::format_note;
use crate::models::{Action, FingerMode, FixedTool, RhythmSymbol, StringId, TablatureBuffer};
use crate::notify::{Notification, NotificationSink, ICON_INFO, ICON_NOTE, ICON_TOOL, ICON_UNDO};

/// What an action did to the buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "line", rename_all = "snake_case")]
pub enum ActionOutcome {
    Appended(String),
    Removed(String),
    NothingToUndo,
}

/// Formats tokens and applies them to a [`TablatureBuffer`]
#[derive(Debug, Clone, Default)]
pub struct TablatureAppender<R = FingeringTable> {
    resolver: R,
}

impl<R: FingerResolver> TablatureAppender<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Format the token for a note without touching any buffer
    pub fn note_token(&self, string: StringId, finger: FingerMode, rhythm: RhythmSymbol) -> String {
        let resolved = self.resolver.resolve(string, finger);
        format_note(rhythm, string, &resolved.suffix)
    }

    /// Append "<rhythm> <string><suffix>" and return the appended line
    pub fn add_note(
        &self,
        buffer: &mut TablatureBuffer,
        sink: &mut impl NotificationSink,
        string: StringId,
        finger: FingerMode,
        rhythm: RhythmSymbol,
    ) -> String {
        let resolved = self.resolver.resolve(string, finger);
        let token = format_note(rhythm, string, &resolved.suffix);

        log::debug!("add_note: {} ({:?} -> {}) line {}", token, finger, resolved.name, buffer.len());
        buffer.append_line(token.clone());

        sink.notify(Notification::new(
            format!("Corde {} ajoutée ({}, {})", string, rhythm, resolved.name),
            ICON_NOTE,
        ));
        token
    }

    /// Append a fixed control literal verbatim
    pub fn add_fixed_token(
        &self,
        buffer: &mut TablatureBuffer,
        sink: &mut impl NotificationSink,
        tool: FixedTool,
    ) -> String {
        let literal = tool.literal();

        log::debug!("add_fixed_token: {:?} -> '{}'", tool, literal);
        buffer.append_line(literal);

        sink.notify(Notification::new(tool.notification(), ICON_TOOL));
        literal.to_string()
    }

    /// Remove the most recent line; an empty buffer is left as is
    pub fn undo_last(
        &self,
        buffer: &mut TablatureBuffer,
        sink: &mut impl NotificationSink,
    ) -> Option<String> {
        match buffer.remove_last_line() {
            Some(line) => {
                log::debug!("undo_last: removed '{}'", line);
                sink.notify(Notification::new(format!("Annulé : {}", line), ICON_UNDO));
                Some(line)
            }
            None => {
                log::debug!("undo_last: buffer empty, nothing to undo");
                sink.notify(Notification::new("Rien à annuler", ICON_INFO));
                None
            }
        }
    }

    /// Dispatch one UI action
    pub fn apply(
        &self,
        buffer: &mut TablatureBuffer,
        sink: &mut impl NotificationSink,
        action: Action,
    ) -> ActionOutcome {
        match action {
            Action::AddNote { string, finger, rhythm } => {
                ActionOutcome::Appended(self.add_note(buffer, sink, string, finger, rhythm))
            }
            Action::AddFixed { tool } => ActionOutcome::Appended(self.add_fixed_token(buffer, sink, tool)),
            Action::Undo => match self.undo_last(buffer, sink) {
                Some(line) => ActionOutcome::Removed(line),
                None => ActionOutcome::NothingToUndo,
            },
        }
    }
}
