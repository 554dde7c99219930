//! Editor session
//!
//! This module contains the EditorSession struct, the complete state of the
//! tablature tab for one user: the buffer, the persistent selectors and the
//! pending notifications. Handlers receive it explicitly instead of reading
//! shared globals.

use crate::appender::{ActionOutcome, TablatureAppender};
use crate::errors::TabError;
use crate::fingering::{FingerResolver, FingeringTable};
use crate::models::{Action, FingerMode, FixedTool, RhythmSymbol, StringId, TablatureBuffer};
use crate::notify::{Notification, NotificationQueue};

/// Complete state of one tablature tab
#[derive(Debug, Clone)]
pub struct EditorSession<R = FingeringTable> {
    appender: TablatureAppender<R>,
    buffer: TablatureBuffer,
    rhythm: RhythmSymbol,
    finger_mode: FingerMode,
    notifications: NotificationQueue,
}

impl EditorSession<FingeringTable> {
    /// Session with the shipped fingering table and an empty buffer
    pub fn new() -> Self {
        Self::with_resolver(FingeringTable::default())
    }

    /// Session using a fingering table parsed from YAML
    pub fn from_fingering_yaml(yaml: &str) -> Result<Self, TabError> {
        Ok(Self::with_resolver(FingeringTable::from_yaml(yaml)?))
    }
}

impl Default for EditorSession<FingeringTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FingerResolver> EditorSession<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            appender: TablatureAppender::new(resolver),
            buffer: TablatureBuffer::new(),
            rhythm: RhythmSymbol::default(),
            finger_mode: FingerMode::default(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Replace the buffer with previously saved tablature text
    pub fn load_text(&mut self, text: &str) {
        self.buffer = TablatureBuffer::from_text(text);
        log::info!("Loaded tablature with {} lines", self.buffer.len());
    }

    pub fn buffer(&self) -> &TablatureBuffer {
        &self.buffer
    }

    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    pub fn text(&self) -> String {
        self.buffer.to_text()
    }

    pub fn rhythm(&self) -> RhythmSymbol {
        self.rhythm
    }

    pub fn finger_mode(&self) -> FingerMode {
        self.finger_mode
    }

    /// Change the rhythm used by subsequent string presses
    pub fn select_rhythm(&mut self, rhythm: RhythmSymbol) {
        self.rhythm = rhythm;
    }

    /// Change the finger mode used by subsequent string presses
    pub fn select_finger_mode(&mut self, mode: FingerMode) {
        self.finger_mode = mode;
    }

    /// String button: add a note with the current selectors
    pub fn press_string(&mut self, string: StringId) -> String {
        self.appender.add_note(
            &mut self.buffer,
            &mut self.notifications,
            string,
            self.finger_mode,
            self.rhythm,
        )
    }

    pub fn add_note(&mut self, string: StringId, finger: FingerMode, rhythm: RhythmSymbol) -> String {
        self.appender
            .add_note(&mut self.buffer, &mut self.notifications, string, finger, rhythm)
    }

    pub fn press_tool(&mut self, tool: FixedTool) -> String {
        self.appender
            .add_fixed_token(&mut self.buffer, &mut self.notifications, tool)
    }

    pub fn undo_last(&mut self) -> Option<String> {
        self.appender.undo_last(&mut self.buffer, &mut self.notifications)
    }

    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        self.appender
            .apply(&mut self.buffer, &mut self.notifications, action)
    }

    /// Notifications emitted since the last call
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    /// Clear the buffer and restore default selectors
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.rhythm = RhythmSymbol::default();
        self.finger_mode = FingerMode::default();
        self.notifications.drain();
    }
}
