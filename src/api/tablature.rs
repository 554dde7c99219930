//! WASM API for the tablature tab
//!
//! The host renders the panel and forwards every button press here. One
//! session lives in a WASM-owned slot; each handler locks it, applies the
//! action and returns the outcome with the notifications to display.

use wasm_bindgen::prelude::*;
use std::sync::Mutex;
use lazy_static::lazy_static;

use crate::appender::ActionOutcome;
use crate::errors::TabError;
use crate::layout::PanelLayout;
use crate::models::Action;
use crate::session::EditorSession;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};
use super::helpers::{
    deserialize, parse_finger_mode, parse_rhythm, parse_string, parse_tool, serialize, tab_error,
};
use super::types::{EditResult, SessionSnapshot};

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<Option<EditorSession>> = Mutex::new(None);
}

/// Run `f` against the active session
fn with_session<T>(f: impl FnOnce(&mut EditorSession) -> T) -> Result<T, JsValue> {
    let mut guard = SESSION.lock().map_err(|_| {
        wasm_error!("Session lock poisoned");
        JsValue::from_str("Session lock poisoned")
    })?;
    let session = guard.as_mut().ok_or_else(|| tab_error(TabError::NoSession))?;
    Ok(f(session))
}

/// Apply an action and package the result for JavaScript
fn run_action(action: Action) -> Result<JsValue, JsValue> {
    let result = with_session(|session| {
        let outcome = session.apply(action);
        EditResult {
            outcome,
            line_count: session.buffer().len(),
            notifications: session.take_notifications(),
        }
    })?;

    match &result.outcome {
        ActionOutcome::Appended(line) => wasm_log!("Appended '{}' ({} lines)", line, result.line_count),
        ActionOutcome::Removed(line) => wasm_log!("Removed '{}' ({} lines)", line, result.line_count),
        ActionOutcome::NothingToUndo => wasm_warn!("Undo requested on empty tablature"),
    }

    serialize(&result, "Failed to serialize edit result")
}

/// Start a fresh session, optionally with a custom fingering table (YAML)
#[wasm_bindgen(js_name = createSession)]
pub fn create_session(fingering_yaml: Option<String>) -> Result<(), JsValue> {
    let session = match fingering_yaml {
        Some(yaml) => EditorSession::from_fingering_yaml(&yaml).map_err(tab_error)?,
        None => EditorSession::new(),
    };

    let mut guard = SESSION
        .lock()
        .map_err(|_| JsValue::from_str("Session lock poisoned"))?;
    *guard = Some(session);

    wasm_info!("Tablature session created");
    Ok(())
}

/// Restore previously saved tablature text into the active session
#[wasm_bindgen(js_name = loadTablature)]
pub fn load_tablature(text: &str) -> Result<usize, JsValue> {
    with_session(|session| {
        session.load_text(text);
        session.buffer().len()
    })
}

/// Add a note with explicit finger mode and rhythm
#[wasm_bindgen(js_name = addNote)]
pub fn add_note(string: &str, finger: &str, rhythm: &str) -> Result<JsValue, JsValue> {
    let action = Action::AddNote {
        string: parse_string(string)?,
        finger: parse_finger_mode(finger)?,
        rhythm: parse_rhythm(rhythm)?,
    };
    run_action(action)
}

/// String button: add a note using the session's current selectors
#[wasm_bindgen(js_name = pressString)]
pub fn press_string(string: &str) -> Result<JsValue, JsValue> {
    let string = parse_string(string)?;
    let action = with_session(|session| Action::AddNote {
        string,
        finger: session.finger_mode(),
        rhythm: session.rhythm(),
    })?;
    run_action(action)
}

/// Tool button: append a fixed literal ("=", "x2", "+ S", "+ PAGE", "+ TXT Message")
#[wasm_bindgen(js_name = addFixedToken)]
pub fn add_fixed_token(tool: &str) -> Result<JsValue, JsValue> {
    run_action(Action::AddFixed { tool: parse_tool(tool)? })
}

#[wasm_bindgen(js_name = undoLast)]
pub fn undo_last() -> Result<JsValue, JsValue> {
    run_action(Action::Undo)
}

/// Apply a serialized action, e.g. `{ type: "add_fixed", tool: "repeat" }`
#[wasm_bindgen(js_name = dispatchAction)]
pub fn dispatch_action(action_js: JsValue) -> Result<JsValue, JsValue> {
    let action: Action = deserialize(action_js, "Failed to deserialize action")?;
    run_action(action)
}

#[wasm_bindgen(js_name = selectRhythm)]
pub fn select_rhythm(rhythm: &str) -> Result<(), JsValue> {
    let rhythm = parse_rhythm(rhythm)?;
    with_session(|session| session.select_rhythm(rhythm))
}

#[wasm_bindgen(js_name = selectFingerMode)]
pub fn select_finger_mode(mode: &str) -> Result<(), JsValue> {
    let mode = parse_finger_mode(mode)?;
    with_session(|session| session.select_finger_mode(mode))
}

#[wasm_bindgen(js_name = getLines)]
pub fn get_lines() -> Result<js_sys::Array, JsValue> {
    with_session(|session| {
        session
            .lines()
            .iter()
            .map(|line| JsValue::from_str(line))
            .collect::<js_sys::Array>()
    })
}

/// Buffer text as handed to the save block
#[wasm_bindgen(js_name = getTablatureText)]
pub fn get_tablature_text() -> Result<String, JsValue> {
    with_session(|session| session.text())
}

#[wasm_bindgen(js_name = getSessionSnapshot)]
pub fn get_session_snapshot() -> Result<JsValue, JsValue> {
    let snapshot = with_session(|session| SessionSnapshot {
        lines: session.lines().to_vec(),
        rhythm: session.rhythm(),
        finger_mode: session.finger_mode(),
    })?;
    serialize(&snapshot, "Failed to serialize session snapshot")
}

#[wasm_bindgen(js_name = takeNotifications)]
pub fn take_notifications() -> Result<JsValue, JsValue> {
    let notifications = with_session(|session| session.take_notifications())?;
    serialize(&notifications, "Failed to serialize notifications")
}

#[wasm_bindgen(js_name = getPanelLayout)]
pub fn get_panel_layout() -> Result<JsValue, JsValue> {
    serialize(&PanelLayout::standard(), "Failed to serialize panel layout")
}
