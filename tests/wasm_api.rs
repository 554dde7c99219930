//! WASM API test
//!
//! Exercises the JavaScript-facing handlers in a browser.

#![cfg(target_arch = "wasm32")]

use kora_tab_wasm::api::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_string_and_tool_buttons() {
    create_session(None).unwrap();

    select_rhythm("♪").unwrap();
    select_finger_mode("thumb").unwrap();
    press_string("3G").unwrap();
    add_fixed_token("x2").unwrap();

    assert_eq!(get_tablature_text().unwrap(), "♪ 3GP\nx2");

    undo_last().unwrap();
    undo_last().unwrap();
    undo_last().unwrap();
    assert_eq!(get_tablature_text().unwrap(), "");
}

#[wasm_bindgen_test]
fn test_unknown_labels_are_rejected() {
    create_session(None).unwrap();

    assert!(press_string("9G").is_err());
    assert!(add_note("1D", "middle", "+").is_err());
    assert!(add_fixed_token("x3").is_err());
}

#[wasm_bindgen_test]
fn test_load_and_layout() {
    create_session(None).unwrap();

    assert_eq!(load_tablature("+ 1G\n\n=").unwrap(), 2);
    assert!(get_panel_layout().is_ok());
}
