//! Kora Tablature Editor WASM Module
//!
//! Core of the kora tablature tab: string buttons, rhythm/finger selectors
//! and undo/insert tools that append tokens to a tablature buffer.

pub mod models;
pub mod fingering;
pub mod notify;
pub mod appender;
pub mod session;
pub mod layout;
pub mod errors;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use appender::TablatureAppender;
pub use session::EditorSession;
pub use errors::TabError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Already initialized when the module is instantiated twice
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Kora tablature WASM module initialized");
}
