//! PlantUML previewer core
//!
//! This crate provides the non-UI core of a browser-based PlantUML
//! previewer:
//! - Text encoding: raw DEFLATE plus the rendering service's base64
//!   variant, producing URL-safe tokens (and the inverse decoder)
//! - Preference & draft persistence: a namespaced key/value store over
//!   browser localStorage, with an in-memory fake for tests
//! - Render URL construction for the service's `<base>/<format>/<token>`
//!   GET contract
//! - A session type tying source text, preferences, and persistence
//!   together, exposed to JavaScript through WASM bindings
//!
//! The editor widget, the image element that performs the actual fetch,
//! and all layout/styling live in the embedding JS application.

pub mod encode;
pub mod prefs;
pub mod render;
pub mod session;
pub mod store;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub mod wasm;

// Re-export WASM types for direct use
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub use wasm::WasmPreviewer;

// Re-export primary types
pub use encode::{decode, encode, DecodeError};
pub use prefs::{InvalidPreference, Keybinding, Orientation, OutputFormat, PreferenceSet};
pub use render::{RenderRequest, RenderServer, DEFAULT_SERVER};
pub use session::{Session, DEFAULT_DIAGRAM};
pub use store::{MemoryStore, SettingsStore, NAMESPACE};
