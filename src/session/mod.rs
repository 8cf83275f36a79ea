//! Editing session: state container and command handlers
//!
//! One [`Session`] exists per page load. It owns the diagram source and
//! the preference set, restores both from an injected settings store at
//! construction, and exposes one handler per UI event (edit, preference
//! change, submit). Everything runs synchronously on the caller's
//! thread; `&mut self` on the handlers rules out torn reads of the
//! source during a submit.

use std::str::FromStr;

use crate::prefs::{Keybinding, Orientation, OutputFormat, PreferenceSet};
use crate::render::{RenderRequest, RenderServer};
use crate::store::SettingsStore;

/// Sample diagram seeded into a fresh session with no persisted draft.
pub const DEFAULT_DIAGRAM: &str = r#"@startuml
title Example

Frontend -> Middletier: GET /posts

Middletier -> Backend: GET /comments
Backend -> Service: comments
Service --> Backend: return(comments)
Backend --> Middletier: return(comments)

alt links not provided
  Middletier -> Backend: GET /thumbnails
  Backend --> Middletier: return(thumbnails)
  Middletier -> Backend: GET /likes
  Backend --> Middletier: return(likes)
else  links provided
    Middletier -> Backend: POST /links
    Backend --> Middletier: return(links)
end

Middletier --> Frontend: return(posts)
@enduml"#;

// Logical setting names; the store adds the namespace prefix.
const KEY_KEYBINDING: &str = "keybinding-value";
const KEY_ORIENTATION: &str = "orientation-value";
const KEY_GRAPH_TYPE: &str = "graph-type-value";
const KEY_DRAFT: &str = "uml";

/// The active editing session.
///
/// Generic over the settings store so the browser build injects
/// `LocalStore` while tests inject `MemoryStore`.
pub struct Session<S: SettingsStore> {
    source: String,
    prefs: PreferenceSet,
    server: RenderServer,
    store: S,
    render_url: Option<String>,
}

impl<S: SettingsStore> Session<S> {
    /// Start a session against the public rendering service, restoring
    /// preferences and the draft from `store`.
    pub fn new(store: S) -> Self {
        Self::with_server(store, RenderServer::default())
    }

    /// Start a session against a specific rendering server.
    ///
    /// Absent or unparseable persisted values fall back to defaults; a
    /// missing draft falls back to [`DEFAULT_DIAGRAM`].
    pub fn with_server(store: S, server: RenderServer) -> Self {
        let prefs = PreferenceSet {
            keybinding: restore(&store, KEY_KEYBINDING),
            orientation: restore(&store, KEY_ORIENTATION),
            output_format: restore(&store, KEY_GRAPH_TYPE),
        };
        let source = store
            .read(KEY_DRAFT)
            .unwrap_or_else(|| DEFAULT_DIAGRAM.to_string());

        Self {
            source,
            prefs,
            server,
            store,
            render_url: None,
        }
    }

    /// Current diagram source as shown in the editor.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Editor change handler. Updates the in-memory source only; the
    /// draft is persisted on submit, so edits since the last submit are
    /// lost on a crash.
    pub fn set_source(&mut self, text: impl Into<String>) {
        self.source = text.into();
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.prefs
    }

    pub fn set_keybinding(&mut self, value: Keybinding) {
        self.prefs.keybinding = value;
        self.store.write(KEY_KEYBINDING, value.as_str());
    }

    pub fn set_orientation(&mut self, value: Orientation) {
        self.prefs.orientation = value;
        self.store.write(KEY_ORIENTATION, value.as_str());
    }

    pub fn set_output_format(&mut self, value: OutputFormat) {
        self.prefs.output_format = value;
        self.store.write(KEY_GRAPH_TYPE, value.as_str());
    }

    /// Submit handler: encode the current source, build the render URL
    /// under the current output format, and persist the draft.
    ///
    /// The URL reflects the source as of this call; later edits do not
    /// change it until the next submit.
    pub fn submit(&mut self) -> &str {
        let request = RenderRequest::from_source(&self.source, self.prefs.output_format);
        let url = request.url(&self.server);
        self.store.write(KEY_DRAFT, &self.source);
        self.render_url = Some(url);
        self.render_url.as_deref().unwrap_or_default()
    }

    /// URL produced by the last submit, if any. This is what the image
    /// display surface binds to.
    pub fn render_url(&self) -> Option<&str> {
        self.render_url.as_deref()
    }
}

/// Read a preference, treating absent and unrecognized values alike.
fn restore<S: SettingsStore, T: FromStr + Default>(store: &S, key: &str) -> T {
    store
        .read(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}
