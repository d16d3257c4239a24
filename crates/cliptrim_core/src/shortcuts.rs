use serde::{Deserialize, Serialize};

/// Keyboard commands understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortcut {
    DeleteSelected,
    CutAtPlayhead,
    Undo,
    Redo,
    /// Handled by the host player; the engine only reports it.
    TogglePlayback,
}

impl Shortcut {
    /// Map a key event to a shortcut. `key` is the DOM-style key name
    /// (`"Delete"`, `"z"`, `" "`). Unbound combinations yield `None`.
    pub fn from_key(key: &str, ctrl: bool, shift: bool) -> Option<Self> {
        match key {
            "Delete" => Some(Shortcut::DeleteSelected),
            " " => Some(Shortcut::TogglePlayback),
            k if k.eq_ignore_ascii_case("z") && ctrl => {
                if shift {
                    Some(Shortcut::Redo)
                } else {
                    Some(Shortcut::Undo)
                }
            }
            k if k.eq_ignore_ascii_case("y") && ctrl => Some(Shortcut::Redo),
            k if k.eq_ignore_ascii_case("c") && !ctrl => Some(Shortcut::CutAtPlayhead),
            _ => None,
        }
    }
}
