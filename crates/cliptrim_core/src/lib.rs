pub mod config;
pub mod crossfade;
pub mod editing;
pub mod editor;
pub mod error;
pub mod history;
pub mod interaction;
pub mod shortcuts;
pub mod snapping;
pub mod timeline;
pub mod types;

pub use config::EngineConfig;
pub use editor::Editor;
pub use error::{CoreError, Result};
pub use interaction::{DragOutcome, Interaction};
pub use shortcuts::Shortcut;
pub use types::*;
