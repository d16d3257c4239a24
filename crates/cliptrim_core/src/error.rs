use crate::types::ClipId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid asset duration: {0}")]
    InvalidDuration(f64),

    #[error("Invalid clip span: [{start}, {end})")]
    InvalidSpan { start: f64, end: f64 },

    #[error("Duplicate clip id: {0}")]
    DuplicateClipId(ClipId),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No clip at time {0}")]
    NoClipAtTime(f64),

    #[error("Cut at {0} would leave a clip shorter than the minimum duration")]
    CutTooShort(f64),

    #[error("No clip selected")]
    NothingSelected,

    #[error("Clip not found: {0}")]
    ClipNotFound(ClipId),

    #[error("Another interaction is in progress")]
    InteractionInProgress,

    #[error("No matching interaction in progress")]
    NoInteraction,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}

impl CoreError {
    /// True for the "nothing happened" outcomes a UI can silently ignore.
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            CoreError::NoClipAtTime(_)
                | CoreError::CutTooShort(_)
                | CoreError::NothingSelected
                | CoreError::ClipNotFound(_)
                | CoreError::InteractionInProgress
                | CoreError::NoInteraction
                | CoreError::NothingToUndo
                | CoreError::NothingToRedo
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
