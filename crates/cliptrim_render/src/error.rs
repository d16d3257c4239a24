use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no segments to render")]
    NoSegments,

    #[error("segment {0} has no length")]
    InvalidSegment(usize),
}

pub type Result<T> = std::result::Result<T, RenderError>;
