pub mod error;
pub mod render;

pub use error::{RenderError, Result};
pub use render::{build_ffmpeg_args, compile, RenderPlan, RenderSettings};
