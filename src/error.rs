use thiserror::Error;

/// Unified error type for bezier-tui
#[derive(Error, Debug)]
pub enum BezierError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid color: \"{0}\" (expected #rrggbb, #rgb or a color name)")]
    InvalidColor(String),
}

pub type BezierResult<T> = Result<T, BezierError>;
