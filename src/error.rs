use core::fmt::Display;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or encoding surfaces.
#[derive(Debug, Clone)]
pub enum Error {
    /// Cell count does not match `width * height`.
    ShapeMismatch { expected: u64, actual: usize },

    /// Failed to parse color string.
    ColorParsing(String),

    /// Invalid converter configuration.
    Config(String),

    /// I/O error occurred.
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ShapeMismatch { expected, actual } => write!(
                f,
                "surface has {} cells but its size requires {}",
                actual, expected
            ),
            Error::ColorParsing(s) => write!(f, "failed to parse color: {}", s),
            Error::Config(s) => write!(f, "invalid config: {}", s),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
