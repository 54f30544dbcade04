use std::fmt;
use std::path::PathBuf;

use horologe_markup::ParseError;

/// Error returned while turning `.hml` markup into a [`SurfaceDocument`](super::SurfaceDocument).
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    Parse(ParseError),
    Io { path: PathBuf, message: String },
    /// An element names an imported alias that was never registered.
    UnknownAlias { alias: String, line: usize },
    /// A registered preset has no `Canvas` to expand into.
    NotASurface { alias: String },
    /// `width` / `height` is not a usable pixel size.
    InvalidSize { prop: &'static str, value: String, line: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Parse(e) => write!(f, "{e}"),
            LoadError::Io { path, message } => write!(f, "cannot read {}: {message}", path.display()),
            LoadError::UnknownAlias { alias, line } => {
                write!(f, "line {line}: `{alias}` is imported but not registered")
            }
            LoadError::NotASurface { alias } => write!(f, "preset `{alias}` contains no Canvas"),
            LoadError::InvalidSize { prop, value, line } => {
                write!(f, "line {line}: invalid {prop} `{value}`")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for LoadError {
    fn from(e: ParseError) -> Self {
        LoadError::Parse(e)
    }
}
