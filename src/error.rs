use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompgenError {
    #[error("Please provide the component name and directory")]
    Usage,
    #[error("{0}")]
    Args(String),
    #[error("invalid component name: {0}")]
    InvalidName(String),
    #[error("{context}: {source}")]
    Step {
        context: &'static str,
        #[source]
        source: Box<CompgenError>,
    },
    #[error("{}: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config error: {0}")]
    Config(String),
}

impl CompgenError {
    /// Wraps an I/O error with the path it happened on.
    pub fn at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompgenError::Path {
            path: path.into(),
            source,
        }
    }

    /// Prefixes the error with the pipeline step that produced it.
    pub fn during(self, context: &'static str) -> Self {
        CompgenError::Step {
            context,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompgenError>;
