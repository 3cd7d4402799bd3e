use std::path::PathBuf;

/// Result type alias for dataframe operations.
pub type Result<T> = std::result::Result<T, DfrError>;

/// Errors raised while reading tabular files.
///
/// Everything else in the crate is total and reports degenerate input
/// through `None`, empty collections or undefined [`Dimensions`](crate::Dimensions).
#[derive(thiserror::Error, Debug)]
pub enum DfrError {
    /// The file exists but could not be read.
    #[error("I/O error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed part way through the file.
    #[error("CSV error in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl DfrError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
