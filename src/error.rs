use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CcsaError {
    // IO-related errors
    #[error("File not found: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CcsaError>;
