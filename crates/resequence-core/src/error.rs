use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResequenceError {
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ResequenceError>;
