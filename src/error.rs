use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),
    #[error("invalid file size: expected {expected} bytes, found {found}")]
    InvalidSize { expected: usize, found: usize },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CacheError>;
