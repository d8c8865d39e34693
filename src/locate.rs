//! Locate `servercache.dat` in a game installation.
//!
//! The install directory comes from the `COD4_INSTALL_PATH` environment
//! variable. No lookup result is an ordinary outcome, not an error.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cache::{DecodeOptions, ServerCache};
use crate::error::Result;

pub const CACHE_FILE_NAME: &str = "servercache.dat";
pub const INSTALL_PATH_ENV: &str = "COD4_INSTALL_PATH";

pub fn cache_path_in<P: AsRef<Path>>(install_dir: P) -> PathBuf {
    install_dir.as_ref().join(CACHE_FILE_NAME)
}

/// Path of the cache inside `install_dir`, if the file exists.
pub fn find_cache_path(install_dir: Option<&Path>) -> Option<PathBuf> {
    let path = cache_path_in(install_dir?);
    if path.is_file() {
        Some(path)
    } else {
        debug!(path = %path.display(), "no server cache in install directory");
        None
    }
}

pub fn detect_cache_path() -> Option<PathBuf> {
    let install_dir = std::env::var_os(INSTALL_PATH_ENV).map(PathBuf::from);
    find_cache_path(install_dir.as_deref())
}

/// Open the cache of the detected installation, `Ok(None)` if there is none.
pub fn detect_cache(options: DecodeOptions) -> Result<Option<ServerCache>> {
    match detect_cache_path() {
        Some(path) => ServerCache::open_with(path, options).map(Some),
        None => Ok(None),
    }
}
