pub use native_query_core::{
    CancellationSignal, DirectoryListing, FilesystemError, FilesystemErrorKind, FilesystemResult,
    WalkConfig,
};

mod path;
mod walker;

pub use path::normalize_path;
pub use walker::*;

use std::path::Path;

/// Lists the immediate children of `path`, split into directories and files.
///
/// # Errors
///
/// Returns an error if `path` does not exist, is not a directory, or cannot be
/// read.
pub fn list_directory<P: AsRef<Path>>(path: P) -> FilesystemResult<DirectoryListing> {
    DirectoryWalker::new().list(path)
}

/// Recursively lists everything under `root` until done or `signal` is
/// cancelled. A cancelled walk returns what it found so far.
///
/// # Errors
///
/// Returns an error only for failures on `root` itself.
pub fn walk_directory_tree<P: AsRef<Path>>(
    root: P,
    signal: &CancellationSignal,
) -> FilesystemResult<DirectoryListing> {
    DirectoryWalker::new().walk(root, signal)
}

/// Directories-only variant of [`walk_directory_tree`].
///
/// # Errors
///
/// Returns an error only for failures on `root` itself.
pub fn walk_directories<P: AsRef<Path>>(
    root: P,
    signal: &CancellationSignal,
) -> FilesystemResult<Vec<String>> {
    DirectoryWalker::new().walk_directories(root, signal)
}

/// Files-only variant of [`walk_directory_tree`].
///
/// # Errors
///
/// Returns an error only for failures on `root` itself.
pub fn walk_files<P: AsRef<Path>>(
    root: P,
    signal: &CancellationSignal,
) -> FilesystemResult<Vec<String>> {
    DirectoryWalker::new().walk_files(root, signal)
}

/// Async variant of [`walk_directory_tree`]; the walk runs on tokio's blocking
/// pool.
///
/// # Errors
///
/// Returns an error only for failures on `root` itself.
#[cfg(feature = "async")]
pub async fn walk_directory_tree_async<P: Into<std::path::PathBuf>>(
    root: P,
    signal: CancellationSignal,
) -> FilesystemResult<DirectoryListing> {
    DirectoryWalker::new().walk_async(root, signal).await
}
