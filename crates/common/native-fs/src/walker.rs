use crate::normalize_path;
use native_query_core::{
    CancellationSignal, DirectoryListing, FilesystemError, FilesystemResult, WalkConfig,
};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
}

/// Lists and walks directory trees.
///
/// Entries are classified as directories or regular files; anything else
/// (symbolic links unless [`WalkConfig::follow_links`] is set, sockets,
/// devices) appears in neither list. Paths go through [`normalize_path`].
///
/// Only failures on the root are reported. Entries below it that cannot be
/// read are logged at `warn` and skipped, and the walk carries on.
#[derive(Debug, Clone, Default)]
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WalkConfig::default())
    }

    #[must_use]
    pub fn with_config(config: WalkConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }
}

impl DirectoryWalker {
    /// Lists the immediate children of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist, is not a directory, or cannot
    /// be read.
    pub fn list<P: AsRef<Path>>(&self, path: P) -> FilesystemResult<DirectoryListing> {
        let mut listing = DirectoryListing::new();
        self.visit(path.as_ref(), 1, None, |kind, entry| push(&mut listing, kind, entry))?;
        Ok(listing)
    }

    /// Walks everything under `root`, checking `signal` before each entry.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures on `root` itself. Cancellation is
    /// not an error: the entries gathered so far are returned.
    pub fn walk<P: AsRef<Path>>(
        &self,
        root: P,
        signal: &CancellationSignal,
    ) -> FilesystemResult<DirectoryListing> {
        let mut listing = DirectoryListing::new();
        self.visit(
            root.as_ref(),
            self.config.max_depth_or_unbounded(),
            Some(signal),
            |kind, entry| push(&mut listing, kind, entry),
        )?;
        Ok(listing)
    }

    /// Like [`walk`](Self::walk), keeping only directories.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures on `root` itself.
    pub fn walk_directories<P: AsRef<Path>>(
        &self,
        root: P,
        signal: &CancellationSignal,
    ) -> FilesystemResult<Vec<String>> {
        self.walk_kind(root.as_ref(), signal, EntryKind::Directory)
    }

    /// Like [`walk`](Self::walk), keeping only regular files.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures on `root` itself.
    pub fn walk_files<P: AsRef<Path>>(
        &self,
        root: P,
        signal: &CancellationSignal,
    ) -> FilesystemResult<Vec<String>> {
        self.walk_kind(root.as_ref(), signal, EntryKind::File)
    }

    /// Async variant of [`walk`](Self::walk).
    ///
    /// # Errors
    ///
    /// Returns an error only for failures on `root` itself, or if the blocking
    /// task panicked.
    #[cfg(feature = "async")]
    pub async fn walk_async<P: Into<std::path::PathBuf>>(
        &self,
        root: P,
        signal: CancellationSignal,
    ) -> FilesystemResult<DirectoryListing> {
        let root = root.into();
        let task_root = root.clone();
        let walker = self.clone();

        tokio::task::spawn_blocking(move || walker.walk(&task_root, &signal))
            .await
            .map_err(|e| FilesystemError::Io {
                path: root,
                source: io::Error::other(e),
            })?
    }

    fn walk_kind(
        &self,
        root: &Path,
        signal: &CancellationSignal,
        wanted: EntryKind,
    ) -> FilesystemResult<Vec<String>> {
        let mut paths = Vec::new();
        self.visit(
            root,
            self.config.max_depth_or_unbounded(),
            Some(signal),
            |kind, path| {
                if kind == wanted {
                    paths.push(path);
                }
            },
        )?;
        Ok(paths)
    }

    fn visit<F>(
        &self,
        root: &Path,
        max_depth: usize,
        signal: Option<&CancellationSignal>,
        mut on_entry: F,
    ) -> FilesystemResult<()>
    where
        F: FnMut(EntryKind, String),
    {
        ensure_directory(root)?;
        debug!("Walking {} (max depth {max_depth})", root.display());

        let mut entries = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(self.config.follow_links)
            .into_iter();

        let mut visited = 0usize;
        loop {
            if should_stop(signal) {
                debug!(
                    "Walk of {} cancelled after {visited} entries",
                    root.display()
                );
                break;
            }

            let Some(entry) = entries.next() else {
                break;
            };
            visited += 1;

            match entry {
                Ok(entry) => {
                    if let Some(kind) = classify(&entry) {
                        on_entry(kind, normalize_path(entry.path()));
                    }
                }
                Err(err) => {
                    if is_root_error(root, &err) {
                        return Err(FilesystemError::from_io(root, io::Error::from(err)));
                    }
                    warn!(
                        "Skipping unreadable entry {}: {err}",
                        err.path().unwrap_or(root).display()
                    );
                }
            }
        }

        debug!("Finished {} after {visited} entries", root.display());
        Ok(())
    }
}

#[inline]
fn should_stop(signal: Option<&CancellationSignal>) -> bool {
    signal.is_some_and(CancellationSignal::is_cancelled)
}

fn ensure_directory(root: &Path) -> FilesystemResult<()> {
    let metadata = fs::metadata(root).map_err(|e| FilesystemError::from_io(root, e))?;
    if !metadata.is_dir() {
        return Err(FilesystemError::not_a_directory(root));
    }
    Ok(())
}

fn is_root_error(root: &Path, err: &walkdir::Error) -> bool {
    err.depth() == 0 || err.path() == Some(root)
}

fn classify(entry: &DirEntry) -> Option<EntryKind> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        Some(EntryKind::Directory)
    } else if file_type.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}

fn push(listing: &mut DirectoryListing, kind: EntryKind, path: String) {
    match kind {
        EntryKind::Directory => listing.directories.push(path),
        EntryKind::File => listing.files.push(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn stop_only_when_signalled() {
        assert!(!should_stop(None));

        let signal = CancellationSignal::new();
        assert!(!should_stop(Some(&signal)));

        signal.cancel();
        assert!(should_stop(Some(&signal)));
    }

    #[test]
    fn cancelling_mid_walk_keeps_partial_results() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..50 {
            File::create(dir.path().join(format!("file-{i}.txt"))).unwrap();
        }

        let signal = CancellationSignal::new();
        let mut seen = Vec::new();
        DirectoryWalker::new()
            .visit(dir.path(), usize::MAX, Some(&signal), |_, path| {
                seen.push(path);
                if seen.len() == 10 {
                    signal.cancel();
                }
            })
            .unwrap();

        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn push_routes_by_kind() {
        let mut listing = DirectoryListing::new();
        push(&mut listing, EntryKind::Directory, "d".into());
        push(&mut listing, EntryKind::File, "f".into());

        assert_eq!(listing.directories, ["d"]);
        assert_eq!(listing.files, ["f"]);
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();

        assert!(ensure_directory(dir.path()).is_ok());
        assert_eq!(
            ensure_directory(&file).unwrap_err().kind(),
            native_query_core::FilesystemErrorKind::NotADirectory
        );
    }

    #[test]
    fn depth_limit_is_honoured() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();

        let config = WalkConfig::builder().max_depth(2).unwrap().build();
        let listing = DirectoryWalker::with_config(config)
            .walk(dir.path(), &CancellationSignal::new())
            .unwrap();

        assert_eq!(listing.directories.len(), 2);
        assert!(
            listing
                .directories
                .iter()
                .all(|d| !d.ends_with(&format!("b{}c", std::path::MAIN_SEPARATOR)))
        );
    }

    #[test]
    fn list_ignores_max_depth() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();

        let config = WalkConfig::builder().max_depth(10).unwrap().build();
        let listing = DirectoryWalker::with_config(config).list(dir.path()).unwrap();

        assert_eq!(listing.directories, [normalize_path(&dir.path().join("a"))]);
    }
}
