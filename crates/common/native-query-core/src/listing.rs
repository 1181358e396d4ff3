/// Entries found under a directory, split by kind.
///
/// Paths are normalized (native separators, lowercase) and appear in the
/// order the host enumerated them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectoryListing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl DirectoryListing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of classified entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }

    /// Splits the listing into `(directories, files)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.directories, self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_both_sides() {
        let listing = DirectoryListing {
            directories: vec!["a".into()],
            files: vec!["a/b".into(), "c".into()],
        };
        assert_eq!(listing.len(), 3);
        assert!(!listing.is_empty());

        let (directories, files) = listing.into_parts();
        assert_eq!(directories, ["a"]);
        assert_eq!(files, ["a/b", "c"]);
    }

    #[test]
    fn default_is_empty() {
        assert!(DirectoryListing::new().is_empty());
        assert_eq!(DirectoryListing::new().len(), 0);
    }
}
