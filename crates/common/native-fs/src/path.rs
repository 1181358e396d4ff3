use std::path::{MAIN_SEPARATOR_STR, Path};

/// Converts `path` to the form every listing reports: forward slashes become
/// the native separator and the whole string is lowercased.
///
/// Lowercasing lets callers compare paths case-insensitively. The original
/// casing cannot be recovered from the result, so it is not suitable for
/// display. Components that are not valid UTF-8 are replaced lossily.
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace('/', MAIN_SEPARATOR_STR)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_everything() {
        let normalized = normalize_path(Path::new("Projects/Rust/README.md"));
        assert_eq!(normalized, normalized.to_lowercase());
        assert!(normalized.ends_with("readme.md"));
    }

    #[test]
    fn uses_the_native_separator() {
        let normalized = normalize_path(Path::new("a/B/c"));
        let expected = ["a", "b", "c"].join(MAIN_SEPARATOR_STR);
        assert_eq!(normalized, expected);
    }

    #[cfg(windows)]
    #[test]
    fn keeps_backslashes_on_windows() {
        assert_eq!(
            normalize_path(Path::new(r"C:\Users/Me\Docs")),
            r"c:\users\me\docs"
        );
    }
}
