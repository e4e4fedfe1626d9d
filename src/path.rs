//! Locating golden files

/// Directory, relative to the working directory, that holds golden files
pub const DEFAULT_FIXTURE_DIR: &str = "testdata";

/// The path to a golden file in [`DEFAULT_FIXTURE_DIR`]
///
/// Absolute paths are returned unchanged.
///
/// ```rust
/// let path = golden::path("help.txt");
/// assert_eq!(path, std::path::Path::new("testdata").join("help.txt"));
/// ```
pub fn path(filename: impl AsRef<std::path::Path>) -> std::path::PathBuf {
    resolve(std::path::Path::new(DEFAULT_FIXTURE_DIR), filename.as_ref())
}

pub(crate) fn resolve(
    fixture_dir: &std::path::Path,
    filename: &std::path::Path,
) -> std::path::PathBuf {
    if filename.is_absolute() {
        filename.to_owned()
    } else {
        fixture_dir.join(filename)
    }
}
