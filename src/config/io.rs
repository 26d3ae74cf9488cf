//! Functions for locating the config file.

use std::path;

/// Name of the config file inside a repository.
pub const FILE_NAME: &str = ".litr.json";

/// Gets the path to the config file for the repository at `repo`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// assert_eq!(
///     litr::config::io::default_file(Path::new("/src/proj")),
///     Path::new("/src/proj/.litr.json")
/// );
/// ```
pub fn default_file(repo: &path::Path) -> path::PathBuf {
    repo.join(FILE_NAME)
}
