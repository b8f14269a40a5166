//! Loading line-oriented puzzle fixtures from the input tree
//!
//! Directory structure: `{root}/{year}/{day}/{filename}`, with year and day written as plain
//! numbers (`inputs/2024/6/actual.txt`).

use crate::error::InputError;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Reads fixtures below a configured root directory
#[derive(Debug, Clone)]
pub struct InputLoader {
    root: PathBuf,
}

impl InputLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a fixture file
    pub fn fixture_path(&self, year: u16, day: u8, filename: &str) -> PathBuf {
        self.year_dir(year).join(day.to_string()).join(filename)
    }

    fn year_dir(&self, year: u16) -> PathBuf {
        self.root.join(year.to_string())
    }

    /// Read a fixture as ordered lines
    pub fn load_lines(&self, year: u16, day: u8, filename: &str) -> Result<Vec<String>, InputError> {
        let path = self.fixture_path(year, day, filename);
        tracing::debug!(path = %path.display(), "loading fixture");
        let content = fs::read_to_string(&path).map_err(|source| io_error(path, source))?;
        Ok(split_lines(&content))
    }

    /// Whether the input tree has a directory for `year`
    pub fn has_year(&self, year: u16) -> bool {
        self.year_dir(year).is_dir()
    }

    /// Years that have a directory in the input tree
    pub fn years(&self) -> Result<BTreeSet<u16>, InputError> {
        numbered_subdirs(&self.root)
    }

    /// Highest day with a directory for `year`
    pub fn latest_day(&self, year: u16) -> Result<u8, InputError> {
        let dir = self.year_dir(year);
        numbered_subdirs::<u8>(&dir)?
            .last()
            .copied()
            .ok_or(InputError::NoDays { path: dir })
    }
}

fn io_error(path: PathBuf, source: std::io::Error) -> InputError {
    if source.kind() == ErrorKind::NotFound {
        InputError::NotFound { path }
    } else {
        InputError::Io { path, source }
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line.
///
/// A newline at the very end does not start another line; blank lines elsewhere are kept.
pub fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let content = content.strip_suffix('\n').unwrap_or(content);
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Numeric names of the directories directly below `dir`; plain files are ignored
fn numbered_subdirs<T>(dir: &Path) -> Result<BTreeSet<T>, InputError>
where
    T: FromStr + Ord,
{
    let entries = fs::read_dir(dir).map_err(|e| io_error(dir.to_path_buf(), e))?;

    let mut numbers = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_error(dir.to_path_buf(), e))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| io_error(entry.path(), e))?
            .is_dir();
        if !is_dir {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let number = name.parse().map_err(|_| InputError::InvalidDirectoryName {
            parent: dir.to_path_buf(),
            name: name.clone(),
        })?;
        numbers.insert(number);
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree(days: &[&str]) -> (TempDir, InputLoader) {
        let temp = TempDir::new().unwrap();
        for day in days {
            fs::create_dir_all(temp.path().join("2024").join(day)).unwrap();
        }
        let loader = InputLoader::new(temp.path());
        (temp, loader)
    }

    #[test]
    fn test_fixture_path_layout() {
        let loader = InputLoader::new("/data");
        assert_eq!(
            loader.fixture_path(2024, 6, "actual.txt"),
            PathBuf::from("/data/2024/6/actual.txt")
        );
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\nb\n\nc\n"), vec!["a", "b", "", "c"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_load_lines() {
        let (temp, loader) = tree(&["3"]);
        fs::write(temp.path().join("2024/3/example.txt"), "x\r\ny\n").unwrap();
        assert_eq!(loader.load_lines(2024, 3, "example.txt").unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn test_missing_fixture_is_not_found() {
        let (_temp, loader) = tree(&["3"]);
        let err = loader.load_lines(2024, 3, "actual.txt").unwrap_err();
        assert!(matches!(err, InputError::NotFound { path } if path.ends_with("2024/3/actual.txt")));
    }

    #[test]
    fn test_latest_day_is_numeric_maximum() {
        let (temp, loader) = tree(&["1", "2", "13"]);
        // Plain files next to the day directories are ignored
        fs::write(temp.path().join("2024/notes.txt"), "").unwrap();
        assert_eq!(loader.latest_day(2024).unwrap(), 13);
        assert_eq!(loader.years().unwrap(), BTreeSet::from([2024]));
    }

    #[test]
    fn test_has_year_ignores_unrelated_directories() {
        let (temp, loader) = tree(&["6"]);
        fs::create_dir_all(temp.path().join("templates")).unwrap();
        assert!(loader.has_year(2024));
        assert!(!loader.has_year(2023));
        assert_eq!(loader.latest_day(2024).unwrap(), 6);
    }

    #[test]
    fn test_non_numeric_directory_fails() {
        let (_temp, loader) = tree(&["1", "scratch"]);
        let err = loader.latest_day(2024).unwrap_err();
        assert!(matches!(err, InputError::InvalidDirectoryName { name, .. } if name == "scratch"));
    }

    #[test]
    fn test_empty_year_has_no_days() {
        let (temp, loader) = tree(&[]);
        fs::create_dir_all(temp.path().join("2024")).unwrap();
        assert!(matches!(
            loader.latest_day(2024).unwrap_err(),
            InputError::NoDays { .. }
        ));
        assert!(matches!(
            loader.latest_day(2023).unwrap_err(),
            InputError::NotFound { .. }
        ));
    }
}
