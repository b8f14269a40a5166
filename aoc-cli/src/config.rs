//! Configuration resolution from CLI args and environment

use crate::cli::{Args, Command};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--input-data-directory` is absent
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DATA_DIRECTORY";
/// Input root used when neither the flag nor the environment names one
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the `<year>/<day>/<file>` input tree
    pub input_data_directory: PathBuf,
    /// The action to perform
    pub command: Command,
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Build config from CLI args, looking environment variables up through `env`
    pub fn resolve<F>(args: Args, env: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let configured = match args.input_data_directory {
            Some(path) => Some(path),
            None => env(INPUT_DIR_ENV).map(PathBuf::from),
        };

        let input_data_directory = match configured {
            Some(path) if path.as_os_str().to_string_lossy().trim().is_empty() => {
                return Err(CliError::Config(
                    "input data directory must not be empty".to_string(),
                ));
            }
            Some(path) => expand_tilde(&path),
            None => PathBuf::from(DEFAULT_INPUT_DIR),
        };

        tracing::debug!(root = %input_data_directory.display(), "input data directory resolved");
        Ok(Config {
            input_data_directory,
            command: args.command,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_args(dir: Option<&str>) -> Args {
        Args {
            input_data_directory: dir.map(PathBuf::from),
            command: Command::Report {
                day: None,
                year: 2024,
            },
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_flag_wins_over_environment() {
        let config = Config::resolve(report_args(Some("/from/flag")), |_| {
            Some("/from/env".to_string())
        })
        .unwrap();
        assert_eq!(config.input_data_directory, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_environment_then_default() {
        let config = Config::resolve(report_args(None), |key| {
            (key == INPUT_DIR_ENV).then(|| "/from/env".to_string())
        })
        .unwrap();
        assert_eq!(config.input_data_directory, PathBuf::from("/from/env"));

        let config = Config::resolve(report_args(None), no_env).unwrap();
        assert_eq!(config.input_data_directory, PathBuf::from(DEFAULT_INPUT_DIR));
    }

    #[test]
    fn test_empty_value_is_rejected() {
        assert!(matches!(
            Config::resolve(report_args(Some("")), no_env),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            Config::resolve(report_args(None), |_| Some("  ".to_string())),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
        assert_eq!(expand_tilde(Path::new("~other/x")), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde(Path::new("rel/x")), PathBuf::from("rel/x"));
    }
}
