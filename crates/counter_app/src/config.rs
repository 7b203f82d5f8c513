//! Runtime configuration.
//!
//! [`Config`] is the resolved set of options, independent of where each one
//! came from. Precedence, highest first: command-line flag, environment
//! variable (through clap's `env`), config file, built-in default. A
//! non-empty `NO_COLOR` turns colour off whatever its value.
//!
//! ```toml
//! title = "My Counter"
//! step = 5
//! color = true
//! mouse = true
//! alt_screen = true
//! ```

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Cli;

/// Title used by the application when none is configured.
pub const APP_TITLE: &str = "React Counter App!";

/// Default PageUp/PageDown amount.
pub const DEFAULT_STEP: i64 = 10;

/// Environment variable that disables colour when set to anything non-empty.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Whether a `NO_COLOR` value asks for plain output.
///
/// Any non-empty value counts, `0` and `false` included.
pub fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Header title.
    pub title: String,
    /// PageUp/PageDown amount. Never zero.
    pub step: i64,
    /// Whether to emit colour.
    pub color: bool,
    /// Whether to capture the mouse.
    pub mouse: bool,
    /// Whether to use the alternate screen.
    pub alt_screen: bool,
    /// Where to write logs. No logging when unset.
    pub log_file: Option<PathBuf>,
    /// Log verbosity (0=warn, 1=info, 2=debug, 3+=trace). Command line only.
    #[serde(skip)]
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_owned(),
            step: DEFAULT_STEP,
            color: true,
            mouse: true,
            alt_screen: true,
            log_file: None,
            verbosity: 0,
        }
    }
}

/// Contents of a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Header title.
    pub title: Option<String>,
    /// PageUp/PageDown amount.
    pub step: Option<i64>,
    /// Colour output.
    pub color: Option<bool>,
    /// Mouse capture.
    pub mouse: Option<bool>,
    /// Alternate screen.
    pub alt_screen: Option<bool>,
    /// Log file.
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Parse TOML text. `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or has
    /// unknown keys.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }
}

impl Config {
    /// Defaults overlaid with a config file.
    #[must_use]
    pub fn with_file(mut self, file: FileConfig) -> Self {
        if let Some(title) = file.title {
            self.title = title;
        }
        if let Some(step) = file.step {
            self.step = step;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        if let Some(mouse) = file.mouse {
            self.mouse = mouse;
        }
        if let Some(alt_screen) = file.alt_screen {
            self.alt_screen = alt_screen;
        }
        if file.log_file.is_some() {
            self.log_file = file.log_file;
        }
        self
    }

    /// Resolve the configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the result
    /// fails [`Config::validate`].
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = &cli.config {
            config = config.with_file(FileConfig::load(path)?);
            debug!(path = %path.display(), "loaded config file");
        }

        if let Some(title) = &cli.title {
            config.title.clone_from(title);
        }
        if let Some(step) = cli.step {
            config.step = step;
        }
        if cli.no_color || no_color_requested(env::var_os(NO_COLOR_ENV).as_deref()) {
            config.color = false;
        }
        if cli.no_mouse {
            config.mouse = false;
        }
        if cli.no_alt_screen {
            config.alt_screen = false;
        }
        if let Some(log_file) = &cli.log_file {
            config.log_file = Some(log_file.clone());
        }
        config.verbosity = cli.verbose;

        config.validate()?;
        Ok(config)
    }

    /// Render as TOML, in the same shape a config file takes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Check invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStep`] when `step` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid.
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },

    /// `step` must move the value.
    #[error("step must be non-zero, got {0}")]
    InvalidStep(i64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["counter"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn config_default() {
        let config = Config::default();
        assert_eq!(config.title, "React Counter App!");
        assert_eq!(config.step, 10);
        assert!(config.color);
        assert!(config.mouse);
        assert!(config.alt_screen);
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = FileConfig::parse(
            "title = \"From File\"\nstep = 4\nmouse = false\n",
            Path::new("test.toml"),
        )
        .unwrap();
        let config = Config::default().with_file(file);
        assert_eq!(config.title, "From File");
        assert_eq!(config.step, 4);
        assert!(!config.mouse);
        assert!(config.alt_screen);
    }

    #[test]
    fn file_rejects_unknown_keys() {
        let err = FileConfig::parse("colour = true\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn empty_file_changes_nothing() {
        let file = FileConfig::parse("", Path::new("empty.toml")).unwrap();
        assert_eq!(Config::default().with_file(file), Config::default());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = FileConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = \"File Title\"\nstep = 2").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let config =
            Config::from_cli(&cli(&["--config", &path, "--title", "Flag Title"])).unwrap();
        assert_eq!(config.title, "Flag Title");
        assert_eq!(config.step, 2);
    }

    #[test]
    fn cli_flags() {
        let config = Config::from_cli(&cli(&[
            "--no-mouse",
            "--no-alt-screen",
            "--step",
            "25",
            "-vv",
        ]))
        .unwrap();
        assert!(!config.mouse);
        assert!(!config.alt_screen);
        assert_eq!(config.step, 25);
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn no_color_any_non_empty_value() {
        assert!(no_color_requested(Some(OsStr::new("1"))));
        assert!(no_color_requested(Some(OsStr::new("0"))));
        assert!(no_color_requested(Some(OsStr::new("false"))));
        assert!(!no_color_requested(Some(OsStr::new(""))));
        assert!(!no_color_requested(None));
    }

    #[test]
    fn no_color_flag_disables_colour() {
        let config = Config::from_cli(&cli(&["--no-color"])).unwrap();
        assert!(!config.color);
    }

    #[test]
    fn zero_step_rejected() {
        let err = Config::from_cli(&cli(&["--step", "0"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep(0)));
        assert_eq!(err.to_string(), "step must be non-zero, got 0");
    }

    #[test]
    fn to_toml_round_trips_through_file_config() {
        let config = Config {
            title: "Round".into(),
            step: 7,
            color: false,
            ..Config::default()
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("title = \"Round\""));
        assert!(!text.contains("log_file"));
        assert!(!text.contains("verbosity"));

        let file = FileConfig::parse(&text, Path::new("round.toml")).unwrap();
        assert_eq!(Config::default().with_file(file), config);
    }

    #[test]
    fn negative_step_allowed() {
        let config = Config::from_cli(&cli(&["--step", "-3"])).unwrap();
        assert_eq!(config.step, -3);
    }
}
