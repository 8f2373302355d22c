//! Configuration loading and resolution
//!
//! Settings come from three places, highest priority first:
//! 1. Command-line arguments (and their environment variables)
//! 2. TOML config file (`--config`, or `~/.config/tagcmp/config.toml`)
//! 3. Built-in defaults
//!
//! The result is a [`RunConfig`] that names exactly which two tagger outputs
//! to compare and where the report goes.

use crate::report::ReportFormat;
use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Tagger whose output can be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tagger {
    Claws,
    Nltk,
    Stanford,
}

impl Tagger {
    pub fn all() -> [Tagger; 3] {
        [Tagger::Claws, Tagger::Nltk, Tagger::Stanford]
    }

    pub fn name(self) -> &'static str {
        match self {
            Tagger::Claws => "claws",
            Tagger::Nltk => "nltk",
            Tagger::Stanford => "stanford",
        }
    }
}

impl fmt::Display for Tagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tagger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_ascii_lowercase();
        Tagger::all()
            .into_iter()
            .find(|tagger| tagger.name() == lowered)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Unknown tagger '{}' (expected claws, nltk or stanford)",
                    s
                ))
            })
    }
}

/// One input path per tagger
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InputPaths {
    #[serde(default)]
    pub claws: Option<PathBuf>,
    #[serde(default)]
    pub nltk: Option<PathBuf>,
    #[serde(default)]
    pub stanford: Option<PathBuf>,
}

impl InputPaths {
    pub fn get(&self, tagger: Tagger) -> Option<&Path> {
        match tagger {
            Tagger::Claws => self.claws.as_deref(),
            Tagger::Nltk => self.nltk.as_deref(),
            Tagger::Stanford => self.stanford.as_deref(),
        }
    }

    /// Field-wise merge; `self` wins where both are set
    pub fn or(self, fallback: InputPaths) -> InputPaths {
        InputPaths {
            claws: self.claws.or(fallback.claws),
            nltk: self.nltk.or(fallback.nltk),
            stanford: self.stanford.or(fallback.stanford),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Contents of the TOML configuration file; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub inputs: InputPaths,

    /// Report destination
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub left: Option<Tagger>,

    #[serde(default)]
    pub right: Option<Tagger>,

    #[serde(default)]
    pub format: Option<ReportFormat>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values supplied on the command line; `None` means "not given"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub inputs: InputPaths,
    pub output: Option<PathBuf>,
    pub left: Option<Tagger>,
    pub right: Option<Tagger>,
    pub format: Option<ReportFormat>,
}

/// One side of the comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggerInput {
    pub tagger: Tagger,
    pub path: PathBuf,
}

/// Fully resolved settings for one comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub left: TaggerInput,
    pub right: TaggerInput,
    pub output: PathBuf,
    pub format: ReportFormat,
}

impl RunConfig {
    /// Merge command-line overrides over the config file and defaults
    ///
    /// Only the two selected taggers need input paths; the third may be
    /// absent.
    pub fn resolve(overrides: ConfigOverrides, file: TomlConfig) -> Result<Self> {
        let left = overrides.left.or(file.left).unwrap_or(Tagger::Claws);
        let right = overrides.right.or(file.right).unwrap_or(Tagger::Stanford);
        let format = overrides.format.or(file.format).unwrap_or_default();
        let inputs = overrides.inputs.or(file.inputs);

        let input_for = |tagger: Tagger| -> Result<TaggerInput> {
            let path = inputs.get(tagger).ok_or(Error::MissingInput(tagger))?;
            Ok(TaggerInput {
                tagger,
                path: path.to_path_buf(),
            })
        };

        let left_input = input_for(left)?;
        let right_input = input_for(right)?;

        let output = overrides
            .output
            .or(file.output)
            .unwrap_or_else(|| default_output_path(left, right, format));

        Ok(RunConfig {
            left: left_input,
            right: right_input,
            output,
            format,
        })
    }
}

/// `<left>V<right>_comparison.<ext>` in the working directory
pub fn default_output_path(left: Tagger, right: Tagger, format: ReportFormat) -> PathBuf {
    PathBuf::from(format!("{}V{}_comparison.{}", left, right, format.extension()))
}

/// Per-user config file location (`<config dir>/tagcmp/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tagcmp").join("config.toml"))
}

/// Load the TOML configuration
///
/// An explicitly requested file must exist and parse. Without one, the
/// per-user file is used if present; otherwise defaults apply. Called
/// before logging is initialised.
pub fn load_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => Ok(TomlConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    TomlConfig::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides_with_all_inputs() -> ConfigOverrides {
        ConfigOverrides {
            inputs: InputPaths {
                claws: Some(PathBuf::from("claws.txt")),
                nltk: Some(PathBuf::from("nltk.txt")),
                stanford: Some(PathBuf::from("stanford.txt")),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_tagger_parsing() {
        assert_eq!("claws".parse::<Tagger>().unwrap(), Tagger::Claws);
        assert_eq!("Stanford".parse::<Tagger>().unwrap(), Tagger::Stanford);
        assert!("spacy".parse::<Tagger>().is_err());
    }

    #[test]
    fn test_resolve_defaults_to_claws_vs_stanford() {
        let config = RunConfig::resolve(overrides_with_all_inputs(), TomlConfig::default()).unwrap();

        assert_eq!(config.left.tagger, Tagger::Claws);
        assert_eq!(config.left.path, PathBuf::from("claws.txt"));
        assert_eq!(config.right.tagger, Tagger::Stanford);
        assert_eq!(config.right.path, PathBuf::from("stanford.txt"));
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.output, PathBuf::from("clawsVstanford_comparison.txt"));
    }

    #[test]
    fn test_resolve_overrides_beat_file() {
        let file = TomlConfig {
            output: Some(PathBuf::from("from_file.txt")),
            left: Some(Tagger::Nltk),
            inputs: InputPaths {
                nltk: Some(PathBuf::from("file_nltk.txt")),
                stanford: Some(PathBuf::from("file_stanford.txt")),
                claws: None,
            },
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            output: Some(PathBuf::from("from_cli.txt")),
            inputs: InputPaths {
                nltk: Some(PathBuf::from("cli_nltk.txt")),
                ..Default::default()
            },
            ..Default::default()
        };

        let config = RunConfig::resolve(overrides, file).unwrap();

        assert_eq!(config.left.tagger, Tagger::Nltk);
        assert_eq!(config.left.path, PathBuf::from("cli_nltk.txt"));
        assert_eq!(config.right.path, PathBuf::from("file_stanford.txt"));
        assert_eq!(config.output, PathBuf::from("from_cli.txt"));
    }

    #[test]
    fn test_resolve_missing_selected_input() {
        let overrides = ConfigOverrides {
            inputs: InputPaths {
                claws: Some(PathBuf::from("claws.txt")),
                ..Default::default()
            },
            ..Default::default()
        };

        let result = RunConfig::resolve(overrides, TomlConfig::default());
        assert!(matches!(result, Err(Error::MissingInput(Tagger::Stanford))));
    }

    #[test]
    fn test_resolve_unused_tagger_may_be_absent() {
        let overrides = ConfigOverrides {
            inputs: InputPaths {
                claws: Some(PathBuf::from("c.txt")),
                stanford: Some(PathBuf::from("s.txt")),
                nltk: None,
            },
            ..Default::default()
        };

        assert!(RunConfig::resolve(overrides, TomlConfig::default()).is_ok());
    }

    #[test]
    fn test_json_default_output_extension() {
        let overrides = ConfigOverrides {
            format: Some(ReportFormat::Json),
            right: Some(Tagger::Nltk),
            ..overrides_with_all_inputs()
        };

        let config = RunConfig::resolve(overrides, TomlConfig::default()).unwrap();
        assert_eq!(config.output, PathBuf::from("clawsVnltk_comparison.json"));
    }

    #[test]
    fn test_toml_parsing() {
        let config = TomlConfig::from_toml_str(
            r#"
            output = "report.txt"
            left = "nltk"
            format = "json"

            [inputs]
            nltk = "/data/nltk.txt"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.output, Some(PathBuf::from("report.txt")));
        assert_eq!(config.left, Some(Tagger::Nltk));
        assert_eq!(config.right, None);
        assert_eq!(config.format, Some(ReportFormat::Json));
        assert_eq!(config.inputs.nltk, Some(PathBuf::from("/data/nltk.txt")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_toml_empty_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_invalid_tagger_rejected() {
        let result = TomlConfig::from_toml_str(r#"left = "spacy""#);
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_config_explicit_missing_is_error() {
        let result = load_config(Some(Path::new("/nonexistent/tagcmp/config.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_config_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tagcmp.toml");
        std::fs::write(&path, "[inputs]\nclaws = \"c.txt\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.inputs.claws, Some(PathBuf::from("c.txt")));
    }
}
