use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "Monkey.toml";

/// The parsed Monkey.toml configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonkeyConfig {
    pub repl: ReplSection,
    pub output: OutputSection,
    /// The file this was loaded from, if any.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplSection {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for ReplSection {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    ">> ".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputSection {
    pub format: OutputFormat,
}

/// How drivers print token streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidFormat(other.to_string())),
        }
    }
}

/// Raw TOML structure for deserialization.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    repl: ReplSection,
    #[serde(default)]
    output: RawOutputSection,
}

#[derive(Default, Deserialize)]
struct RawOutputSection {
    #[serde(default)]
    format: Option<String>,
}

/// Errors that can occur when loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read Monkey.toml: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid Monkey.toml: {0}")]
    Parse(String),
    #[error("invalid output format '{0}' (expected 'text' or 'json')")]
    InvalidFormat(String),
}

/// Walk up from `start_dir` looking for `Monkey.toml`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

impl MonkeyConfig {
    /// Parse config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let format = match raw.output.format {
            Some(format) => format.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };
        Ok(Self {
            repl: raw.repl,
            output: OutputSection { format },
            source: None,
        })
    }

    /// Load config from an explicit file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Find a Monkey.toml above `start_dir` and load it, or fall back to defaults.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        match find_config(start_dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = MonkeyConfig::from_toml("").unwrap();
        assert_eq!(config.repl.prompt, ">> ");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn full_config() {
        let config = MonkeyConfig::from_toml(
            r#"
[repl]
prompt = "monkey> "

[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.repl.prompt, "monkey> ");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = MonkeyConfig::from_toml("[output]\nformat = \"yaml\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(ref f) if f == "yaml"));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn malformed_toml() {
        let err = MonkeyConfig::from_toml("[repl").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[repl]\nprompt = \"$ \"\n",
        )
        .unwrap();
        let nested = dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        let config = MonkeyConfig::discover(&nested).unwrap();
        assert_eq!(config.repl.prompt, "$ ");
        assert_eq!(
            config.source.as_deref(),
            Some(dir.path().join(CONFIG_FILE_NAME).as_path())
        );
    }

    #[test]
    fn unknown_format_in_file_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();
        let err = MonkeyConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(ref f) if f == "xml"));
    }

    #[test]
    fn non_string_format_is_parse_error() {
        let err = MonkeyConfig::from_toml("[output]\nformat = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_explicit_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MonkeyConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
