//! Shared settings (input/output directories, config file location).
//!
//! The settings file is `~/.config/steam-junk/settings.toml`:
//! ```toml
//! [charts]
//! input_dir = "/data/steamdb/text"
//! output_dir = "/data/steamdb/csv"
//!
//! [tags]
//! input_dir = "/data/tags/input"
//! output_dir = "/data/tags/output"
//! ```
//! Every directory resolves through a priority chain: CLI flag, then
//! environment variable, then settings file, then a built-in default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BatchError;

/// Canonical path to the settings file: `~/.config/steam-junk/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("steam-junk").join("settings.toml")
}

/// Contents of `settings.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub charts: DirSettings,
    #[serde(default)]
    pub tags: DirSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirSettings {
    #[serde(default)]
    pub input_dir: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Load the settings file. A missing file yields default settings.
    pub fn load() -> Result<Self, BatchError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, BatchError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| BatchError::io(path, e))?;
        Self::from_toml_str(&contents)
            .map_err(|e| BatchError::settings(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn dir(&self, kind: DirKind) -> Option<&PathBuf> {
        match kind {
            DirKind::ChartsInput => self.charts.input_dir.as_ref(),
            DirKind::ChartsOutput => self.charts.output_dir.as_ref(),
            DirKind::TagsInput => self.tags.input_dir.as_ref(),
            DirKind::TagsOutput => self.tags.output_dir.as_ref(),
        }
    }
}

/// The four directories a batch run needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    ChartsInput,
    ChartsOutput,
    TagsInput,
    TagsOutput,
}

impl DirKind {
    pub const ALL: [DirKind; 4] = [
        DirKind::ChartsInput,
        DirKind::ChartsOutput,
        DirKind::TagsInput,
        DirKind::TagsOutput,
    ];

    /// Environment variable that overrides the settings file.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::ChartsInput => "STEAM_JUNK_CHARTS_INPUT",
            Self::ChartsOutput => "STEAM_JUNK_CHARTS_OUTPUT",
            Self::TagsInput => "STEAM_JUNK_TAGS_INPUT",
            Self::TagsOutput => "STEAM_JUNK_TAGS_OUTPUT",
        }
    }

    /// Fallback path, relative to the working directory.
    pub fn default_dir(self) -> &'static str {
        match self {
            Self::ChartsInput => "charts",
            Self::ChartsOutput => "charts-csv",
            Self::TagsInput => "tags-input",
            Self::TagsOutput => "tags-output",
        }
    }

    /// Dotted key in `settings.toml`.
    pub fn key(self) -> &'static str {
        match self {
            Self::ChartsInput => "charts.input_dir",
            Self::ChartsOutput => "charts.output_dir",
            Self::TagsInput => "tags.input_dir",
            Self::TagsOutput => "tags.output_dir",
        }
    }
}

/// Where a resolved directory came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    Flag,
    EnvVar(&'static str),
    SettingsFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A directory together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDir {
    pub path: PathBuf,
    pub source: SettingSource,
}

impl Settings {
    /// Resolve a directory: CLI flag > env var > settings file > default.
    pub fn resolve(&self, kind: DirKind, cli_override: Option<PathBuf>) -> ResolvedDir {
        let env_value = std::env::var_os(kind.env_var())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_with(kind, cli_override, env_value)
    }

    fn resolve_with(
        &self,
        kind: DirKind,
        cli_override: Option<PathBuf>,
        env_value: Option<PathBuf>,
    ) -> ResolvedDir {
        if let Some(path) = cli_override {
            return ResolvedDir {
                path,
                source: SettingSource::Flag,
            };
        }
        if let Some(path) = env_value {
            return ResolvedDir {
                path,
                source: SettingSource::EnvVar(kind.env_var()),
            };
        }
        if let Some(path) = self.dir(kind) {
            return ResolvedDir {
                path: path.clone(),
                source: SettingSource::SettingsFile,
            };
        }
        ResolvedDir {
            path: PathBuf::from(kind.default_dir()),
            source: SettingSource::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[charts]
input_dir = "/data/text"

[tags]
output_dir = "/data/tags"
"#;

    #[test]
    fn parses_partial_settings() {
        let settings = Settings::from_toml_str(SAMPLE).unwrap();
        assert_eq!(settings.charts.input_dir, Some(PathBuf::from("/data/text")));
        assert_eq!(settings.charts.output_dir, None);
        assert_eq!(settings.tags.output_dir, Some(PathBuf::from("/data/tags")));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn flag_beats_env_beats_file_beats_default() {
        let settings = Settings::from_toml_str(SAMPLE).unwrap();

        let flag = settings.resolve_with(
            DirKind::ChartsInput,
            Some(PathBuf::from("cli")),
            Some(PathBuf::from("env")),
        );
        assert_eq!(flag.path, PathBuf::from("cli"));
        assert_eq!(flag.source, SettingSource::Flag);

        let env = settings.resolve_with(DirKind::ChartsInput, None, Some(PathBuf::from("env")));
        assert_eq!(env.source, SettingSource::EnvVar("STEAM_JUNK_CHARTS_INPUT"));

        let file = settings.resolve_with(DirKind::ChartsInput, None, None);
        assert_eq!(file.path, PathBuf::from("/data/text"));
        assert_eq!(file.source, SettingSource::SettingsFile);

        let default = settings.resolve_with(DirKind::ChartsOutput, None, None);
        assert_eq!(default.path, PathBuf::from("charts-csv"));
        assert_eq!(default.source, SettingSource::Default);
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[charts\n").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(BatchError::Settings(_))
        ));
    }
}
