// preferences.rs - Push preference snapshot and where it is loaded from

use crate::citation::CitationCommandString;
use crate::registry::CommandPathRegistry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "CITEPUSH_CONFIG";
pub const DEFAULT_VIM_SERVER: &str = "vim";

#[derive(thiserror::Error, Debug)]
pub enum PreferencesError {
    #[error("Failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config format in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything a push reads from the preference store, captured at one
/// point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushPreferences {
    pub cite_command: CitationCommandString,
    pub vim_server: String,
    pub default_application: Option<String>,
    pub command_paths: CommandPathRegistry,
}

impl Default for PushPreferences {
    fn default() -> Self {
        Self {
            cite_command: CitationCommandString::default(),
            vim_server: DEFAULT_VIM_SERVER.to_string(),
            default_application: None,
            command_paths: CommandPathRegistry::default(),
        }
    }
}

impl PushPreferences {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, PreferencesError> {
        toml::from_str(content).map_err(|source| PreferencesError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, PreferencesError> {
        let content = std::fs::read_to_string(path).map_err(|source| PreferencesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }
}

/// Supplies a fresh preference snapshot on every call.
pub trait PreferenceSource {
    fn load(&self) -> Result<PushPreferences, PreferencesError>;
}

impl PreferenceSource for PushPreferences {
    fn load(&self) -> Result<PushPreferences, PreferencesError> {
        Ok(self.clone())
    }
}

/// Reads a TOML file each time preferences are requested.
///
/// A path that does not exist yields the defaults, so a first run without
/// any configuration reports "path not configured" instead of an I/O error.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: Option<PathBuf>,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Use the explicit path if given, otherwise the discovered config file.
    pub fn discover(explicit: Option<PathBuf>) -> Self {
        Self {
            path: explicit.or_else(find_config_file),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PreferenceSource for FilePreferences {
    fn load(&self) -> Result<PushPreferences, PreferencesError> {
        match &self.path {
            Some(path) if path.exists() => {
                log::debug!("Loading push preferences from {}", path.display());
                PushPreferences::from_file(path)
            }
            Some(path) => {
                log::debug!("{} does not exist, using defaults", path.display());
                Ok(PushPreferences::default())
            }
            None => Ok(PushPreferences::default()),
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("citepush")
}

pub fn find_config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    let mut paths = vec![get_config_dir().join("config.toml")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".citepush").join("config.toml"));
    }

    paths.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let prefs = PushPreferences::default();
        assert!(prefs.command_paths.is_empty());
        assert_eq!(prefs.vim_server, "vim");
        assert_eq!(prefs.cite_command.prefix(), "\\cite{");
        assert!(prefs.default_application.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
cite_command = "[key1;key2]"
vim_server = "texsrv"
default_application = "TeXstudio"

[command_paths]
"TeXstudio" = "/usr/bin/texstudio"
"LyX/Kile" = "/usr/bin/lyx"
"#;
        let prefs = PushPreferences::from_toml_str(content, Path::new("test.toml")).unwrap();
        assert_eq!(prefs.cite_command, CitationCommandString::new("[", ";", "]"));
        assert_eq!(prefs.vim_server, "texsrv");
        assert_eq!(prefs.default_application.as_deref(), Some("TeXstudio"));
        assert_eq!(
            prefs.command_paths.resolve("LyX/Kile"),
            Some("/usr/bin/lyx")
        );
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let content = "[command_paths]\nVim = \"/usr/bin/vim\"\n";
        let prefs = PushPreferences::from_toml_str(content, Path::new("test.toml")).unwrap();
        assert_eq!(prefs.vim_server, DEFAULT_VIM_SERVER);
        assert_eq!(prefs.cite_command, CitationCommandString::default());
        assert_eq!(prefs.command_paths.resolve("Vim"), Some("/usr/bin/vim"));
    }

    #[test]
    fn test_bad_cite_template_is_parse_error() {
        let err = PushPreferences::from_toml_str(
            "cite_command = \"\\\\cite{}\"",
            Path::new("bad.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, PreferencesError::Parse { .. }));
        assert_eq!(err.to_string(), "Invalid config format in bad.toml");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_serialize_roundtrips_through_toml() {
        let mut prefs = PushPreferences::default();
        prefs.command_paths.insert("Vim", "/usr/bin/vim");
        let text = toml::to_string(&prefs).unwrap();
        assert!(text.contains("cite_command = "));
        let parsed = PushPreferences::from_toml_str(&text, Path::new("x.toml")).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn test_file_source_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let source = FilePreferences::new(temp_dir.path().join("nope.toml"));
        assert_eq!(source.load().unwrap(), PushPreferences::default());
    }

    #[test]
    fn test_file_source_rereads_after_edit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "vim_server = \"one\"\n").unwrap();

        let source = FilePreferences::new(&path);
        assert_eq!(source.load().unwrap().vim_server, "one");

        fs::write(&path, "vim_server = \"two\"\n").unwrap();
        assert_eq!(source.load().unwrap().vim_server, "two");
    }

    #[test]
    fn test_get_config_dir_ends_with_app_name() {
        assert!(get_config_dir().ends_with("citepush"));
    }
}
