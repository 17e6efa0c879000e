use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod app;

pub const CLIENT_ICON_SOURCE: &str = "robo-stream-client.png";
pub const SERVER_ICON_SOURCE: &str = "robo-stream-server.png";
pub const CLIENT_BUILD_DIR: &str = "../client/icons";
pub const SERVER_BUILD_DIR: &str = "../server/icons";

pub const DEFAULT_SINGLE_NAME: &str = "App";
pub const DEFAULT_SINGLE_OUTPUT: &str = "build";

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// program used to bundle iconsets, overriding platform detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iconutil: Option<PathBuf>,

    #[serde(rename = "app")]
    pub apps: Vec<app::Definition>,

    /// path of the configuration file, if the configuration was loaded from a file
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid configuration string")]
    InvalidConfigString(String, #[source] eyre::Report),
    #[error("invalid configuration file {}", .0.display())]
    InvalidConfigFile(PathBuf, #[source] eyre::Report),
    #[error("i/o error reading configuration file {}", .0.display())]
    IoError(PathBuf, #[source] std::io::Error),
    #[error("no applications configured")]
    NoApps,
}

impl Config {
    /// Client and server icons, generated from the `icons/` directory of the project.
    pub fn dual() -> Config {
        Config {
            iconutil: None,
            apps: vec![
                app::Definition::new("Client", CLIENT_ICON_SOURCE, CLIENT_BUILD_DIR),
                app::Definition::new("Server", SERVER_ICON_SOURCE, SERVER_BUILD_DIR),
            ],
            source: None,
        }
    }

    pub fn single(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Config {
        Config {
            iconutil: None,
            apps: vec![app::Definition::new(name, source, destination)],
            source: None,
        }
    }

    pub fn parse(s: &str) -> Result<Config, ConfigLoadError> {
        let config: Config = toml::from_str(s)
            .map_err(|e| ConfigLoadError::InvalidConfigString(s.to_owned(), e.into()))?;
        config.validate()
    }

    pub fn parse_file(p: &Path) -> Result<Config, ConfigLoadError> {
        let config_string =
            std::fs::read_to_string(p).map_err(|e| ConfigLoadError::IoError(p.to_owned(), e))?;
        let mut config: Config = toml::from_str(&config_string)
            .map_err(|e| ConfigLoadError::InvalidConfigFile(p.to_owned(), e.into()))?;
        config.source = Some(p.to_owned());
        config.validate()
    }

    fn validate(self) -> Result<Config, ConfigLoadError> {
        if self.apps.is_empty() {
            return Err(ConfigLoadError::NoApps);
        }
        Ok(self)
    }

    /// Apps whose source image does not exist.
    pub fn missing_sources(&self) -> Vec<&app::Definition> {
        self.apps
            .iter()
            .filter(|app| !app.source.exists())
            .collect()
    }
}
