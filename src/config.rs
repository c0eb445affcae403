use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{AnalyzerError, Result};
use crate::scoring::ScoreWeights;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub web_root: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            web_root: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub weights: ScoreWeights,
    pub server: ServerConfig,
}

impl AnalyzerConfig {
    // A missing file yields defaults; environment overrides apply last.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, PathBuf)> {
        let config_path = path.unwrap_or_else(default_config_path);
        let mut config = if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| AnalyzerError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            toml::from_str(&contents).map_err(|source| AnalyzerError::ConfigParse {
                path: config_path.clone(),
                source,
            })?
        } else {
            AnalyzerConfig::default()
        };

        let total = config.weights.total();
        if (total - 1.0).abs() > 1e-6 {
            warn!(total, "score weights do not sum to 1; scores may leave the 0..1 range");
        }

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| AnalyzerError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(|source| AnalyzerError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("ANALYZER_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = env::var("ANALYZER_PORT") {
            match port.parse::<u16>() {
                Ok(value) => self.server.port = value,
                Err(_) => warn!(value = %port, "ignoring invalid ANALYZER_PORT"),
            }
        }
        if let Ok(web_root) = env::var("ANALYZER_WEB_ROOT") {
            if !web_root.trim().is_empty() {
                self.server.web_root = Some(web_root);
            }
        }
    }
}

pub fn default_config_path() -> PathBuf {
    env::var("ANALYZER_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config/analyzer.toml"))
}
