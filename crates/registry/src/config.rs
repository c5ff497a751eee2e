use std::{convert::Infallible, env, io::Error, path::PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};

use crate::utils::expand_tilde;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Paths of site-local sidebar files (JSON arrays of groups) merged
    /// after the built-in sections.
    pub extras: Option<Vec<String>>,
}

impl NavConfig {
    pub fn load() -> Result<Self, Infallible> {
        let path = default_config_path();
        if let Ok(content) = std::fs::read_to_string(&path)
            && let Ok(config) = serde_json::from_str(&content)
        {
            return Ok(config);
        }
        Ok(NavConfig::default())
    }

    pub fn save(&self) -> Result<(), Error> {
        let path = default_config_path();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// Get the default path for the navigation configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var("DOCNAV_CONFIG_PATH")
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docnav")
        .join("nav.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = NavConfig {
            extras: Some(vec!["~/site/extra_sidebar.json".to_string()]),
        };
        let json = serde_json::to_string(&config).expect("serialize NavConfig");
        let back: NavConfig = serde_json::from_str(&json).expect("deserialize NavConfig");
        assert_eq!(back, config);
    }

    #[test]
    fn empty_object_is_default() {
        let config: NavConfig = serde_json::from_str("{}").expect("deserialize empty NavConfig");
        assert_eq!(config, NavConfig::default());
    }
}
