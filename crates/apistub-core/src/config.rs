//! Configuration management for apistub code generation.
//!
//! This module defines the `Config` struct and related functionality for managing
//! generation settings: where the class catalog lives, which endpoint the
//! generated services call, where the files are written and which client
//! module each service registers with. The configuration can be loaded from
//! a YAML or TOML file, or created programmatically.
//!
//! # Examples
//!
//! ```no_run
//! use apistub_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> apistub_core::Result<()> {
//! // Create a new config programmatically
//! let mut config = Config::new("api-catalog.json", "generated", "/api");
//! config.classes.insert("ItemsController".to_string(), "app.items".to_string());
//!
//! // Or load from a config file
//! let config = Config::from_file("apistub.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::collections::BTreeMap;
use std::path::Path;

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for client service generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the class catalog (JSON or YAML)
    pub catalog_path: String,

    /// Output directory for generated services
    pub target_dir: String,

    /// Base URL every generated call is made against
    pub endpoint_url: String,

    /// Module used for catalog classes not listed in `classes`
    #[serde(default = "default_module")]
    pub default_module: String,

    /// Classes to generate, mapped to the client module they register with.
    /// Empty means every class in the catalog.
    #[serde(default)]
    pub classes: BTreeMap<String, String>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(
        catalog_path: impl Into<String>,
        target_dir: impl Into<String>,
        endpoint_url: impl Into<String>,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            target_dir: target_dir.into(),
            endpoint_url: endpoint_url.into(),
            default_module: default_module(),
            classes: BTreeMap::new(),
        }
    }

    /// Load configuration from a file; `.toml` files are read as TOML, anything else as YAML
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Self::validate(config)
    }

    fn validate(config: Self) -> crate::Result<Self> {
        if config.catalog_path.trim().is_empty() {
            return Err(Error::config("catalog_path must not be empty"));
        }
        if config.target_dir.trim().is_empty() {
            return Err(Error::config("target_dir must not be empty"));
        }
        Ok(config)
    }

    /// Save configuration to a file, in the format its extension names
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }

    /// Client module the service generated for `class_name` registers with
    pub fn module_for(&self, class_name: &str) -> &str {
        self.classes
            .get(class_name)
            .map(String::as_str)
            .unwrap_or(&self.default_module)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("toml")
}

fn default_module() -> String {
    "app".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");

        let mut config = Config::new("catalog.json", "generated", "/api");
        config
            .classes
            .insert("ItemsController".to_string(), "app.items".to_string());
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.module_for("ItemsController"), "app.items");
        assert_eq!(loaded.module_for("UsersController"), default_module());

        Ok(())
    }

    #[tokio::test]
    async fn test_toml_config() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("apistub.toml");
        let content = r#"
catalog_path = "catalog.yaml"
target_dir = "out"
endpoint_url = "https://api.example.com/v1"
default_module = "shop"

[classes]
OrdersController = "shop.orders"
"#;
        tokio::fs::write(&file_path, content).await?;

        let config = Config::from_file(&file_path).await?;
        assert_eq!(config.endpoint_url, "https://api.example.com/v1");
        assert_eq!(config.module_for("OrdersController"), "shop.orders");
        assert_eq!(config.module_for("Other"), "shop");

        let copy = dir.path().join("copy.toml");
        config.save(&copy).await?;
        assert_eq!(Config::from_file(&copy).await?, config);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_required_field() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("broken.yaml");
        tokio::fs::write(&file_path, "target_dir: out\n").await?;
        assert!(matches!(
            Config::from_file(&file_path).await,
            Err(crate::Error::Yaml(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_paths_are_rejected() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("empty.yaml");
        tokio::fs::write(
            &file_path,
            "catalog_path: catalog.yaml\ntarget_dir: \"\"\nendpoint_url: /api\n",
        )
        .await?;
        assert!(matches!(
            Config::from_file(&file_path).await,
            Err(Error::Config(_))
        ));

        let toml_path = dir.path().join("empty.toml");
        tokio::fs::write(
            &toml_path,
            "catalog_path = \" \"\ntarget_dir = \"out\"\nendpoint_url = \"\"\n",
        )
        .await?;
        assert!(matches!(
            Config::from_file(&toml_path).await,
            Err(Error::Config(_))
        ));
        Ok(())
    }
}
