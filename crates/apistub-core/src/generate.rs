//! Code generation functionality for apistub

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    builders::parse,
    config::Config,
    error::Result,
    introspect::Catalog,
    render::{output_file_name, ServiceRenderer},
};

/// Main entry point for code generation.
///
/// Writes one service file per configured class (every catalog class when
/// none are configured) and returns the written paths.
pub async fn generate(config: &Config) -> Result<Vec<PathBuf>> {
    // 1. Load the class catalog
    let catalog = Catalog::from_file(&config.catalog_path).await?;

    // 2. Pick the classes to generate
    let classes: Vec<String> = if config.classes.is_empty() {
        catalog.class_names().into_iter().map(String::from).collect()
    } else {
        config.classes.keys().cloned().collect()
    };

    // 3. Render and write each service
    let target_dir = Path::new(&config.target_dir);
    fs::create_dir_all(target_dir).await?;

    let renderer = ServiceRenderer::default();
    let mut written = Vec::with_capacity(classes.len());
    for class_name in &classes {
        let descriptor = parse(class_name, &catalog)?;
        let text = renderer.render_service(
            class_name,
            &config.endpoint_url,
            &descriptor,
            config.module_for(class_name),
        );
        let path = target_dir.join(output_file_name(class_name));
        fs::write(&path, text).await?;
        log::info!(
            "wrote {} ({} methods) to {}",
            class_name,
            descriptor.methods.len(),
            path.display()
        );
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CATALOG: &str = r#"{"classes": [
        {"name": "UsersController", "methods": [
            {"name": "getUser", "doc": "/** @api */", "parameters": [{"name": "id"}]}
        ]},
        {"name": "OrdersController"}
    ]}"#;

    #[tokio::test]
    async fn test_generate_all_classes() -> Result<()> {
        let dir = tempdir()?;
        let catalog_path = dir.path().join("catalog.json");
        tokio::fs::write(&catalog_path, CATALOG).await?;
        let target = dir.path().join("out");

        let config = Config::new(
            catalog_path.to_string_lossy(),
            target.to_string_lossy(),
            "/api",
        );
        let written = generate(&config).await?;
        assert_eq!(
            written,
            vec![target.join("UsersService.js"), target.join("OrdersService.js")]
        );

        let users = tokio::fs::read_to_string(target.join("UsersService.js")).await?;
        assert!(users.contains("service.getUser = function (id) {"));
        assert!(users.contains("angular.module('app').service('UsersService'"));
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_configured_classes_only() -> Result<()> {
        let dir = tempdir()?;
        let catalog_path = dir.path().join("catalog.json");
        tokio::fs::write(&catalog_path, CATALOG).await?;
        let target = dir.path().join("out");

        let mut config = Config::new(
            catalog_path.to_string_lossy(),
            target.to_string_lossy(),
            "/api",
        );
        config
            .classes
            .insert("OrdersController".to_string(), "shop".to_string());
        let written = generate(&config).await?;
        assert_eq!(written, vec![target.join("OrdersService.js")]);

        let orders = tokio::fs::read_to_string(&written[0]).await?;
        assert!(orders.contains("angular.module('shop').service('OrdersService'"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_configured_class() -> Result<()> {
        let dir = tempdir()?;
        let catalog_path = dir.path().join("catalog.json");
        tokio::fs::write(&catalog_path, CATALOG).await?;

        let mut config = Config::new(
            catalog_path.to_string_lossy(),
            dir.path().join("out").to_string_lossy(),
            "/api",
        );
        config
            .classes
            .insert("MissingController".to_string(), "app".to_string());
        assert!(matches!(
            generate(&config).await,
            Err(crate::Error::Introspection(_))
        ));
        Ok(())
    }
}
