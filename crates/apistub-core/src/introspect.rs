//! Class introspection.
//!
//! The generator never reflects over source code itself. It asks an
//! [`Introspector`] for the public methods of a class, their documentation
//! blocks and their parameters. [`Catalog`] is the implementation shipped
//! with the crate: a JSON or YAML document produced ahead of time by a static
//! pre-pass over the annotated sources.
//!
//! # Examples
//!
//! ```
//! use apistub_core::introspect::{Catalog, Introspector};
//!
//! let catalog = Catalog::from_str(r#"
//! classes:
//!   - name: ItemsController
//!     doc: "/** Items. */"
//!     methods:
//!       - name: getItem
//!         doc: "/** @api */"
//!         parameters:
//!           - name: id
//! "#).unwrap();
//!
//! let methods = catalog.list_public_methods("ItemsController").unwrap();
//! assert_eq!(methods[0].name, "getItem");
//! assert!(catalog.list_public_methods("Missing").is_err());
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use tokio::fs;

/// Source of class metadata for the descriptor builders.
pub trait Introspector {
    /// Raw documentation block of the class itself
    fn class_doc(&self, class_name: &str) -> crate::Result<Option<String>>;

    /// Public methods of the class, static ones included, in declaration order
    fn list_public_methods(&self, class_name: &str) -> crate::Result<Vec<MethodInfo>>;
}

/// One formal parameter as reported by introspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name without sigil
    pub name: String,
    /// Default value, if the declaration has one. `Some(Null)` is a `null` default.
    #[serde(
        default,
        deserialize_with = "deserialize_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<JsonValue>,
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(name: impl Into<String>, default: JsonValue) -> Self {
        Self {
            name: name.into(),
            default: Some(default),
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// One public method as reported by introspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Raw documentation block, delimiters included
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterInfo>,
}

/// A class and its public methods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

/// Pre-computed class metadata loaded from JSON or YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
}

impl Catalog {
    /// Load a catalog from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content).map_err(|e| {
            log::debug!("failed to parse class catalog at {}: {}", path.display(), e);
            e
        })
    }

    /// Parse a catalog held in memory (supports both YAML and JSON)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> crate::Result<Self> {
        Self::parse_content(content)
    }

    /// Parse content as JSON when it opens with `{`, as YAML otherwise
    fn parse_content(content: &str) -> crate::Result<Self> {
        if content.trim_start().starts_with('{') {
            return Ok(serde_json::from_str(content)?);
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Look up a class by name
    pub fn class(&self, class_name: &str) -> crate::Result<&ClassInfo> {
        self.classes
            .iter()
            .find(|class| class.name == class_name)
            .ok_or_else(|| Error::introspection(format!("Unknown class '{}'", class_name)))
    }

    /// Names of every class in the catalog, in document order
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|class| class.name.as_str()).collect()
    }
}

impl Introspector for Catalog {
    fn class_doc(&self, class_name: &str) -> crate::Result<Option<String>> {
        Ok(self.class(class_name)?.doc.clone())
    }

    fn list_public_methods(&self, class_name: &str) -> crate::Result<Vec<MethodInfo>> {
        Ok(self.class(class_name)?.methods.clone())
    }
}

/// A present `default` key is a default even when its value is `null`
fn deserialize_default<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}
