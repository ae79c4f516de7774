//! Scalar type translation from server-side to client-side type names

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Type name used when a declaration names no type
pub const UNKNOWN_TYPE: &str = "*";

/// Fixed mapping of scalar type names; unmapped names pass through unchanged
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTranslation {
    table: BTreeMap<String, String>,
}

impl Default for TypeTranslation {
    fn default() -> Self {
        let table = [
            ("int", "number"),
            ("integer", "number"),
            ("double", "number"),
            ("float", "number"),
            ("bool", "boolean"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();
        Self { table }
    }
}

impl TypeTranslation {
    pub fn translate<'a>(&'a self, type_name: &'a str) -> &'a str {
        if type_name.is_empty() {
            return UNKNOWN_TYPE;
        }
        self.table
            .get(type_name)
            .map(String::as_str)
            .unwrap_or(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let types = TypeTranslation::default();
        assert_eq!(types.translate("int"), "number");
        assert_eq!(types.translate("integer"), "number");
        assert_eq!(types.translate("double"), "number");
        assert_eq!(types.translate("float"), "number");
        assert_eq!(types.translate("bool"), "boolean");
        assert_eq!(types.translate("string"), "string");
        assert_eq!(types.translate("Item[]"), "Item[]");
        assert_eq!(types.translate("Int"), "Int");
        assert_eq!(types.translate(""), "*");
    }
}
