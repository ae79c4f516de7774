//! Placeholder substitution.
//!
//! Templates mark substitution points with tokens such as `___NAME___`. Each
//! token found in the template is replaced by its binding in a single pass:
//! substituted text is never scanned again, and tokens without a binding are
//! left as they are.
//!
//! # Examples
//!
//! ```
//! use apistub_core::templates::{render, Bindings};
//!
//! let mut bindings = Bindings::new();
//! bindings.insert("NAME", "getUser".to_string());
//! assert_eq!(render("fn ___NAME___ ___OTHER___", &bindings), "fn getUser ___OTHER___");
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Token name to replacement text
pub type Bindings = BTreeMap<&'static str, String>;

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"___([A-Za-z][A-Za-z0-9_]*?)___").unwrap());

pub fn render(template: &str, bindings: &Bindings) -> String {
    TOKEN_REGEX
        .replace_all(template, |caps: &Captures| match bindings.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
