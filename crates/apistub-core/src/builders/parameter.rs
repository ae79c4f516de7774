//! Parameter descriptors: `@param` and `@query` tags merged with introspection.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::descriptor::{ParameterDescriptor, QueryParameterDescriptor};
use crate::introspect::ParameterInfo;
use crate::tags::{vocabulary, TagMap};
use crate::utils::next_word;

/// Sigil prefixed to parameter names in `@param` tags.
pub const PARAMETER_SIGIL: char = '$';

/// Literal emitted for any array or map default, whatever its contents.
pub const EMPTY_COLLECTION_LITERAL: &str = "[]";

/// `(type, name, description)` parsed from a declaration tag body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub type_name: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

/// Split a tag body on its first two whitespace runs.
pub fn parse_declaration(body: &str) -> Declaration<'_> {
    let (type_name, rest) = next_word(body);
    let (name, description) = next_word(rest);
    Declaration {
        type_name,
        name,
        description,
    }
}

/// One descriptor per introspected parameter, in declaration order.
pub fn build_parameter_descriptors(
    params: &[ParameterInfo],
    tags: &TagMap,
) -> Vec<ParameterDescriptor> {
    let declared: HashMap<&str, Declaration<'_>> = tags
        .all(vocabulary::PARAM)
        .into_iter()
        .map(parse_declaration)
        .map(|decl| {
            let name = decl.name.trim_start_matches(PARAMETER_SIGIL);
            (name, decl)
        })
        .collect();

    params
        .iter()
        .map(|param| {
            let decl = declared.get(param.name.as_str());
            ParameterDescriptor {
                name: param.name.clone(),
                type_name: decl
                    .map(|d| d.type_name)
                    .filter(|t| !t.is_empty())
                    .map(String::from),
                required: !param.has_default(),
                default: param.default.as_ref().map(render_default),
                description: decl.map(|d| d.description.to_string()).unwrap_or_default(),
            }
        })
        .collect()
}

/// One descriptor per `@query` tag, in source order.
pub fn build_query_parameter_descriptors(tags: &TagMap) -> Vec<QueryParameterDescriptor> {
    tags.all(vocabulary::QUERY)
        .into_iter()
        .map(parse_declaration)
        .map(|decl| QueryParameterDescriptor {
            name: decl.name.to_string(),
            type_name: decl.type_name.to_string(),
            description: decl.description.to_string(),
        })
        .collect()
}

/// Render an introspected default as a client-side literal.
pub fn render_default(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => quote_string(s),
        JsonValue::Array(_) | JsonValue::Object(_) => EMPTY_COLLECTION_LITERAL.to_string(),
    }
}

/// Single-quoted literal that stays on one line
fn quote_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}
