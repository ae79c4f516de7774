//! In-memory API descriptors.
//!
//! Descriptors are built once per class by the builders in
//! [`crate::builders`] and consumed by the renderers in [`crate::render`].
//! They serialize to JSON for `apistub inspect`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::tags::TagMap;

/// HTTP verb of a generated call, inferred from the server-side method name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpVerb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(HttpVerb::Get),
            "post" => Ok(HttpVerb::Post),
            "put" => Ok(HttpVerb::Put),
            "delete" => Ok(HttpVerb::Delete),
            _ => Err(format!("Unknown HTTP verb: {}", s)),
        }
    }
}

/// A route parameter: introspected facts merged with its `@param` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Declared type, `None` when no `@param` tag names this parameter
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// False only when the declaration carries a default value
    pub required: bool,
    /// Default rendered as a literal; only set when `required` is false
    pub default: Option<String>,
    pub description: String,
}

/// A query parameter declared with `@query`; always optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    pub server_side_name: String,
    /// `@alias` value, or the server-side name
    pub client_side_name: String,
    pub http_verb: HttpVerb,
    pub ordered_parameters: Vec<ParameterDescriptor>,
    pub query_parameters: Vec<QueryParameterDescriptor>,
    pub tags: TagMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDescriptor {
    pub description: String,
    pub methods: Vec<MethodDescriptor>,
}
