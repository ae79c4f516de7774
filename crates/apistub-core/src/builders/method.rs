//! Method descriptors.

use crate::descriptor::{HttpVerb, MethodDescriptor};
use crate::introspect::MethodInfo;
use crate::tags::{vocabulary, TagMap};

use super::parameter::{build_parameter_descriptors, build_query_parameter_descriptors};

/// Leading run of lowercase ASCII letters, e.g. `get` in `getUser`.
pub fn leading_word(name: &str) -> &str {
    let end = name
        .find(|ch: char| !ch.is_ascii_lowercase())
        .unwrap_or(name.len());
    &name[..end]
}

/// Verb named by the method's leading word; `get` when it names none.
pub fn infer_http_verb(name: &str) -> HttpVerb {
    leading_word(name).parse().unwrap_or_default()
}

/// The method name with a recognised leading verb removed.
pub fn strip_verb(name: &str) -> &str {
    let word = leading_word(name);
    if word.parse::<HttpVerb>().is_ok() {
        &name[word.len()..]
    } else {
        name
    }
}

pub fn build_method_descriptor(method: &MethodInfo, tags: TagMap) -> MethodDescriptor {
    let client_side_name = tags
        .first(vocabulary::ALIAS)
        .filter(|alias| !alias.is_empty())
        .map(String::from)
        .unwrap_or_else(|| method.name.clone());

    MethodDescriptor {
        server_side_name: method.name.clone(),
        client_side_name,
        http_verb: infer_http_verb(&method.name),
        ordered_parameters: build_parameter_descriptors(&method.parameters, &tags),
        query_parameters: build_query_parameter_descriptors(&tags),
        tags,
    }
}
