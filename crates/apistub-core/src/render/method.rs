//! Callable stubs: URL, argument lists and the remote call of one method.

use crate::builders::method::strip_verb;
use crate::descriptor::MethodDescriptor;
use crate::tags::vocabulary;
use crate::templates::{render, Bindings};
use crate::utils::{to_kebab_case, upper_first};

use super::ServiceRenderer;

/// Formal argument carrying the request body
pub const PAYLOAD_NAME: &str = "payload";
/// Formal argument carrying the merged query parameters
pub const QUERY_PARAMS_NAME: &str = "queryParams";
/// Passed in place of the positional values when only a payload is sent
pub const EMPTY_ROUTE_MARKER: &str = "null";

/// Endpoint URL with `:name` route placeholders and positional query placeholders.
///
/// The path segment comes from the server-side name, never the alias.
pub fn build_url(method: &MethodDescriptor, endpoint_base_url: &str) -> String {
    let mut url = endpoint_base_url.trim_end_matches('/').to_string();

    let segment = to_kebab_case(strip_verb(&method.server_side_name));
    if !segment.is_empty() {
        url.push('/');
        url.push_str(&segment);
    }

    for param in &method.ordered_parameters {
        url.push_str("/:");
        url.push_str(&param.name);
    }

    if !method.query_parameters.is_empty() {
        let offset = method.ordered_parameters.len();
        let pairs: Vec<String> = method
            .query_parameters
            .iter()
            .enumerate()
            .map(|(i, query)| format!("{}=:{}", query.name, offset + i))
            .collect();
        url.push('?');
        url.push_str(&pairs.join("&"));
    }

    url
}

/// Formal parameters of the generated function
pub fn formal_arguments(method: &MethodDescriptor) -> String {
    let payload = has_payload(method).then_some(PAYLOAD_NAME);
    let query = (!method.query_parameters.is_empty()).then_some(QUERY_PARAMS_NAME);

    payload
        .into_iter()
        .chain(method.ordered_parameters.iter().map(|p| p.name.as_str()))
        .chain(query)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Arguments after the URL in the remote call; empty when there are none
pub fn remote_call_arguments(method: &MethodDescriptor) -> String {
    let positional: Vec<String> = method
        .ordered_parameters
        .iter()
        .map(|p| p.name.clone())
        .chain(
            method
                .query_parameters
                .iter()
                .map(|q| format!("{}.{}", QUERY_PARAMS_NAME, q.name)),
        )
        .collect();

    let mut args = Vec::new();
    if !positional.is_empty() {
        args.push(format!("[{}]", positional.join(", ")));
    }
    if has_payload(method) {
        if positional.is_empty() {
            args.push(EMPTY_ROUTE_MARKER.to_string());
        }
        args.push(PAYLOAD_NAME.to_string());
    }
    args.join(", ")
}

fn has_payload(method: &MethodDescriptor) -> bool {
    method.tags.contains(vocabulary::PAYLOAD)
}

impl ServiceRenderer {
    /// Render the documented stub of one method.
    pub fn render_method(&self, method: &MethodDescriptor, endpoint_base_url: &str) -> String {
        let doc = self.render_method_doc(method, &upper_first(&method.client_side_name));

        let url = build_url(method, endpoint_base_url).replace('\'', "\\'");
        let mut call = format!("'{}'", url);
        let args = remote_call_arguments(method);
        if !args.is_empty() {
            call.push_str(", ");
            call.push_str(&args);
        }

        let prelude = if method.query_parameters.is_empty() {
            String::new()
        } else {
            format!("    {0} = {0} || {{}};\n", QUERY_PARAMS_NAME)
        };

        let mut bindings = Bindings::new();
        bindings.insert("DOC", doc.comment);
        bindings.insert("NAME", method.client_side_name.clone());
        bindings.insert("ARGS", formal_arguments(method));
        bindings.insert("PRELUDE", prelude);
        bindings.insert("TYPECAST", doc.typecast_hint);
        bindings.insert("VERB", method.http_verb.to_string());
        bindings.insert("CALL", call);
        bindings.insert("TYPES", doc.output_types.unwrap_or_default());

        render(&self.templates.method, &bindings).trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::build_method_descriptor;
    use crate::introspect::{MethodInfo, ParameterInfo};
    use crate::tags::parse_block;

    fn describe(name: &str, doc: &str, params: &[&str]) -> MethodDescriptor {
        let info = MethodInfo {
            name: name.to_string(),
            is_static: false,
            doc: Some(doc.to_string()),
            parameters: params.iter().map(|p| ParameterInfo::new(*p)).collect(),
        };
        build_method_descriptor(&info, parse_block(info.doc.as_deref()))
    }

    #[test]
    fn test_build_url() {
        let method = describe("getUserProfile", "/** @api */", &["id", "section"]);
        assert_eq!(
            build_url(&method, "/api/"),
            "/api/user-profile/:id/:section"
        );
    }

    #[test]
    fn test_build_url_bare_verb() {
        let method = describe("delete", "/** @api */", &["id"]);
        assert_eq!(build_url(&method, "https://x.test/v1"), "https://x.test/v1/:id");
    }

    #[test]
    fn test_query_positions_follow_route_parameters() {
        let method = describe(
            "getItems",
            "/** @api\n * @query string category\n * @query int page */",
            &["id"],
        );
        assert_eq!(build_url(&method, "/api"), "/api/items/:id?category=:1&page=:2");
        assert_eq!(formal_arguments(&method), "id, queryParams");
        assert_eq!(
            remote_call_arguments(&method),
            "[id, queryParams.category, queryParams.page]"
        );
    }

    #[test]
    fn test_payload_arguments() {
        let only_payload = describe("postItem", "/** @api\n * @payload */", &[]);
        assert_eq!(formal_arguments(&only_payload), "payload");
        assert_eq!(remote_call_arguments(&only_payload), "null, payload");

        let with_route = describe("putItem", "/** @api\n * @payload */", &["id"]);
        assert_eq!(formal_arguments(&with_route), "payload, id");
        assert_eq!(remote_call_arguments(&with_route), "[id], payload");
    }

    #[test]
    fn test_no_arguments() {
        let method = describe("getAll", "/** @api */", &[]);
        assert_eq!(formal_arguments(&method), "");
        assert_eq!(remote_call_arguments(&method), "");
    }

    #[test]
    fn test_render_method_with_query() {
        let method = describe(
            "getItems",
            "/** List items.\n * @api\n * @query string category */",
            &[],
        );
        let out = ServiceRenderer::default().render_method(&method, "/api");
        let expected = "/**
 * List items.
 *
 * @param {Object} [queryParams] Query parameters encoded into the request URL.
 * @param {string} [queryParams.category]
 * @returns {Promise}
 */
service.getItems = function (queryParams) {
    queryParams = queryParams || {};
    return (apiClient.get('/api/items?category=:0', [queryParams.category]));
};";
        assert_eq!(out, expected);
    }
}
