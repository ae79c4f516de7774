//! Per-method documentation comments and output type declarations.

use crate::descriptor::{MethodDescriptor, ParameterDescriptor};
use crate::tags::vocabulary;
use crate::templates::{render, Bindings};
use crate::utils::next_word;

use super::method::{PAYLOAD_NAME, QUERY_PARAMS_NAME};
use super::ServiceRenderer;

pub const PAYLOAD_DESCRIPTION: &str = "Request body sent with the call.";
pub const QUERY_PARAMS_DESCRIPTION: &str = "Query parameters encoded into the request URL.";
/// Return type of a call that declares no output fields
pub const GENERIC_PROMISE: &str = "Promise";

/// Everything the method stub needs from its documentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDoc {
    /// Complete `/** ... */` block
    pub comment: String,
    /// Inline type assertion placed before the remote call; empty without output fields
    pub typecast_hint: String,
    /// Result and promise typedefs, present only with output fields
    pub output_types: Option<String>,
}

/// `<name>:<type> <description>` body of `@output` and `@payload-field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration<'a> {
    pub name: &'a str,
    pub type_name: &'a str,
    pub description: &'a str,
}

pub fn parse_field(body: &str) -> FieldDeclaration<'_> {
    let (head, description) = next_word(body);
    let (name, type_name) = head.split_once(':').unwrap_or((head, ""));
    FieldDeclaration {
        name,
        type_name,
        description,
    }
}

/// Client type named by the `@payload` argument
pub fn payload_type(body: &str) -> String {
    match next_word(body).0 {
        "" | "array" => "Object".to_string(),
        "array[]" => "Object[]".to_string(),
        other => other.to_string(),
    }
}

/// Wrap lines in a `/** */` block, continuing embedded newlines
pub fn doc_comment(lines: &[String]) -> String {
    let mut out = String::from("/**\n");
    for line in lines {
        out.push_str(&comment_line(line));
        out.push('\n');
    }
    out.push_str(" */");
    out
}

/// One logical line as ` * ` prefixed physical lines; blank lines become ` *`
pub fn comment_line(line: &str) -> String {
    if line.is_empty() {
        return " *".to_string();
    }
    line.lines()
        .map(|part| {
            if part.is_empty() {
                " *".to_string()
            } else {
                format!(" * {}", part)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn with_description(description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!(" {}", description)
    }
}

impl ServiceRenderer {
    /// Build the documentation comment of one method.
    ///
    /// `client_uc_name` is the client-side name with its first letter
    /// upper-cased; it names the result and promise typedefs.
    pub fn render_method_doc(&self, method: &MethodDescriptor, client_uc_name: &str) -> MethodDoc {
        let tags = &method.tags;
        let mut lines = Vec::new();

        let description = tags.description();
        if !description.is_empty() {
            lines.push(description.to_string());
            lines.push(String::new());
        }

        // The payload is documented like a leading parameter; the call site
        // handles its placement separately.
        let payload = tags.first(vocabulary::PAYLOAD).map(|body| ParameterDescriptor {
            name: PAYLOAD_NAME.to_string(),
            type_name: Some(payload_type(body)),
            required: true,
            default: None,
            description: PAYLOAD_DESCRIPTION.to_string(),
        });
        for param in payload.iter().chain(&method.ordered_parameters) {
            lines.push(self.parameter_line(param));
        }

        let payload_fields: Vec<_> = tags
            .all(vocabulary::PAYLOAD_FIELD)
            .into_iter()
            .map(parse_field)
            .filter(|field| !field.name.is_empty())
            .collect();
        if !payload_fields.is_empty() {
            lines.push(String::new());
            for field in payload_fields {
                lines.push(format!(
                    "@param {{{}}} {}.{}{}",
                    self.types.translate(field.type_name),
                    PAYLOAD_NAME,
                    field.name,
                    with_description(field.description)
                ));
            }
        }

        if !method.query_parameters.is_empty() {
            lines.push(format!(
                "@param {{Object}} [{}] {}",
                QUERY_PARAMS_NAME, QUERY_PARAMS_DESCRIPTION
            ));
            for query in &method.query_parameters {
                lines.push(format!(
                    "@param {{{}}} [{}.{}]{}",
                    self.types.translate(&query.type_name),
                    QUERY_PARAMS_NAME,
                    query.name,
                    with_description(&query.description)
                ));
            }
        }

        let (return_type, typecast_hint, output_types) =
            match self.output_types(method, client_uc_name) {
                Some((promise, block)) => {
                    let hint = format!("/** @type {{{}}} */ ", promise);
                    (promise, hint, Some(block))
                }
                None => (GENERIC_PROMISE.to_string(), String::new(), None),
            };

        let return_description = tags
            .first(vocabulary::RETURNS)
            .map(|body| next_word(body).1)
            .unwrap_or_default();
        lines.push(format!(
            "@returns {{{}}}{}",
            return_type,
            with_description(return_description)
        ));

        MethodDoc {
            comment: doc_comment(&lines),
            typecast_hint,
            output_types,
        }
    }

    fn parameter_line(&self, param: &ParameterDescriptor) -> String {
        let type_name = self
            .types
            .translate(param.type_name.as_deref().unwrap_or_default());
        let name = match (param.required, &param.default) {
            (true, _) => param.name.clone(),
            (false, Some(default)) => format!("[{}={}]", param.name, default),
            (false, None) => format!("[{}]", param.name),
        };
        format!(
            "@param {{{}}} {}{}",
            type_name,
            name,
            with_description(&param.description)
        )
    }

    /// Promise alias name and typedef block, when any output field is declared
    fn output_types(&self, method: &MethodDescriptor, client_uc_name: &str) -> Option<(String, String)> {
        let properties: Vec<String> = method
            .tags
            .all(vocabulary::OUTPUT)
            .into_iter()
            .map(parse_field)
            .filter(|field| !field.name.is_empty())
            .map(|field| {
                comment_line(&format!(
                    "@property {{{}}} {}{}",
                    self.types.translate(field.type_name),
                    field.name,
                    with_description(field.description)
                ))
            })
            .collect();
        if properties.is_empty() {
            return None;
        }

        let promise = format!("{}Promise", client_uc_name);
        let mut bindings = Bindings::new();
        bindings.insert("RESULT", format!("{}Result", client_uc_name));
        bindings.insert("PROPERTIES", properties.join("\n"));
        bindings.insert("PROMISE", promise.clone());
        Some((promise, render(&self.templates.output_types, &bindings)))
    }
}
