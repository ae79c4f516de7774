//! Client service rendering.
//!
//! [`ServiceRenderer`] turns a [`ClassDescriptor`] into the source text of one
//! client service file. It owns the template text and the type-translation
//! table; both are plain values fixed at construction.
//!
//! # Examples
//!
//! ```
//! use apistub_core::descriptor::ClassDescriptor;
//! use apistub_core::render::ServiceRenderer;
//!
//! let class = ClassDescriptor { description: "Users.".into(), methods: Vec::new() };
//! let text = ServiceRenderer::default().render_service("UsersController", "/api", &class, "app");
//! assert!(text.contains("angular.module('app').service('UsersService', ['apiClient', UsersServiceImpl]);"));
//! ```

pub mod doc;
pub mod method;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::descriptor::ClassDescriptor;
use crate::templates::{render, Bindings, Templates, TypeTranslation};
use crate::utils::indent;

pub use doc::MethodDoc;

/// Suffix removed from class names when deriving the service name
pub const CLASS_SUFFIX: &str = "Controller";
/// Suffix appended to derive the service name
pub const SERVICE_SUFFIX: &str = "Service";
/// Indentation of method stubs inside the service constructor
const METHOD_INDENT: &str = "    ";

static BLANK_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// `ItemsController` becomes `ItemsService`
pub fn service_name(class_name: &str) -> String {
    let base = class_name.strip_suffix(CLASS_SUFFIX).unwrap_or(class_name);
    format!("{}{}", base, SERVICE_SUFFIX)
}

pub fn constructor_name(service_name: &str) -> String {
    format!("{}Impl", service_name)
}

/// File the service for `class_name` is written to, relative to the target directory
pub fn output_file_name(class_name: &str) -> String {
    format!("{}.js", service_name(class_name))
}

/// Collapse runs of blank lines to one and end with a single newline
fn normalize_blank_lines(text: &str) -> String {
    let collapsed = BLANK_RUN_REGEX.replace_all(text, "\n\n");
    format!("{}\n", collapsed.trim_end())
}

#[derive(Debug, Clone, Default)]
pub struct ServiceRenderer {
    templates: Templates,
    types: TypeTranslation,
}

impl ServiceRenderer {
    pub fn new(templates: Templates, types: TypeTranslation) -> Self {
        Self { templates, types }
    }

    /// Render the complete service file for one class.
    pub fn render_service(
        &self,
        class_name: &str,
        endpoint_base_url: &str,
        class: &ClassDescriptor,
        module_name: &str,
    ) -> String {
        let service = service_name(class_name);
        let constructor = constructor_name(&service);

        let methods = class
            .methods
            .iter()
            .map(|method| indent(&self.render_method(method, endpoint_base_url), METHOD_INDENT))
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut bindings = Bindings::new();
        bindings.insert("CLASS", class_name.to_string());
        bindings.insert("DESCRIPTION", doc::comment_line(&class.description));
        bindings.insert("CONSTRUCTOR", constructor);
        bindings.insert("METHODS", methods);
        bindings.insert("MODULE", module_name.to_string());
        bindings.insert("SERVICE", service);

        normalize_blank_lines(&render(&self.templates.service, &bindings))
    }
}
