//! Descriptor builders: introspection data plus parsed tags in, descriptors out.
pub mod method;
pub mod parameter;

use crate::descriptor::ClassDescriptor;
use crate::error::Error;
use crate::introspect::Introspector;
use crate::tags::{get_tag, parse_block, vocabulary};

pub use method::build_method_descriptor;
pub use parameter::{build_parameter_descriptors, build_query_parameter_descriptors};

/// Class description used when the class documentation block has none.
pub const DEFAULT_CLASS_DESCRIPTION: &str = "Client for the remote API exposed by this class.";

/// Build the descriptor of every exposed method of `class_name`.
///
/// A method is exposed when it is not static and its documentation block
/// carries the `@api` marker. Methods keep the order the introspector reports.
pub fn parse(class_name: &str, introspector: &dyn Introspector) -> crate::Result<ClassDescriptor> {
    if class_name.trim().is_empty() {
        return Err(Error::invalid_input("class name must not be empty"));
    }

    let mut methods = Vec::new();
    for method in introspector.list_public_methods(class_name)? {
        if method.is_static {
            log::debug!("{}::{} is static, skipping", class_name, method.name);
            continue;
        }
        if get_tag(vocabulary::API, method.doc.as_deref()).is_none() {
            log::debug!("{}::{} has no @api marker, skipping", class_name, method.name);
            continue;
        }
        let tags = parse_block(method.doc.as_deref());
        methods.push(build_method_descriptor(&method, tags));
    }

    let class_tags = parse_block(introspector.class_doc(class_name)?.as_deref());
    let description = match class_tags.description() {
        "" => DEFAULT_CLASS_DESCRIPTION.to_string(),
        text => text.to_string(),
    };

    Ok(ClassDescriptor {
        description,
        methods,
    })
}
