//! Template text and substitution for the generated service files.

pub mod engine;
pub mod text;
pub mod types;

pub use engine::{render, Bindings};
pub use text::Templates;
pub use types::TypeTranslation;
