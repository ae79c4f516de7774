//! apistub Core Library
//!
//! This library extracts API descriptions from the documentation tags of an
//! annotated server-side class and renders them as a client-side service
//! that calls the remote HTTP API.
//!
//! The pipeline runs leaf-first: [`tags`] parses documentation blocks,
//! [`builders`] merges them with [`introspect`] data into [`descriptor`]s,
//! and [`render`] turns descriptors into source text through the
//! placeholder substitution in [`templates`].

pub mod builders;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generate;
pub mod introspect;
pub mod render;
pub mod tags;
pub mod templates;
pub mod utils;

pub use crate::{
    builders::parse,
    config::Config,
    descriptor::{ClassDescriptor, MethodDescriptor},
    error::{Error, Result},
    generate::generate,
    introspect::{Catalog, Introspector},
    render::ServiceRenderer,
    tags::{parse_block, TagMap},
};
