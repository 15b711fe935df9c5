//! Reflection and capabilities for std and ecosystem types.

mod collections;
mod functions;
mod primitives;
mod references;
mod tuples;

#[cfg(feature = "indexmap")]
mod indexmap;
#[cfg(feature = "json")]
pub(crate) mod json;
