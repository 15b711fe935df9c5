//! structural-eq - Structural deep equality for reflected Rust values.
//!
//! Two values are compared by introspecting their runtime shape rather than
//! by a hand-written `PartialEq` for every nested type. A type takes part by
//! describing itself through [`Reflect`] and opting into [`Comparable`]:
//!
//! ```
//! use structural_eq::{equal, record, sum_type, Comparable, ComparableEnum};
//!
//! sum_type! {
//!     #[derive(Debug)]
//!     pub enum Reading {
//!         Missing,
//!         Celsius(f64),
//!         Range(f64, f64),
//!     }
//! }
//! impl ComparableEnum for Reading {}
//!
//! record! {
//!     #[derive(Debug)]
//!     pub struct Sensor {
//!         pub name: String,
//!         pub reading: Reading,
//!         pub tags: Vec<String>,
//!     }
//! }
//! impl Comparable for Sensor {}
//!
//! let a = Sensor { name: "hall".into(), reading: Reading::Range(1.0, 2.0), tags: vec![] };
//! let b = Sensor { name: "hall".into(), reading: Reading::Range(1.0, 2.0), tags: vec![] };
//! let c = Sensor { name: "hall".into(), reading: Reading::Missing, tags: vec![] };
//!
//! assert!(equal(&a, &b));
//! assert!(a != c);
//! ```
//!
//! # Overview
//!
//! - [`Reflect`] - shape category, children and sum-type tag of a value
//! - [`Comparable`] - the opt-in capability; override [`Comparable::equals`]
//!   to replace the synthesized comparison everywhere the type appears
//! - [`ComparableEnum`] - sum types, with an overridable payload hook
//! - [`equal`] / [`equal_values`] - the entry points
//!
//! Misconfigured types (a nullable or collection declaring [`Comparable`], a
//! shape with no comparison rule) are programming errors: the engine panics
//! with an [`EqualError`] diagnostic instead of guessing.

mod capability;
mod engine;
mod error;
mod impls;
mod macros;
mod reflect;
pub mod sum;

pub use capability::{check_declaration, Comparable, ComparableEnum, DynComparable};
pub use engine::{equal, equal_values, synthesized_equal};
pub use error::{display_name, EqualError};
pub use reflect::{Category, Child, Reflect, Tag};

#[cfg(feature = "json")]
pub use impls::json::deep_equal;
