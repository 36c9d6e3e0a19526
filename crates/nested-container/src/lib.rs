//! # nested-container
//!
//! A dynamically-typed, recursively-nested value container with a JSON text codec.
//!
//! A [`Value`] holds exactly one of eight kinds at a time (null, map, sequence,
//! string, float, integer, unsigned integer, boolean). Indexing a value that is
//! not yet a collection turns it into one, so trees can be built by assignment
//! alone. Text goes in and out through [`json`], which offers three generation
//! strategies that all produce the same bytes.
//!
//! ## Quick start
//!
//! ```rust
//! use nested_container::{deserialize, serialize, Value};
//!
//! let mut doc = Value::default();
//! doc["name"] = "Roger".into();
//! doc["attributes"]["weight"] = 95u64.into();
//! doc["attributes"]["list"][2] = "yeah".into();
//!
//! let text = serialize(&doc);
//! assert_eq!(
//!     text,
//!     r#"{"attributes":{"list":[null,null,"yeah"],"weight":95},"name":"Roger"}"#
//! );
//!
//! let back = deserialize(&text);
//! assert!(back["attributes"]["weight"].is_uint());
//! assert_eq!(back, doc);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` enum, construction, re-kinding and assignment
//! - [`kind`] — the `Kind` tag and its lexical/collection classes
//! - [`access`] — checked, optional, raw and transforming accessors
//! - [`convert`] — non-failing lexical conversion between scalar kinds
//! - [`index`] — string/integer indexing with auto-vivification
//! - [`visit`](mod@visit) — per-kind visitor dispatch
//! - [`json`] — size estimator, three generators and the parser
//! - [`error`] — error types for access and codec failures

pub mod access;
pub mod convert;
pub mod error;
pub mod index;
pub mod json;
pub mod kind;
mod serde_impl;
pub mod value;
pub mod visit;

pub use access::Member;
pub use error::{ContainerError, Result};
pub use index::ValueIndex;
pub use json::{
    deserialize, estimate_size, serialize, try_deserialize, GenerationStrategy, ParseLimits,
    ParsePolicy, Serializer,
};
pub use kind::Kind;
pub use value::{Map, Sequence, Value};
pub use visit::{visit, Visitor};
