//! JSON text codec for [`Value`].
//!
//! # Generation
//!
//! Three strategies produce byte-identical text:
//!
//! - [`GenerationStrategy::Grammar`] interprets a rule table against the tree
//!   (see `grammar.rs`) into a buffer preallocated from [`estimate_size`].
//! - [`GenerationStrategy::VisitorHybrid`] walks the tree with a visitor into
//!   the same kind of preallocated buffer.
//! - [`GenerationStrategy::VisitorStream`] walks the tree with a visitor into a
//!   growable `String`. It never fails and is what [`serialize`] and
//!   `Display` use.
//!
//! Strings are written between quotes without escaping. A string holding a
//! quote, backslash or control character therefore produces text that does
//! not parse back. Floats are written in plain decimal with at least one
//! fractional digit (`2.0`, `0.1`); NaN and infinities are written as `null`.
//!
//! # Parsing
//!
//! The accepted grammar is documented in `parser.rs`: the root must be an
//! object or array, keys are alphanumeric, and strings accept alphanumerics,
//! space, `/` and a fixed escape table. Under [`ParsePolicy::Lenient`] a
//! malformed document yields `Value::Null`, exactly as if the text had been
//! unparseable from the start; [`ParsePolicy::Strict`] reports the position.
//!
//! # Example
//!
//! ```
//! use nested_container::{GenerationStrategy, Serializer, Value};
//!
//! let serializer = Serializer::new().with_strategy(GenerationStrategy::Grammar);
//! let doc = serializer.deserialize(r#"{"a":1,"b":[1,2.5,"yeah"],"c":null}"#).unwrap();
//! assert!(doc["b"][1].is_float());
//! assert_eq!(
//!     serializer.serialize(&doc).unwrap(),
//!     r#"{"a":1,"b":[1,2.5,"yeah"],"c":null}"#
//! );
//! ```

mod emit;
mod emitter;
pub mod estimate;
mod grammar;
mod parser;

pub use estimate::{estimate_size, max_scalar_len, SizeEstimator};

use crate::error::{ContainerError, Result};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// How a value tree is turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GenerationStrategy {
    /// Rule table interpreted against the tree, preallocated buffer.
    Grammar,
    /// Visitor with per-kind primitives, preallocated buffer.
    VisitorHybrid,
    /// Visitor appending to a growable buffer.
    #[default]
    VisitorStream,
}

impl GenerationStrategy {
    pub const ALL: [GenerationStrategy; 3] = [
        GenerationStrategy::Grammar,
        GenerationStrategy::VisitorHybrid,
        GenerationStrategy::VisitorStream,
    ];

    /// Whether the strategy sizes its buffer from [`estimate_size`] up front.
    pub const fn preallocates(self) -> bool {
        !matches!(self, GenerationStrategy::VisitorStream)
    }
}

/// What [`Serializer::deserialize`] does with malformed text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParsePolicy {
    /// Malformed input becomes `Value::Null`.
    #[default]
    Lenient,
    /// Malformed input is an error.
    Strict,
}

/// Bounds checked before and during parsing. Exceeding one is a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum nesting of objects and arrays; the root counts as 1.
    pub max_depth: usize,
    /// Maximum input length in bytes, if any.
    pub max_input_len: Option<usize>,
}

impl ParseLimits {
    pub const fn new(max_depth: usize, max_input_len: Option<usize>) -> Self {
        ParseLimits {
            max_depth,
            max_input_len,
        }
    }

    /// No input cap, and a depth bound only as deep as the call stack allows.
    pub const fn unbounded() -> Self {
        ParseLimits {
            max_depth: usize::MAX,
            max_input_len: None,
        }
    }
}

impl Default for ParseLimits {
    fn default() -> Self {
        ParseLimits {
            max_depth: 256,
            max_input_len: None,
        }
    }
}

/// Codec configuration: generation strategy, parse policy and limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Serializer {
    strategy: GenerationStrategy,
    policy: ParsePolicy,
    limits: ParseLimits,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: GenerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_limits(mut self, limits: ParseLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn strategy(&self) -> GenerationStrategy {
        self.strategy
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    pub fn limits(&self) -> ParseLimits {
        self.limits
    }

    /// Render `value` as JSON text with the configured strategy.
    ///
    /// Only the preallocating strategies can fail, with `CapacityExceeded`,
    /// and only if the size estimate was too small.
    pub fn serialize(&self, value: &Value) -> Result<String> {
        match self.strategy {
            GenerationStrategy::Grammar => grammar::generate(value),
            GenerationStrategy::VisitorHybrid => emitter::generate_hybrid(value),
            GenerationStrategy::VisitorStream => Ok(emitter::generate_stream(value)),
        }
    }

    /// Parse JSON text. Malformed input is `Ok(Value::Null)` under the lenient
    /// policy and `Err(Parse)` under the strict one.
    pub fn deserialize(&self, text: &str) -> Result<Value> {
        match parser::parse(text, self.limits) {
            Ok(value) => Ok(value),
            Err(err) if self.policy == ParsePolicy::Lenient => {
                tracing::debug!(error = %err, "malformed document, yielding null");
                Ok(Value::Null)
            }
            Err(err) => Err(err),
        }
    }
}

/// Render `value` with the stream strategy.
pub fn serialize(value: &Value) -> String {
    emitter::generate_stream(value)
}

/// Parse `text`, yielding `Value::Null` if it is malformed.
pub fn deserialize(text: &str) -> Value {
    match try_deserialize(text) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "malformed document, yielding null");
            Value::Null
        }
    }
}

/// Parse `text` with default limits, reporting where it is malformed.
pub fn try_deserialize(text: &str) -> Result<Value> {
    parser::parse(text, ParseLimits::default())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        emitter::write_stream(self, f)
    }
}

impl FromStr for Value {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self> {
        try_deserialize(s)
    }
}
