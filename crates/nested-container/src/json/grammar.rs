//! Grammar-direct generation.
//!
//! The output grammar is written down as a table of rules and interpreted
//! against the value tree:
//!
//! ```text
//! root   := value
//! value  := object | array | string | float | integer | uint | bool | null
//! object := '{' (member (',' member)*)? '}'
//! member := '"' key '"' ':' value
//! array  := '[' (value (',' value)*)? ']'
//! ```
//!
//! Each rule guards on the kind of the node it is handed and declines when it
//! does not match, so `value` is an ordered choice that settles on the one
//! alternative for the node's kind. Guards run before anything is written,
//! so a declined alternative leaves no output behind. `null` accepts any node
//! and closes the choice.

use super::emit::{self, FixedBuffer};
use super::estimate::estimate_size;
use crate::error::Result;
use crate::value::Value;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Value,
    Object,
    Member,
    Array,
    Str,
    Float,
    Integer,
    UInt,
    Bool,
    Null,
}

const ROOT: Rule = Rule::Value;

/// Whether a rule accepted its attribute, or the sink refused a write.
type Generated = std::result::Result<bool, fmt::Error>;

const VALUE_ALTERNATIVES: [Rule; 8] = [
    Rule::Object,
    Rule::Array,
    Rule::Str,
    Rule::Float,
    Rule::Integer,
    Rule::UInt,
    Rule::Bool,
    Rule::Null,
];

/// What a rule is generated from.
#[derive(Clone, Copy)]
enum Attr<'v> {
    Node(&'v Value),
    Member(&'v str, &'v Value),
}

struct Generator<'w, W: Write> {
    out: &'w mut W,
}

impl<W: Write> Generator<'_, W> {
    /// Generate `rule` from `attr`. `Ok(false)` means the rule declined.
    fn rule(&mut self, rule: Rule, attr: Attr<'_>) -> Generated {
        match (rule, attr) {
            (Rule::Value, Attr::Node(value)) => self.choice(&VALUE_ALTERNATIVES, value),
            (Rule::Object, Attr::Node(Value::Map(map))) => {
                let members = map.iter().map(|(k, v)| Attr::Member(k, v));
                self.delimited('{', members, Rule::Member, '}')?;
                Ok(true)
            }
            (Rule::Member, Attr::Member(key, value)) => {
                emit::write_key(self.out, key)?;
                self.rule(Rule::Value, Attr::Node(value))
            }
            (Rule::Array, Attr::Node(Value::Sequence(seq))) => {
                let elements = seq.iter().map(Attr::Node);
                self.delimited('[', elements, Rule::Value, ']')?;
                Ok(true)
            }
            (Rule::Str, Attr::Node(Value::String(s))) => {
                emit::write_string(self.out, s)?;
                Ok(true)
            }
            (Rule::Float, Attr::Node(Value::Float(f))) => {
                emit::write_float(self.out, *f)?;
                Ok(true)
            }
            (Rule::Integer, Attr::Node(Value::Integer(i))) => {
                emit::write_integer(self.out, *i)?;
                Ok(true)
            }
            (Rule::UInt, Attr::Node(Value::UnsignedInteger(u))) => {
                emit::write_uint(self.out, *u)?;
                Ok(true)
            }
            (Rule::Bool, Attr::Node(Value::Boolean(b))) => {
                emit::write_bool(self.out, *b)?;
                Ok(true)
            }
            (Rule::Null, Attr::Node(_)) => {
                emit::write_null(self.out)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Ordered choice: the first alternative that accepts `value` wins.
    fn choice(&mut self, alternatives: &[Rule], value: &Value) -> Generated {
        for &alternative in alternatives {
            if self.rule(alternative, Attr::Node(value))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// `open (item (',' item)*)? close`
    fn delimited<'v>(
        &mut self,
        open: char,
        items: impl Iterator<Item = Attr<'v>>,
        item: Rule,
        close: char,
    ) -> fmt::Result {
        self.out.write_char(open)?;
        for (i, attr) in items.enumerate() {
            if i > 0 {
                self.out.write_char(',')?;
            }
            self.rule(item, attr)?;
        }
        self.out.write_char(close)
    }
}

/// Grammar-direct strategy, into a buffer preallocated from the size estimate.
pub(crate) fn generate(value: &Value) -> Result<String> {
    let mut buffer = FixedBuffer::with_capacity(estimate_size(value));
    let mut generator = Generator { out: &mut buffer };
    // An overflow is recorded in the buffer and reported by `finish`.
    let _ = generator.rule(ROOT, Attr::Node(value));
    buffer.finish()
}
