//! Single dispatch on the active kind.
//!
//! [`visit`] calls exactly one [`Visitor`] method, the one matching the value's
//! kind. Collections are passed by reference and scalars by copy (strings as
//! `&str`). Every method defaults to doing nothing, so a visitor only writes
//! the cases it cares about. Recursing into children is up to the visitor;
//! maps iterate in key order and sequences in index order.

use crate::value::{Map, Value};

/// Per-kind callbacks. All methods default to a no-op.
#[allow(unused_variables)]
pub trait Visitor {
    fn visit_null(&mut self) {}
    fn visit_map(&mut self, map: &Map) {}
    fn visit_sequence(&mut self, seq: &[Value]) {}
    fn visit_string(&mut self, s: &str) {}
    fn visit_float(&mut self, f: f64) {}
    fn visit_integer(&mut self, i: i64) {}
    fn visit_uint(&mut self, u: u64) {}
    fn visit_bool(&mut self, b: bool) {}
}

/// Call the one `visitor` method matching `value`'s kind.
pub fn visit<V: Visitor + ?Sized>(value: &Value, visitor: &mut V) {
    match value {
        Value::Null => visitor.visit_null(),
        Value::Map(map) => visitor.visit_map(map),
        Value::Sequence(seq) => visitor.visit_sequence(seq),
        Value::String(s) => visitor.visit_string(s),
        Value::Float(f) => visitor.visit_float(*f),
        Value::Integer(i) => visitor.visit_integer(*i),
        Value::UnsignedInteger(u) => visitor.visit_uint(*u),
        Value::Boolean(b) => visitor.visit_bool(*b),
    }
}

impl Value {
    /// Method form of [`visit`].
    #[inline]
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visit(self, visitor)
    }
}
