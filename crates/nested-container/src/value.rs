//! The [`Value`] enum: storage, kind, lifecycle.
//!
//! A value is born [`Value::Null`]. Assigning or indexing may re-kind it, which
//! drops whatever it held before. Maps and sequences own their children, so a
//! value tree is always a strict tree and dropping a node releases everything
//! beneath it.
//!
//! # Assigning from a descendant
//!
//! Replacing a node with the content of one of its own children must read the
//! child out before the node's storage is released. [`Value::assign`] stages a
//! copy of the source before installing it, and [`Value::assign_from_child`]
//! detaches the child first, so neither can observe freed or half-replaced
//! storage.

use crate::error::Result;
use crate::index::ValueIndex;
use crate::kind::Kind;
use std::collections::BTreeMap;

/// Key-ordered mapping from string keys to owned values.
pub type Map = BTreeMap<String, Value>;

/// Index-addressed list of owned values.
pub type Sequence = Vec<Value>;

/// A dynamically-typed node: exactly one of eight kinds at any time.
#[derive(Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Map(Map),
    Sequence(Sequence),
    String(String),
    Float(f64),
    Integer(i64),
    UnsignedInteger(u64),
    Boolean(bool),
}

impl Value {
    /// An empty value of the given kind: `{}`, `[]`, `""`, `0`, `0.0` or `false`.
    pub fn init(kind: Kind) -> Value {
        match kind {
            Kind::Null => Value::Null,
            Kind::Map => Value::Map(Map::new()),
            Kind::Sequence => Value::Sequence(Sequence::new()),
            Kind::String => Value::String(String::new()),
            Kind::Float => Value::Float(0.0),
            Kind::Integer => Value::Integer(0),
            Kind::UnsignedInteger => Value::UnsignedInteger(0),
            Kind::Boolean => Value::Boolean(false),
        }
    }

    /// Build a map from `(key, value)` pairs. Later duplicates win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence from elements, preserving their order.
    pub fn from_elements<V, I>(elements: I) -> Value
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Sequence(elements.into_iter().map(Into::into).collect())
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Map(_) => Kind::Map,
            Value::Sequence(_) => Kind::Sequence,
            Value::String(_) => Kind::String,
            Value::Float(_) => Kind::Float,
            Value::Integer(_) => Kind::Integer,
            Value::UnsignedInteger(_) => Kind::UnsignedInteger,
            Value::Boolean(_) => Kind::Boolean,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    #[inline]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    pub const fn is_uint(&self) -> bool {
        matches!(self, Value::UnsignedInteger(_))
    }

    #[inline]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Re-kind to `kind`, discarding the current content.
    ///
    /// Does nothing when the value already has that kind.
    pub fn switch_to(&mut self, kind: Kind) {
        if self.kind() != kind {
            *self = Value::init(kind);
        }
    }

    /// Re-kind to hold `value`.
    ///
    /// The previous content is dropped only after `value` has been fully built.
    pub fn set<V: Into<Value>>(&mut self, value: V) {
        *self = value.into();
    }

    /// Copy-assign from `source`.
    ///
    /// When both sides have the same kind the existing allocation is reused.
    /// Otherwise the copy is staged before the current storage is released.
    pub fn assign(&mut self, source: &Value) {
        if self.kind() == source.kind() {
            self.clone_from(source);
        } else {
            let staged = source.clone();
            *self = staged;
        }
    }

    /// Replace this value with its own child at `index`.
    ///
    /// The child is detached before the rest of the old content is dropped.
    /// Fails like [`Value::at`] if the child does not exist.
    ///
    /// ```
    /// use nested_container::Value;
    ///
    /// let mut v = Value::default();
    /// v["x"] = Value::from_elements([1, 2, 3]);
    /// v.assign_from_child("x").unwrap();
    /// assert_eq!(v, Value::from_elements([1, 2, 3]));
    /// ```
    pub fn assign_from_child<I: ValueIndex>(&mut self, index: I) -> Result<()> {
        let child = index.lookup_mut(self)?;
        let detached = std::mem::take(child);
        *self = detached;
        Ok(())
    }

    /// Move the content out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Map(map) => Value::Map(map.clone()),
            Value::Sequence(seq) => Value::Sequence(seq.clone()),
            Value::String(s) => Value::String(s.clone()),
            Value::Float(f) => Value::Float(*f),
            Value::Integer(i) => Value::Integer(*i),
            Value::UnsignedInteger(u) => Value::UnsignedInteger(*u),
            Value::Boolean(b) => Value::Boolean(*b),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Value::Map(dst), Value::Map(src)) => dst.clone_from(src),
            (Value::Sequence(dst), Value::Sequence(src)) => dst.clone_from(src),
            (Value::String(dst), Value::String(src)) => dst.clone_from(src),
            (dst, src) => *dst = src.clone(),
        }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::Integer(value as i64)
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::UnsignedInteger(value as u64)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Value::Sequence(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::from_pairs(iter)
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::from_elements(iter)
    }
}
