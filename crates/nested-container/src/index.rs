//! Indexing by key or position.
//!
//! Mutable indexing auto-vivifies: `v["a"]` on a value that is not a map
//! replaces it with an empty map and inserts `"a"` as `Null`; `v[3]` on a
//! value that is not a sequence replaces it with an empty sequence and pads
//! it with `Null` up to position 3. Read-only indexing never changes
//! anything and reports a missing key, a position past the end, or the
//! wrong kind.

use crate::error::{ContainerError, Result};
use crate::kind::Kind;
use crate::value::Value;
use std::ops;

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for usize {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// A type that can index into a [`Value`]: `str`/`String` for maps, `usize`
/// for sequences.
pub trait ValueIndex: private::Sealed {
    /// Read-only lookup.
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value>;

    /// Mutable lookup that does not create anything.
    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value>;

    /// Mutable lookup that re-kinds and inserts as needed.
    fn index_or_insert<'v>(&self, value: &'v mut Value) -> &'v mut Value;
}

fn mismatch(expected: Kind, value: &Value) -> ContainerError {
    ContainerError::TypeMismatch {
        expected,
        found: value.kind(),
    }
}

impl ValueIndex for str {
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        match value {
            Value::Map(map) => map
                .get(self)
                .ok_or_else(|| ContainerError::KeyNotFound(self.to_owned())),
            other => Err(mismatch(Kind::Map, other)),
        }
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        match value {
            Value::Map(map) => map
                .get_mut(self)
                .ok_or_else(|| ContainerError::KeyNotFound(self.to_owned())),
            other => Err(mismatch(Kind::Map, other)),
        }
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        value.transform_map().entry(self.to_owned()).or_default()
    }
}

impl ValueIndex for String {
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        self.as_str().lookup(value)
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().lookup_mut(value)
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        self.as_str().index_or_insert(value)
    }
}

impl ValueIndex for usize {
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        match value {
            Value::Sequence(seq) => seq.get(*self).ok_or(ContainerError::IndexOutOfRange {
                index: *self,
                len: seq.len(),
            }),
            other => Err(mismatch(Kind::Sequence, other)),
        }
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        match value {
            Value::Sequence(seq) => {
                let len = seq.len();
                seq.get_mut(*self)
                    .ok_or(ContainerError::IndexOutOfRange { index: *self, len })
            }
            other => Err(mismatch(Kind::Sequence, other)),
        }
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        let seq = value.transform_sequence();
        if seq.len() <= *self {
            seq.resize_with(*self + 1, Value::default);
        }
        &mut seq[*self]
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        (**self).lookup(value)
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        (**self).lookup_mut(value)
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        (**self).index_or_insert(value)
    }
}

impl Value {
    /// Checked read-only indexing.
    ///
    /// Fails with `TypeMismatch` when the value is not the collection the index
    /// addresses, `KeyNotFound` for a missing key and `IndexOutOfRange` for a
    /// position past the end.
    pub fn at<I: ValueIndex>(&self, index: I) -> Result<&Value> {
        index.lookup(self)
    }

    /// Checked mutable indexing; never creates entries.
    pub fn at_mut<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value> {
        index.lookup_mut(self)
    }

    /// Auto-vivifying indexing, the named form of `&mut v[index]`.
    pub fn entry<I: ValueIndex>(&mut self, index: I) -> &mut Value {
        index.index_or_insert(self)
    }
}

impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// Whenever [`Value::at`] would return an error.
    fn index(&self, index: I) -> &Value {
        match index.lookup(self) {
            Ok(found) => found,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<I: ValueIndex> ops::IndexMut<I> for Value {
    fn index_mut(&mut self, index: I) -> &mut Value {
        index.index_or_insert(self)
    }
}
