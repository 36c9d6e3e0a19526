//! Accessors over the active storage of a [`Value`].
//!
//! Four families, from strictest to most forgiving:
//!
//! | family        | kind mismatch                      |
//! |---------------|------------------------------------|
//! | `get_ref`     | `Err(TypeMismatch)`                |
//! | `get`         | `None`                             |
//! | `raw`         | precondition violation (panics)    |
//! | `convert`     | lexical conversion or default      |
//!
//! `transform` converts like `convert` and then stores the result, re-kinding
//! the value in place. Each family has named shorthands per storage type
//! (`get_string`, `raw_uint`, ...), and `From<&Value>` is `convert`.

use crate::convert;
use crate::error::{ContainerError, Result};
use crate::kind::Kind;
use crate::value::{Map, Sequence, Value};

mod private {
    pub trait Sealed {}
}

/// A storage type that a [`Value`] can hold.
///
/// Implemented for `Map`, `Sequence`, `String`, `f64`, `i64`, `u64` and `bool`.
/// `Null` carries no storage and is handled by `is_null`/`transform_null`.
pub trait Member: private::Sealed + Sized {
    /// The kind a value has when it holds this type.
    const KIND: Kind;

    /// Borrow the storage if the value holds this type.
    fn project(value: &Value) -> Option<&Self>;

    /// Mutably borrow the storage if the value holds this type.
    fn project_mut(value: &mut Value) -> Option<&mut Self>;

    /// Wrap into a value of kind [`Self::KIND`].
    fn into_value(self) -> Value;

    /// Convert any value to this type without failing.
    fn convert_from(value: &Value) -> Self;
}

macro_rules! member {
    ($t:ty, $variant:ident, $convert:path) => {
        impl private::Sealed for $t {}

        impl Member for $t {
            const KIND: Kind = Kind::$variant;

            #[inline]
            fn project(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            #[inline]
            fn project_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn convert_from(value: &Value) -> Self {
                $convert(value)
            }
        }

        /// Same as [`Value::convert`].
        impl From<&Value> for $t {
            fn from(value: &Value) -> Self {
                $convert(value)
            }
        }
    };
}

member!(Map, Map, convert::to_map);
member!(Sequence, Sequence, convert::to_sequence);
member!(String, String, convert::to_string);
member!(f64, Float, convert::to_float);
member!(i64, Integer, convert::to_integer);
member!(u64, UnsignedInteger, convert::to_uint);
member!(bool, Boolean, convert::to_bool);

impl Value {
    /// Borrow the storage as `T`, or fail with `TypeMismatch`.
    pub fn get_ref<T: Member>(&self) -> Result<&T> {
        T::project(self).ok_or(ContainerError::TypeMismatch {
            expected: T::KIND,
            found: self.kind(),
        })
    }

    /// Mutably borrow the storage as `T`, or fail with `TypeMismatch`.
    pub fn get_ref_mut<T: Member>(&mut self) -> Result<&mut T> {
        let found = self.kind();
        T::project_mut(self).ok_or(ContainerError::TypeMismatch {
            expected: T::KIND,
            found,
        })
    }

    /// Borrow the storage as `T` if the kinds match.
    #[inline]
    pub fn get<T: Member>(&self) -> Option<&T> {
        T::project(self)
    }

    #[inline]
    pub fn get_mut<T: Member>(&mut self) -> Option<&mut T> {
        T::project_mut(self)
    }

    /// Copy the storage into `out` if the kinds match. `out` is untouched otherwise.
    pub fn get_into<T: Member + Clone>(&self, out: &mut T) -> bool {
        match T::project(self) {
            Some(inner) => {
                out.clone_from(inner);
                true
            }
            None => false,
        }
    }

    /// Borrow the storage as `T`, assuming the caller already knows the kind.
    ///
    /// # Panics
    ///
    /// If the value does not hold a `T`. Checking the kind first is the
    /// caller's job; use [`Value::get`] when it is not known.
    pub fn raw<T: Member>(&self) -> &T {
        debug_assert_eq!(self.kind(), T::KIND, "raw access with mismatched kind");
        match T::project(self) {
            Some(inner) => inner,
            None => panic!("raw {} access on a {} value", T::KIND, self.kind()),
        }
    }

    /// Mutable counterpart of [`Value::raw`].
    ///
    /// # Panics
    ///
    /// If the value does not hold a `T`.
    pub fn raw_mut<T: Member>(&mut self) -> &mut T {
        debug_assert_eq!(self.kind(), T::KIND, "raw access with mismatched kind");
        let found = self.kind();
        match T::project_mut(self) {
            Some(inner) => inner,
            None => panic!("raw {} access on a {} value", T::KIND, found),
        }
    }

    /// Convert to `T` without failing; see [`crate::convert`] for the rules.
    #[inline]
    pub fn convert<T: Member>(&self) -> T {
        T::convert_from(self)
    }

    /// Convert to `T`, store the result in place and borrow it.
    ///
    /// Once the value holds a `T` this is a plain borrow.
    pub fn transform<T: Member>(&mut self) -> &mut T {
        if self.kind() != T::KIND {
            let converted = T::convert_from(self);
            *self = converted.into_value();
        }
        match T::project_mut(self) {
            Some(inner) => inner,
            None => unreachable!("value was just re-kinded to {}", T::KIND),
        }
    }

    /// Re-kind to `Null`, dropping the current content.
    pub fn transform_null(&mut self) {
        *self = Value::Null;
    }

    pub fn ref_map(&self) -> Result<&Map> {
        self.get_ref()
    }

    pub fn ref_sequence(&self) -> Result<&Sequence> {
        self.get_ref()
    }

    pub fn ref_string(&self) -> Result<&String> {
        self.get_ref()
    }

    pub fn ref_float(&self) -> Result<&f64> {
        self.get_ref()
    }

    pub fn ref_int(&self) -> Result<&i64> {
        self.get_ref()
    }

    pub fn ref_uint(&self) -> Result<&u64> {
        self.get_ref()
    }

    pub fn ref_bool(&self) -> Result<&bool> {
        self.get_ref()
    }

    pub fn get_map(&self) -> Option<&Map> {
        self.get()
    }

    pub fn get_sequence(&self) -> Option<&Sequence> {
        self.get()
    }

    pub fn get_string(&self) -> Option<&String> {
        self.get()
    }

    pub fn get_float(&self) -> Option<&f64> {
        self.get()
    }

    pub fn get_int(&self) -> Option<&i64> {
        self.get()
    }

    pub fn get_uint(&self) -> Option<&u64> {
        self.get()
    }

    pub fn get_bool(&self) -> Option<&bool> {
        self.get()
    }

    pub fn raw_map(&self) -> &Map {
        self.raw()
    }

    pub fn raw_sequence(&self) -> &Sequence {
        self.raw()
    }

    pub fn raw_string(&self) -> &String {
        self.raw()
    }

    pub fn raw_float(&self) -> &f64 {
        self.raw()
    }

    pub fn raw_int(&self) -> &i64 {
        self.raw()
    }

    pub fn raw_uint(&self) -> &u64 {
        self.raw()
    }

    pub fn raw_bool(&self) -> &bool {
        self.raw()
    }

    pub fn as_map(&self) -> Map {
        self.convert()
    }

    pub fn as_sequence(&self) -> Sequence {
        self.convert()
    }

    pub fn as_string(&self) -> String {
        self.convert()
    }

    pub fn as_float(&self) -> f64 {
        self.convert()
    }

    pub fn as_integer(&self) -> i64 {
        self.convert()
    }

    pub fn as_uint(&self) -> u64 {
        self.convert()
    }

    pub fn as_bool(&self) -> bool {
        self.convert()
    }

    pub fn transform_map(&mut self) -> &mut Map {
        self.transform()
    }

    pub fn transform_sequence(&mut self) -> &mut Sequence {
        self.transform()
    }

    pub fn transform_string(&mut self) -> &mut String {
        self.transform()
    }

    pub fn transform_float(&mut self) -> &mut f64 {
        self.transform()
    }

    pub fn transform_integer(&mut self) -> &mut i64 {
        self.transform()
    }

    pub fn transform_uint(&mut self) -> &mut u64 {
        self.transform()
    }

    pub fn transform_bool(&mut self) -> &mut bool {
        self.transform()
    }
}
