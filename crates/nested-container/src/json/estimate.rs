//! Upper bound on the length of a value's rendered text.
//!
//! The preallocating generators size their buffer from this bound once and
//! never grow it. Scalars are charged a fixed worst case for their type
//! rather than their actual length; strings and keys are charged their byte
//! length plus quotes, which is exact because generated strings are not
//! escaped.

use crate::kind::Kind;
use crate::value::{Map, Value};
use crate::visit::{visit, Visitor};

const NULL_LEN: usize = 4;
const BOOL_LEN: usize = 5;
const INTEGER_LEN: usize = i64::BITS as usize;
const UINT_LEN: usize = u64::BITS as usize;
const FLOAT_LEN: usize = 3 + f64::MANTISSA_DIGITS as usize + f64::MIN_EXP.unsigned_abs() as usize;

/// Worst-case rendered length of a scalar of `kind`, or `None` for kinds whose
/// length depends on their content.
///
/// Integers are charged one character per bit of their width,
/// floats `3 + mantissa digits - minimum exponent`, which bounds the plain
/// decimal form of the smallest subnormal.
pub const fn max_scalar_len(kind: Kind) -> Option<usize> {
    match kind {
        Kind::Null => Some(NULL_LEN),
        Kind::Boolean => Some(BOOL_LEN),
        Kind::Integer => Some(INTEGER_LEN),
        Kind::UnsignedInteger => Some(UINT_LEN),
        Kind::Float => Some(FLOAT_LEN),
        Kind::Map | Kind::Sequence | Kind::String => None,
    }
}

/// Visitor accumulating the bound.
#[derive(Debug, Default)]
pub struct SizeEstimator {
    size: usize,
}

impl SizeEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn reset(&mut self) {
        self.size = 0;
    }
}

impl Visitor for SizeEstimator {
    fn visit_null(&mut self) {
        self.size += NULL_LEN;
    }

    fn visit_map(&mut self, map: &Map) {
        // {}
        self.size += 2;
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.size += 1;
            }
            // "key":
            self.size += 3 + key.len();
            visit(value, self);
        }
    }

    fn visit_sequence(&mut self, seq: &[Value]) {
        // []
        self.size += 2;
        for (i, value) in seq.iter().enumerate() {
            if i > 0 {
                self.size += 1;
            }
            visit(value, self);
        }
    }

    fn visit_string(&mut self, s: &str) {
        self.size += 2 + s.len();
    }

    fn visit_float(&mut self, _: f64) {
        self.size += FLOAT_LEN;
    }

    fn visit_integer(&mut self, _: i64) {
        self.size += INTEGER_LEN;
    }

    fn visit_uint(&mut self, _: u64) {
        self.size += UINT_LEN;
    }

    fn visit_bool(&mut self, _: bool) {
        self.size += BOOL_LEN;
    }
}

/// Upper bound on `serialize(value).len()`, in bytes.
pub fn estimate_size(value: &Value) -> usize {
    let mut estimator = SizeEstimator::new();
    visit(value, &mut estimator);
    estimator.size()
}
