//! Visitor-driven generation.
//!
//! [`Emitter`] walks the tree through [`visit`] and writes each node with the
//! shared primitives from [`emit`](super::emit). The two visitor strategies
//! differ only in the sink:
//!
//! - **hybrid** writes into a [`FixedBuffer`] sized by the estimator
//! - **stream** appends to any growable `fmt::Write` (a `String`, or a
//!   `Formatter` for `Display`)

use super::emit::{self, FixedBuffer};
use super::estimate::estimate_size;
use crate::error::Result;
use crate::value::{Map, Value};
use crate::visit::{visit, Visitor};
use std::fmt::{self, Write};

/// Writes a value tree as JSON text into `out`.
///
/// Visitor methods cannot return errors, so the first sink failure is kept in
/// `status` and every later write is skipped.
pub(crate) struct Emitter<'a, W: Write> {
    out: &'a mut W,
    status: fmt::Result,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub(crate) fn new(out: &'a mut W) -> Self {
        Emitter {
            out,
            status: Ok(()),
        }
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.status
    }

    fn emit(&mut self, f: impl FnOnce(&mut W) -> fmt::Result) {
        if self.status.is_ok() {
            self.status = f(&mut *self.out);
        }
    }
}

impl<W: Write> Visitor for Emitter<'_, W> {
    fn visit_null(&mut self) {
        self.emit(emit::write_null);
    }

    fn visit_map(&mut self, map: &Map) {
        self.emit(|out| out.write_char('{'));
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.emit(|out| out.write_char(','));
            }
            self.emit(|out| emit::write_key(out, key));
            visit(value, self);
        }
        self.emit(|out| out.write_char('}'));
    }

    fn visit_sequence(&mut self, seq: &[Value]) {
        self.emit(|out| out.write_char('['));
        for (i, value) in seq.iter().enumerate() {
            if i > 0 {
                self.emit(|out| out.write_char(','));
            }
            visit(value, self);
        }
        self.emit(|out| out.write_char(']'));
    }

    fn visit_string(&mut self, s: &str) {
        self.emit(|out| emit::write_string(out, s));
    }

    fn visit_float(&mut self, f: f64) {
        self.emit(|out| emit::write_float(out, f));
    }

    fn visit_integer(&mut self, i: i64) {
        self.emit(|out| emit::write_integer(out, i));
    }

    fn visit_uint(&mut self, u: u64) {
        self.emit(|out| emit::write_uint(out, u));
    }

    fn visit_bool(&mut self, b: bool) {
        self.emit(|out| emit::write_bool(out, b));
    }
}

/// Write `value` into any `fmt::Write` sink.
pub(crate) fn write_stream<W: Write>(value: &Value, out: &mut W) -> fmt::Result {
    let mut emitter = Emitter::new(out);
    visit(value, &mut emitter);
    emitter.finish()
}

/// Visitor-stream strategy: growable buffer, no estimate.
pub(crate) fn generate_stream(value: &Value) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_stream(value, &mut out);
    out
}

/// Visitor-hybrid strategy: buffer preallocated from the size estimate.
pub(crate) fn generate_hybrid(value: &Value) -> Result<String> {
    let mut buffer = FixedBuffer::with_capacity(estimate_size(value));
    // An overflow is recorded in the buffer and reported by `finish`.
    let _ = write_stream(value, &mut buffer);
    buffer.finish()
}
