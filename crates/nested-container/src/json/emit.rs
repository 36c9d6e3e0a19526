//! Text sinks and the per-kind emission primitives shared by every generator.
//!
//! All three generation strategies call the same primitives, which is what
//! keeps their output byte-identical.

use crate::error::{ContainerError, Result};
use std::fmt::{self, Write};

/// A sink with a fixed capacity, decided before generation starts.
///
/// Writing past the capacity fails instead of growing the buffer; the
/// attempted length is kept for the error report.
pub(crate) struct FixedBuffer {
    buf: String,
    capacity: usize,
    required: usize,
}

impl FixedBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        FixedBuffer {
            buf: String::with_capacity(capacity),
            capacity,
            required: 0,
        }
    }

    /// The generated text, or `CapacityExceeded` if a write was refused.
    pub(crate) fn finish(self) -> Result<String> {
        if self.required > self.capacity {
            return Err(ContainerError::CapacityExceeded {
                capacity: self.capacity,
                required: self.required,
            });
        }
        tracing::trace!(
            capacity = self.capacity,
            written = self.buf.len(),
            "preallocated generation finished"
        );
        Ok(self.buf)
    }
}

impl Write for FixedBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let needed = self.buf.len() + s.len();
        if needed > self.capacity {
            self.required = self.required.max(needed);
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}

/// Forwards writes and remembers whether a `.` went through.
struct DotTracker<'a, W: Write> {
    inner: &'a mut W,
    saw_dot: bool,
}

impl<W: Write> Write for DotTracker<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.saw_dot |= s.contains('.');
        self.inner.write_str(s)
    }
}

pub(crate) fn write_null<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str("null")
}

pub(crate) fn write_bool<W: Write>(out: &mut W, b: bool) -> fmt::Result {
    out.write_str(if b { "true" } else { "false" })
}

pub(crate) fn write_integer<W: Write>(out: &mut W, i: i64) -> fmt::Result {
    write!(out, "{i}")
}

pub(crate) fn write_uint<W: Write>(out: &mut W, u: u64) -> fmt::Result {
    write!(out, "{u}")
}

/// Plain decimal, never an exponent, always with a `.` so the parser reads it
/// back as a float. NaN and infinities have no literal and become `null`.
pub(crate) fn write_float<W: Write>(out: &mut W, f: f64) -> fmt::Result {
    if !f.is_finite() {
        return write_null(out);
    }
    let mut tracker = DotTracker {
        inner: out,
        saw_dot: false,
    };
    write!(tracker, "{f}")?;
    if !tracker.saw_dot {
        tracker.inner.write_str(".0")?;
    }
    Ok(())
}

/// Quoted, with the content written as-is (no escaping).
pub(crate) fn write_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    out.write_str(s)?;
    out.write_char('"')
}

/// `"key":`
pub(crate) fn write_key<W: Write>(out: &mut W, key: &str) -> fmt::Result {
    write_string(out, key)?;
    out.write_char(':')
}
