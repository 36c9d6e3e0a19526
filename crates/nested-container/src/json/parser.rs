//! Recursive-descent parser for the JSON text form.
//!
//! # Grammar
//!
//! ```text
//! root    := object | array
//! object  := '{' (pair (',' pair)*)? '}'
//! pair    := key ':' element
//! array   := '[' (element (',' element)*)? ']'
//! element := value | array | object
//! value   := float | uint | int | bool | null | string
//! key     := '"' alnum* '"'
//! string  := '"' (escape | alnum | '\x' hex hex?)* '"'
//! ```
//!
//! Whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`) may appear between any two
//! tokens but not inside a number or literal. Inside a string the escape
//! table is `\a \b \f \n \r \t \v \\ \' \"`, and a plain space or `/` stands
//! for itself; any other character (punctuation, non-ASCII) is rejected.
//! Keys are alphanumeric only. `\xHH` yields the code point `U+00HH`.
//!
//! Numbers are tried in order: float (only if a `.` is present), then
//! unsigned, then signed. `12` is an unsigned integer, `-12` a signed one and
//! `12.0` a float; `1e5` is not a number.
//!
//! Duplicate keys keep their first occurrence. Input after the root must be
//! whitespace.

use super::ParseLimits;
use crate::error::{ContainerError, Result};
use crate::value::{Map, Sequence, Value};

/// Where and why parsing stopped.
#[derive(Debug)]
struct Failure {
    pos: usize,
    message: String,
}

type Parsed<T> = std::result::Result<T, Failure>;

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn unescape(b: u8) -> Option<char> {
    Some(match b {
        b'a' => '\x07',
        b'b' => '\x08',
        b'f' => '\x0c',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'v' => '\x0b',
        b'\\' => '\\',
        b'\'' => '\'',
        b'"' => '"',
        _ => return None,
    })
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
    limits: ParseLimits,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, limits: ParseLimits) -> Self {
        Parser {
            input: input.as_bytes(),
            pos: 0,
            depth: 0,
            limits,
        }
    }

    fn fail<T>(&self, message: impl Into<String>) -> Parsed<T> {
        Err(Failure {
            pos: self.pos,
            message: message.into(),
        })
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_space(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    /// Skip whitespace, then consume `byte` if it is next.
    fn eat(&mut self, byte: u8) -> bool {
        self.skip_space();
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Parsed<()> {
        if self.eat(byte) {
            Ok(())
        } else {
            self.fail(format!("expected '{}'", byte as char))
        }
    }

    /// Consume `literal` if the input continues with it.
    fn eat_literal(&mut self, literal: &str) -> bool {
        if self.input[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    fn document(&mut self) -> Parsed<Value> {
        self.skip_space();
        let root = match self.peek() {
            Some(b'{') => self.object()?,
            Some(b'[') => self.array()?,
            _ => return self.fail("expected '{' or '[' at document root"),
        };
        self.skip_space();
        if self.pos < self.input.len() {
            return self.fail("unexpected trailing input");
        }
        Ok(root)
    }

    fn enter(&mut self) -> Parsed<()> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return self.fail(format!(
                "nesting deeper than {} levels",
                self.limits.max_depth
            ));
        }
        Ok(())
    }

    fn object(&mut self) -> Parsed<Value> {
        self.expect(b'{')?;
        self.enter()?;
        let mut map = Map::new();
        if !self.eat(b'}') {
            loop {
                let key = self.key()?;
                self.expect(b':')?;
                let value = self.element()?;
                map.entry(key).or_insert(value);
                if self.eat(b'}') {
                    break;
                }
                self.expect(b',')?;
            }
        }
        self.depth -= 1;
        Ok(Value::Map(map))
    }

    fn array(&mut self) -> Parsed<Value> {
        self.expect(b'[')?;
        self.enter()?;
        let mut seq = Sequence::new();
        if !self.eat(b']') {
            loop {
                seq.push(self.element()?);
                if self.eat(b']') {
                    break;
                }
                self.expect(b',')?;
            }
        }
        self.depth -= 1;
        Ok(Value::Sequence(seq))
    }

    fn element(&mut self) -> Parsed<Value> {
        self.skip_space();
        match self.peek() {
            Some(b'{') => self.object(),
            Some(b'[') => self.array(),
            _ => self.value(),
        }
    }

    /// `float | uint | int | bool | null | string`, in that order.
    fn value(&mut self) -> Parsed<Value> {
        self.skip_space();
        if let Some(f) = self.float() {
            return Ok(Value::Float(f));
        }
        if let Some(u) = self.uint() {
            return Ok(Value::UnsignedInteger(u));
        }
        if let Some(i) = self.int() {
            return Ok(Value::Integer(i));
        }
        if self.eat_literal("true") {
            return Ok(Value::Boolean(true));
        }
        if self.eat_literal("false") {
            return Ok(Value::Boolean(false));
        }
        if self.eat_literal("null") {
            return Ok(Value::Null);
        }
        if self.peek() == Some(b'"') {
            return self.string().map(Value::String);
        }
        self.fail("expected a value")
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn sign(&mut self) {
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
    }

    /// Run `scan` and parse what it consumed; rewind if either step fails.
    fn number<T: std::str::FromStr>(&mut self, scan: impl FnOnce(&mut Self) -> bool) -> Option<T> {
        let start = self.pos;
        let parsed = if scan(self) {
            std::str::from_utf8(&self.input[start..self.pos])
                .ok()
                .and_then(|text| text.parse().ok())
        } else {
            None
        };
        if parsed.is_none() {
            self.pos = start;
        }
        parsed
    }

    /// `[+-]? digits? '.' digits? ([eE] [+-]? digits)?`, at least one digit.
    fn float(&mut self) -> Option<f64> {
        self.number(|p| {
            p.sign();
            let whole = p.digits();
            if p.peek() != Some(b'.') {
                return false;
            }
            p.pos += 1;
            let fraction = p.digits();
            if whole + fraction == 0 {
                return false;
            }
            if matches!(p.peek(), Some(b'e' | b'E')) {
                let mark = p.pos;
                p.pos += 1;
                p.sign();
                if p.digits() == 0 {
                    p.pos = mark;
                }
            }
            true
        })
    }

    fn uint(&mut self) -> Option<u64> {
        self.number(|p| p.digits() > 0)
    }

    fn int(&mut self) -> Option<i64> {
        self.number(|p| {
            p.sign();
            p.digits() > 0
        })
    }

    fn key(&mut self) -> Parsed<String> {
        self.expect(b'"')?;
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphanumeric()) {
            self.pos += 1;
        }
        // Alphanumeric ASCII only, so always valid UTF-8.
        let key = String::from_utf8_lossy(&self.input[start..self.pos]).into_owned();
        if self.peek() != Some(b'"') {
            return self.fail("object keys may only contain alphanumeric characters");
        }
        self.pos += 1;
        Ok(key)
    }

    /// The opening quote is next.
    fn string(&mut self) -> Parsed<String> {
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.peek() {
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    self.pos += 1;
                    let Some(code) = self.peek() else {
                        return self.fail("unterminated escape sequence");
                    };
                    if code == b'x' {
                        self.pos += 1;
                        out.push(self.hex_byte()?);
                    } else if let Some(ch) = unescape(code) {
                        self.pos += 1;
                        out.push(ch);
                    } else {
                        return self.fail(format!("unknown escape sequence '\\{}'", code as char));
                    }
                }
                Some(b) if b.is_ascii_alphanumeric() || b == b' ' || b == b'/' => {
                    self.pos += 1;
                    out.push(b as char);
                }
                Some(_) => return self.fail("unsupported character in string"),
                None => return self.fail("unterminated string"),
            }
        }
    }

    /// One or two hex digits after `\x`.
    fn hex_byte(&mut self) -> Parsed<char> {
        let mut byte: u8 = 0;
        let mut count = 0;
        while count < 2 {
            let Some(digit) = self.peek().and_then(|b| (b as char).to_digit(16)) else {
                break;
            };
            byte = byte * 16 + digit as u8;
            self.pos += 1;
            count += 1;
        }
        if count == 0 {
            return self.fail("expected hex digits after '\\x'");
        }
        Ok(char::from(byte))
    }
}

/// 1-based line and column of byte offset `pos`.
fn line_column(input: &str, pos: usize) -> (usize, usize) {
    let before = &input.as_bytes()[..pos.min(input.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    (line, pos - line_start + 1)
}

/// Parse a whole document, reporting the first error.
pub(crate) fn parse(input: &str, limits: ParseLimits) -> Result<Value> {
    if let Some(max) = limits.max_input_len {
        if input.len() > max {
            return Err(ContainerError::Parse {
                line: 1,
                column: 1,
                message: format!("input of {} bytes exceeds limit of {max}", input.len()),
            });
        }
    }
    let mut parser = Parser::new(input, limits);
    parser.document().map_err(|failure| {
        let (line, column) = line_column(input, failure.pos);
        ContainerError::Parse {
            line,
            column,
            message: failure.message,
        }
    })
}
