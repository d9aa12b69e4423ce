//! Recursive-descent parser for the document format.
//!
//! ```text
//! value   := array | object | string | boolean | number
//! array   := '[' ( value ( ',' value )* )? ']'
//! object  := '{' ( string ':' value ( ',' string ':' value )* )? '}'
//! string  := '"' <any character except '"'>* '"'
//! boolean := "true" | "false"
//! number  := '-'? digit+ ( '.' digit+ )?
//! ```
//!
//! Whitespace is allowed between any two tokens. Strings carry no escape
//! sequences: the first `"` after the opening quote terminates the string.
//! Numbers are accumulated digit by digit; a `.` selects [`Value::Float`],
//! its absence selects [`Value::Integer`].

use crate::error::{DocumentError, Result};
use crate::value::{Array, Object, Value};

/// Fractional digits past this point cannot change an `f64` and are skipped.
const MAX_FRACTION_DIGITS: i32 = 18;

/// Deepest array/object nesting accepted before giving up.
pub const MAX_DEPTH: usize = 128;

/// Parse a complete document. Anything but whitespace after the root value
/// is an error.
pub fn parse(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos < parser.bytes.len() {
        return Err(DocumentError::TrailingCharacters { offset: parser.pos });
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Error for the character at the current position.
    fn unexpected(&self, expected: &'static str) -> DocumentError {
        match self.input[self.pos..].chars().next() {
            Some(found) => DocumentError::UnexpectedChar {
                found,
                offset: self.pos,
                expected,
            },
            None => DocumentError::UnexpectedEnd { expected },
        }
    }

    /// Skip whitespace, then consume `byte` or fail.
    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<()> {
        self.skip_whitespace();
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'[') => self.nested(Self::parse_array),
            Some(b'{') => self.nested(Self::parse_object),
            Some(b'"') => self.parse_string().map(Value::Text),
            Some(b't' | b'f') => self.parse_bool(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            _ => Err(self.unexpected("a value")),
        }
    }

    /// Runs a container production one nesting level deeper.
    fn nested(&mut self, production: fn(&mut Self) -> Result<Value>) -> Result<Value> {
        if self.depth >= MAX_DEPTH {
            return Err(DocumentError::NestingTooDeep { offset: self.pos });
        }
        self.depth += 1;
        let value = production(self);
        self.depth -= 1;
        value
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.expect(b'[', "'['")?;
        let mut items = Array::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.expect(b'{', "'{'")?;
        let mut fields = Object::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(fields));
        }

        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.unexpected("an object key"));
            }
            let key = self.parse_string()?;
            self.expect(b':', "':'")?;
            let value = self.parse_value()?;
            // First occurrence of a key wins
            fields.entry(key).or_insert(value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(fields));
                }
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }
    }

    /// Consumes `"…"` and returns the raw contents.
    fn parse_string(&mut self) -> Result<String> {
        self.expect(b'"', "'\"'")?;
        let start = self.pos;
        match self.bytes[start..].iter().position(|&b| b == b'"') {
            Some(len) => {
                self.pos = start + len + 1;
                Ok(self.input[start..start + len].to_owned())
            }
            None => {
                self.pos = self.bytes.len();
                Err(DocumentError::UnexpectedEnd {
                    expected: "closing '\"'",
                })
            }
        }
    }

    fn parse_bool(&mut self) -> Result<Value> {
        let rest = &self.bytes[self.pos..];
        if rest.starts_with(b"true") {
            self.pos += 4;
            Ok(Value::Bool(true))
        } else if rest.starts_with(b"false") {
            self.pos += 5;
            Ok(Value::Bool(false))
        } else {
            Err(self.unexpected("'true' or 'false'"))
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let negative = self.peek() == Some(b'-');
        if negative {
            self.pos += 1;
        }

        // Integer part, tracked both exactly (until it overflows) and as f64
        let mut exact: Option<i64> = Some(0);
        let mut approx = 0.0_f64;
        let mut int_digits = 0;
        while let Some(d @ b'0'..=b'9') = self.peek() {
            let digit = i64::from(d - b'0');
            exact = exact
                .and_then(|n| n.checked_mul(10))
                .and_then(|n| n.checked_add(digit));
            approx = approx * 10.0 + digit as f64;
            int_digits += 1;
            self.pos += 1;
        }
        if int_digits == 0 {
            return Err(self.unexpected("a digit"));
        }

        if self.peek() != Some(b'.') {
            let magnitude = exact.ok_or(DocumentError::IntegerOverflow { offset: start })?;
            let signed = if negative { -magnitude } else { magnitude };
            return i32::try_from(signed)
                .map(Value::Integer)
                .map_err(|_| DocumentError::IntegerOverflow { offset: start });
        }
        self.pos += 1;

        let fraction_start = self.pos;
        let mut fraction = 0.0_f64;
        let mut fraction_digits = 0;
        while let Some(d @ b'0'..=b'9') = self.peek() {
            if fraction_digits < MAX_FRACTION_DIGITS {
                fraction = fraction * 10.0 + f64::from(d - b'0');
                fraction_digits += 1;
            }
            self.pos += 1;
        }
        if self.pos == fraction_start {
            return Err(self.unexpected("a digit"));
        }

        let magnitude = approx + fraction / 10f64.powi(fraction_digits);
        Ok(Value::Float(if negative { -magnitude } else { magnitude }))
    }
}
