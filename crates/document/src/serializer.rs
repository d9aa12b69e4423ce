//! Canonical text form of a [`Value`].
//!
//! Arrays are written as `[e1, e2]`, objects as `{"a":1, "b":2}` with keys in
//! sorted order, strings between quotes without escaping. Floats are rounded
//! to [`FLOAT_PRECISION`] significant digits and always written in positional
//! notation with at least one fractional digit, so they read back as floats.

use std::fmt::{self, Write};

use crate::value::Value;

/// Significant digits kept when writing a float.
pub const FLOAT_PRECISION: usize = 7;

pub fn serialize(value: &Value) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Value::Object(fields) => {
                f.write_char('{')?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{key}\":{value}")?;
                }
                f.write_char('}')
            }
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

fn format_float(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    if x == 0.0 {
        return "0.0".to_owned();
    }

    // Let the formatter do the rounding, then lay the digits out positionally
    let scientific = format!("{:.*e}", FLOAT_PRECISION - 1, x.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let (int_part, frac_part) = if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        ("0".to_owned(), format!("{zeros}{digits}"))
    } else {
        let split = exponent as usize + 1;
        if split >= digits.len() {
            let zeros = "0".repeat(split - digits.len());
            (format!("{digits}{zeros}"), String::new())
        } else {
            (digits[..split].to_owned(), digits[split..].to_owned())
        }
    };

    let frac_part = frac_part.trim_end_matches('0');
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    let sign = if x < 0.0 { "-" } else { "" };
    format!("{sign}{int_part}.{frac_part}")
}
