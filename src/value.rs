// cosy-value - Core value type for the Cosy runtime
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for the Cosy runtime.
//!
//! `Cosy` is the central enum representing all runtime values: whole
//! numbers, strings, complex numbers, and sequences. A value owns its
//! payload exclusively; sequences own their elements recursively, so
//! dropping a sequence drops everything it contains. Nothing mutates a
//! value after construction except the explicit in-place coercion
//! wrapper in [`crate::Cosy::coerce_to_complex`], which requires `&mut`
//! access.

use std::fmt;

use num_complex::Complex64;

/// A single runtime value.
///
/// The enum is closed and exhaustive: every operation over values
/// (addition, coercion, rendering) matches on all four variants, so the
/// compiler rules out reading a payload under the wrong tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Cosy {
    /// Whole number (exact, no fractional part)
    Number(i64),
    /// Immutable text
    String(String),
    /// Complex number with real and imaginary components (not normalized;
    /// NaN and infinities pass through untouched)
    Complex(Complex64),
    /// Ordered, heterogeneous sequence of values, recursively owned.
    /// May be empty; may nest arbitrarily. Cycles are impossible because
    /// elements are owned, never referenced.
    Sequence(Vec<Cosy>),
}

impl Cosy {
    /// Create a number value.
    pub fn number(n: i64) -> Self {
        Cosy::Number(n)
    }

    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Cosy::String(s.into())
    }

    /// Create a complex value from real and imaginary components.
    pub fn complex(re: f64, im: f64) -> Self {
        Cosy::Complex(Complex64::new(re, im))
    }

    /// Create a sequence from elements.
    pub fn sequence(elements: Vec<Cosy>) -> Self {
        Cosy::Sequence(elements)
    }

    /// Create an empty sequence.
    pub fn empty_sequence() -> Self {
        Cosy::Sequence(Vec::new())
    }

    /// Name of this value's variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Cosy::Number(_) => "number",
            Cosy::String(_) => "string",
            Cosy::Complex(_) => "complex",
            Cosy::Sequence(_) => "sequence",
        }
    }

    /// Check if this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Cosy::Number(_))
    }

    /// Check if this value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Cosy::String(_))
    }

    /// Check if this value is a complex number.
    pub fn is_complex(&self) -> bool {
        matches!(self, Cosy::Complex(_))
    }

    /// Check if this value is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Cosy::Sequence(_))
    }

    /// Get the number payload, if this is a number.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Cosy::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cosy::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the complex payload, if this is a complex number.
    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            Cosy::Complex(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the sequence elements, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Cosy]> {
        match self {
            Cosy::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Length of this value: element count for sequences, character
    /// count for strings, `None` for numbers and complex values.
    pub fn length(&self) -> Option<usize> {
        match self {
            Cosy::String(s) => Some(s.chars().count()),
            Cosy::Sequence(elements) => Some(elements.len()),
            _ => None,
        }
    }
}

impl Default for Cosy {
    /// The default value is the number zero.
    fn default() -> Self {
        Cosy::Number(0)
    }
}

impl From<i64> for Cosy {
    fn from(n: i64) -> Self {
        Cosy::Number(n)
    }
}

impl From<&str> for Cosy {
    fn from(s: &str) -> Self {
        Cosy::String(s.to_string())
    }
}

impl From<String> for Cosy {
    fn from(s: String) -> Self {
        Cosy::String(s)
    }
}

impl From<Complex64> for Cosy {
    fn from(c: Complex64) -> Self {
        Cosy::Complex(c)
    }
}

impl From<Vec<Cosy>> for Cosy {
    fn from(elements: Vec<Cosy>) -> Self {
        Cosy::Sequence(elements)
    }
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for Cosy {
    /// Render the canonical text form of this value.
    ///
    /// Numbers render as decimal text, strings as their raw contents
    /// (unquoted, unescaped), complex values as `(r + ii)` or
    /// `(r - ii)` depending on the sign of the imaginary component,
    /// and sequences as `{ e0, e1, ..., en }` recursively. Rendering
    /// is total and never fails.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cosy::Number(n) => write!(f, "{}", n),
            Cosy::String(s) => write!(f, "{}", s),
            Cosy::Complex(c) => {
                // Strict >=, so -0.0 takes the plus branch and prints
                // its own sign rather than folding into a minus form.
                if c.im >= 0.0 {
                    write!(f, "({} + {}i)", c.re, c.im)
                } else {
                    write!(f, "({} - {}i)", c.re, -c.im)
                }
            }
            Cosy::Sequence(elements) => {
                write!(f, "{{ ")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, " }}")
            }
        }
    }
}
