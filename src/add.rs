// cosy-value - Addition over values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The `+` operation over Cosy values.
//!
//! Dispatch is on the pair of variant tags, top to bottom, first match
//! wins:
//!
//! | Left     | Right    | Result |
//! |----------|----------|--------|
//! | String   | String   | concatenation |
//! | String   | Number   | number rendered to decimal text, concatenated |
//! | Number   | String   | same, operand order preserved |
//! | String   | Complex/Sequence (either side) | type error |
//! | Number   | Complex  | number added to the real component |
//! | Complex  | Number   | same, value-symmetric |
//! | Number   | Number   | wrapping integer addition |
//! | Complex  | Complex  | componentwise addition |
//! | Sequence | anything (either side) | type error |
//!
//! ## Integer overflow behaviour
//!
//! Number + Number uses wrapping i64 addition: `i64::MAX + 1` is
//! `i64::MIN`. Complex addition follows IEEE 754 and never errors.
//!
//! Sequences do not participate in addition at all; any pairing with a
//! sequence operand is reported as a type error rather than being
//! swallowed into a default value.

use std::ops::Add;

use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::value::Cosy;

impl Cosy {
    /// Combine two values with `+` semantics, dispatching on the pair
    /// of variant tags.
    ///
    /// Never mutates either operand; always returns a freshly
    /// constructed value. See the module docs for the dispatch table.
    pub fn combine(&self, other: &Cosy) -> Result<Cosy> {
        match (self, other) {
            // String rules bind tightest; numbers on either side of a
            // string are rendered to decimal text first.
            (Cosy::String(a), Cosy::String(b)) => Ok(Cosy::String(format!("{}{}", a, b))),
            (Cosy::String(a), Cosy::Number(b)) => Ok(Cosy::String(format!("{}{}", a, b))),
            (Cosy::Number(a), Cosy::String(b)) => Ok(Cosy::String(format!("{}{}", a, b))),
            (Cosy::String(_), val) | (val, Cosy::String(_)) => Err(Error::type_error_in(
                "+",
                "string or number",
                val.type_name(),
            )),

            (Cosy::Number(a), Cosy::Complex(b)) => {
                Ok(Cosy::Complex(Complex64::new(*a as f64 + b.re, b.im)))
            }
            (Cosy::Complex(a), Cosy::Number(b)) => {
                Ok(Cosy::Complex(Complex64::new(a.re + *b as f64, a.im)))
            }
            (Cosy::Number(a), Cosy::Number(b)) => Ok(Cosy::Number(a.wrapping_add(*b))),
            (Cosy::Complex(a), Cosy::Complex(b)) => {
                Ok(Cosy::Complex(Complex64::new(a.re + b.re, a.im + b.im)))
            }

            // Everything left has a sequence on at least one side.
            (lhs, rhs) => {
                let got = if lhs.is_sequence() { lhs } else { rhs };
                Err(Error::type_error_in(
                    "+",
                    "number, string, or complex",
                    got.type_name(),
                ))
            }
        }
    }
}

impl Add for &Cosy {
    type Output = Result<Cosy>;

    fn add(self, other: Self) -> Self::Output {
        Cosy::combine(self, other)
    }
}
