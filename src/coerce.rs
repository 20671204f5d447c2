// cosy-value - Complex coercion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Coercion of values into complex representation.
//!
//! [`Cosy::to_complex`] is the pure form and returns a new value;
//! [`Cosy::coerce_to_complex`] is the in-place convenience wrapper for
//! hosts that want mutate-and-return call shape.
//!
//! Coercion rules:
//! - Number(n) becomes Complex(n, 0). Always succeeds.
//! - Complex is returned unchanged (idempotent).
//! - String fails with a conversion error.
//! - Sequence needs at least two elements. The first two are coerced
//!   recursively and the *real* component of each result becomes the
//!   real and imaginary component respectively; elements past index 1
//!   are ignored. A nested sequence therefore contributes only its own
//!   real component, its imaginary part is dropped.

use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::value::Cosy;

impl Cosy {
    /// Convert this value to its complex form, returning a new value.
    ///
    /// See the module docs for the per-variant rules. The receiver is
    /// never modified; use [`Cosy::coerce_to_complex`] for in-place
    /// rebinding.
    pub fn to_complex(&self) -> Result<Cosy> {
        Ok(Cosy::Complex(self.complex_components()?))
    }

    /// Coerce this value to complex in place, returning the result.
    ///
    /// Convenience wrapper over [`Cosy::to_complex`]. The receiver is
    /// only rebound after the conversion has fully succeeded, so a
    /// failed coercion leaves it untouched.
    pub fn coerce_to_complex(&mut self) -> Result<Cosy> {
        let converted = self.to_complex()?;
        *self = converted.clone();
        Ok(converted)
    }

    /// Compute the complex components for this value.
    fn complex_components(&self) -> Result<Complex64> {
        match self {
            Cosy::Number(n) => Ok(Complex64::new(*n as f64, 0.0)),
            Cosy::Complex(c) => Ok(*c),
            Cosy::String(_) => Err(Error::conversion("string")),
            Cosy::Sequence(elements) => {
                // Length is validated before any recursion.
                if elements.len() < 2 {
                    return Err(Error::conversion_detailed(
                        "sequence",
                        format!(
                            "sequence too short: need at least 2 elements, got {}",
                            elements.len()
                        ),
                    ));
                }
                let re = elements[0].complex_components()?.re;
                let im = elements[1].complex_components()?.re;
                Ok(Complex64::new(re, im))
            }
        }
    }
}
