// cosy-value - Runtime value type for the Cosy language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # cosy-value
//!
//! Runtime value representation for the Cosy language: a closed sum
//! type over whole numbers, strings, complex numbers, and sequences,
//! with addition, complex coercion, and canonical text rendering.
//!
//! The host evaluator constructs values, combines them with
//! [`Cosy::combine`] (or `&a + &b`), coerces them with
//! [`Cosy::to_complex`], and renders them with `Display`.

pub mod error;
pub mod value;

mod add;
mod coerce;

pub use error::{Error, Result};
pub use num_complex::Complex64;
pub use value::Cosy;
