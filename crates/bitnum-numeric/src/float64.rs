//! 64-bit IEEE-754 floating-point value type.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::float::float_numeric;

/// A double-precision floating-point value.
///
/// Same operator semantics as [`Float32`](crate::Float32) over a 64-bit
/// pattern and an 8-byte encoding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct Float64(f64);

float_numeric!(Float64, f64, u64, 64, read_f64, write_f64);
