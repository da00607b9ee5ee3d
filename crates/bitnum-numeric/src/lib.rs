//! Fixed-width numeric value types for bitnum.
//!
//! Each supported width is wrapped in a dedicated immutable type:
//!
//! - [`Float32`] - IEEE-754 single precision
//! - [`Float64`] - IEEE-754 double precision
//!
//! Every type implements [`Numeric`] (arithmetic, bitwise, shift and rotate
//! operators returning the same concrete type) and [`ByteCodec`] (byte-exact
//! big- and little-endian encoding). [`ValueReader`] and [`ValueWriter`]
//! stream several values through one buffer.
//!
//! # Example
//!
//! ```
//! use bitnum_numeric::{ByteCodec, Float32, Numeric};
//!
//! let sum = Float32::new(1.5).add(Float32::new(2.0));
//! let bytes = sum.to_le_bytes();
//! let back = Float32::from_le_bytes(&bytes)?;
//!
//! assert_eq!(back.value(), 3.5);
//! assert_eq!(back.rotate_left(40).value().to_bits(), 3.5f32.to_bits().rotate_left(8));
//! # Ok::<(), bitnum_common::Error>(())
//! ```

mod codec;
mod float;
mod float32;
mod float64;
mod reader;

pub mod numeric;

pub use codec::ByteCodec;
pub use float32::Float32;
pub use float64::Float64;
pub use numeric::Numeric;
pub use reader::{ValueReader, ValueWriter};

/// Re-export the byte order markers used by the generic codec.
pub use byteorder::{BigEndian, ByteOrder, LittleEndian};
