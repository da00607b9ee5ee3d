//! bitnum - fixed-width numeric value types with byte-exact codecs.
//!
//! This crate provides a unified interface to the bitnum crates.
//!
//! # Crates
//!
//! - [`bitnum_common`] - Error type and the [`Uint8Vector`](common::Uint8Vector) byte container
//! - [`bitnum_numeric`] - The [`Numeric`](numeric::Numeric) contract and the concrete scalar types
//!
//! # Example
//!
//! ```
//! use bitnum::prelude::*;
//!
//! let value = Float32::from_be_bytes([0xC0, 0x00, 0x00, 0x00])?;
//! assert_eq!(value.value(), -2.0);
//!
//! let doubled = value.mul(Float32::new(2.0));
//! assert_eq!(doubled.to_be_bytes(), [0xC0, 0x80, 0x00, 0x00]);
//! # Ok::<(), bitnum::Error>(())
//! ```

// Re-export all sub-crates
pub use bitnum_common as common;
pub use bitnum_numeric as numeric;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bitnum_common::{Error, Uint8Vector};
    pub use bitnum_numeric::{
        BigEndian, ByteCodec, Float32, Float64, LittleEndian, Numeric, ValueReader, ValueWriter,
    };
}

// Re-export commonly used types at the crate root
pub use bitnum_common::{Error, Result};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
