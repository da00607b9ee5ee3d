//! Common types for bitnum.
//!
//! This crate provides the pieces shared by every bitnum crate:
//!
//! - [`Uint8Vector`] - Ordered byte container produced by encoders and accepted by decoders
//! - [`Error`] - The error type raised at the byte boundary

mod error;
mod vector;

pub use error::{Error, Result};
pub use vector::Uint8Vector;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
