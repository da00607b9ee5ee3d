//! Fixed-width byte codec.
//!
//! [`ByteCodec`] turns a [`Numeric`] value into exactly `BYTE_LENGTH` bytes and
//! back, in either byte order. The byte order is a type parameter drawn from
//! `byteorder`, so big- and little-endian share one code path.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use bitnum_common::{Error, Result, Uint8Vector};

use crate::Numeric;

pub(crate) mod sealed {
    use byteorder::ByteOrder;

    /// Unchecked codec primitives. Only reachable through the length-checked
    /// methods of [`ByteCodec`](super::ByteCodec).
    pub trait RawCodec {
        /// Decode from a buffer of exactly `BYTE_LENGTH` bytes.
        fn decode_exact<O: ByteOrder>(buf: &[u8]) -> Self;

        /// Encode into a buffer of exactly `BYTE_LENGTH` bytes.
        fn encode_into<O: ByteOrder>(self, buf: &mut [u8]);
    }
}

/// Byte-exact serialization of a fixed-width numeric value.
///
/// Decoders accept any ordered byte sequence (`&[u8]`, `[u8; N]`, `Vec<u8>`,
/// [`Uint8Vector`]) and reject inputs whose length is not exactly
/// [`BYTE_LENGTH`](Self::BYTE_LENGTH). Encoders are total.
///
/// # Example
///
/// ```
/// use bitnum_numeric::{ByteCodec, Float32, Numeric};
///
/// let bytes = Float32::new(1.0).to_be_bytes();
/// assert_eq!(bytes.as_slice(), &[0x3F, 0x80, 0x00, 0x00]);
///
/// let value = Float32::from_be_bytes([0xC0, 0x00, 0x00, 0x00])?;
/// assert_eq!(value.value(), -2.0);
///
/// assert!(Float32::from_le_bytes([0x00, 0x00, 0x80]).is_err());
/// # Ok::<(), bitnum_common::Error>(())
/// ```
pub trait ByteCodec: Numeric + sealed::RawCodec {
    /// Encoded width in bytes.
    const BYTE_LENGTH: usize = (Self::BIT_LENGTH / 8) as usize;

    /// Decode under byte order `O`, checking the input length.
    fn from_bytes<O: ByteOrder>(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        if bytes.len() != Self::BYTE_LENGTH {
            return Err(Error::InvalidLength {
                expected: Self::BYTE_LENGTH,
                actual: bytes.len(),
            });
        }
        Ok(Self::decode_exact::<O>(bytes))
    }

    /// Decode from big-endian bytes (most significant byte first).
    fn from_be_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::from_bytes::<BigEndian>(bytes)
    }

    /// Decode from little-endian bytes (least significant byte first).
    fn from_le_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::from_bytes::<LittleEndian>(bytes)
    }

    /// Encode under byte order `O`.
    fn to_bytes<O: ByteOrder>(self) -> Uint8Vector {
        let mut buf = vec![0u8; Self::BYTE_LENGTH];
        self.encode_into::<O>(&mut buf);
        Uint8Vector::from(buf)
    }

    /// Encode as big-endian bytes.
    fn to_be_bytes(self) -> Uint8Vector {
        self.to_bytes::<BigEndian>()
    }

    /// Encode as little-endian bytes.
    fn to_le_bytes(self) -> Uint8Vector {
        self.to_bytes::<LittleEndian>()
    }
}
