//! Sequential reading and writing of numeric values.
//!
//! [`ValueReader`] walks a byte slice decoding one fixed-width value at a
//! time; [`ValueWriter`] appends encoded values into a [`Uint8Vector`].

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use bitnum_common::{Error, Result, Uint8Vector};

use crate::ByteCodec;

/// A cursor over a byte slice that decodes numeric values without copying.
///
/// # Example
///
/// ```
/// use bitnum_numeric::{Float32, Numeric, ValueReader};
///
/// let data = [0x3F, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0];
/// let mut reader = ValueReader::new(&data);
///
/// assert_eq!(reader.read_be::<Float32>().unwrap().value(), 1.0);
/// assert_eq!(reader.read_le::<Float32>().unwrap().value(), -2.0);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ValueReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ValueReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the total length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Seek to an absolute position.
    #[inline]
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        Ok(&self.data[self.position..self.position + count])
    }

    /// Decode the next value under byte order `O` without advancing.
    #[inline]
    pub fn peek<T: ByteCodec, O: ByteOrder>(&self) -> Result<T> {
        self.peek_bytes(T::BYTE_LENGTH)
            .and_then(|bytes| T::from_bytes::<O>(bytes))
    }

    /// Decode the next value under byte order `O` and advance past it.
    #[inline]
    pub fn read<T: ByteCodec, O: ByteOrder>(&mut self) -> Result<T> {
        let value = self.peek::<T, O>()?;
        self.position += T::BYTE_LENGTH;
        Ok(value)
    }

    /// Read a big-endian value.
    #[inline]
    pub fn read_be<T: ByteCodec>(&mut self) -> Result<T> {
        self.read::<T, BigEndian>()
    }

    /// Read a little-endian value.
    #[inline]
    pub fn read_le<T: ByteCodec>(&mut self) -> Result<T> {
        self.read::<T, LittleEndian>()
    }

    /// Peek at a big-endian value.
    #[inline]
    pub fn peek_be<T: ByteCodec>(&self) -> Result<T> {
        self.peek::<T, BigEndian>()
    }

    /// Peek at a little-endian value.
    #[inline]
    pub fn peek_le<T: ByteCodec>(&self) -> Result<T> {
        self.peek::<T, LittleEndian>()
    }
}

/// Appends encoded values into a growing [`Uint8Vector`].
#[derive(Debug, Clone, Default)]
pub struct ValueWriter {
    bytes: Uint8Vector,
}

impl ValueWriter {
    /// Create an empty writer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            bytes: Uint8Vector::new(),
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Append a value encoded under byte order `O`.
    pub fn write<T: ByteCodec, O: ByteOrder>(&mut self, value: T) -> &mut Self {
        self.bytes.extend_from(&value.to_bytes::<O>());
        self
    }

    /// Append a big-endian value.
    #[inline]
    pub fn write_be<T: ByteCodec>(&mut self, value: T) -> &mut Self {
        self.write::<T, BigEndian>(value)
    }

    /// Append a little-endian value.
    #[inline]
    pub fn write_le<T: ByteCodec>(&mut self, value: T) -> &mut Self {
        self.write::<T, LittleEndian>(value)
    }

    /// Finish writing and take the bytes.
    #[inline]
    pub fn into_vector(self) -> Uint8Vector {
        self.bytes
    }
}
