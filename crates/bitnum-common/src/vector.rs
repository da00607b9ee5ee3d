//! Ordered byte container.
//!
//! [`Uint8Vector`] is the byte sequence that numeric encoders produce and
//! decoders accept. It is an ordered run of bytes convertible to and from a
//! raw contiguous buffer, nothing more.

use std::fmt;

/// An ordered sequence of 8-bit unsigned values.
///
/// # Example
///
/// ```
/// use bitnum_common::Uint8Vector;
///
/// let bytes = Uint8Vector::from([0x3F, 0x80, 0x00, 0x00]);
/// assert_eq!(bytes.len(), 4);
/// assert_eq!(bytes.as_slice(), &[0x3F, 0x80, 0x00, 0x00]);
/// assert_eq!(format!("{:x}", bytes), "3f800000");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Uint8Vector {
    bytes: Vec<u8>,
}

impl Uint8Vector {
    /// Create an empty container.
    #[inline]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create a container by copying a raw buffer.
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Number of bytes held.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the container holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Get the byte at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Borrow the contents as a raw buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy the contents into a new raw buffer.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Take the underlying buffer.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }

    /// Iterate over the bytes in order.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.bytes.iter().copied()
    }

    /// Append another container's bytes.
    pub fn extend_from(&mut self, other: &Uint8Vector) {
        self.bytes.extend_from_slice(&other.bytes);
    }
}

impl AsRef<[u8]> for Uint8Vector {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Uint8Vector {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for Uint8Vector {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for Uint8Vector {
    #[inline]
    fn from(bytes: [u8; N]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl From<Uint8Vector> for Vec<u8> {
    #[inline]
    fn from(vector: Uint8Vector) -> Self {
        vector.bytes
    }
}

impl FromIterator<u8> for Uint8Vector {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            bytes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Uint8Vector {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_iter()
    }
}

impl PartialEq<[u8]> for Uint8Vector {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Uint8Vector {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.bytes == other
    }
}

impl fmt::Debug for Uint8Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint8Vector({:02x?})", self.bytes)
    }
}

impl fmt::LowerHex for Uint8Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Uint8Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uint8Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(&self.bytes)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uint8Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<u8>::deserialize(deserializer).map(Self::from)
    }
}
