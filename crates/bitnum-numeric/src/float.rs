//! Shared implementation for the IEEE-754 scalar types.
//!
//! Floating values have no native bitwise operators, so every bit-level
//! operator goes through the value's bit pattern: reinterpret as the unsigned
//! integer of the same width, operate there, reinterpret back.

/// Implement [`Numeric`](crate::Numeric), [`ByteCodec`](crate::ByteCodec) and
/// the `std::ops` sugar for a `#[repr(transparent)]` float newtype.
macro_rules! float_numeric {
    ($name:ident, $repr:ty, $bits:ty, $bit_length:expr, $read:ident, $write:ident) => {
        impl $name {
            /// Wrap a raw value.
            #[inline]
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            #[inline]
            fn bit_pattern(self) -> $bits {
                self.0.to_bits()
            }

            #[inline]
            fn from_bit_pattern(bits: $bits) -> Self {
                Self(<$repr>::from_bits(bits))
            }
        }

        impl $crate::Numeric for $name {
            type Repr = $repr;

            const BIT_LENGTH: u32 = $bit_length;

            #[inline]
            fn value(&self) -> $repr {
                self.0
            }

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self(self.0 * rhs.0)
            }

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self(self.0 / rhs.0)
            }

            #[inline]
            fn rem(self, rhs: Self) -> Self {
                Self(self.0 % rhs.0)
            }

            #[inline]
            fn exp(self, rhs: Self) -> Self {
                Self(self.0.powf(rhs.0))
            }

            #[inline]
            fn and(self, rhs: Self) -> Self {
                Self::from_bit_pattern(self.bit_pattern() & rhs.bit_pattern())
            }

            #[inline]
            fn or(self, rhs: Self) -> Self {
                Self::from_bit_pattern(self.bit_pattern() | rhs.bit_pattern())
            }

            #[inline]
            fn xor(self, rhs: Self) -> Self {
                Self::from_bit_pattern(self.bit_pattern() ^ rhs.bit_pattern())
            }

            #[inline]
            fn not(self) -> Self {
                Self::from_bit_pattern(!self.bit_pattern())
            }

            #[inline]
            fn logical_left(self, n: u32) -> Self {
                Self::from_bit_pattern($crate::numeric::shift_left(self.bit_pattern(), n))
            }

            #[inline]
            fn logical_right(self, n: u32) -> Self {
                Self::from_bit_pattern($crate::numeric::shift_right(self.bit_pattern(), n))
            }

            #[inline]
            fn rotate_left(self, n: u32) -> Self {
                Self::from_bit_pattern($crate::numeric::rotate_left(self.bit_pattern(), n))
            }

            #[inline]
            fn rotate_right(self, n: u32) -> Self {
                Self::from_bit_pattern($crate::numeric::rotate_right(self.bit_pattern(), n))
            }
        }

        impl $crate::ByteCodec for $name {}

        impl $crate::codec::sealed::RawCodec for $name {
            #[inline]
            fn decode_exact<O: byteorder::ByteOrder>(buf: &[u8]) -> Self {
                Self(O::$read(buf))
            }

            #[inline]
            fn encode_into<O: byteorder::ByteOrder>(self, buf: &mut [u8]) {
                O::$write(buf, self.0)
            }
        }

        impl From<$repr> for $name {
            #[inline]
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $repr {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $crate::Numeric::add(self, rhs)
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $crate::Numeric::sub(self, rhs)
            }
        }

        impl std::ops::Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                $crate::Numeric::mul(self, rhs)
            }
        }

        impl std::ops::Div for $name {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                $crate::Numeric::div(self, rhs)
            }
        }

        impl std::ops::Rem for $name {
            type Output = Self;
            fn rem(self, rhs: Self) -> Self {
                $crate::Numeric::rem(self, rhs)
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                $crate::Numeric::and(self, rhs)
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                $crate::Numeric::or(self, rhs)
            }
        }

        impl std::ops::BitXor for $name {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                $crate::Numeric::xor(self, rhs)
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;
            fn not(self) -> Self {
                $crate::Numeric::not(self)
            }
        }

        impl std::ops::Shl<u32> for $name {
            type Output = Self;
            fn shl(self, n: u32) -> Self {
                $crate::Numeric::logical_left(self, n)
            }
        }

        impl std::ops::Shr<u32> for $name {
            type Output = Self;
            fn shr(self, n: u32) -> Self {
                $crate::Numeric::logical_right(self, n)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$repr as serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }
    };
}

pub(crate) use float_numeric;
