//! 32-bit IEEE-754 floating-point value type.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::float::float_numeric;

/// A single-precision floating-point value.
///
/// Arithmetic follows IEEE-754 (±∞, NaN propagation, division by zero gives
/// ±∞ or NaN). Bitwise, shift and rotate operators act on the 32-bit pattern
/// of the value, never on its numeric magnitude.
///
/// # Byte Layout
///
/// Big-endian: byte 0 holds bits 31..24, byte 3 holds bits 7..0.
/// Little-endian is the reverse.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct Float32(f32);

float_numeric!(Float32, f32, u32, 32, read_f32, write_f32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteCodec, Numeric};
    use bitnum_common::{Error, Uint8Vector};

    fn bits(value: Float32) -> u32 {
        value.value().to_bits()
    }

    fn samples() -> Vec<Float32> {
        [
            0.0f32,
            -0.0,
            1.0,
            -2.0,
            0.1,
            3.402_823_5e38,
            f32::MIN_POSITIVE,
            1.0e-45,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            f32::from_bits(0x7FC0_1234),
            f32::from_bits(0xFF80_0001),
        ]
        .into_iter()
        .map(Float32::new)
        .collect()
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Float32::default().value(), 0.0);
        assert_eq!(bits(Float32::default()), 0);
        assert_eq!(Float32::BIT_LENGTH, 32);
        assert_eq!(Float32::BYTE_LENGTH, 4);
    }

    #[test]
    fn test_value_unchanged() {
        assert_eq!(Float32::new(-7.25).value(), -7.25);
        assert_eq!(f32::from(Float32::from(0.5)), 0.5);
    }

    #[test]
    fn test_add_is_addition() {
        let a = Float32::new(5.0);
        let b = Float32::new(3.0);
        assert_eq!(a.add(b).value(), 8.0);
        assert_eq!(a.sub(b).value(), 2.0);
        assert_ne!(a.add(b), a.sub(b));
        assert_eq!(a + b, a.add(b));
    }

    #[test]
    fn test_arithmetic() {
        let a = Float32::new(7.0);
        let b = Float32::new(2.0);
        assert_eq!(a.mul(b).value(), 14.0);
        assert_eq!(a.div(b).value(), 3.5);
        assert_eq!(a.rem(b).value(), 1.0);
        assert_eq!(Float32::new(-7.0).rem(b).value(), -1.0);
        assert_eq!(b.exp(Float32::new(10.0)).value(), 1024.0);
        assert_eq!(a * b, a.mul(b));
        assert_eq!(a / b, a.div(b));
        assert_eq!(a % b, a.rem(b));
    }

    #[test]
    fn test_ieee_special_values() {
        let zero = Float32::new(0.0);
        assert_eq!(Float32::new(1.0).div(zero).value(), f32::INFINITY);
        assert_eq!(Float32::new(-1.0).div(zero).value(), f32::NEG_INFINITY);
        assert!(zero.div(zero).value().is_nan());
        assert!(Float32::new(1.0).rem(zero).value().is_nan());
        assert!(Float32::new(f32::NAN).add(Float32::new(1.0)).value().is_nan());
        let inf = Float32::new(f32::INFINITY);
        assert!(inf.sub(inf).value().is_nan());
        assert_eq!(inf.add(Float32::new(1.0)).value(), f32::INFINITY);
    }

    #[test]
    fn test_exp_follows_ieee_pow() {
        let nan = Float32::new(f32::NAN);
        assert_eq!(Float32::new(1.0).exp(nan).value(), 1.0);
        assert_eq!(nan.exp(Float32::new(0.0)).value(), 1.0);
        assert!(Float32::new(2.0).exp(nan).value().is_nan());
        assert_eq!(Float32::new(0.0).exp(Float32::new(-1.0)).value(), f32::INFINITY);
    }

    #[test]
    fn test_bitwise_on_bit_pattern() {
        // 1.0 = 0x3F800000, -2.0 = 0xC0000000
        let one = Float32::new(1.0);
        let neg_two = Float32::new(-2.0);
        assert_eq!(bits(one.and(neg_two)), 0x3F80_0000 & 0xC000_0000);
        assert_eq!(bits(one.or(neg_two)), 0xFF80_0000);
        assert_eq!(bits(one.xor(neg_two)), 0xFF80_0000);
        assert_eq!(bits(one.not()), 0xC07F_FFFF);
        assert_eq!(one.or(neg_two).value(), f32::NEG_INFINITY);
        assert_eq!(bits(one & neg_two), bits(one.and(neg_two)));
        assert_eq!(bits(!one), bits(one.not()));
    }

    #[test]
    fn test_bitwise_identity_laws() {
        for v in samples() {
            assert_eq!(bits(v.and(v)), bits(v));
            assert_eq!(bits(v.or(v)), bits(v));
            assert_eq!(bits(v.xor(v)), 0);
            assert_eq!(bits(v.not().not()), bits(v));
        }
    }

    #[test]
    fn test_logical_shifts() {
        let one = Float32::new(1.0);
        assert_eq!(bits(one.logical_left(1)), 0x7F00_0000);
        assert_eq!(bits(one.logical_right(23)), 0x7F);
        assert_eq!(bits(one.logical_left(0)), bits(one));
        assert_eq!(bits(one << 4), bits(one.logical_left(4)));
        assert_eq!(bits(one >> 4), bits(one.logical_right(4)));
    }

    #[test]
    fn test_shift_saturation() {
        for v in samples() {
            for n in [32u32, 33, 64, 1000, u32::MAX] {
                assert_eq!(bits(v.logical_left(n)), 0);
                assert_eq!(bits(v.logical_right(n)), 0);
            }
        }
    }

    #[test]
    fn test_rotate() {
        let v = Float32::new(-2.0); // 0xC0000000
        assert_eq!(bits(v.rotate_left(2)), 0x0000_0003);
        assert_eq!(bits(v.rotate_right(30)), 0x0000_0003);
        assert_eq!(bits(v.rotate_left(32)), 0xC000_0000);
    }

    #[test]
    fn test_rotate_inverse_and_modulus() {
        for v in samples() {
            for n in 0..=200u32 {
                assert_eq!(bits(v.rotate_left(n).rotate_right(n)), bits(v));
                assert_eq!(bits(v.rotate_left(n)), bits(v.rotate_left(n % 32)));
                assert_eq!(bits(v.rotate_left(n)), bits(v).rotate_left(n));
            }
        }
    }

    #[test]
    fn test_known_encodings() {
        let one = Float32::new(1.0);
        assert_eq!(one.to_be_bytes(), [0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(one.to_le_bytes(), [0x00, 0x00, 0x80, 0x3F]);
        let value = Float32::from_be_bytes([0xC0, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(value.value(), -2.0);
        let value = Float32::from_le_bytes([0x00, 0x00, 0x00, 0xC0]).unwrap();
        assert_eq!(value.value(), -2.0);
    }

    #[test]
    fn test_roundtrip_preserves_bits() {
        for v in samples() {
            let be = Float32::from_be_bytes(v.to_be_bytes()).unwrap();
            let le = Float32::from_le_bytes(v.to_le_bytes()).unwrap();
            assert_eq!(bits(be), bits(v));
            assert_eq!(bits(le), bits(v));
        }
    }

    #[test]
    fn test_be_is_reversed_le() {
        for v in samples() {
            let mut le = v.to_le_bytes().to_vec();
            le.reverse();
            assert_eq!(v.to_be_bytes().to_vec(), le);
        }
    }

    #[test]
    fn test_decode_input_kinds() {
        let raw: &[u8] = &[0x3F, 0x80, 0x00, 0x00];
        let expected = Float32::new(1.0);
        assert_eq!(Float32::from_be_bytes(raw).unwrap(), expected);
        assert_eq!(Float32::from_be_bytes(raw.to_vec()).unwrap(), expected);
        assert_eq!(Float32::from_be_bytes(Uint8Vector::from(raw)).unwrap(), expected);
        assert_eq!(Float32::from_be_bytes(&Uint8Vector::from(raw)).unwrap(), expected);
    }

    #[test]
    fn test_invalid_length() {
        for len in [0usize, 1, 2, 3, 5, 8, 16] {
            let input = vec![0u8; len];
            let expected = Error::InvalidLength {
                expected: 4,
                actual: len,
            };
            assert_eq!(Float32::from_be_bytes(&input), Err(expected.clone()));
            assert_eq!(Float32::from_le_bytes(&input), Err(expected));
        }
    }

    #[test]
    fn test_zerocopy_native_layout() {
        let raw = 1.5f32.to_ne_bytes();
        let value = Float32::read_from_bytes(&raw[..]).unwrap();
        assert_eq!(value.value(), 1.5);
        assert_eq!(value.as_bytes(), &raw[..]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_primitive() {
        let json = serde_json::to_string(&Float32::new(2.5)).unwrap();
        assert_eq!(json, "2.5");
        let back: Float32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), 2.5);
    }
}
