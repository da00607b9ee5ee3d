//! The numeric value-type contract.
//!
//! [`Numeric`] is the operator vocabulary every concrete scalar provides.
//! Operators consume `self` and return a new value of the same concrete type,
//! so generic code can chain them without knowing the width or kind.
//!
//! The shift and rotate rules are written once here, generic over any unsigned
//! primitive integer, and shared by every concrete width.

use std::fmt;

use num_traits::{PrimInt, Unsigned};

/// Operator surface of a fixed-width numeric value.
///
/// Values are immutable. Every operator is total: arithmetic follows the
/// representation's native semantics and bit-level operators act on the
/// fixed-width bit pattern.
///
/// # Example
///
/// ```
/// use bitnum_numeric::{Float32, Numeric};
///
/// fn double<T: Numeric>(value: T) -> T {
///     value.add(value)
/// }
///
/// assert_eq!(double(Float32::new(1.5)).value(), 3.0);
/// ```
pub trait Numeric: Copy + Default + PartialEq + fmt::Debug {
    /// Storage representation of the value.
    type Repr: Copy;

    /// Width of the bit pattern. Governs shifts, rotations and the byte codec.
    const BIT_LENGTH: u32;

    /// Raw underlying representation.
    fn value(&self) -> Self::Repr;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;
    fn rem(self, rhs: Self) -> Self;

    /// Raise `self` to the power `rhs`.
    fn exp(self, rhs: Self) -> Self;

    fn and(self, rhs: Self) -> Self;
    fn or(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;
    fn not(self) -> Self;

    /// Shift the bit pattern left by `n`, zero-filling. All-zero when `n >= BIT_LENGTH`.
    fn logical_left(self, n: u32) -> Self;

    /// Shift the bit pattern right by `n`, zero-filling. All-zero when `n >= BIT_LENGTH`.
    fn logical_right(self, n: u32) -> Self;

    /// Rotate the bit pattern left by `n mod BIT_LENGTH`.
    fn rotate_left(self, n: u32) -> Self;

    /// Rotate the bit pattern right by `n mod BIT_LENGTH`.
    fn rotate_right(self, n: u32) -> Self;
}

/// Number of bits in the unsigned pattern type `B`.
#[inline]
pub fn bit_width<B: PrimInt + Unsigned>() -> u32 {
    B::zero().count_zeros()
}

/// Logical left shift. Shifting by the full width or more yields zero.
#[inline]
pub fn shift_left<B: PrimInt + Unsigned>(bits: B, n: u32) -> B {
    if n >= bit_width::<B>() {
        return B::zero();
    }
    bits.unsigned_shl(n)
}

/// Logical right shift. Shifting by the full width or more yields zero.
#[inline]
pub fn shift_right<B: PrimInt + Unsigned>(bits: B, n: u32) -> B {
    if n >= bit_width::<B>() {
        return B::zero();
    }
    bits.unsigned_shr(n)
}

/// Circular left rotation by `n` modulo the bit width.
#[inline]
pub fn rotate_left<B: PrimInt + Unsigned>(bits: B, n: u32) -> B {
    let width = bit_width::<B>();
    let n = n % width;
    shift_left(bits, n) | shift_right(bits, (width - n) % width)
}

/// Circular right rotation by `n` modulo the bit width.
#[inline]
pub fn rotate_right<B: PrimInt + Unsigned>(bits: B, n: u32) -> B {
    let width = bit_width::<B>();
    let n = n % width;
    shift_right(bits, n) | shift_left(bits, (width - n) % width)
}
