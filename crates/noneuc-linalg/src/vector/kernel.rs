//! Per-lane arithmetic shared by the generic vector operations and the [`Unrolled`] fast path.
//!
//! Both paths must produce bit-identical results, so neither of them is allowed to spell out the
//! arithmetic itself. Any change to the semantics of a lane operation happens here.
//!
//! [`Unrolled`]: super::Unrolled

use std::ops::{Add, Div, Mul, Sub};

use crate::Zero;

#[inline(always)]
pub(super) fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

#[inline(always)]
pub(super) fn sub<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

#[inline(always)]
pub(super) fn mul<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

#[inline(always)]
pub(super) fn div<T: Div<Output = T>>(a: T, b: T) -> T {
    a / b
}

/// `acc + a * b`, as two separately rounded operations (never fused).
#[inline(always)]
pub(super) fn accumulate<T: Add<Output = T> + Mul<Output = T>>(acc: T, a: T, b: T) -> T {
    acc + a * b
}

/// Sum of lane-wise products, accumulated left to right.
///
/// The first product seeds the accumulator; starting from `0` would turn a `-0.0` result into
/// `+0.0` and break equivalence with the unrolled form.
#[inline(always)]
pub(super) fn dot<T, const N: usize>(a: &[T; N], b: &[T; N]) -> T
where
    T: Zero + Add<Output = T> + Mul<Output = T> + Copy,
{
    let mut lanes = a.iter().zip(b);
    match lanes.next() {
        None => T::ZERO,
        Some((&a0, &b0)) => lanes.fold(mul(a0, b0), |acc, (&a, &b)| accumulate(acc, a, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_keeps_negative_zero() {
        let d = dot(&[-0.0f32], &[1.0]);
        assert!(d.is_sign_negative());
        assert_eq!(dot::<f32, 0>(&[], &[]), 0.0);
    }

    #[test]
    fn accumulate_is_not_fused() {
        // With a fused multiply-add the rounding error of `a * b` would survive.
        let a = 1.0f32 + f32::EPSILON;
        let b = 1.0f32 - f32::EPSILON;
        let exact_product = a * b;
        assert_eq!(accumulate(-1.0, a, b), exact_product - 1.0);
    }
}
