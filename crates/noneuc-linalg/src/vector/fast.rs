use crate::Sqrt;

use super::{kernel, Vector};

/// Lane-by-lane versions of the vector operations used in the per-frame camera update.
///
/// Implemented for [`Vec2f`] and [`Vec3f`]. Each method is written out for the exact number of
/// lanes instead of iterating, but uses the same lane arithmetic and the same summation order as
/// the generic implementation, so the results are bit-for-bit identical to the corresponding
/// operator or method on [`Vector`]:
///
/// | fast path              | generic equivalent |
/// |------------------------|--------------------|
/// | [`dot_unrolled`]       | [`Vector::dot`]    |
/// | [`add_unrolled`]       | `a + b`            |
/// | [`sub_unrolled`]       | `a - b`            |
/// | [`scale_unrolled`]     | `a * s`            |
/// | [`div_unrolled`]       | `a / s`            |
/// | [`normalize_unrolled`] | [`Vector::normalize`] |
///
/// # Examples
///
/// ```
/// # use noneuc_linalg::*;
/// let a = vec3(1.0f32, 2.0, 3.0);
/// let b = vec3(-4.0f32, 0.5, 2.0);
/// assert_eq!(a.dot_unrolled(b), a.dot(b));
/// assert_eq!(a.add_unrolled(b), a + b);
/// ```
///
/// [`Vec2f`]: crate::Vec2f
/// [`Vec3f`]: crate::Vec3f
/// [`dot_unrolled`]: Unrolled::dot_unrolled
/// [`add_unrolled`]: Unrolled::add_unrolled
/// [`sub_unrolled`]: Unrolled::sub_unrolled
/// [`scale_unrolled`]: Unrolled::scale_unrolled
/// [`div_unrolled`]: Unrolled::div_unrolled
/// [`normalize_unrolled`]: Unrolled::normalize_unrolled
pub trait Unrolled: Copy {
    /// The element type.
    type Elem: Sqrt + Copy;

    fn dot_unrolled(self, other: Self) -> Self::Elem;
    fn add_unrolled(self, other: Self) -> Self;
    fn sub_unrolled(self, other: Self) -> Self;
    fn scale_unrolled(self, scalar: Self::Elem) -> Self;
    fn div_unrolled(self, scalar: Self::Elem) -> Self;

    /// Divides `self` by its norm.
    ///
    /// Like [`Vector::normalize`], a zero vector yields NaN in every lane.
    #[inline]
    fn normalize_unrolled(self) -> Self {
        let norm = self.dot_unrolled(self).sqrt();
        self.div_unrolled(norm)
    }
}

macro_rules! unrolled {
    (@dot $a:ident, $b:ident; $first:literal $(, $rest:literal)*) => {{
        let acc = kernel::mul($a[$first], $b[$first]);
        $( let acc = kernel::accumulate(acc, $a[$rest], $b[$rest]); )*
        acc
    }};
    ($elem:ty; $n:literal; $($lane:literal),+) => {
        impl Unrolled for Vector<$elem, $n> {
            type Elem = $elem;

            #[inline(always)]
            fn dot_unrolled(self, other: Self) -> $elem {
                let (a, b) = (self.0, other.0);
                unrolled!(@dot a, b; $($lane),+)
            }

            #[inline(always)]
            fn add_unrolled(self, other: Self) -> Self {
                let (a, b) = (self.0, other.0);
                Vector([$(kernel::add(a[$lane], b[$lane])),+])
            }

            #[inline(always)]
            fn sub_unrolled(self, other: Self) -> Self {
                let (a, b) = (self.0, other.0);
                Vector([$(kernel::sub(a[$lane], b[$lane])),+])
            }

            #[inline(always)]
            fn scale_unrolled(self, scalar: $elem) -> Self {
                let a = self.0;
                Vector([$(kernel::mul(a[$lane], scalar)),+])
            }

            #[inline(always)]
            fn div_unrolled(self, scalar: $elem) -> Self {
                let a = self.0;
                Vector([$(kernel::div(a[$lane], scalar)),+])
            }
        }
    };
}

unrolled!(f32; 2; 0, 1);
unrolled!(f32; 3; 0, 1, 2);

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use crate::{vec2, vec3, Vec2f, Vec3f, Vector};

    use super::Unrolled;

    const ROUNDS: usize = 2000;

    /// Mixes ordinary values with the inputs most likely to expose a difference in evaluation
    /// order: signed zeros, tiny and huge magnitudes, infinities and NaN.
    fn lane(rng: &mut Rng) -> f32 {
        match rng.u8(0..16) {
            0 => 0.0,
            1 => -0.0,
            2 => f32::MIN_POSITIVE * rng.f32(),
            3 => f32::MAX * (rng.f32() - 0.5),
            4 => f32::INFINITY,
            5 => f32::NEG_INFINITY,
            6 => f32::NAN,
            _ => (rng.f32() - 0.5) * 2000.0,
        }
    }

    fn random<const N: usize>(rng: &mut Rng) -> Vector<f32, N> {
        Vector::from_fn(|_| lane(rng))
    }

    /// Bit patterns, with every NaN collapsed to one canonical value. The payload of a NaN
    /// depends on operand order inside the FPU, which is not part of the contract.
    fn bits<const N: usize>(v: Vector<f32, N>) -> [u32; N] {
        v.map(scalar_bits).into_array()
    }

    fn scalar_bits(x: f32) -> u32 {
        if x.is_nan() {
            f32::NAN.to_bits()
        } else {
            x.to_bits()
        }
    }

    fn check<const N: usize>(rng: &mut Rng)
    where
        Vector<f32, N>: Unrolled<Elem = f32>,
    {
        for _ in 0..ROUNDS {
            let a = random::<N>(rng);
            let b = random::<N>(rng);
            let s = lane(rng);

            assert_eq!(
                scalar_bits(a.dot_unrolled(b)),
                scalar_bits(a.dot(b)),
                "dot {a:?} {b:?}"
            );
            assert_eq!(bits(a.add_unrolled(b)), bits(a + b), "add {a:?} {b:?}");
            assert_eq!(bits(a.sub_unrolled(b)), bits(a - b), "sub {a:?} {b:?}");
            assert_eq!(bits(a.scale_unrolled(s)), bits(a * s), "mul {a:?} {s}");
            assert_eq!(bits(a.div_unrolled(s)), bits(a / s), "div {a:?} {s}");
            assert_eq!(
                bits(a.normalize_unrolled()),
                bits(a.normalize()),
                "normalize {a:?}"
            );
        }
    }

    #[test]
    fn equivalent_2d() {
        check::<2>(&mut Rng::with_seed(0x2d));
    }

    #[test]
    fn equivalent_3d() {
        check::<3>(&mut Rng::with_seed(0x3d));
    }

    #[test]
    fn negative_zero_dot() {
        let a = vec3(-0.0f32, 0.0, -0.0);
        let b = vec3(1.0, -1.0, 1.0);
        assert!(a.dot_unrolled(b).is_sign_negative());
        assert!(a.dot(b).is_sign_negative());
    }

    #[test]
    fn values() {
        assert_eq!(vec2(3.0f32, 4.0).dot_unrolled(vec2(3.0, 4.0)), 25.0);
        assert_eq!(Vec3f::X.add_unrolled(Vec3f::Y), vec3(1.0, 1.0, 0.0));
        assert_eq!(Vec2f::X.sub_unrolled(Vec2f::Y), vec2(1.0, -1.0));
        assert_eq!(vec3(1.0f32, -2.0, 3.0).scale_unrolled(2.0), vec3(2.0, -4.0, 6.0));
        assert_eq!(vec2(1.0f32, -2.0).div_unrolled(4.0), vec2(0.25, -0.5));
        assert_eq!(vec3(0.0f32, 0.0, 4.0).normalize_unrolled(), Vec3f::Z);
    }
}
