//! Operator impls. All arithmetic goes through the lane kernels in [`super::kernel`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::{kernel, Vector};

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

// Allows comparing vectors with different (but comparable) element types, and with arrays.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == *other
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for Vector<T, N> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps)
    }
}

/// Vector-vector operators, applied lane by lane.
macro_rules! lanewise {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident => $kernel:ident;)+) => {
        $(
            impl<T: $Op<Output = T> + Copy, const N: usize> $Op for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $op(self, rhs: Self) -> Self {
                    Self::from_fn(|i| kernel::$kernel(self.0[i], rhs.0[i]))
                }
            }

            impl<T: $Op<Output = T> + Copy, const N: usize> $OpAssign for Vector<T, N> {
                #[inline]
                fn $op_assign(&mut self, rhs: Self) {
                    *self = $Op::$op(*self, rhs);
                }
            }
        )+
    };
}

lanewise! {
    Add::add, AddAssign::add_assign => add;
    Sub::sub, SubAssign::sub_assign => sub;
    Mul::mul, MulAssign::mul_assign => mul;
    Div::div, DivAssign::div_assign => div;
}

/// Vector-scalar operators, applying the scalar to every lane.
macro_rules! scalar {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident => $kernel:ident;)+) => {
        $(
            impl<T: $Op<Output = T> + Copy, const N: usize> $Op<T> for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $op(self, rhs: T) -> Self {
                    self.map(|lane| kernel::$kernel(lane, rhs))
                }
            }

            impl<T: $Op<Output = T> + Copy, const N: usize> $OpAssign<T> for Vector<T, N> {
                #[inline]
                fn $op_assign(&mut self, rhs: T) {
                    *self = $Op::$op(*self, rhs);
                }
            }
        )+
    };
}

scalar! {
    Mul::mul, MulAssign::mul_assign => mul;
    Div::div, DivAssign::div_assign => div;
}

// `s * v` for the float types; a blanket impl over `T` is not allowed by coherence.
macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|lane| kernel::mul(self, lane))
                }
            }
        )+
    };
}

scalar_lhs!(f32, f64);

impl<T: Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use crate::{assert_approx_eq, vec2, vec3, Vec3f, Vector};

    fn random<const N: usize>(rng: &mut Rng) -> Vector<f32, N> {
        Vector::from_fn(|_| (rng.f32() - 0.5) * 1000.0)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(vec3(1, 2, 3) + vec3(10, 20, 30), [11, 22, 33]);
        assert_eq!(vec3(1, 2, 3) - vec3(10, 20, 30), [-9, -18, -27]);
        assert_eq!(vec3(1, 2, 3) * vec3(10, 20, 30), [10, 40, 90]);
        assert_eq!(vec3(10, 20, 30) / vec3(1, 2, 3), [10, 10, 10]);
        assert_eq!(vec3(1, 2, 3) * 2, [2, 4, 6]);
        assert_eq!(vec3(2, 4, 6) / 2, [1, 2, 3]);
        assert_eq!(2.0f32 * vec2(1.5, -1.0), [3.0, -2.0]);
        assert_eq!(-vec2(1, -2), [-1, 2]);
    }

    #[test]
    fn assign() {
        let mut v = vec2(1.0, 2.0);
        v += vec2(1.0, 1.0);
        assert_eq!(v, [2.0, 3.0]);
        v -= vec2(0.5, 0.5);
        assert_eq!(v, [1.5, 2.5]);
        v *= 2.0;
        assert_eq!(v, [3.0, 5.0]);
        v /= 2.0;
        assert_eq!(v, [1.5, 2.5]);
        v *= vec2(2.0, 0.0);
        assert_eq!(v, [3.0, 0.0]);
        v /= vec2(3.0, 1.0);
        assert_eq!(v, [1.0, 0.0]);
    }

    #[test]
    fn division_by_zero() {
        let v = vec3(1.0f32, -1.0, 0.0) / 0.0;
        assert_eq!(v.x(), f32::INFINITY);
        assert_eq!(v.y(), f32::NEG_INFINITY);
        assert!(v.z().is_nan());

        let v = Vec3f::X / Vec3f::ZERO;
        assert_eq!(v.x(), f32::INFINITY);
        assert!(v.y().is_nan());
    }

    #[test]
    fn properties() {
        let mut rng = Rng::with_seed(0x5eed);
        for _ in 0..1000 {
            let a = random::<3>(&mut rng);
            let b = random::<3>(&mut rng);
            let s = loop {
                let s = (rng.f32() - 0.5) * 20.0;
                if s.abs() > 1e-3 {
                    break s;
                }
            };

            assert_eq!(a + b, b + a);
            assert_eq!(a.dot(b), b.dot(a));
            assert_approx_eq!((a + b) - b, a).abs(1e-3);
            assert_approx_eq!((a * s) / s, a).rel(1e-5).abs(1e-3);
        }
    }

    #[test]
    fn approx() {
        assert_approx_eq!(vec2(1.0, 2.0), vec2(1.0, 2.0 + f64::EPSILON));
        assert_approx_eq!(Vec3f::ZERO, vec3(0.0, 0.0, 1e-3)).abs(1e-2);
        crate::assert_approx_ne!(Vec3f::ZERO, vec3(0.0, 0.0, 1e-3)).abs(1e-4);
    }
}
