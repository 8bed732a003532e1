//! Tolerance-based comparison of floating-point values and everything built from them.
//!
//! Exact `==` is the right tool for checking that two computations perform the same arithmetic.
//! Everything else (angles recovered from trigonometry, normalized directions, projected points)
//! should be compared with [`assert_approx_eq!`][crate::assert_approx_eq].

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types (vectors, matrices, arrays) are approximately equal when every pair of
/// corresponding elements is.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The type tolerances are expressed in. [`f32`] or [`f64`] in practice.
    type Tolerance: Tolerances + Copy;

    /// Returns whether `|self - other| <= tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Returns whether `|self - other| <= max(|self|, |other|) * tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps` representable values lie between `self` and `other`.
    ///
    /// NaN never compares equal. `-0.0` and `+0.0` always do, but otherwise values of opposite
    /// sign never do.
    fn ulps_diff_eq(&self, other: &Rhs, ulps: u32) -> bool;
}

/// Default tolerances used when an assertion does not configure any comparison.
pub trait Tolerances {
    /// Default tolerance for [`ApproxEq::abs_diff_eq`].
    const ABS: Self;
    /// Default tolerance for [`ApproxEq::rel_diff_eq`].
    const REL: Self;
}

macro_rules! float_approx_eq {
    ($($float:ty),+) => {
        $(
            impl Tolerances for $float {
                const ABS: Self = <$float>::EPSILON;
                const REL: Self = <$float>::EPSILON;
            }

            impl ApproxEq for $float {
                type Tolerance = $float;

                fn abs_diff_eq(&self, other: &Self, tolerance: $float) -> bool {
                    // Infinities only match themselves.
                    if self.is_finite() && other.is_finite() {
                        (self - other).abs() <= tolerance
                    } else {
                        self == other
                    }
                }

                fn rel_diff_eq(&self, other: &Self, tolerance: $float) -> bool {
                    if self.is_finite() && other.is_finite() {
                        (self - other).abs() <= self.abs().max(other.abs()) * tolerance
                    } else {
                        self == other
                    }
                }

                fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
                    if self.is_nan() || other.is_nan() {
                        return false;
                    }
                    if self.is_sign_negative() != other.is_sign_negative() {
                        return self == other;
                    }
                    self.to_bits().abs_diff(other.to_bits()) <= ulps.into()
                }
            }
        )+
    };
}
float_approx_eq!(f32, f64);

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], ulps: u32) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.ulps_diff_eq(b, ulps))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self[..].abs_diff_eq(&other[..], tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self[..].rel_diff_eq(&other[..], tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps: u32) -> bool {
        self[..].ulps_diff_eq(&other[..], ulps)
    }
}

#[derive(Clone, Copy)]
struct Checks<Tol> {
    abs: Option<Tol>,
    rel: Option<Tol>,
    ulps: Option<u32>,
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped, at the end of the statement. Before that,
/// [`Asserter::abs`], [`Asserter::rel`] and [`Asserter::ulps`] select which comparisons to run.
/// The values count as equal if *any* selected comparison says so.
///
/// Without any configuration, an absolute and a relative comparison are run, both with the
/// tolerances from [`Tolerances`].
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expect: Expect,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    checks: Checks<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(left: &'a T, right: &'a T, expect: Expect, msg: Option<fmt::Arguments<'a>>) -> Self {
        Self {
            left,
            right,
            expect,
            location: Location::caller(),
            msg,
            checks: Checks {
                abs: None,
                rel: None,
                ulps: None,
            },
        }
    }

    /// Compares the absolute difference against `tolerance`.
    ///
    /// Use this for values near zero, where relative comparisons break down.
    pub fn abs(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.checks.abs = Some(tolerance);
        self
    }

    /// Compares the absolute difference against `tolerance` times the larger magnitude.
    ///
    /// Any non-zero value needs a tolerance of at least 1.0 to compare equal to zero.
    pub fn rel(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.checks.rel = Some(tolerance);
        self
    }

    /// Compares the number of representable floats between the values against `ulps`.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.checks.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        let mut checks = self.checks;
        if checks.abs.is_none() && checks.rel.is_none() && checks.ulps.is_none() {
            checks.abs = Some(T::Tolerance::ABS);
            checks.rel = Some(T::Tolerance::REL);
        }

        let (l, r) = (self.left, self.right);
        checks.abs.is_some_and(|tol| l.abs_diff_eq(r, tol))
            || checks.rel.is_some_and(|tol| l.rel_diff_eq(r, tol))
            || checks.ulps.is_some_and(|ulps| l.ulps_diff_eq(r, ulps))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        let equal = self.equal();
        if equal != (self.expect == Expect::Equal) {
            fail(self.left, self.right, self.expect, self.location, self.msg);
        }
    }
}

// `#[track_caller]` has no effect in `drop`, so the location is captured in `Asserter::new` and
// printed explicitly.
fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect: Expect,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match expect {
        Expect::Equal => "==",
        Expect::NotEqual => "!=",
    };
    let msg = msg.map(|args| format!(": {args}")).unwrap_or_default();
    panic!("assertion `left {op} right` failed at {location}{msg}\n  left: {left:?}\n right: {right:?}");
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Equal,
    NotEqual,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can select the comparison and
/// its tolerance. See also [`assert_approx_ne!`].
///
/// # Examples
///
/// ```
/// # use noneuc_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(vec2(100.0, 1.0), vec2(99.0, 1.0)).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expect::Equal,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expect::Equal,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use noneuc_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(Vec3f::X, Vec3f::Y);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expect::NotEqual,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::Expect::NotEqual,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
