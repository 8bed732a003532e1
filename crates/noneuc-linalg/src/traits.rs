use std::ops;

/// Types that support the trigonometric functions needed for projections.
pub trait Trig {
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Numeric conversion with the semantics of an `as` cast.
///
/// Float to integer conversions round toward zero and saturate at the bounds of the target type
/// (NaN becomes 0). Integer conversions wrap or sign-extend, and conversions to floats round to the
/// nearest representable value.
///
/// Implemented for every pair of built-in numeric types.
pub trait Cast<U> {
    fn cast(self) -> U;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $types {
                fn tan(self) -> Self {
                    self.tan()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! as_casts {
    (@to $from:ty; $($to:ty),+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
    ($($from:ty),+) => {
        $(
            as_casts!(@to $from; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
        )+
    };
}
as_casts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
