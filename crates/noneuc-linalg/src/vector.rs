use std::{array, fmt};

use crate::{
    traits::{Cast, Number, Sqrt},
    DimensionMismatch, One, Zero,
};

mod fast;
mod kernel;
mod ops;

pub use fast::Unrolled;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// The elements are stored inline as a `[T; N]`. A [`Vector`] never allocates, its dimension
/// cannot change, and copying it copies all `N` elements.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::ZERO`] is a vector containing all-zeroes. The [`Default`] implementation initializes
///   each element with its default value (zero for all numeric types).
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::from_partial`] fills the leading elements from a slice and zeroes the rest.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices of
///   the right length using [`Vector::from_slice`] or the [`TryFrom`] implementation.
/// - [`Vector::concat`] and [`Vector::append`] join two vectors, or a vector and a scalar, into a
///   larger vector. The dimensions are checked at compile time.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   are unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays. Indexing out of bounds
///   panics; [`Vector::get`] and [`Vector::get_mut`] return [`Option`]s instead.
/// - For vectors with up to 4 dimensions, `x()`, `y()`, `z()` and `w()` return the respective
///   element.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the underlying
///   storage, for example to hand it to a graphics API.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Arithmetic
///
/// `+`, `-`, `*` and `/` between two vectors operate element-wise (`*` is the Hadamard product).
/// `*` and `/` with a scalar scale every element. All operators return a new vector. Nothing checks
/// for division by zero: with floating-point elements the result follows IEEE 754.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero + Copy, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);

    /// Returns [`Vector::ZERO`].
    #[inline]
    pub const fn zeroed() -> Self {
        Self::ZERO
    }
}

impl<T: Zero + One> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from a list of at most `N` leading elements.
    ///
    /// Elements not covered by `elems` are set to [`T::ZERO`][Zero::ZERO].
    ///
    /// # Panics
    ///
    /// Panics if `elems` has more than `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v = Vec4::from_partial(&[1, 2]);
    /// assert_eq!(v, vec4(1, 2, 0, 0));
    /// ```
    #[track_caller]
    pub fn from_partial(elems: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        assert!(
            elems.len() <= N,
            "{} elements do not fit into a {}-dimensional vector",
            elems.len(),
            N,
        );
        Self::from_fn(|i| elems.get(i).copied().unwrap_or(T::ZERO))
    }

    /// Creates a vector by copying exactly `N` elements from a slice.
    ///
    /// Use the [`TryFrom`] implementation to handle a length mismatch without panicking.
    ///
    /// # Panics
    ///
    /// Panics if the length of `elems` is not `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let buf = [0.5, 1.5, 2.5];
    /// assert_eq!(Vec3f::from_slice(&buf), vec3(0.5, 1.5, 2.5));
    /// ```
    #[track_caller]
    pub fn from_slice(elems: &[T]) -> Self
    where
        T: Copy,
    {
        match Self::try_from(elems) {
            Ok(v) => v,
            Err(e) => panic!("cannot create a {N}-dimensional vector from a slice: {e}"),
        }
    }

    /// Concatenates `head` and `tail` into a single vector.
    ///
    /// `A + B` must be equal to `N`. This is checked at compile time: a mismatched call fails to
    /// build.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v: Vec4<i32> = Vector::concat(vec2(1, 2), vec2(3, 4));
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    ///
    /// ```compile_fail
    /// # use noneuc_linalg::*;
    /// let v: Vec4<i32> = Vector::concat(vec2(1, 2), vec3(3, 4, 5));
    /// ```
    pub fn concat<const A: usize, const B: usize>(head: Vector<T, A>, tail: Vector<T, B>) -> Self
    where
        T: Copy,
    {
        const { assert!(A + B == N, "concatenated dimensions must add up to the target dimension") };
        Self::from_fn(|i| if i < A { head.0[i] } else { tail.0[i - A] })
    }

    /// Appends a scalar to this vector, yielding a vector with `M = N + 1` elements.
    ///
    /// This is the usual way of turning a position into homogeneous coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let pos = vec3(1.0, 2.0, 3.0);
    /// let homogeneous: Vec4<f64> = pos.append(1.0);
    /// assert_eq!(homogeneous, vec4(1.0, 2.0, 3.0, 1.0));
    /// ```
    pub fn append<const M: usize>(self, value: T) -> Vector<T, M>
    where
        T: Copy,
    {
        Vector::concat(self, Vector([value]))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Converts each element to `U` using `as`-cast semantics.
    ///
    /// Float to integer conversions truncate toward zero and saturate; see [`Cast`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v = vec3(1.9f32, -1.9, 300.0).cast::<u8>();
    /// assert_eq!(v, vec3(1, 0, 255));
    ///
    /// let v = vec2(3u8, 7).cast::<f32>();
    /// assert_eq!(v, vec2(3.0, 7.0));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Overwrites every element with `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.fill(7);
    /// assert_eq!(v, [7, 7, 7]);
    /// ```
    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        self.0.fill(value);
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.get(1), Some(&6));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared Euclidean norm of this [`Vector`] (the sum of its squared elements).
    ///
    /// Cheaper than [`Vector::norm`], since no square root is taken.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// assert_eq!(vec2(4, 3).norm2(), 25);
    /// ```
    #[doc(alias = "length2")]
    pub fn norm2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean norm (length) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// assert_eq!(vec2(4.0, 3.0).norm(), 5.0);
    /// assert_eq!(Vec3f::Z.norm(), 1.0);
    /// ```
    #[doc(alias = "length")]
    pub fn norm(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.norm2().sqrt()
    }

    /// Divides this vector by its norm, resulting in a unit vector.
    ///
    /// `self` must have a non-zero norm. This is not checked: normalizing a zero vector divides
    /// `0` by `0` and yields NaN in every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert!(Vec3f::ZERO.normalize().as_slice().iter().all(|e| e.is_nan()));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.norm()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Products are summed from the first element to the last.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        kernel::dot(&self.0, &other.0)
    }
}

macro_rules! accessors {
    ($n:literal: $($get:ident $get_mut:ident $i:literal),+) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[inline]
                pub const fn $get(&self) -> T {
                    self.0[$i]
                }

                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.0[$i]
                }
            )+
        }
    };
}
accessors!(1: x x_mut 0);
accessors!(2: x x_mut 0, y y_mut 1);
accessors!(3: x x_mut 0, y y_mut 1, z z_mut 2);
accessors!(4: x x_mut 0, y y_mut 1, z z_mut 2, w w_mut 3);

impl<T> Vector<T, 1> {
    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.0;
        Vector([x, value])
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a single element.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, _] = self.0;
        Vector([x])
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts its
    /// direction. Only 3-dimensional vectors have this method, so calling it on any other
    /// dimension is a compile error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    ///
    /// ```compile_fail
    /// # use noneuc_linalg::*;
    /// Vec4f::X.cross(Vec4f::Y);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = DimensionMismatch;

    fn try_from(elems: &[T]) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(elems)
            .map(Self)
            .map_err(|_| DimensionMismatch {
                expected: N,
                actual: elems.len(),
            })
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Writes every element followed by `", "`, including the last one (`1, 2, 3, `).
///
/// Formatting options such as precision are applied to each element.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in &self.0 {
            fmt::Display::fmt(elem, f)?;
            f.write_str(", ")?;
        }
        Ok(())
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use crate::assert_approx_eq;

    use super::*;

    fn random_vec3(rng: &mut Rng) -> Vec3f {
        Vector::from_fn(|_| (rng.f32() - 0.5) * 200.0)
    }

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x(), 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::Y.y(), 1.0);
        assert_eq!(Vec3f::Y.z(), 0.0);
        assert_eq!(Vec4f::W.w(), 1.0);

        let mut v = vec2(0, 1);
        *v.x_mut() = 777;
        assert_eq!(v.x(), 777);
        assert_eq!(v[0], 777);
        v[1] = 9;
        assert_eq!(v.y(), 9);
        assert_eq!(v, [777, 9]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_bounds() {
        let v = vec3(1, 2, 3);
        let i = v.as_slice().len();
        let _ = v[i];
    }

    #[test]
    fn construction() {
        assert_eq!(Vec3f::default(), Vec3f::ZERO);
        assert_eq!(Vector::<i32, 3>::splat(4), [4, 4, 4]);
        assert_eq!(Vec4::from_partial(&[1, 2, 3]), [1, 2, 3, 0]);
        assert_eq!(Vec2::<u8>::from_partial(&[]), [0, 0]);
        assert_eq!(Vec3::from_slice(&[3, 2, 1]), [3, 2, 1]);

        let copy = vec3(1, 2, 3);
        let mut other = copy;
        other[0] = 100;
        assert_eq!(copy, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "3 elements do not fit into a 2-dimensional vector")]
    fn from_partial_too_long() {
        Vec2::from_partial(&[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "expected 3 elements, got 2")]
    fn from_slice_wrong_length() {
        Vec3f::from_slice(&[1.0, 2.0]);
    }

    #[test]
    fn try_from_slice() {
        let buf = [1, 2, 3, 4, 5];
        assert_eq!(Vec3::<i32>::try_from(&buf[..3]), Ok(vec3(1, 2, 3)));
        assert_eq!(
            Vec3::<i32>::try_from(&buf[..]),
            Err(DimensionMismatch {
                expected: 3,
                actual: 5
            })
        );
    }

    #[test]
    fn concat() {
        let v: Vec4<i32> = vec3(1, 2, 3).append(4);
        assert_eq!(v, vec4(1, 2, 3, 4));
        assert_eq!(vec3(1, 2, 3).extend(4), v);

        let v: Vector<i32, 5> = Vector::concat(vec2(1, 2), vec3(3, 4, 5));
        assert_eq!(v, [1, 2, 3, 4, 5]);

        let v: Vec2<i32> = Vector::concat(Vector::<i32, 0>::default(), vec2(8, 9));
        assert_eq!(v, [8, 9]);

        assert_eq!(v.truncate().extend(0), vec2(8, 0));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec3(1, 2, 3)), "1, 2, 3, ");
        assert_eq!(format!("{}", Vec4f::W), "0, 0, 0, 1, ");
        assert_eq!(format!("{:.1}", vec2(0.34f32, 1.0)), "0.3, 1.0, ");
        assert_eq!(format!("{}", Vector::<f32, 0>::ZERO), "");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn fill() {
        let mut v = Vec4f::W;
        v.fill(2.5);
        assert_eq!(v, Vector::splat(2.5));
    }

    #[test]
    fn cast() {
        assert_eq!(vec3(1.5f32, -2.7, 9.99).cast::<i32>(), vec3(1, -2, 9));
        assert_eq!(vec2(f32::NAN, f32::INFINITY).cast::<i16>(), vec2(0, i16::MAX));
        assert_eq!(vec2(1i32, -1).cast::<f64>(), vec2(1.0, -1.0));
        assert_eq!(vec2(-1i32, 256).cast::<u8>(), vec2(255, 0));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vector::<i32, 0>::default().dot(Vector::default()), 0);
    }

    #[test]
    fn norm() {
        assert_eq!(vec2(3.0, 4.0).norm2(), 25.0);
        assert_eq!(vec2(3.0, 4.0).norm(), 5.0);
        assert_eq!(vec4(1.0, 1.0, 1.0, 1.0).norm(), 2.0);

        let mut rng = Rng::with_seed(7);
        for _ in 0..500 {
            let v = random_vec3(&mut rng);
            assert_approx_eq!(v.normalize().norm(), 1.0).abs(1e-6);
        }
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vec3f::ZERO.normalize();
        assert!(n.x().is_nan() && n.y().is_nan() && n.z().is_nan());

        let n = vec2(0.0f64, 0.0).normalize();
        assert!(n.x().is_nan() && n.y().is_nan());
    }

    #[test]
    fn cross() {
        let mut rng = Rng::with_seed(3);
        for _ in 0..500 {
            let a = random_vec3(&mut rng);
            let b = random_vec3(&mut rng);
            assert_eq!(a.cross(b), -b.cross(a));

            let c = a.cross(b);
            let tolerance = a.norm() * b.norm() * c.norm() * 1e-5;
            assert_approx_eq!(a.dot(c), 0.0).abs(tolerance);
            assert_approx_eq!(b.dot(c), 0.0).abs(tolerance);
        }

        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
    }
}
