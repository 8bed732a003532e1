use std::ops::{Index, IndexMut, Mul};

use crate::{approx::ApproxEq, traits::Number, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[col][row]
    }
}

impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T: ApproxEq, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C> {
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

/// Matrix * column vector: the linear combination of the columns weighted by `rhs`.
impl<T: Number, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        self.0
            .into_iter()
            .zip(rhs.into_array())
            .fold(Vector::ZERO, |acc, (column, weight)| acc + column * weight)
    }
}

/// Matrix * matrix: each column of `rhs` transformed by `self`.
impl<T: Number, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        Matrix(rhs.0.map(|column| self * column))
    }
}

/// Matrix * scalar.
impl<T: Number, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Matrix(self.0.map(|column| column * rhs))
    }
}
