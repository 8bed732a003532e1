use std::{array, fmt};

use crate::{Number, One, Trig, Vector, Zero};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// A matrix is `C` column vectors of type [`Vector<T, R>`], stored back to back. Memory layout
/// therefore matches what GLSL and WGSL expect for `matN` uniforms, and
/// [`Matrix::as_flat_slice`] hands out the elements in that order.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from arrays or vectors.
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::ZERO`] and [`Matrix::identity`] for the usual constants.
/// - [`Matrix::perspective`] builds a perspective projection.
///
/// # Element Access
///
/// [`Matrix`] is indexed with `(row, col)` tuples, matching mathematical notation. Indices are
/// 0-based and indexing out of bounds panics. [`Matrix::get`] and [`Matrix::get_mut`] are the
/// checked alternatives.
///
/// ```
/// # use noneuc_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat.get(0, 2), None);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [Vector<T, R>; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::ZERO; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns the identity matrix, with 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying a vector with the square identity matrix returns the vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let v = vec3(1.5, -2.0, 0.25);
    /// assert_eq!(Mat3f::identity() * v, v);
    /// assert_eq!(Matrix::<i32, 2, 3>::identity(), Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(Into::into))
    }

    /// Creates a [`Matrix`] by invoking a closure with the row and column of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| Vector::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the column at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    #[track_caller]
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col]
    }

    /// Returns the row at index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.row(1), [3, 4, 5]);
    /// assert_eq!(mat.column(1), [1, 4]);
    /// ```
    #[track_caller]
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        assert!(row < R, "row index {row} out of range for a matrix with {R} rows");
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Returns the column vectors of this matrix.
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.0
    }

    /// Returns all elements in column-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(mat.as_flat_slice(), &[1.0, 3.0, 2.0, 4.0]);
    /// ```
    pub fn as_flat_slice(&self) -> &[T]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(&self.0[..])
    }

    /// Returns the raw bytes of this matrix, in column-major order.
    ///
    /// This is the buffer to upload for a `matN` uniform.
    pub fn as_bytes(&self) -> &[u8]
    where
        T: bytemuck::Pod,
    {
        bytemuck::bytes_of(self)
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    /// Prints the matrix row by row. `{:#?}` puts each row on its own line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T, const R: usize, const C: usize> {
            mat: &'a Matrix<T, R, C>,
            row: usize,
        }

        impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Row<'_, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for (i, column) in self.mat.0.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Debug::fmt(&column[self.row], f)?;
                }
                f.write_str("]")
            }
        }

        f.debug_list()
            .entries((0..R).map(|row| Row { mat: self, row }))
            .finish()
    }
}

impl<T: Number + Trig + PartialOrd> Matrix<T, 4, 4> {
    /// Creates a right-handed perspective projection matrix mapping view-space depth
    /// `[-near, -far]` to clip-space `[-1, 1]`.
    ///
    /// `fov_y` is the vertical field of view in radians and `aspect` is the viewport width divided
    /// by its height. With `f = cot(fov_y / 2)`, the result is:
    ///
    /// ```text
    /// f / aspect  0   0                              0
    /// 0           f   0                              0
    /// 0           0   (far + near) / (near - far)    2 * far * near / (near - far)
    /// 0           0   -1                             0
    /// ```
    ///
    /// # Panics
    ///
    /// Panics unless `fov_y > 0`, `aspect > 0`, `near >= 0` and `far > near`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use noneuc_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let p = Mat4f::perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
    /// assert_approx_eq!(p[(0, 0)], 1.0).abs(1e-6);
    /// assert_approx_eq!(p[(2, 2)], -101.0 / 99.0);
    /// assert_eq!(p[(3, 2)], -1.0);
    /// ```
    #[track_caller]
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        assert!(fov_y > T::ZERO, "field of view must be positive");
        assert!(aspect > T::ZERO, "aspect ratio must be positive");
        assert!(near >= T::ZERO, "near plane must not be negative");
        assert!(far > near, "far plane must lie beyond the near plane");

        let two = T::ONE + T::ONE;
        let f = T::ONE / (fov_y / two).tan();
        let depth = near - far;
        let z = T::ZERO;

        #[rustfmt::skip]
        let p = Self::from_rows([
            [f / aspect, z,  z,                    z                        ],
            [z,          f,  z,                    z                        ],
            [z,          z,  (far + near) / depth, two * far * near / depth ],
            [z,          z,  -T::ONE,              z                        ],
        ]);
        p
    }
}

impl<T: Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, vec2, vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Matrix::<i32, 3, 2>::from_columns([vec3(1, 2, 3), vec3(4, 5, 6)]).column(1),
            [4, 5, 6]
        );
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
        assert_eq!(format!("{:#?}", mat), "[\n    [0, 1],\n    [2, 3],\n]");
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[test]
    #[should_panic(expected = "row index 2 out of range")]
    fn row_out_of_range() {
        Mat2f::identity().row(2);
    }

    #[test]
    fn flat_layout() {
        let mat = Matrix::<f32, 3, 2>::from_rows([[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(mat.as_flat_slice(), &[1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
        assert_eq!(mat.as_bytes().len(), 6 * 4);
        assert_eq!(&mat.as_bytes()[..4], &1.0f32.to_ne_bytes());
        assert_eq!(&mat.as_bytes()[4..8], &3.0f32.to_ne_bytes());
        assert_eq!(Mat4f::identity().as_flat_slice().len(), 16);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        assert_eq!(mat * vec, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);

        let v = vec3(-0.5, 2.0, 1e6);
        assert_eq!(Mat3f::identity() * v, v);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
        assert_eq!(Mat2::identity() * b, b);
    }

    #[test]
    fn perspective() {
        let p = Mat4f::perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
        assert_approx_eq!(p[(0, 0)], 1.0).abs(1e-6);
        assert_approx_eq!(p[(1, 1)], 1.0).abs(1e-6);
        assert_approx_eq!(p[(2, 2)], -1.0202).abs(1e-4);
        assert_approx_eq!(p[(2, 3)], -2.0202).abs(1e-4);
        assert_eq!(p[(3, 2)], -1.0);
        for (row, col) in [(0, 1), (0, 2), (0, 3), (1, 0), (1, 2), (1, 3), (2, 0), (2, 1), (3, 0)] {
            assert_eq!(p[(row, col)], 0.0, "({row}, {col})");
        }
        assert_eq!(p[(3, 3)], 0.0);

        let wide = Mat4f::perspective(FRAC_PI_2, 2.0, 1.0, 100.0);
        assert_approx_eq!(wide[(0, 0)], 0.5).abs(1e-6);
        assert_eq!(wide[(1, 1)], p[(1, 1)]);
    }

    #[test]
    fn perspective_maps_depth_range() {
        let p = Mat4f::perspective(1.0, 1.5, 0.5, 50.0);
        for (depth, ndc) in [(-0.5, -1.0), (-50.0, 1.0)] {
            let clip = p * vec3(0.0, 0.0, depth).extend(1.0);
            assert_approx_eq!(clip.z() / clip.w(), ndc).abs(1e-5);
        }
    }

    #[test]
    #[should_panic(expected = "far plane must lie beyond the near plane")]
    fn perspective_far_before_near() {
        Mat4f::perspective(FRAC_PI_2, 1.0, 10.0, 10.0);
    }

    #[test]
    #[should_panic(expected = "field of view must be positive")]
    fn perspective_zero_fov() {
        Mat4f::perspective(0.0, 1.0, 1.0, 100.0);
    }

    #[test]
    #[should_panic(expected = "near plane must not be negative")]
    fn perspective_negative_near() {
        Mat4f::perspective(FRAC_PI_2, 1.0, -1.0, 100.0);
    }

    #[test]
    #[should_panic(expected = "aspect ratio must be positive")]
    fn perspective_negative_aspect() {
        Mat4f::perspective(1.0, -1.0, 1.0, 100.0);
    }
}
