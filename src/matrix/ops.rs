//! Implementations of `std::ops` and the `approx` comparison traits.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{error::ShapeError, traits::Number, vector, Matrix};

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.row(row)[col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.row_mut(row)[col]
    }
}

/// Whole-row access; `mat[i]` is row `i` as a slice.
impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        self.row(row)
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        self.row_mut(row)
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U> PartialEq<Matrix<U>> for Matrix<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U>) -> bool {
        self.shape() == other.shape() && self.elems.eq(&other.elems)
    }
}

impl<T> Eq for Matrix<T> where T: Eq {}

/// Comparison against a fixed-size array of rows, mostly useful in tests.
impl<T, U, const R: usize, const C: usize> PartialEq<[[U; C]; R]> for Matrix<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[[U; C]; R]) -> bool {
        self.shape() == (R, C) && self.row_iter().zip(other).all(|(row, expected)| row == expected)
    }
}

/// Comparison against a list of rows.
impl<T, U> PartialEq<Vec<Vec<U>>> for Matrix<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<Vec<U>>) -> bool {
        self.rows() == other.len()
            && self
                .row_iter()
                .zip(other)
                .all(|(row, expected)| row == expected.as_slice())
    }
}

impl<T: AbsDiffEq> AbsDiffEq for Matrix<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .elems
                .iter()
                .zip(&other.elems)
                .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T: RelativeEq> RelativeEq for Matrix<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .elems
                .iter()
                .zip(&other.elems)
                .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T: UlpsEq> UlpsEq for Matrix<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self
                .elems
                .iter()
                .zip(&other.elems)
                .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}

impl<T: Number> Matrix<T> {
    /// Computes the matrix product `self · rhs`.
    ///
    /// The product of an `m`×`n` and an `n`×`p` matrix is the `m`×`p` matrix
    /// whose entry `(i, j)` is the [dot product][vector::dot] of row `i` of
    /// `self` and column `j` of `rhs` (obtained by transposing `rhs`). Rows
    /// keep the order of `self`'s rows, columns the order of `rhs`'s columns.
    ///
    /// If the inner dimensions don't agree ([`cols`][Self::cols] of `self` vs.
    /// [`rows`][Self::rows] of `rhs`), [`ShapeError::Multiply`] is returned,
    /// carrying both operand shapes. The `Mul` operator impls delegate to this
    /// method and panic instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    /// assert_eq!(a.try_mul(&b).unwrap(), [
    ///     [19, 22],
    ///     [43, 50],
    /// ]);
    ///
    /// let narrow = Matrix::from_rows(vec![vec![1], vec![1]]).unwrap();
    /// assert!(a.try_mul(&narrow).is_err());
    /// ```
    pub fn try_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
        if self.cols() != rhs.rows() {
            return Err(ShapeError::Multiply {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        // Transposing makes the columns of `rhs` contiguous for the dot products.
        let rhs_t = rhs.transpose();
        Ok(Matrix::from_fn(self.rows(), rhs.cols(), |i, j| {
            vector::dot(self.row(i), rhs_t.row(j))
        }))
    }
}

/// Matrix * Matrix.
///
/// # Panics
///
/// Panics if the operand shapes don't fit; see [`Matrix::try_mul`] for the
/// checked version.
impl<T: Number> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Matrix * Matrix.
impl<T: Number> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

/// Matrix * Column Vector.
///
/// # Panics
///
/// Panics if the length of `rhs` differs from the number of columns.
impl<T: Number> Mul<&[T]> for &Matrix<T> {
    type Output = Vec<T>;

    fn mul(self, rhs: &[T]) -> Self::Output {
        assert_eq!(
            self.cols(),
            rhs.len(),
            "matrix with shape {:?} can't multiply a vector of length {}",
            self.shape(),
            rhs.len()
        );
        self.row_iter().map(|row| vector::dot(row, rhs)).collect()
    }
}

/// Matrix * Scalar.
impl<T: Number> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Scalar.
impl<T: Number> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.clone() * rhs
    }
}

/// Element-wise addition.
///
/// # Panics
///
/// Panics if the operand shapes differ.
impl<T: Number> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "element-wise addition of matrices with different shapes"
        );
        Matrix::from_fn(self.rows(), self.cols(), |i, j| self[(i, j)] + rhs[(i, j)])
    }
}

/// Element-wise addition.
impl<T: Number> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

/// Element-wise subtraction.
///
/// # Panics
///
/// Panics if the operand shapes differ.
impl<T: Number> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "element-wise subtraction of matrices with different shapes"
        );
        Matrix::from_fn(self.rows(), self.cols(), |i, j| self[(i, j)] - rhs[(i, j)])
    }
}

/// Element-wise subtraction.
impl<T: Number> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

/// Element-wise negation.
impl<T> Neg for Matrix<T>
where
    T: Neg,
{
    type Output = Matrix<T::Output>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}
