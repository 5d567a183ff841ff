use std::fmt;

use crate::{error::ShapeError, One, Zero};

mod ops;

/// A dense, dynamically-sized matrix with elements of type `T`, stored in
/// row-major order.
///
/// The shape of a [`Matrix`] is fixed when it is created and tracked alongside
/// its elements, so every instance is rectangular by construction: shape
/// queries read stored data and never measure individual rows.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] builds a matrix from a list of rows, rejecting
///   ragged input with a [`ShapeError`].
/// - [`Matrix::from_fn`] will create each element by invoking a closure with
///   its row and column.
/// - [`Matrix::identity`] creates a square matrix with 1 on its diagonal and 0
///   everywhere else, and [`Matrix::from_diagonal`] generalizes it to an
///   arbitrary diagonal.
/// - [`Matrix::zero`] creates a matrix with every element set to 0.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row* (Y
/// coordinate), the second is the *column* (X coordinate), matching common
/// mathematical notation. Indices are 0-based. Indexing with a plain `usize`
/// returns the whole row as a slice.
///
/// ```
/// # use densemat::*;
/// let mut mat = Matrix::from_rows(vec![
///     vec![0, 1],
/// ]).unwrap();
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat[0], [4, 1]);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for
/// slices. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s instead
/// and can be used for checked indexing:
///
/// ```
/// # use densemat::*;
/// let mat = Matrix::from_rows(vec![
///     vec![0, 1],
/// ]).unwrap();
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Hash)]
pub struct Matrix<T> {
    /// Row-major elements; invariant: `elems.len() == rows * cols`.
    elems: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a [`Matrix`] from a list of rows.
    ///
    /// All rows must have the same length; ragged input is rejected with
    /// [`ShapeError::Ragged`]. An empty row list yields the 0×0 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let mat = Matrix::from_rows(vec![
    ///     vec![0, 1],
    ///     vec![2, 3],
    /// ]).unwrap();
    /// assert_eq!(mat.shape(), (2, 2));
    ///
    /// assert!(Matrix::from_rows(vec![vec![0, 1], vec![2]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut elems = Vec::with_capacity(num_rows * num_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != num_cols {
                return Err(ShapeError::Ragged {
                    row: i,
                    len: row.len(),
                    expected: num_cols,
                });
            }
            elems.extend(row);
        }
        Ok(Self {
            elems,
            rows: num_rows,
            cols: num_cols,
        })
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// The closure is invoked exactly once per element, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let mat = Matrix::from_fn(2, 3, |row, col| row * 10 + col);
    /// assert_eq!(mat, [
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]);
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut elems = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                elems.push(f(i, j));
            }
        }
        Self { elems, rows, cols }
    }

    /// Creates a matrix with every element set to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub fn zero(rows: usize, cols: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self {
            elems: vec![T::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates the `n`×`n` identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    /// Multiplying any matrix or vector with it returns the operand unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let id = Matrix::<i32>::identity(3);
    /// assert_eq!(id, [
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    ///     [0, 0, 1],
    /// ]);
    /// ```
    pub fn identity(n: usize) -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(n, n, |i, j| if i == j { T::ONE } else { T::ZERO })
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let diag = Matrix::from_diagonal(vec![1, 2, 3]);
    /// assert_eq!(diag, [
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]);
    /// ```
    pub fn from_diagonal(diag: Vec<T>) -> Self
    where
        T: Zero + Clone,
    {
        let n = diag.len();
        let mut this = Self::zero(n, n);
        for (i, elem) in diag.into_iter().enumerate() {
            this[(i, i)] = elem;
        }
        this
    }

    /// Returns the number of rows of the matrix.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns of the matrix.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape of the matrix as a `(rows, columns)` pair.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let mat = Matrix::from_fn(2, 3, |i, j| i + j);
    /// assert_eq!(mat.shape(), (2, 3));
    /// assert_eq!(mat.shape(), (mat.rows(), mat.cols()));
    /// ```
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Borrows row `i` of the matrix as a slice.
    ///
    /// Rows are stored contiguously, so this does not copy.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`rows`][Self::rows].
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let mat = Matrix::from_rows(vec![
    ///     vec![0, 1, 2],
    ///     vec![3, 4, 5],
    /// ]).unwrap();
    /// assert_eq!(mat.row(1), [3, 4, 5]);
    /// ```
    pub fn row(&self, i: usize) -> &[T] {
        assert!(
            i < self.rows,
            "row index {i} out of range for matrix with {} rows",
            self.rows
        );
        &self.elems[i * self.cols..(i + 1) * self.cols]
    }

    /// Mutably borrows row `i` of the matrix as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`rows`][Self::rows].
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(
            i < self.rows,
            "row index {i} out of range for matrix with {} rows",
            self.rows
        );
        &mut self.elems[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns column `j` of the matrix as a freshly allocated [`Vec`], in row
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `j` is not less than [`cols`][Self::cols].
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let mat = Matrix::from_fn(2, 3, |i, j| i + j);
    /// assert_eq!(mat.column(1), [1, 2]);
    /// ```
    pub fn column(&self, j: usize) -> Vec<T>
    where
        T: Copy,
    {
        assert!(
            j < self.cols,
            "column index {j} out of range for matrix with {} columns",
            self.cols
        );
        (0..self.rows).map(|i| self.elems[i * self.cols + j]).collect()
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out
    /// of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.elems[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`]
    /// if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            Some(&mut self.elems[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the matrix, each borrowed as a
    /// slice.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(|i| self.row(i))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let mat = Matrix::from_rows(vec![
    ///     vec![0, 1, 2],
    ///     vec![3, 4, 5],
    /// ]).unwrap().transpose();
    /// assert_eq!(mat, [
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]);
    /// ```
    pub fn transpose(&self) -> Matrix<T>
    where
        T: Copy,
    {
        Matrix::from_fn(self.cols, self.rows, |i, j| self[(j, i)])
    }

    /// Applies a closure to each element, returning a new matrix of the same
    /// shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let mat = Matrix::from_rows(vec![
    ///     vec![0, 1, 2],
    ///     vec![3, 4, 5],
    /// ]).unwrap();
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, [
    ///     [0, 2,  4],
    ///     [6, 8, 10],
    /// ]);
    /// ```
    pub fn map<F, U>(self, f: F) -> Matrix<U>
    where
        F: FnMut(T) -> U,
    {
        Matrix {
            elems: self.elems.into_iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns a [`Vec`] holding the diagonal elements of this square matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let mat = Matrix::from_rows(vec![
    ///     vec![1, 2],
    ///     vec![3, 4],
    /// ]).unwrap();
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vec<T>
    where
        T: Copy,
    {
        assert!(
            self.rows == self.cols,
            "diagonal of non-square matrix with shape {:?}",
            self.shape()
        );
        (0..self.rows).map(|i| self[(i, i)]).collect()
    }

    /// Returns the *trace* of this square matrix (the sum of all elements on
    /// the diagonal).
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use densemat::*;
    /// let diag = Matrix::from_diagonal(vec![1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Matrix::<f32>::identity(3).trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: crate::Number,
    {
        assert!(
            self.rows == self.cols,
            "trace of non-square matrix with shape {:?}",
            self.shape()
        );
        (0..self.rows).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        Self::from_rows(rows)
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in self.row_iter() {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_row_major() {
        let mut calls = Vec::new();
        let mat = Matrix::from_fn(2, 3, |i, j| {
            calls.push((i, j));
            i + j
        });
        assert_eq!(mat, [[0, 1, 2], [1, 2, 3]]);
        assert_eq!(
            calls,
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)],
        );
    }

    #[test]
    fn from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![0, 1, 2], vec![3, 4]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::Ragged {
                row: 1,
                len: 2,
                expected: 3,
            }
        );
        assert_eq!(err.to_string(), "row 1 has length 2, expected 3");
    }

    #[test]
    fn empty() {
        let mat = Matrix::<i32>::from_rows(vec![]).unwrap();
        assert_eq!(mat.shape(), (0, 0));

        let mat = Matrix::<i32>::from_fn(0, 3, |_, _| unreachable!());
        assert_eq!(mat.shape(), (0, 3));
        assert_eq!(mat.shape(), (mat.rows(), mat.cols()));

        assert_eq!(Matrix::<i32>::identity(0).shape(), (0, 0));
    }

    #[test]
    fn shape() {
        let mat = Matrix::from_fn(4, 2, |i, j| i * 2 + j);
        assert_eq!(mat.rows(), 4);
        assert_eq!(mat.cols(), 2);
        assert_eq!(mat.shape(), (mat.rows(), mat.cols()));
    }

    #[test]
    fn rows_and_columns() {
        let mat = Matrix::from_fn(2, 3, |i, j| i + j);
        assert_eq!(mat.row(0), [0, 1, 2]);
        assert_eq!(mat.row(1), [1, 2, 3]);
        assert_eq!(mat.column(0), [0, 1]);
        assert_eq!(mat.column(1), [1, 2]);
        assert_eq!(mat.column(2), [2, 3]);

        let rows: Vec<_> = mat.row_iter().collect();
        assert_eq!(rows, [&[0, 1, 2], &[1, 2, 3]]);
    }

    #[test]
    #[should_panic(expected = "row index 2 out of range")]
    fn row_out_of_range() {
        let mat = Matrix::from_fn(2, 3, |i, j| i + j);
        mat.row(2);
    }

    #[test]
    #[should_panic(expected = "column index 3 out of range")]
    fn column_out_of_range() {
        let mat = Matrix::from_fn(2, 3, |i, j| i + j);
        mat.column(3);
    }

    #[test]
    fn identity() {
        for n in 0..5 {
            let id = Matrix::<i32>::identity(n);
            assert_eq!(id.shape(), (n, n));
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(id[(i, j)], if i == j { 1 } else { 0 });
                }
            }
        }
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal(vec![1, 2]);

        assert_eq!(mat, [[1, 0], [0, 2]]);
        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn trace() {
        assert_eq!(Matrix::<f64>::zero(3, 3).trace(), 0.0);
        assert_eq!(Matrix::<f64>::identity(3).trace(), 3.0);
        assert_eq!(Matrix::from_diagonal(vec![1, 2, 3]).trace(), 6);
    }

    #[test]
    fn get() {
        let mut mat = Matrix::from_fn(2, 3, |i, j| i + j);
        assert_eq!(mat.get(1, 2), Some(&3));
        assert_eq!(mat.get(2, 0), None);
        assert_eq!(mat.get(0, 3), None);

        if let Some(elem) = mat.get_mut(1, 0) {
            *elem = 999;
        }
        assert_eq!(mat.get_mut(2, 0), None);
        assert_eq!(mat, [[0, 1, 2], [999, 2, 3]]);
    }

    #[test]
    fn transpose() {
        let mat = Matrix::from_rows(vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
        let t = mat.transpose();
        assert_eq!(t, [[0, 3], [1, 4], [2, 5]]);
        assert_eq!(t.transpose(), mat);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }
}
