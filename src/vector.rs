//! Helpers operating on numeric slices as mathematical vectors.
//!
//! [`Matrix`][crate::Matrix] rows borrow as plain slices and columns extract
//! into [`Vec`]s, so the vector operations here take slices rather than a
//! dedicated vector type.

use crate::traits::{Number, Sqrt};

/// Computes the dot product of `u` and `v` (the sum of their element-wise
/// products).
///
/// # Panics
///
/// Panics if the slices have different lengths.
///
/// # Examples
///
/// ```
/// # use densemat::vector;
/// assert_eq!(vector::dot(&[1, 3, -5], &[4, -2, -1]), 3);
/// ```
pub fn dot<T: Number>(u: &[T], v: &[T]) -> T {
    assert_eq!(
        u.len(),
        v.len(),
        "dot product of slices with lengths {} and {}",
        u.len(),
        v.len()
    );
    u.iter().zip(v).fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
}

/// Computes the sum of the squares of the elements of `v`.
pub fn sum_of_squares<T: Number>(v: &[T]) -> T {
    dot(v, v)
}

/// Computes the Euclidean length of `v`.
///
/// # Examples
///
/// ```
/// # use densemat::vector;
/// assert_eq!(vector::magnitude(&[3.0, 4.0]), 5.0);
/// ```
pub fn magnitude<T: Number + Sqrt>(v: &[T]) -> T {
    sum_of_squares(v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        assert_eq!(dot(&[1, 3, -5], &[4, -2, -1]), 3);
        assert_eq!(dot(&[1, 3, -5], &[1, 3, -5]), 35);
        assert_eq!(dot::<i32>(&[], &[]), 0);

        assert_eq!(dot(&[1.0, 0.0], &[1.0, 0.0]), 1.0);
        assert_eq!(dot(&[0.0, 1.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    #[should_panic(expected = "dot product of slices with lengths 2 and 3")]
    fn dot_length_mismatch() {
        dot(&[1, 2], &[1, 2, 3]);
    }

    #[test]
    fn squares_and_magnitude() {
        assert_eq!(sum_of_squares(&[1, 2, 3]), 14);
        assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
        assert_eq!(magnitude::<f64>(&[]), 0.0);
    }
}
