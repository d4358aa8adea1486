//! 1-norm computations for vectors and matrices.
//!
//! Provides the vector 1-norm (sum of element magnitudes), the matrix
//! reduction used throughout this crate (maximum absolute row sum), and a
//! rank-checked entry point for dynamic-rank arrays.

use ndarray::{Array1, Array2, ArrayD, ArrayView1, ArrayView2, Ix1, Ix2};
use num_traits::{Float, Zero};

use crate::element::Element;
use crate::error::NormError;

/// Compute the 1-norm of a vector: the sum of element magnitudes.
///
/// An empty vector has norm `0`.
pub fn vector_norm_1<E: Element>(x: &Array1<E>) -> E::Real {
    abs_sum(x.view())
}

/// Compute the matrix 1-norm as defined by this crate: the maximum over
/// rows of the sum of element magnitudes within the row.
///
/// A degenerate matrix (zero rows or zero columns) has norm `0`.
///
/// # Row-sum convention
///
/// The reduction runs over *rows*: for each row, sum the magnitudes, then
/// take the maximum. That coincides with the operator ∞-norm formula, not
/// the induced 1-norm; the induced 1-norm (maximum absolute *column* sum)
/// of `A` is `matrix_norm_1` of `Aᵀ`.
pub fn matrix_norm_1<E: Element>(a: &Array2<E>) -> E::Real {
    max_row_abs_sum(a.view())
}

/// Compute the 1-norm of a dynamic-rank array.
///
/// Rank-1 inputs use the vector rule of [`vector_norm_1`], rank-2 inputs
/// the matrix rule of [`matrix_norm_1`].
///
/// # Errors
///
/// Returns [`NormError::InvalidRank`] if the input is neither a vector nor
/// a matrix.
pub fn norm_1<E: Element>(ary: &ArrayD<E>) -> Result<E::Real, NormError> {
    match ary.ndim() {
        1 => Ok(abs_sum(ary.view().into_dimensionality::<Ix1>()?)),
        2 => Ok(max_row_abs_sum(ary.view().into_dimensionality::<Ix2>()?)),
        rank => Err(NormError::InvalidRank { rank }),
    }
}

fn abs_sum<E: Element>(x: ArrayView1<'_, E>) -> E::Real {
    x.iter()
        .map(|e| e.magnitude())
        .fold(E::Real::zero(), |acc, m| acc + m)
}

fn max_row_abs_sum<E: Element>(a: ArrayView2<'_, E>) -> E::Real {
    a.outer_iter()
        .map(abs_sum)
        .fold(E::Real::zero(), Float::max)
}
