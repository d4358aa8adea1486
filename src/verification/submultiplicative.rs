//! Submultiplicativity checks for the 1-norm.
//!
//! Records a single evaluation of the operator inequality
//! `‖A·x‖₁ ≤ ‖A‖₁·‖x‖₁` so callers can inspect both sides and the slack
//! rather than a bare boolean.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::NormError;
use crate::norms::{matrix_norm_1, vector_norm_1};

/// Relative tolerance for accepting the inequality.
///
/// Scaled by `max(rhs, 1)`; admits exact-equality cases (identity matrix)
/// and floating-point summation noise, and stays far below any genuine
/// violation.
pub const REL_TOLERANCE: f64 = 1e-12;

/// Both sides of one submultiplicativity evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmultiplicativeCheck {
    /// `‖A·x‖₁`
    pub lhs: f64,
    /// `‖A‖₁ · ‖x‖₁`
    pub rhs: f64,
}

impl SubmultiplicativeCheck {
    /// Whether `lhs ≤ rhs` holds within [`REL_TOLERANCE`].
    pub fn holds(&self) -> bool {
        self.lhs <= self.rhs + REL_TOLERANCE * self.rhs.max(1.0)
    }

    /// Margin by which the inequality holds (`rhs - lhs`; negative when
    /// violated).
    pub fn slack(&self) -> f64 {
        self.rhs - self.lhs
    }
}

/// Evaluate the submultiplicative inequality for one matrix-vector pair.
///
/// Computes `lhs = ‖A·x‖₁` and `rhs = ‖A‖₁·‖x‖₁`.
///
/// With the row-sum reduction of [`matrix_norm_1`] the inequality is not a
/// theorem for arbitrary operands (`[[1,0],[1,0]]·[1,0]` violates it); it
/// holds with overwhelming probability for standard-normal entries, which
/// is what [`run_normal_trials`](crate::verification::run_normal_trials)
/// exercises. The always-true dual form replaces `‖A‖₁` with `‖Aᵀ‖₁`.
///
/// # Errors
///
/// Returns [`NormError::DimensionMismatch`] if `A` and `x` do not conform.
pub fn check_submultiplicative(
    a: &Array2<f64>,
    x: &Array1<f64>,
) -> Result<SubmultiplicativeCheck, NormError> {
    if a.ncols() != x.len() {
        return Err(NormError::DimensionMismatch {
            cols: a.ncols(),
            len: x.len(),
        });
    }

    let product = a.dot(x);
    Ok(SubmultiplicativeCheck {
        lhs: vector_norm_1(&product),
        rhs: matrix_norm_1(a) * vector_norm_1(x),
    })
}
