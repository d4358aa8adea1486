//! # opnorm: 1-norm evaluation with a randomized verification harness
//!
//! opnorm computes the rank-dispatched 1-norm used in backward-error
//! analysis and checks the submultiplicative bound
//! `norm_1(A·x) <= norm_1(A) * norm_1(x)` over seeded random trials.
//!
//! ## Norms
//!
//! - [`vector_norm_1()`] - Sum of entry magnitudes of a vector
//! - [`matrix_norm_1()`] - Maximum absolute row sum of a matrix
//! - [`norm_1()`] - Rank-dispatched entry point for dynamic arrays
//!
//! ## Verification
//!
//! - [`check_submultiplicative()`] - Evaluate both sides of the bound for one pair
//! - [`run_normal_trials()`] - Reproducible standard-normal trial batches

#![deny(missing_docs)]

pub mod element;
pub mod error;
pub mod norms;
pub mod verification;

// Re-exports
pub use element::Element;
pub use error::NormError;
pub use norms::{matrix_norm_1, norm_1, vector_norm_1};
pub use verification::{check_submultiplicative, SubmultiplicativeCheck, REL_TOLERANCE};
pub use verification::{run_normal_trials, TrialConfig, TrialRecord, TrialReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Python bindings via PyO3
#[cfg(feature = "python")]
mod python {
    use numpy::PyReadonlyArrayDyn;
    use pyo3::prelude::*;

    use crate::NormError;

    fn norm_err(e: NormError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e))
    }

    #[pyfunction]
    fn norm_1<'py>(ary: PyReadonlyArrayDyn<'py, f64>) -> PyResult<f64> {
        crate::norm_1(&ary.as_array().to_owned()).map_err(norm_err)
    }

    #[pyfunction]
    fn verify_submultiplicative(dim: usize, trials: usize, seed: u64) -> PyResult<bool> {
        let config = crate::TrialConfig { dim, trials, seed };
        let report = crate::run_normal_trials(&config).map_err(norm_err)?;
        Ok(report.all_hold())
    }

    #[pymodule]
    fn _core(_py: Python, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(norm_1, m)?)?;
        m.add_function(wrap_pyfunction!(verify_submultiplicative, m)?)?;
        Ok(())
    }
}
