//! Verification harness for the submultiplicative norm inequality.
//!
//! Provides the building blocks for checking `norm_1(A·x) <= norm_1(A) * norm_1(x)`:
//!
//! - [`submultiplicative`] — Evaluate both sides of the inequality for one pair
//! - [`trials`] — Seeded standard-normal trial batches with reproducible reports

pub mod submultiplicative;
pub mod trials;

pub use submultiplicative::{check_submultiplicative, SubmultiplicativeCheck, REL_TOLERANCE};
pub use trials::{run_normal_trials, TrialConfig, TrialRecord, TrialReport};
