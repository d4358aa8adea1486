//! Seeded randomized trial batches for the submultiplicative inequality.
//!
//! Draws independent matrix/vector pairs with standard-normal entries and
//! evaluates [`check_submultiplicative`] on each draw:
//!
//! - [`TrialConfig`]: operand size, trial count and base seed
//! - [`TrialRecord`]: both sides of the inequality for one draw
//! - [`TrialReport`]: all records plus batch-level verdicts
//! - [`run_normal_trials`]: executes a batch in parallel
//!
//! Every trial derives its own RNG stream from the base seed and the trial
//! index, so a report is byte-for-byte reproducible no matter how the
//! parallel scheduler interleaves the trials.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::NormError;
use crate::verification::submultiplicative::{check_submultiplicative, SubmultiplicativeCheck};

/// Configuration of a randomized trial batch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Side length of the square matrix; also the vector length.
    pub dim: usize,
    /// Number of independent trials.
    pub trials: usize,
    /// Base seed. Trial `i` samples from a stream derived from `seed` and `i`.
    pub seed: u64,
}

impl Default for TrialConfig {
    /// Ten trials on 20-by-20 operands with a fixed seed.
    fn default() -> Self {
        Self {
            dim: 20,
            trials: 10,
            seed: 42,
        }
    }
}

/// Outcome of a single randomized trial.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Position of this trial within the batch (0-based).
    pub trial: usize,
    /// Evaluated inequality for this draw.
    pub check: SubmultiplicativeCheck,
}

/// Results of a randomized trial batch, in trial order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialReport {
    /// Configuration that produced this report.
    pub config: TrialConfig,
    /// One record per trial.
    pub records: Vec<TrialRecord>,
}

impl TrialReport {
    /// Returns `true` if the inequality held in every trial.
    ///
    /// An empty report holds vacuously.
    pub fn all_hold(&self) -> bool {
        self.records.iter().all(|r| r.check.holds())
    }

    /// Records of the trials where the inequality failed.
    pub fn failures(&self) -> Vec<&TrialRecord> {
        self.records.iter().filter(|r| !r.check.holds()).collect()
    }

    /// Smallest slack observed across the batch, or `None` if empty.
    ///
    /// A negative value means at least one trial violated the inequality.
    pub fn min_slack(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.check.slack())
            .fold(None, |acc, s| match acc {
                None => Some(s),
                Some(m) => Some(m.min(s)),
            })
    }

    /// Number of trials recorded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the report contains no trials.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Runs a batch of independent standard-normal trials.
///
/// Each trial draws a `dim`-by-`dim` matrix and a `dim`-length vector with
/// i.i.d. standard-normal entries, then evaluates the submultiplicative
/// inequality on the pair. Trials run in parallel via rayon; records come
/// back in trial order regardless of scheduling.
///
/// Note that with the row-sum convention the inequality is an empirical
/// expectation, not a theorem: small operands violate it with noticeable
/// probability, while for 20-by-20 standard-normal draws the bound holds
/// with a wide margin (see [`check_submultiplicative`]).
///
/// # Errors
///
/// Propagates [`NormError`] from the per-trial check. Internally generated
/// operands always conform, so an error here indicates a bug.
pub fn run_normal_trials(config: &TrialConfig) -> Result<TrialReport, NormError> {
    let records = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = trial_rng(config.seed, trial);
            let a = Array2::from_shape_fn((config.dim, config.dim), |_| {
                rng.sample::<f64, _>(StandardNormal)
            });
            let x = Array1::from_shape_fn(config.dim, |_| rng.sample::<f64, _>(StandardNormal));
            let check = check_submultiplicative(&a, &x)?;
            Ok(TrialRecord { trial, check })
        })
        .collect::<Result<Vec<_>, NormError>>()?;

    Ok(TrialReport {
        config: *config,
        records,
    })
}

/// Derives a per-trial RNG stream that does not depend on execution order.
fn trial_rng(seed: u64, trial: usize) -> StdRng {
    let stream = seed.wrapping_add((trial as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    StdRng::seed_from_u64(stream)
}
