//! Generic trial-based robust model fitting (RANSAC).
//!
//! The estimator is parameterized by a plugin implementing [`Estimator`]:
//! one operation turns a minimal sample into a candidate model (or reports
//! degeneracy), the other scores a single datum against a model. Each trial
//! draws `MIN_SAMPLES` distinct points uniformly, skips silently on a
//! degenerate sample, counts inliers below the residual threshold and keeps
//! the best count seen so far with ties resolved in favor of the earliest
//! trial.
//!
//! Every trial derives its own RNG stream from `RansacOptions::seed`, so the
//! sequential [`ransac_fit`] and the rayon-parallel [`ransac_fit_par`]
//! return bit-identical results and the earliest-trial tie-break survives
//! the parallel reduction.
//!
//! A minimum-inlier gate is deliberately NOT applied here; callers decide
//! how much support a model needs before consuming it.

pub mod line;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub use line::{fit_line, point_to_line_distance, LineEstimator, LineFit};

/// Minimal-sample model plugin: generation plus per-datum scoring.
pub trait Estimator {
    type Datum;
    type Model;

    /// Size of a minimal sample.
    const MIN_SAMPLES: usize;

    /// Produce a model from the minimal sample selected by `sample_indices`,
    /// or `None` on degeneracy.
    fn generate(data: &[Self::Datum], sample_indices: &[usize]) -> Option<Self::Model>;

    /// Nonnegative residual of one datum against a model.
    fn residual(model: &Self::Model, datum: &Self::Datum) -> f32;
}

/// Options of the trial loop.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RansacOptions {
    /// Number of trials T.
    pub trials: usize,
    /// Inlier residual threshold ε (strictly-below counts as inlier).
    pub inlier_threshold: f32,
    /// Seed of the per-trial RNG streams — the injectable randomness source.
    pub seed: u64,
}

impl Default for RansacOptions {
    fn default() -> Self {
        Self {
            trials: 10_000,
            inlier_threshold: 1.5,
            seed: 0,
        }
    }
}

/// Best model of a fit, with its index-aligned inlier mask.
#[derive(Clone, Debug)]
pub struct RansacFit<M> {
    pub model: M,
    /// One flag per input datum, aligned by index.
    pub inlier_mask: Vec<bool>,
    pub num_inliers: usize,
    /// Trial index that produced the model (earliest among ties).
    pub trial: usize,
}

/// Run the trial loop sequentially.
///
/// Returns `None` when no trial produced a valid model, including the case
/// of fewer data than a minimal sample needs.
pub fn ransac_fit<E: Estimator>(
    data: &[E::Datum],
    options: &RansacOptions,
) -> Option<RansacFit<E::Model>> {
    if data.len() < E::MIN_SAMPLES {
        return None;
    }
    (0..options.trials)
        .filter_map(|trial| run_trial::<E>(data, options, trial))
        .fold(None, |best, cand| Some(better_of(best, cand)))
}

/// Run the trial loop across the rayon pool. Identical result to
/// [`ransac_fit`] for equal options.
pub fn ransac_fit_par<E: Estimator>(
    data: &[E::Datum],
    options: &RansacOptions,
) -> Option<RansacFit<E::Model>>
where
    E::Datum: Sync,
    E::Model: Send,
{
    if data.len() < E::MIN_SAMPLES {
        return None;
    }
    (0..options.trials)
        .into_par_iter()
        .filter_map(|trial| run_trial::<E>(data, options, trial))
        .reduce_with(|a, b| better_of(Some(a), b))
}

fn run_trial<E: Estimator>(
    data: &[E::Datum],
    options: &RansacOptions,
    trial: usize,
) -> Option<RansacFit<E::Model>> {
    let mut rng = trial_rng(options.seed, trial);
    let sample_idx = sample_indices(&mut rng, data.len(), E::MIN_SAMPLES);
    let model = E::generate(data, &sample_idx)?;

    let mut mask = vec![false; data.len()];
    let mut num_inliers = 0usize;
    for (flag, datum) in mask.iter_mut().zip(data) {
        if E::residual(&model, datum) < options.inlier_threshold {
            *flag = true;
            num_inliers += 1;
        }
    }
    Some(RansacFit {
        model,
        inlier_mask: mask,
        num_inliers,
        trial,
    })
}

/// More inliers wins; equal counts go to the earlier trial.
fn better_of<M>(best: Option<RansacFit<M>>, cand: RansacFit<M>) -> RansacFit<M> {
    match best {
        None => cand,
        Some(b) => {
            if cand.num_inliers > b.num_inliers
                || (cand.num_inliers == b.num_inliers && cand.trial < b.trial)
            {
                cand
            } else {
                b
            }
        }
    }
}

/// Deterministic per-trial RNG stream.
fn trial_rng(seed: u64, trial: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add((trial as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)))
}

/// Sample `k` distinct indices from `0..n` via Fisher-Yates partial shuffle.
fn sample_indices(rng: &mut impl Rng, n: usize, k: usize) -> Vec<usize> {
    debug_assert!(k <= n);
    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n);
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1-D toy estimator: the model is a single value, a minimal sample is
    /// one datum, residual is absolute difference.
    struct ValueEstimator;

    impl Estimator for ValueEstimator {
        type Datum = f32;
        type Model = f32;
        const MIN_SAMPLES: usize = 1;

        fn generate(data: &[f32], sample_indices: &[usize]) -> Option<f32> {
            let v = data[sample_indices[0]];
            v.is_finite().then_some(v)
        }

        fn residual(model: &f32, datum: &f32) -> f32 {
            (model - datum).abs()
        }
    }

    #[test]
    fn recovers_the_dominant_value() {
        let mut data = vec![5.0f32; 20];
        data.extend([100.0, -40.0, 63.0]);
        let options = RansacOptions {
            trials: 64,
            inlier_threshold: 0.5,
            seed: 1,
        };
        let fit = ransac_fit::<ValueEstimator>(&data, &options).expect("fit");
        assert_eq!(fit.model, 5.0);
        assert_eq!(fit.num_inliers, 20);
        assert!(fit.inlier_mask[..20].iter().all(|&m| m));
        assert!(!fit.inlier_mask[20..].iter().any(|&m| m));
    }

    #[test]
    fn empty_data_reports_failure() {
        let options = RansacOptions::default();
        assert!(ransac_fit::<ValueEstimator>(&[], &options).is_none());
    }

    #[test]
    fn all_degenerate_trials_report_failure() {
        let data = vec![f32::NAN; 8];
        let options = RansacOptions {
            trials: 32,
            inlier_threshold: 1.0,
            seed: 3,
        };
        assert!(ransac_fit::<ValueEstimator>(&data, &options).is_none());
    }

    #[test]
    fn ties_resolve_to_the_earliest_trial() {
        // every trial yields a 1-inlier model; the earliest must win
        let data = vec![1.0f32, 2.0, 3.0, 4.0];
        let options = RansacOptions {
            trials: 50,
            inlier_threshold: 0.5,
            seed: 9,
        };
        let fit = ransac_fit::<ValueEstimator>(&data, &options).expect("fit");
        assert_eq!(fit.trial, 0);
    }

    #[test]
    fn parallel_fit_matches_sequential() {
        let mut data = vec![7.0f32; 15];
        data.extend([0.0, 1.0, 2.0, 3.0, 90.0]);
        let options = RansacOptions {
            trials: 128,
            inlier_threshold: 0.25,
            seed: 42,
        };
        let seq = ransac_fit::<ValueEstimator>(&data, &options).expect("seq");
        let par = ransac_fit_par::<ValueEstimator>(&data, &options).expect("par");
        assert_eq!(seq.model, par.model);
        assert_eq!(seq.num_inliers, par.num_inliers);
        assert_eq!(seq.trial, par.trial);
        assert_eq!(seq.inlier_mask, par.inlier_mask);
    }

    #[test]
    fn same_seed_is_deterministic() {
        let data: Vec<f32> = (0..30).map(|i| (i % 7) as f32).collect();
        let options = RansacOptions {
            trials: 100,
            inlier_threshold: 0.5,
            seed: 1234,
        };
        let a = ransac_fit::<ValueEstimator>(&data, &options).expect("a");
        let b = ransac_fit::<ValueEstimator>(&data, &options).expect("b");
        assert_eq!(a.model, b.model);
        assert_eq!(a.inlier_mask, b.inlier_mask);
    }
}
