//! Normalized categorical probability tables.

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriorError {
    #[error("no valid categories remain after excluding {excluded:?} and non-positive counts")]
    NoValidCategories { excluded: String },

    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("re-weighting factor must be positive and finite, got {0}")]
    InvalidFactor(f64),
}

/// A normalized probability table over a finite category set.
///
/// Built once from raw survey counts: entries whose label contains the
/// exclusion marker (case-insensitive, typically `"Other"`) or whose
/// count is non-positive are dropped, and the remainder is renormalized
/// to sum to 1. Entries are held in descending-probability order; the
/// ordering is for display and has no effect on sampling.
///
/// The table is immutable except for [`reweight`](Self::reweight), which
/// rescales a single entry and renormalizes the whole set, and
/// [`reset`](Self::reset), which restores the as-built probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorDistribution {
    labels: Vec<String>,
    probs: Vec<f64>,
    /// As-built probabilities, kept for `reset`
    original_probs: Vec<f64>,
}

impl PriorDistribution {
    /// Build a prior from raw (label, count) pairs.
    ///
    /// # Arguments
    /// * `counts` - Raw nonnegative counts or unnormalized probabilities
    /// * `exclude` - Case-insensitive substring marking catch-all
    ///   categories to drop (e.g. `"Other"`)
    ///
    /// # Errors
    /// [`PriorError::NoValidCategories`] if nothing with positive weight
    /// survives the filter.
    pub fn from_counts<I, S>(counts: I, exclude: &str) -> Result<Self, PriorError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let exclude_lower = exclude.to_lowercase();

        let mut entries: Vec<(String, f64)> = counts
            .into_iter()
            .map(|(label, count)| (label.into(), count))
            .filter(|(label, count)| {
                let excluded =
                    !exclude_lower.is_empty() && label.to_lowercase().contains(&exclude_lower);
                !excluded && *count > 0.0 && count.is_finite()
            })
            .collect();

        let total: f64 = entries.iter().map(|(_, count)| count).sum();
        if total <= 0.0 {
            return Err(PriorError::NoValidCategories {
                excluded: exclude.to_string(),
            });
        }

        // Descending probability, label as a deterministic tie-break
        entries.sort_by(|(la, ca), (lb, cb)| {
            cb.partial_cmp(ca).unwrap().then_with(|| la.cmp(lb))
        });

        let labels: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
        let probs: Vec<f64> = entries.iter().map(|(_, count)| count / total).collect();

        debug!(
            categories = labels.len(),
            excluded = exclude,
            "built prior distribution"
        );

        Ok(Self {
            original_probs: probs.clone(),
            labels,
            probs,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Probability of a category, `None` if the label is not present.
    pub fn probability(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.probs[i])
    }

    /// (label, probability) pairs in descending-probability order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.probs.iter().copied())
    }

    /// Rescale one category's probability by `factor` and renormalize.
    ///
    /// This is the sensitivity-analysis hook: "what if fibers were twice
    /// as common as surveyed?" The relative weights of all other
    /// categories are preserved.
    pub fn reweight(&mut self, label: &str, factor: f64) -> Result<(), PriorError> {
        if !(factor > 0.0 && factor.is_finite()) {
            return Err(PriorError::InvalidFactor(factor));
        }
        let index = self
            .labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| PriorError::UnknownCategory(label.to_string()))?;

        self.probs[index] *= factor;
        let total: f64 = self.probs.iter().sum();
        for p in &mut self.probs {
            *p /= total;
        }
        self.resort();
        Ok(())
    }

    /// Restore the as-built probabilities, undoing any re-weighting.
    pub fn reset(&mut self) {
        self.probs = self.original_probs.clone();
        self.resort();
    }

    /// Draw one category label proportionally to its probability.
    pub fn sample<'a>(&'a self, rng: &mut ChaChaRng) -> &'a str {
        let roll: f64 = rng.random();
        let mut cumulative = 0.0;

        for (label, prob) in self.entries() {
            cumulative += prob;
            if roll < cumulative {
                return label;
            }
        }

        // Cumulative rounding can leave roll above the final sum
        self.labels.last().expect("prior is never empty").as_str()
    }

    /// Draw `n` independent category labels.
    pub fn sample_n<'a>(&'a self, rng: &mut ChaChaRng, n: usize) -> Vec<&'a str> {
        (0..n).map(|_| self.sample(rng)).collect()
    }

    fn resort(&mut self) {
        let mut order: Vec<usize> = (0..self.labels.len()).collect();
        order.sort_by(|&a, &b| {
            self.probs[b]
                .partial_cmp(&self.probs[a])
                .unwrap()
                .then_with(|| self.labels[a].cmp(&self.labels[b]))
        });

        let labels = order.iter().map(|&i| self.labels[i].clone()).collect();
        let probs = order.iter().map(|&i| self.probs[i]).collect();
        let original_probs = order.iter().map(|&i| self.original_probs[i]).collect();
        self.labels = labels;
        self.probs = probs;
        self.original_probs = original_probs;
    }
}
