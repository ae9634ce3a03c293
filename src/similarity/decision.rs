// Verdict policy: a validated threshold and a strict comparison.
//
// The comparison is `score > threshold`, strictly: a score exactly at the
// threshold is Distinct. The threshold is configuration, validated once at
// construction; the decide call itself has no failure modes.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default similarity threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.9;

/// The outcome of a pairwise comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Score strictly above the threshold; likely republished content
    Duplicate,
    /// Score at or below the threshold
    Distinct,
}

/// A scored comparison result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub score: f64,
    pub verdict: Verdict,
}

/// Threshold policy for turning a score into a verdict.
#[derive(Debug, Clone, Copy)]
pub struct DecisionPolicy {
    threshold: f64,
}

impl DecisionPolicy {
    /// Build a policy, rejecting thresholds outside [0, 1].
    ///
    /// Scores are bounded to [0, 1], so an out-of-range threshold would
    /// make one verdict unreachable.
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("Similarity threshold must be within [0, 1], got {threshold}");
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Strict comparison: `score > threshold` is a duplicate.
    pub fn decide(&self, score: f64) -> Decision {
        let verdict = if score > self.threshold {
            Verdict::Duplicate
        } else {
            Verdict::Distinct
        };
        Decision { score, verdict }
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
