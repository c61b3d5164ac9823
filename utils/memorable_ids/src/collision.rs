//! Combinatorics for memorable IDs: how many IDs a configuration can produce
//! and how likely duplicates become as more of them are generated.

use serde::{Deserialize, Serialize};

use crate::dictionary::{MAX_COMPONENTS, dictionary_stats};

/// ID counts evaluated by [`collision_analysis`], ascending.
pub const SCENARIO_SIZES: [u64; 10] = [
    50, 100, 200, 500, 1_000, 2_000, 5_000, 10_000, 20_000, 50_000,
];

/// Scenarios at or above this fraction of the total space are left out.
const REALISTIC_FRACTION: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionScenario {
    /// Number of IDs generated
    pub ids: u64,
    /// Probability of at least one collision, 0.0..=1.0
    pub probability: f64,
    /// `probability` as a percentage with two decimals, e.g. "21.80%"
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionAnalysis {
    pub total_combinations: u64,
    pub scenarios: Vec<CollisionScenario>,
}

/// Number of distinct IDs for `components` words and a suffix with
/// `suffix_range` possible values (1 for no suffix).
///
/// Returns 0 when `components` is outside 1..=5. A `suffix_range` below 1 is
/// treated as 1. Saturates at `u64::MAX`.
///
/// ```
/// use memorable_ids::{dictionary_stats, total_combinations};
///
/// let stats = dictionary_stats();
/// assert_eq!(total_combinations(2, 1), (stats.adjectives * stats.nouns) as u64);
/// assert_eq!(total_combinations(0, 1), 0);
/// ```
pub fn total_combinations(components: i32, suffix_range: i64) -> u64 {
    if components < 1 || components as usize > MAX_COMPONENTS {
        return 0;
    }
    let suffix_range = suffix_range.max(1) as u64;

    dictionary_stats()
        .sizes()
        .iter()
        .take(components as usize)
        .fold(1u64, |acc, &size| acc.saturating_mul(size as u64))
        .saturating_mul(suffix_range)
}

/// Birthday-paradox estimate of at least one collision among `generated`
/// uniform draws from `total` values: `1 - e^(-n^2 / 2N)`.
///
/// Returns 1.0 once `generated >= total` and 0.0 for one draw or fewer.
pub fn collision_probability(total: u64, generated: u64) -> f64 {
    if generated >= total {
        return 1.0;
    }
    if generated <= 1 {
        return 0.0;
    }

    let n = generated as f64;
    let exponent = -(n * n) / (2.0 * total as f64);
    1.0 - exponent.exp()
}

/// Collision probabilities for the fixed [`SCENARIO_SIZES`] that stay below
/// 80% of the configuration's total space. The list may be empty.
pub fn collision_analysis(components: i32, suffix_range: i64) -> CollisionAnalysis {
    let total = total_combinations(components, suffix_range);
    let threshold = total as f64 * REALISTIC_FRACTION;

    let scenarios = SCENARIO_SIZES
        .iter()
        .filter(|&&ids| (ids as f64) < threshold)
        .map(|&ids| {
            let probability = collision_probability(total, ids);
            CollisionScenario {
                ids,
                probability,
                percentage: format!("{:.2}%", probability * 100.0),
            }
        })
        .collect();

    CollisionAnalysis {
        total_combinations: total,
        scenarios,
    }
}
