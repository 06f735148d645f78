//! Standard variation operators for real-coded problems.
//!
//! # Recombination
//!
//! - [`Sbx`]: Simulated binary crossover, 2 → 2 (Deb & Agrawal, 1995)
//! - [`DifferentialEvolution`]: DE/rand/1/bin, 4 → 1 (Storn & Price, 1997)
//! - [`Spx`]: Simplex crossover, n → k (Tsutsui et al., 1999)
//!
//! # Mutation
//!
//! - [`Pm`]: Polynomial mutation, 1 → 1 (Deb & Goyal, 1996)
//! - [`Um`]: Uniform mutation, 1 → 1
//!
//! Real-coded operators leave integer and categorical variables untouched.
//! [`Um`] resamples variables of any kind.
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous Search Space"
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS) for Engineering Design"
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient Heuristic for
//!   Global Optimization over Continuous Spaces"
//! - Tsutsui, Yamamura & Higuchi (1999), "Multi-parent Recombination with Simplex
//!   Crossover in Real Coded Genetic Algorithms"

use super::types::Variation;
use crate::solution::Solution;
use rand::{Rng, RngCore};

const EPSILON: f64 = 1e-14;

// ============================================================================
// Simulated binary crossover
// ============================================================================

/// Simulated binary crossover (SBX).
///
/// Each real variable is recombined with probability 0.5; the spread of the
/// children around the parents is controlled by `distribution_index`
/// (larger = children closer to parents).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sbx {
    /// Probability of applying crossover at all (otherwise parents are copied).
    pub probability: f64,

    /// Distribution index (eta_c).
    pub distribution_index: f64,
}

impl Default for Sbx {
    fn default() -> Self {
        Self {
            probability: 1.0,
            distribution_index: 15.0,
        }
    }
}

impl Sbx {
    pub fn new(probability: f64, distribution_index: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            distribution_index: distribution_index.max(0.0),
        }
    }
}

impl Variation for Sbx {
    fn name(&self) -> &str {
        "sbx"
    }

    fn arity(&self) -> usize {
        2
    }

    fn offspring(&self) -> usize {
        2
    }

    fn evolve(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Vec<Solution> {
        let mut child1 = parents[0].copy_unevaluated();
        let mut child2 = parents[1].copy_unevaluated();

        if rng.random::<f64>() <= self.probability {
            let n = child1.num_variables().min(child2.num_variables());
            for i in 0..n {
                if rng.random::<f64>() > 0.5 {
                    continue;
                }
                let (Some(x1), Some(x2), Some((lower, upper))) = (
                    child1.variables()[i].as_real(),
                    child2.variables()[i].as_real(),
                    child1.variables()[i].real_bounds(),
                ) else {
                    continue;
                };
                if (x1 - x2).abs() <= EPSILON {
                    continue;
                }

                let (c1, c2) = sbx_pair(x1, x2, lower, upper, self.distribution_index, rng);
                child1.variables_mut()[i].set_real(c1);
                child2.variables_mut()[i].set_real(c2);
            }
        }

        vec![child1, child2]
    }
}

/// Recombines one pair of values within `[lower, upper]`.
fn sbx_pair(
    x1: f64,
    x2: f64,
    lower: f64,
    upper: f64,
    eta: f64,
    rng: &mut dyn RngCore,
) -> (f64, f64) {
    let y1 = x1.min(x2);
    let y2 = x1.max(x2);
    let span = y2 - y1;
    let exponent = 1.0 / (eta + 1.0);

    let spread = |beta: f64, u: f64| {
        let alpha = 2.0 - beta.powf(-(eta + 1.0));
        if u <= 1.0 / alpha {
            (u * alpha).powf(exponent)
        } else {
            (1.0 / (2.0 - u * alpha)).powf(exponent)
        }
    };

    let beta_low = 1.0 + 2.0 * (y1 - lower) / span;
    let betaq = spread(beta_low, rng.random::<f64>());
    let low = (0.5 * ((y1 + y2) - betaq * span)).clamp(lower, upper);

    let beta_high = 1.0 + 2.0 * (upper - y2) / span;
    let betaq = spread(beta_high, rng.random::<f64>());
    let high = (0.5 * ((y1 + y2) + betaq * span)).clamp(lower, upper);

    // Keep the children on the same side as their parents, then swap half
    // the time.
    let (mut c1, mut c2) = if x1 <= x2 { (low, high) } else { (high, low) };
    if rng.random_bool(0.5) {
        std::mem::swap(&mut c1, &mut c2);
    }
    (c1, c2)
}

// ============================================================================
// Polynomial mutation
// ============================================================================

/// Polynomial mutation (PM).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pm {
    /// Per-variable mutation probability. `None` means `1 / num_variables`.
    pub probability: Option<f64>,

    /// Distribution index (eta_m).
    pub distribution_index: f64,
}

impl Default for Pm {
    fn default() -> Self {
        Self {
            probability: None,
            distribution_index: 20.0,
        }
    }
}

impl Pm {
    pub fn new(probability: f64, distribution_index: f64) -> Self {
        Self {
            probability: Some(probability.clamp(0.0, 1.0)),
            distribution_index: distribution_index.max(0.0),
        }
    }
}

impl Variation for Pm {
    fn name(&self) -> &str {
        "pm"
    }

    fn arity(&self) -> usize {
        1
    }

    fn offspring(&self) -> usize {
        1
    }

    fn evolve(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Vec<Solution> {
        let mut child = parents[0].copy_unevaluated();
        let rate = per_variable_rate(self.probability, child.num_variables());
        let eta = self.distribution_index;
        let exponent = 1.0 / (eta + 1.0);

        for variable in child.variables_mut() {
            if rng.random::<f64>() > rate {
                continue;
            }
            let (Some(x), Some((lower, upper))) = (variable.as_real(), variable.real_bounds()) else {
                continue;
            };
            let span = upper - lower;
            if span <= 0.0 {
                continue;
            }

            let u = rng.random::<f64>();
            let delta = if u < 0.5 {
                let bl = (x - lower) / span;
                let b = 2.0 * u + (1.0 - 2.0 * u) * (1.0 - bl).powf(eta + 1.0);
                b.powf(exponent) - 1.0
            } else {
                let bu = (upper - x) / span;
                let b = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * (1.0 - bu).powf(eta + 1.0);
                1.0 - b.powf(exponent)
            };
            variable.set_real(x + delta * span);
        }

        vec![child]
    }
}

// ============================================================================
// Uniform mutation
// ============================================================================

/// Uniform mutation (UM): resamples each variable from its domain with a
/// fixed probability.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Um {
    /// Per-variable mutation probability. `None` means `1 / num_variables`.
    pub probability: Option<f64>,
}

impl Um {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: Some(probability.clamp(0.0, 1.0)),
        }
    }
}

impl Variation for Um {
    fn name(&self) -> &str {
        "um"
    }

    fn arity(&self) -> usize {
        1
    }

    fn offspring(&self) -> usize {
        1
    }

    fn evolve(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Vec<Solution> {
        let mut child = parents[0].copy_unevaluated();
        let rate = per_variable_rate(self.probability, child.num_variables());
        for variable in child.variables_mut() {
            if rng.random::<f64>() <= rate {
                variable.randomize(rng);
            }
        }
        vec![child]
    }
}

// ============================================================================
// Differential evolution
// ============================================================================

/// Differential evolution, rand/1/bin variant.
///
/// Parent 0 is the target vector; parents 1–3 form the difference vector
/// `p1 + F · (p2 − p3)`. At least one real variable is always taken from
/// the mutant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifferentialEvolution {
    /// Crossover rate (CR).
    pub crossover_rate: f64,

    /// Scaling factor (F).
    pub step_size: f64,
}

impl Default for DifferentialEvolution {
    fn default() -> Self {
        Self {
            crossover_rate: 0.1,
            step_size: 0.5,
        }
    }
}

impl DifferentialEvolution {
    pub fn new(crossover_rate: f64, step_size: f64) -> Self {
        Self {
            crossover_rate: crossover_rate.clamp(0.0, 1.0),
            step_size,
        }
    }
}

impl Variation for DifferentialEvolution {
    fn name(&self) -> &str {
        "de"
    }

    fn arity(&self) -> usize {
        4
    }

    fn offspring(&self) -> usize {
        1
    }

    fn evolve(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Vec<Solution> {
        let mut child = parents[0].copy_unevaluated();
        let n = child.num_variables();
        if n == 0 {
            return vec![child];
        }
        let forced = rng.random_range(0..n);

        for i in 0..n {
            if i != forced && rng.random::<f64>() > self.crossover_rate {
                continue;
            }
            let donors = (
                parents[1].variables().get(i).and_then(|v| v.as_real()),
                parents[2].variables().get(i).and_then(|v| v.as_real()),
                parents[3].variables().get(i).and_then(|v| v.as_real()),
            );
            if let (Some(a), Some(b), Some(c)) = donors {
                child.variables_mut()[i].set_real(a + self.step_size * (b - c));
            }
        }

        vec![child]
    }
}

// ============================================================================
// Simplex crossover
// ============================================================================

/// Simplex crossover (SPX).
///
/// The parents span a simplex, which is expanded around its centroid by
/// `expansion`; each child is sampled uniformly from the expanded simplex.
/// With `expansion = 0` every child is the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spx {
    /// Number of parents (at least 2).
    pub parents: usize,

    /// Number of offspring per application (at least 1).
    pub offspring: usize,

    /// Expansion rate (epsilon). `sqrt(parents)` keeps the covariance of
    /// the parents.
    pub expansion: f64,
}

impl Default for Spx {
    fn default() -> Self {
        Self {
            parents: 3,
            offspring: 2,
            expansion: 3f64.sqrt(),
        }
    }
}

impl Spx {
    pub fn new(parents: usize, offspring: usize, expansion: f64) -> Self {
        Self {
            parents: parents.max(2),
            offspring: offspring.max(1),
            expansion: expansion.max(0.0),
        }
    }

    fn sample_child(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Solution {
        let mut child = parents[0].copy_unevaluated();
        let n = parents.len();
        let exponents: Vec<f64> = (1..n).map(|i| 1.0 / i as f64).collect();
        let draws: Vec<f64> = exponents
            .iter()
            .map(|&e| rng.random::<f64>().powf(e))
            .collect();

        for j in 0..child.num_variables() {
            let Some(x) = parents
                .iter()
                .map(|p| p.variables().get(j).and_then(|v| v.as_real()))
                .collect::<Option<Vec<f64>>>()
            else {
                continue;
            };

            let centroid = x.iter().sum::<f64>() / n as f64;
            let y: Vec<f64> = x
                .iter()
                .map(|&xi| centroid + self.expansion * (xi - centroid))
                .collect();

            let mut c = 0.0;
            for i in 1..n {
                c = draws[i - 1] * (y[i - 1] - y[i] + c);
            }
            child.variables_mut()[j].set_real(y[n - 1] + c);
        }
        child
    }
}

impl Variation for Spx {
    fn name(&self) -> &str {
        "spx"
    }

    fn arity(&self) -> usize {
        self.parents
    }

    fn offspring(&self) -> usize {
        self.offspring
    }

    fn evolve(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Vec<Solution> {
        (0..self.offspring)
            .map(|_| self.sample_child(parents, rng))
            .collect()
    }
}

fn per_variable_rate(probability: Option<f64>, num_variables: usize) -> f64 {
    probability.unwrap_or_else(|| 1.0 / num_variables.max(1) as f64)
}

// ============================================================================
// Tests
// ============================================================================
