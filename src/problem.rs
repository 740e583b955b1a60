use std::ops::{Add, Div, Mul, Sub};

use rand::Rng;

/// One mutable unit of a candidate solution.
///
/// Mixing strategies recombine genes arithmetically -- a gene must support
/// componentwise addition and subtraction with another gene, and scaling by
/// a scalar -- and every mutated gene is passed through
/// [`repair`](#tymethod.repair) before it is written back, so a gene type
/// also knows how to project an arbitrary recombination result back into
/// its feasible set.
pub trait Gene
    : Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self> {
    /// Projects the gene back into the feasible set, in place.
    ///
    /// Must be idempotent: repairing an already-feasible gene leaves it
    /// bitwise unchanged.
    fn repair(&mut self);
}

/// Candidate solution for an optimization problem.
///
/// The colony is abstract over the problem it optimizes: it only ever
/// generates candidates, evaluates their fitness, and lets a mixing
/// strategy rewrite individual genes. Every stochastic operation receives
/// the colony's RNG by mutable reference, so a reimplementation of this
/// trait must not reach for a hidden thread-local generator -- two
/// colonies built with the same inputs and the same seed walk identical
/// trajectories.
pub trait Problem: Clone {
    /// The unit of mutation. For fuzzy clustering this is one point's
    /// membership column.
    type Gene: Gene;

    /// Everything needed to build a fresh candidate: problem dimensions
    /// plus a handle on shared read-only inputs.
    type Params;

    /// Builds a fresh, randomized candidate.
    fn generate<R: Rng>(params: &Self::Params, rng: &mut R) -> Self;

    /// Re-randomizes the candidate in place, erasing its current value.
    ///
    /// Used by the scout phase when a candidate has gone `limit` cycles
    /// without improving.
    fn randomize_value<R: Rng>(&mut self, rng: &mut R);

    /// Evaluates the candidate (the colony maximizes this).
    fn compute_fitness(&self) -> f64;

    /// The number of genes in a candidate.
    fn gene_count(&self) -> usize;

    /// Reads the gene at `index`.
    fn get_gene(&self, index: usize) -> Self::Gene;

    /// Writes the gene at `index`.
    fn set_gene(&mut self, index: usize, gene: Self::Gene);
}
