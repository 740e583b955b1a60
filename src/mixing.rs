//! Mutation policies: how a bee recombines with the rest of the swarm.
//!
//! A mixing strategy never mutates the swarm itself. It returns a copy of
//! the chosen bee's problem with one or more genes rewritten and repaired;
//! the colony decides whether the bee accepts the candidate.

use rand::Rng;

use bee::Bee;
use problem::{Gene, Problem};
use result::{Error, Result};
use util::{uniform_int_except, IndexSampler};

/// Produces a mutated candidate from a bee, the swarm, and the champion.
pub trait MixingStrategy<P: Problem> {
    /// Builds a candidate for the bee at `bee_index`.
    fn mutate<R: Rng>(&mut self,
                      bee_index: usize,
                      swarm: &[Bee<P>],
                      champion: &Bee<P>,
                      rng: &mut R)
                      -> P;

    /// The smallest swarm this strategy can draw buddies from. Checked
    /// when the colony is built, so `mutate` itself can assume it holds.
    fn min_population(&self) -> usize {
        2
    }
}

/// Karaboga's original recombination: one gene nudged toward or away from
/// a single random buddy.
///
/// The perturbed unit is a whole gene, not a single scalar as in the
/// textbook ABC; the gene is the natural unit for problems whose genes
/// carry internal constraints of their own.
#[derive(Clone, Copy, Debug)]
pub struct ClassicMixing;

impl<P: Problem> MixingStrategy<P> for ClassicMixing {
    /// `g' = g + phi * (g - b)` with `phi` uniform on `[-1, 1)`, for one
    /// uniformly-chosen gene, followed by repair.
    fn mutate<R: Rng>(&mut self,
                      bee_index: usize,
                      swarm: &[Bee<P>],
                      _champion: &Bee<P>,
                      rng: &mut R)
                      -> P {
        let buddy_index = uniform_int_except(0, swarm.len() - 1, bee_index, rng);
        let mut problem = swarm[bee_index].problem().clone();

        let mixed = rng.gen_range(0, problem.gene_count());
        let coeff = rng.gen_range(-1.0, 1.0);

        let gene = problem.get_gene(mixed);
        let buddy_gene = swarm[buddy_index].problem().get_gene(mixed);
        let mut new_gene = gene.clone() + (gene - buddy_gene) * coeff;
        new_gene.repair();
        problem.set_gene(mixed, new_gene);

        problem
    }
}

/// Differential-evolution-flavored recombination.
///
/// Each gene mutates independently with probability `mr`. A mutated gene
/// is rebuilt from the champion's copy, perturbed by the signed sum of
/// four swarm genes scaled by `f`: the bee's own gene plus three distinct
/// buddies'. The champion (not the bee) is the base vector; this is the
/// variant's defining deviation from textbook DE.
#[derive(Debug)]
pub struct DeMixing {
    f: f64,
    mr: f64,
    sampler: IndexSampler,
}

impl DeMixing {
    /// `f` is the perturbation scale (0.8 is customary); `mr` is the
    /// per-gene mutation rate and must lie in `(0, 1]`.
    pub fn new(f: f64, mr: f64) -> Result<DeMixing> {
        if !(mr > 0.0 && mr <= 1.0) {
            return Err(Error::InvalidMutationRate(mr));
        }
        Ok(DeMixing {
            f: f,
            mr: mr,
            sampler: IndexSampler::new(),
        })
    }
}

impl<P: Problem> MixingStrategy<P> for DeMixing {
    fn mutate<R: Rng>(&mut self,
                      bee_index: usize,
                      swarm: &[Bee<P>],
                      champion: &Bee<P>,
                      rng: &mut R)
                      -> P {
        let mut buddies = [0; 3];
        self.sampler.sample_except(&mut buddies, 0, swarm.len() - 1, bee_index, rng);

        let mut problem = swarm[bee_index].problem().clone();

        let mut gene_selections = Vec::with_capacity(problem.gene_count());
        for _ in 0..problem.gene_count() {
            gene_selections.push(rng.next_f64());
        }

        // Always do at least 1 mutation.
        if gene_selections.iter().all(|&selection| selection > self.mr) {
            let emergency = rng.gen_range(0, gene_selections.len());
            gene_selections[emergency] = 0.0;
        }

        for (gene_idx, selection) in gene_selections.iter().enumerate() {
            if *selection <= self.mr {
                let perturbation = problem.get_gene(gene_idx) -
                                   swarm[buddies[0]].problem().get_gene(gene_idx) +
                                   swarm[buddies[1]].problem().get_gene(gene_idx) -
                                   swarm[buddies[2]].problem().get_gene(gene_idx);
                let mut new_gene = champion.problem().get_gene(gene_idx) +
                                   perturbation * self.f;
                new_gene.repair();
                problem.set_gene(gene_idx, new_gene);
            }
        }

        problem
    }

    /// Three buddies distinct from the bee and from each other.
    fn min_population(&self) -> usize {
        4
    }
}
