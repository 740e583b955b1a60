//! Onlooker selection policies: which bee gets the extra attention.
//!
//! During the onlooker phase the colony performs one extra improvement
//! attempt per bee, but concentrates those attempts on promising
//! candidates. The selection strategy decides what "promising" means --
//! proportional to fitness, or by tournament with a size that tightens as
//! the run matures.

use rand::Rng;

use bee::Bee;
use problem::Problem;
use util::{roulette, IndexSampler};

/// Picks which bee an onlooker concentrates on.
pub trait SelectionStrategy {
    /// Caches the swarm size and cycle budget. The colony calls this at
    /// the start of every `optimize` invocation, before the first cycle.
    fn set_size(&mut self, population: usize, max_iterations: usize);

    /// Picks the bee an onlooker will work on. `iteration` is the current
    /// cycle, 0-based.
    fn select<P: Problem, R: Rng>(&mut self,
                                  all_nectar: f64,
                                  swarm: &[Bee<P>],
                                  iteration: usize,
                                  rng: &mut R)
                                  -> usize;
}

/// Chooses bees in direct proportion to their fitness.
///
/// Draws a target uniformly from `[0, all_nectar)` and walks the wheel.
/// Sound as long as fitnesses are nonnegative, which holds here by
/// construction (`1 / J` is positive).
#[derive(Clone, Copy, Debug)]
pub struct RouletteSelection;

impl SelectionStrategy for RouletteSelection {
    fn set_size(&mut self, _population: usize, _max_iterations: usize) {}

    fn select<P: Problem, R: Rng>(&mut self,
                                  all_nectar: f64,
                                  swarm: &[Bee<P>],
                                  _iteration: usize,
                                  rng: &mut R)
                                  -> usize {
        roulette(rng.next_f64() * all_nectar, swarm, |bee| bee.fitness())
    }
}

/// Tournament selection with a schedule-varying tournament size.
///
/// Early cycles use small tournaments (near-uniform pressure, exploring),
/// late cycles use tournaments approaching the whole swarm (greedy,
/// exploiting). The schedule depends on the swarm size regime; see
/// `compute_size`. Ignores `all_nectar`, so it is immune to incremental
/// drift in the fitness total.
#[derive(Debug)]
pub struct TournamentSelection {
    population: usize,
    max_cycles: usize,
    sampler: IndexSampler,
}

impl TournamentSelection {
    /// Creates an unsized tournament; `set_size` fills in the regime.
    pub fn new() -> TournamentSelection {
        TournamentSelection {
            population: 0,
            max_cycles: 0,
            sampler: IndexSampler::new(),
        }
    }

    fn compute_size(&self, iteration: usize) -> usize {
        if self.population >= 20 {
            // Steps from P/10 up by P/10 per tenth of the budget. The
            // divisor saturates at 1 and the result is capped at the
            // population so sub-10-cycle budgets stay well-defined.
            let step = self.max_cycles / 10;
            let step = if step == 0 { 1 } else { step };
            let size = self.population * (iteration / step + 1) / 10;
            if size > self.population {
                self.population
            } else {
                size
            }
        } else if self.population > 10 {
            if iteration <= self.max_cycles / 5 {
                2
            } else if iteration <= self.max_cycles / 5 * 4 {
                2 + self.population / 5
            } else {
                self.population
            }
        } else {
            if iteration <= self.max_cycles / 5 {
                2
            } else if iteration <= self.max_cycles / 5 * 4 {
                3
            } else {
                self.population
            }
        }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn set_size(&mut self, population: usize, max_iterations: usize) {
        self.population = population;
        self.max_cycles = max_iterations;
    }

    fn select<P: Problem, R: Rng>(&mut self,
                                  _all_nectar: f64,
                                  swarm: &[Bee<P>],
                                  iteration: usize,
                                  rng: &mut R)
                                  -> usize {
        let tournament_size = self.compute_size(iteration);
        let contenders = self.sampler.sample(tournament_size, 0, swarm.len() - 1, rng);

        let mut winner = contenders[0];
        for &contender in contenders[1..].iter() {
            // Strict comparison: ties go to the first-seen contender.
            if swarm[contender].fitness() > swarm[winner].fitness() {
                winner = contender;
            }
        }
        winner
    }
}
