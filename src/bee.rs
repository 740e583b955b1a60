use std::fmt::{Debug, Formatter, Result as FmtResult};

use rand::Rng;

use problem::Problem;

#[derive(Clone)]
/// One candidate being explored by the colony, plus additional data.
///
/// Fitness evaluation may be expensive, so the `Bee` caches the computed
/// fitness of its problem. It also counts the cycles remaining before an
/// unimproved candidate is abandoned: every accepted improvement resets
/// the counter to `limit`, and the scout phase ticks it down via
/// [`tire`](#method.tire).
pub struct Bee<P: Problem> {
    problem: P,
    limit: usize,
    remaining_cycles: usize,
    fitness: f64,
}

impl<P: Problem> Bee<P> {
    /// Wraps a freshly-generated problem and evaluates it.
    pub fn new(limit: usize, problem: P) -> Bee<P> {
        let fitness = problem.compute_fitness();
        Bee {
            problem: problem,
            limit: limit,
            remaining_cycles: limit,
            fitness: fitness,
        }
    }

    /// Cached fitness of the current problem.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The candidate solution this bee is working.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Offers the bee a mutated candidate.
    ///
    /// A strictly better candidate replaces the current problem and
    /// resets the exhaustion counter. Returns the fitness gained, or 0 if
    /// the candidate was discarded.
    pub fn explore(&mut self, hybrid: P) -> f64 {
        let new_fitness = hybrid.compute_fitness();
        if new_fitness > self.fitness {
            self.problem = hybrid;
            self.remaining_cycles = self.limit;

            let delta = new_fitness - self.fitness;
            self.fitness = new_fitness;
            delta
        } else {
            0.0
        }
    }

    /// Ages the bee by one cycle.
    ///
    /// A bee whose counter has reached zero abandons its candidate as a
    /// local maximum: the problem is re-randomized in place, re-evaluated,
    /// and the counter reset. Returns the signed fitness change (scouting
    /// usually loses fitness), or 0 while the counter is still running
    /// down.
    pub fn tire<R: Rng>(&mut self, rng: &mut R) -> f64 {
        if self.remaining_cycles == 0 {
            self.problem.randomize_value(rng);
            let old_fitness = self.fitness;
            self.fitness = self.problem.compute_fitness();
            self.remaining_cycles = self.limit;

            self.fitness - old_fitness
        } else {
            self.remaining_cycles -= 1;
            0.0
        }
    }
}

impl<P: Problem + Debug> Debug for Bee<P> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "[{}] {:?}", self.fitness, self.problem)
    }
}
