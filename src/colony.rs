use std::fmt::{Debug, Formatter, Result as FmtResult};

use itertools::Itertools;
use rand::Rng;

use bee::Bee;
use mixing::MixingStrategy;
use problem::Problem;
use result::{Error, Result};
use selection::SelectionStrategy;

/// Owns a swarm of bees and drives the three-phase cycle loop.
///
/// The colony is fully monomorphized over its problem, its two strategies,
/// and its RNG, so the mutation and fitness hot paths compile to direct
/// calls. It runs single-threaded and synchronously: given the same
/// parameters and the same seed, two colonies walk identical trajectories.
///
/// The champion is a value copy of the best bee seen so far, never a
/// reference into the swarm -- the swarm mutates constantly, and the
/// champion must survive its source being improved away or re-scouted.
pub struct Colony<P, M, S, R>
    where P: Problem,
          M: MixingStrategy<P>,
          S: SelectionStrategy,
          R: Rng
{
    bees: Vec<Bee<P>>,
    champion: Bee<P>,
    all_nectar: f64,
    rng: R,
    mixing: M,
    selection: S,
}

impl<P, M, S, R> Colony<P, M, S, R>
    where P: Problem,
          M: MixingStrategy<P>,
          S: SelectionStrategy,
          R: Rng
{
    /// Creates a colony of `population` independently-randomized bees.
    ///
    /// * `params` - problem dimensions and shared inputs, handed to every
    ///              generated candidate.
    /// * `population` - number of bees; must satisfy the mixing strategy's
    ///                  buddy requirements.
    /// * `limit` - cycles a bee may go without improvement before the
    ///             scout phase re-randomizes it.
    /// * `rng` - the colony's random number generator. Seeding it is the
    ///           caller's concern; every stochastic step of the run draws
    ///           from this one generator.
    pub fn new(params: P::Params,
               population: usize,
               limit: usize,
               mixing: M,
               selection: S,
               rng: R)
               -> Result<Colony<P, M, S, R>> {
        if limit == 0 {
            return Err(Error::ZeroLimit);
        }
        if population < mixing.min_population() {
            return Err(Error::InsufficientPopulation(mixing.min_population()));
        }

        let mut rng = rng;
        let bees = (0..population)
            .map(|_| Bee::new(limit, P::generate(&params, &mut rng)))
            .collect::<Vec<_>>();

        let champion = bees.iter()
            .fold1(|best, next| {
                if next.fitness() > best.fitness() {
                    next
                } else {
                    best
                }
            })
            .unwrap()
            .clone();
        let all_nectar = bees.iter().fold(0.0, |total, bee| total + bee.fitness());

        debug!("colony of {} bees ready, initial champion fitness {}",
               population,
               champion.fitness());

        Ok(Colony {
            bees: bees,
            champion: champion,
            all_nectar: all_nectar,
            rng: rng,
            mixing: mixing,
            selection: selection,
        })
    }

    /// Runs exactly `max_iterations` cycles.
    ///
    /// Each cycle is three phases in order. Employed: every bee attempts
    /// one mutation of itself and keeps it only if strictly better.
    /// Onlooker: one further attempt per bee, with the targets picked by
    /// the selection strategy. Scout: the champion absorbs any bee that
    /// now beats it, then every bee ages -- an exhausted bee abandons its
    /// candidate and re-randomizes.
    ///
    /// Within the employed and onlooker phases the champion may briefly
    /// trail the swarm's best bee; it catches up at the start of the
    /// scout phase. (A bee re-randomized by the scout phase itself is
    /// only absorbed on the next cycle's sweep.)
    ///
    /// May be invoked repeatedly; the selection strategy is re-sized for
    /// each invocation's budget.
    pub fn optimize(&mut self, max_iterations: usize) {
        self.selection.set_size(self.bees.len(), max_iterations);
        debug!("optimizing for {} cycles", max_iterations);

        for iteration in 0..max_iterations {
            for i in 0..self.bees.len() {
                let hybrid = self.mixing.mutate(i, &self.bees, &self.champion, &mut self.rng);
                self.all_nectar += self.bees[i].explore(hybrid);
            }

            for _ in 0..self.bees.len() {
                let source = self.selection
                    .select(self.all_nectar, &self.bees, iteration, &mut self.rng);
                let hybrid =
                    self.mixing.mutate(source, &self.bees, &self.champion, &mut self.rng);
                self.all_nectar += self.bees[source].explore(hybrid);
            }

            for bee in self.bees.iter_mut() {
                if bee.fitness() > self.champion.fitness() {
                    self.champion = bee.clone();
                }
                self.all_nectar += bee.tire(&mut self.rng);
            }

            // The incrementally-maintained total accumulates rounding
            // error; re-sum once per cycle so drift never reaches the
            // next cycle's roulette weights.
            self.all_nectar = self.bees.iter().fold(0.0, |total, bee| total + bee.fitness());

            trace!("cycle {}: champion fitness {}, total nectar {}",
                   iteration,
                   self.champion.fitness(),
                   self.all_nectar);
        }
    }

    /// The best candidate observed across all cycles so far.
    pub fn get_champion(&self) -> &Bee<P> {
        &self.champion
    }

    /// Champion fitness; higher is better.
    pub fn score(&self) -> f64 {
        self.champion.fitness()
    }

    /// Read-only view of the swarm.
    pub fn bees(&self) -> &[Bee<P>] {
        &self.bees
    }
}

impl<P, M, S, R> Debug for Colony<P, M, S, R>
    where P: Problem + Debug,
          M: MixingStrategy<P>,
          S: SelectionStrategy,
          R: Rng
{
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for bee in self.bees.iter() {
            write!(f, "..{:?}..\n", bee)?;
        }
        write!(f, ">>{:?}<<", self.champion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy::{FuzzyClustering, FuzzyClusteringParams};
    use mixing::{ClassicMixing, DeMixing};
    use rand::{SeedableRng, StdRng};
    use result::Error;
    use selection::{RouletteSelection, TournamentSelection};

    const POINTS: [[f64; 2]; 8] = [[1.0, 2.0],
                                   [5.0, 5.0],
                                   [6.0, 5.0],
                                   [0.0, 1.0],
                                   [19.0, 20.0],
                                   [26.0, 21.0],
                                   [-1.0, -2.0],
                                   [-3.0, -2.0]];

    fn params() -> FuzzyClusteringParams<'static, 2> {
        FuzzyClusteringParams::new(4, &POINTS).unwrap()
    }

    fn seeded(seed: usize) -> StdRng {
        let seed: &[_] = &[seed];
        SeedableRng::from_seed(seed)
    }

    #[test]
    fn construction_rejects_a_zero_limit() {
        let colony = Colony::<FuzzyClustering<2>, _, _, _>::new(params(),
                                                               10,
                                                               0,
                                                               ClassicMixing,
                                                               RouletteSelection,
                                                               seeded(1));
        assert_eq!(colony.err(), Some(Error::ZeroLimit));
    }

    #[test]
    fn construction_rejects_a_swarm_too_small_for_its_mixer() {
        let classic = Colony::<FuzzyClustering<2>, _, _, _>::new(params(),
                                                                1,
                                                                5,
                                                                ClassicMixing,
                                                                RouletteSelection,
                                                                seeded(1));
        assert_eq!(classic.err(), Some(Error::InsufficientPopulation(2)));

        let de = Colony::<FuzzyClustering<2>, _, _, _>::new(params(),
                                                            3,
                                                            5,
                                                            DeMixing::new(0.8, 0.1).unwrap(),
                                                            RouletteSelection,
                                                            seeded(1));
        assert_eq!(de.err(), Some(Error::InsufficientPopulation(4)));
    }

    #[test]
    fn nectar_matches_the_swarm_after_every_invocation() {
        let mut colony = Colony::<FuzzyClustering<2>, _, _, _>::new(params(),
                                                                    10,
                                                                    5,
                                                                    ClassicMixing,
                                                                    RouletteSelection,
                                                                    seeded(2))
            .unwrap();
        for _ in 0..10 {
            colony.optimize(3);
            let total = colony.bees.iter().fold(0.0, |total, bee| total + bee.fitness());
            assert_eq!(colony.all_nectar, total);
        }
    }

    #[test]
    fn champion_dominates_the_swarm_at_cycle_end() {
        // The limit exceeds the cycle count so no bee is re-scouted: a
        // scout draw landing after the champion sweep may outrank the
        // champion until the next cycle, which is permitted.
        let mut colony = Colony::<FuzzyClustering<2>, _, _, _>::new(params(),
                                                                    12,
                                                                    100,
                                                                    ClassicMixing,
                                                                    RouletteSelection,
                                                                    seeded(3))
            .unwrap();
        for _ in 0..25 {
            colony.optimize(1);
            let swarm_best = colony.bees
                .iter()
                .fold(0.0f64, |best, bee| best.max(bee.fitness()));
            assert!(colony.score() >= swarm_best);
        }
    }

    #[test]
    fn champion_fitness_never_decreases() {
        let mut colony = Colony::<FuzzyClustering<2>, _, _, _>::new(params(),
                                                                    10,
                                                                    3,
                                                                    DeMixing::new(0.8, 0.1)
                                                                        .unwrap(),
                                                                    TournamentSelection::new(),
                                                                    seeded(4))
            .unwrap();
        let mut last = colony.score();
        for _ in 0..50 {
            colony.optimize(1);
            assert!(colony.score() >= last);
            last = colony.score();
        }
    }

    #[test]
    fn every_bee_stays_column_stochastic() {
        let mut colony = Colony::<FuzzyClustering<2>, _, _, _>::new(params(),
                                                                    10,
                                                                    2,
                                                                    ClassicMixing,
                                                                    TournamentSelection::new(),
                                                                    seeded(5))
            .unwrap();
        colony.optimize(40);
        for bee in colony.bees() {
            let problem = bee.problem();
            for index in 0..problem.gene_count() {
                let gene = problem.get_gene(index);
                let sum = gene.iter().fold(0.0, |total, weight| total + weight);
                assert!((sum - 1.0).abs() < 1e-9);
                assert!(gene.iter().all(|&weight| weight >= 0.0 && weight <= 1.0));
            }
        }
    }

    #[test]
    fn optimizing_improves_on_the_initial_champion() {
        let mut colony = Colony::<FuzzyClustering<2>, _, _, _>::new(params(),
                                                                    20,
                                                                    50,
                                                                    ClassicMixing,
                                                                    RouletteSelection,
                                                                    seeded(6))
            .unwrap();
        let initial = colony.score();
        colony.optimize(200);
        assert!(colony.score() > initial);
    }
}
