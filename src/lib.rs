#![crate_name = "abc_clustering"]
#![crate_type = "lib"]

#![warn(missing_docs)]

//! Runs Karaboga's Artificial Bee Colony algorithm over fuzzy c-partition
//! clusterings.
//!
//! A [`Colony`](struct.Colony.html) owns a swarm of candidate partitions
//! and improves them over a caller-supplied number of cycles. Each cycle
//! runs three phases: every bee tries one mutation of itself (employed),
//! every bee funds one extra attempt on a promising candidate (onlooker),
//! and candidates that have stagnated past their limit are thrown away and
//! re-randomized (scout). The best candidate ever seen is kept aside as
//! the champion.
//!
//! Both the mutation policy and the onlooker-selection policy are
//! pluggable, and the colony is generic over them, so each of the four
//! named variants ([`AbcFuzzyClustering`](type.AbcFuzzyClustering.html)
//! and friends) is a fully monomorphized engine. The colony also owns its
//! RNG: seed it, and the whole trajectory of the run is reproducible.
//!
//! # Examples
//!
//! ```
//! extern crate abc_clustering;
//! extern crate rand;
//!
//! use rand::{SeedableRng, StdRng};
//! use abc_clustering::{AbcFuzzyClustering, ClassicMixing, RouletteSelection};
//! use abc_clustering::FuzzyClusteringParams;
//!
//! fn main() {
//!     // Two tight groups near the origin, one pair far out.
//!     let vectors = [[1.0, 2.0], [5.0, 5.0], [6.0, 5.0], [0.0, 1.0],
//!                    [19.0, 20.0], [26.0, 21.0], [-1.0, -2.0], [-3.0, -2.0]];
//!     let params = FuzzyClusteringParams::new(4, &vectors).unwrap();
//!
//!     // The colony draws every random number from this one generator.
//!     let seed: &[_] = &[42];
//!     let rng: StdRng = SeedableRng::from_seed(seed);
//!
//!     let mut colony = AbcFuzzyClustering::new(params,
//!                                              20,   // population
//!                                              200,  // exhaustion limit
//!                                              ClassicMixing,
//!                                              RouletteSelection,
//!                                              rng)
//!         .unwrap();
//!
//!     let before = colony.score();
//!     colony.optimize(100);
//!
//!     // The champion only ever improves...
//!     assert!(colony.score() >= before);
//!
//!     // ...and its membership matrix stays column-stochastic: each
//!     // point's memberships across the 4 clusters sum to 1.
//!     let memberships = colony.get_champion().problem().memberships();
//!     assert_eq!(memberships.len(), 4);
//!     for point in 0..vectors.len() {
//!         let total: f64 = memberships.iter().map(|row| row[point]).sum();
//!         assert!((total - 1.0).abs() < 1e-9);
//!     }
//! }
//! ```

extern crate itertools;
#[macro_use]
extern crate log;
extern crate rand;

mod result;
mod problem;
mod fuzzy;
mod bee;
mod mixing;
mod selection;
mod colony;

pub mod util;

pub use result::{Error, Result};
pub use problem::{Gene, Problem};
pub use fuzzy::{FuzzyClustering, FuzzyClusteringGene, FuzzyClusteringParams};
pub use bee::Bee;
pub use mixing::{ClassicMixing, DeMixing, MixingStrategy};
pub use selection::{RouletteSelection, SelectionStrategy, TournamentSelection};
pub use colony::Colony;

use rand::StdRng;

/// Classic ABC mixing with roulette (fitness-proportional) selection.
pub type AbcFuzzyClustering<'a, const D: usize> =
    Colony<FuzzyClustering<'a, D>, ClassicMixing, RouletteSelection, StdRng>;

/// Differential-evolution mixing with roulette selection.
pub type ModAbcFuzzyClustering<'a, const D: usize> =
    Colony<FuzzyClustering<'a, D>, DeMixing, RouletteSelection, StdRng>;

/// Classic ABC mixing with schedule-varying tournament selection.
pub type TournamentAbcFuzzyClustering<'a, const D: usize> =
    Colony<FuzzyClustering<'a, D>, ClassicMixing, TournamentSelection, StdRng>;

/// Differential-evolution mixing with schedule-varying tournament
/// selection.
pub type TournamentModAbcFuzzyClustering<'a, const D: usize> =
    Colony<FuzzyClustering<'a, D>, DeMixing, TournamentSelection, StdRng>;
