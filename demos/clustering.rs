// Fuzzy-clusters a tiny hard-coded dataset with the DE-mixing variant and
// prints the champion's membership matrix. Run with RUST_LOG=debug to see
// the colony's progress output.

extern crate abc_clustering;
extern crate env_logger;
extern crate rand;

use abc_clustering::{DeMixing, FuzzyClusteringParams, ModAbcFuzzyClustering, RouletteSelection};
use rand::{SeedableRng, StdRng};

fn main() {
    env_logger::init();

    let vectors = [[1.0, 2.0],
                   [5.0, 5.0],
                   [6.0, 5.0],
                   [0.0, 1.0],
                   [19.0, 20.0],
                   [26.0, 21.0],
                   [-1.0, -2.0],
                   [-3.0, -2.0]];
    let params = FuzzyClusteringParams::new(4, &vectors).unwrap();

    let seed: &[_] = &[2016];
    let rng: StdRng = SeedableRng::from_seed(seed);
    let mixing = DeMixing::new(0.8, 0.1).unwrap();

    let mut colony =
        ModAbcFuzzyClustering::new(params, 20, 200, mixing, RouletteSelection, rng).unwrap();
    colony.optimize(1000);

    println!("champion fitness: {}", colony.score());
    for (cluster, row) in colony.get_champion().problem().memberships().iter().enumerate() {
        println!("cluster {}:", cluster);
        for (point, weight) in vectors.iter().zip(row.iter()) {
            println!("  {:>12?}  {:.3}", point, weight);
        }
    }
}
