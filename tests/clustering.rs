// End-to-end runs of the four colony variants on small datasets.

extern crate abc_clustering;
extern crate rand;

use abc_clustering::{AbcFuzzyClustering, ClassicMixing, DeMixing, FuzzyClusteringParams,
                     ModAbcFuzzyClustering, RouletteSelection, TournamentAbcFuzzyClustering,
                     TournamentModAbcFuzzyClustering, TournamentSelection};
use abc_clustering::util::euclidean_dist;
use rand::{Rng, SeedableRng, StdRng};

const POINTS: [[f64; 2]; 8] = [[1.0, 2.0],
                               [5.0, 5.0],
                               [6.0, 5.0],
                               [0.0, 1.0],
                               [19.0, 20.0],
                               [26.0, 21.0],
                               [-1.0, -2.0],
                               [-3.0, -2.0]];

fn seeded(seed: usize) -> StdRng {
    let seed: &[_] = &[seed];
    SeedableRng::from_seed(seed)
}

/// Assigns each point to its highest-membership cluster.
fn argmax_assignments(memberships: &[Vec<f64>], n_points: usize) -> Vec<usize> {
    (0..n_points)
        .map(|point| {
            (1..memberships.len()).fold(0, |best, cluster| {
                if memberships[cluster][point] > memberships[best][point] {
                    cluster
                } else {
                    best
                }
            })
        })
        .collect()
}

#[test]
fn separation_recovery_on_the_toy_dataset() {
    let params = FuzzyClusteringParams::new(4, &POINTS).unwrap();
    let mixing = DeMixing::new(0.8, 0.1).unwrap();
    let mut colony =
        ModAbcFuzzyClustering::new(params, 20, 200, mixing, RouletteSelection, seeded(2016))
            .unwrap();
    colony.optimize(1000);

    let memberships = colony.get_champion().problem().memberships();
    let assignments = argmax_assignments(&memberships, POINTS.len());

    // Centroids of the non-empty argmax groups.
    let mut centroids: Vec<[f64; 2]> = Vec::new();
    for cluster in 0..4 {
        let members: Vec<&[f64; 2]> = POINTS.iter()
            .zip(assignments.iter())
            .filter(|&(_, assigned)| *assigned == cluster)
            .map(|(point, _)| point)
            .collect();
        if members.is_empty() {
            continue;
        }
        let mut centroid = [0.0, 0.0];
        for point in members.iter() {
            centroid[0] += point[0];
            centroid[1] += point[1];
        }
        centroid[0] /= members.len() as f64;
        centroid[1] /= members.len() as f64;
        centroids.push(centroid);
    }

    // The far-out pair must have pulled some centroid more than 10 away
    // from another on at least one axis; a partition that smears the
    // whole dataset into one group would fail both assertions.
    assert!(centroids.len() >= 2);
    let mut separated = false;
    for first in 0..centroids.len() {
        for second in first + 1..centroids.len() {
            if (centroids[first][0] - centroids[second][0]).abs() > 10.0 ||
               (centroids[first][1] - centroids[second][1]).abs() > 10.0 {
                separated = true;
            }
        }
    }
    assert!(separated);
}

#[test]
fn single_cluster_champion_is_the_mean_partition() {
    let params = FuzzyClusteringParams::new(1, &POINTS).unwrap();
    let mut colony =
        AbcFuzzyClustering::new(params, 5, 10, ClassicMixing, RouletteSelection, seeded(7))
            .unwrap();
    colony.optimize(25);

    // Only one column-stochastic matrix exists for K = 1, so the champion
    // fitness is pinned to the inverse dispersion around the mean.
    let mut mean = [0.0, 0.0];
    for point in POINTS.iter() {
        mean[0] += point[0];
        mean[1] += point[1];
    }
    mean[0] /= POINTS.len() as f64;
    mean[1] /= POINTS.len() as f64;
    let mut dispersion = 0.0;
    for point in POINTS.iter() {
        dispersion += euclidean_dist(point, &mean);
    }

    assert!((colony.score() - 1.0 / dispersion).abs() < 1e-12);
}

#[test]
fn champion_score_is_monotone_across_cycles() {
    let mut data_rng = seeded(99);
    let points: Vec<[f64; 2]> = (0..50)
        .map(|_| [data_rng.gen_range(-25.0, 25.0), data_rng.gen_range(-25.0, 25.0)])
        .collect();
    let params = FuzzyClusteringParams::new(3, &points).unwrap();
    let mut colony = TournamentAbcFuzzyClustering::new(params,
                                                       20,
                                                       50,
                                                       ClassicMixing,
                                                       TournamentSelection::new(),
                                                       seeded(100))
        .unwrap();

    let mut last = colony.score();
    for _ in 0..500 {
        colony.optimize(1);
        let score = colony.score();
        assert!(score >= last);
        last = score;
    }
}

#[test]
fn identical_seeds_reproduce_the_run_exactly() {
    let run = |seed: usize| {
        let params = FuzzyClusteringParams::new(4, &POINTS).unwrap();
        let mixing = DeMixing::new(0.8, 0.1).unwrap();
        let mut colony =
            ModAbcFuzzyClustering::new(params, 20, 30, mixing, RouletteSelection, seeded(seed))
                .unwrap();
        colony.optimize(50);
        (colony.score(), colony.get_champion().problem().memberships())
    };

    let (first_score, first_memberships) = run(5);
    let (second_score, second_memberships) = run(5);
    assert_eq!(first_score, second_score);
    assert_eq!(first_memberships, second_memberships);
}

#[test]
fn tournament_de_variant_runs_and_improves() {
    let params = FuzzyClusteringParams::new(2, &POINTS).unwrap();
    let mixing = DeMixing::new(0.8, 0.1).unwrap();
    let mut colony = TournamentModAbcFuzzyClustering::new(params,
                                                          10,
                                                          30,
                                                          mixing,
                                                          TournamentSelection::new(),
                                                          seeded(41))
        .unwrap();
    let initial = colony.score();
    colony.optimize(150);
    assert!(colony.score() > initial);
}

#[test]
fn optimized_memberships_remain_column_stochastic() {
    let params = FuzzyClusteringParams::new(4, &POINTS).unwrap();
    let mut colony = TournamentAbcFuzzyClustering::new(params,
                                                       12,
                                                       20,
                                                       ClassicMixing,
                                                       TournamentSelection::new(),
                                                       seeded(17))
        .unwrap();
    colony.optimize(100);

    let memberships = colony.get_champion().problem().memberships();
    for point in 0..POINTS.len() {
        let total = memberships.iter().fold(0.0, |total, row| total + row[point]);
        assert!((total - 1.0).abs() < 1e-9);
    }
}
