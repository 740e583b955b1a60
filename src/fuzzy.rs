//! Fuzzy c-partition clustering as an optimizable problem.
//!
//! A candidate assigns every point a partial membership in every cluster.
//! The memberships for one point form a column that always sums to 1, and
//! the quality of a candidate is the inverse of its intra-cluster
//! dispersion: distances from each point to each cluster's weighted
//! centroid, weighted by the point's membership in that cluster. The
//! weighting is linear in the membership, not the `w^m` of fuzzy c-means;
//! the optimizer searches raw membership space.

use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};
use std::slice;

use rand::Rng;

use problem::{Gene, Problem};
use result::{Error, Result};
use util::euclidean_dist;

/// One point's memberships across all clusters.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyClusteringGene {
    weights: Vec<f64>,
}

impl FuzzyClusteringGene {
    /// Creates an all-zero column for `n_clusters` clusters.
    pub fn new(n_clusters: usize) -> FuzzyClusteringGene {
        FuzzyClusteringGene { weights: vec![0.0; n_clusters] }
    }

    /// The number of clusters this column spans.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Iterates the weights in cluster order.
    pub fn iter(&self) -> slice::Iter<f64> {
        self.weights.iter()
    }

    /// Mutably iterates the weights in cluster order.
    pub fn iter_mut(&mut self) -> slice::IterMut<f64> {
        self.weights.iter_mut()
    }
}

impl From<Vec<f64>> for FuzzyClusteringGene {
    fn from(weights: Vec<f64>) -> FuzzyClusteringGene {
        FuzzyClusteringGene { weights: weights }
    }
}

impl Index<usize> for FuzzyClusteringGene {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.weights[index]
    }
}

impl IndexMut<usize> for FuzzyClusteringGene {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.weights[index]
    }
}

impl Add for FuzzyClusteringGene {
    type Output = FuzzyClusteringGene;
    fn add(mut self, other: FuzzyClusteringGene) -> FuzzyClusteringGene {
        for (weight, rhs) in self.weights.iter_mut().zip(other.weights.iter()) {
            *weight += *rhs;
        }
        self
    }
}

impl Sub for FuzzyClusteringGene {
    type Output = FuzzyClusteringGene;
    fn sub(mut self, other: FuzzyClusteringGene) -> FuzzyClusteringGene {
        for (weight, rhs) in self.weights.iter_mut().zip(other.weights.iter()) {
            *weight -= *rhs;
        }
        self
    }
}

impl Mul<f64> for FuzzyClusteringGene {
    type Output = FuzzyClusteringGene;
    fn mul(mut self, other: f64) -> FuzzyClusteringGene {
        for weight in self.weights.iter_mut() {
            *weight *= other;
        }
        self
    }
}

impl Div<f64> for FuzzyClusteringGene {
    type Output = FuzzyClusteringGene;
    fn div(mut self, other: f64) -> FuzzyClusteringGene {
        for weight in self.weights.iter_mut() {
            *weight /= other;
        }
        self
    }
}

impl Gene for FuzzyClusteringGene {
    /// Clamps every weight to `[0, 1]`, then renormalizes the column to
    /// sum 1. A column whose weights all clamp to zero falls back to the
    /// uniform column, since there is no direction left to renormalize
    /// toward.
    fn repair(&mut self) {
        for weight in self.weights.iter_mut() {
            *weight = weight.max(0.0).min(1.0);
        }
        let sum = self.weights.iter().fold(0.0, |total, weight| total + weight);
        if sum == 0.0 {
            let uniform = 1.0 / self.weights.len() as f64;
            for weight in self.weights.iter_mut() {
                *weight = uniform;
            }
        } else {
            for weight in self.weights.iter_mut() {
                *weight /= sum;
            }
        }
    }
}

/// Problem dimensions plus a shared borrow of the caller-owned dataset.
///
/// The dataset is read-only for the lifetime of every colony built from
/// these params; candidates reference it rather than copying `N * D`
/// doubles apiece.
#[derive(Clone, Copy, Debug)]
pub struct FuzzyClusteringParams<'a, const D: usize> {
    n_clusters: usize,
    vectors: &'a [[f64; D]],
}

impl<'a, const D: usize> FuzzyClusteringParams<'a, D> {
    /// Validates and wraps the problem inputs. Dimensionality and element
    /// type are already enforced by the dataset's type, so the only ways
    /// to fail are an empty dataset or a zero cluster count.
    pub fn new(n_clusters: usize,
               vectors: &'a [[f64; D]])
               -> Result<FuzzyClusteringParams<'a, D>> {
        if vectors.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if n_clusters == 0 {
            return Err(Error::ZeroClusters);
        }
        Ok(FuzzyClusteringParams {
            n_clusters: n_clusters,
            vectors: vectors,
        })
    }

    /// The target cluster count `K`.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// The dataset borrow these params were built over.
    pub fn vectors(&self) -> &'a [[f64; D]] {
        self.vectors
    }
}

/// A candidate c-partition: `K * N` membership weights in cluster-major
/// order, so the weight of point `i` in cluster `k` lives at `k * N + i`.
#[derive(Clone, Debug)]
pub struct FuzzyClustering<'a, const D: usize> {
    weights: Vec<f64>,
    n_clusters: usize,
    vectors: &'a [[f64; D]],
}

impl<'a, const D: usize> FuzzyClustering<'a, D> {
    /// The flat weight buffer, cluster-major.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The cluster count `K` of this candidate.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// The membership matrix as `K` rows of `N` weights, the layout the
    /// embedding surface hands back to callers: `rows[k][i]` is the
    /// membership of point `i` in cluster `k`.
    pub fn memberships(&self) -> Vec<Vec<f64>> {
        let n_vectors = self.vectors.len();
        self.weights.chunks(n_vectors).map(|row| row.to_vec()).collect()
    }
}

impl<'a, const D: usize> Problem for FuzzyClustering<'a, D> {
    type Gene = FuzzyClusteringGene;
    type Params = FuzzyClusteringParams<'a, D>;

    fn generate<R: Rng>(params: &FuzzyClusteringParams<'a, D>,
                        rng: &mut R)
                        -> FuzzyClustering<'a, D> {
        let mut problem = FuzzyClustering {
            weights: vec![0.0; params.n_clusters() * params.vectors().len()],
            n_clusters: params.n_clusters(),
            vectors: params.vectors(),
        };
        problem.randomize_value(rng);
        problem
    }

    /// Draws every weight from `Uniform[0, 1)` and divides each column by
    /// its sum, so every column of the fresh candidate is stochastic.
    fn randomize_value<R: Rng>(&mut self, rng: &mut R) {
        for gene_index in 0..self.gene_count() {
            let mut gene = FuzzyClusteringGene::new(self.n_clusters);
            let mut sum = 0.0;
            for weight in gene.iter_mut() {
                *weight = rng.next_f64();
                sum += *weight;
            }
            self.set_gene(gene_index, gene / sum);
        }
    }

    /// `1 / J`, where `J` sums every point's distance to every cluster's
    /// weighted centroid, scaled by the point's membership there. A larger
    /// fitness means a tighter partition; a degenerate zero dispersion
    /// propagates as IEEE infinity.
    fn compute_fitness(&self) -> f64 {
        let n_vectors = self.vectors.len();
        let mut result = 0.0;

        for cluster_idx in 0..self.n_clusters {
            let cluster_weights =
                &self.weights[cluster_idx * n_vectors..(cluster_idx + 1) * n_vectors];

            let mut weighted_sum = [0.0; D];
            let mut weight_sum = 0.0;
            for (vector, weight) in self.vectors.iter().zip(cluster_weights.iter()) {
                for (total, component) in weighted_sum.iter_mut().zip(vector.iter()) {
                    *total += weight * component;
                }
                weight_sum += *weight;
            }

            let mut center = weighted_sum;
            for component in center.iter_mut() {
                *component /= weight_sum;
            }

            for (vector, weight) in self.vectors.iter().zip(cluster_weights.iter()) {
                result += weight * euclidean_dist(vector, &center);
            }
        }

        1.0 / result
    }

    fn gene_count(&self) -> usize {
        self.vectors.len()
    }

    fn get_gene(&self, index: usize) -> FuzzyClusteringGene {
        let n_vectors = self.vectors.len();
        let mut gene = FuzzyClusteringGene::new(self.n_clusters);
        let positions = (index..self.weights.len()).step_by(n_vectors);
        for (weight, position) in gene.iter_mut().zip(positions) {
            *weight = self.weights[position];
        }
        gene
    }

    fn set_gene(&mut self, index: usize, gene: FuzzyClusteringGene) {
        let n_vectors = self.vectors.len();
        let positions = (index..self.weights.len()).step_by(n_vectors);
        for (position, weight) in positions.zip(gene.iter()) {
            self.weights[position] = *weight;
        }
    }
}
