//! Sampling and distance helpers shared by the strategies and the problem.

use rand::Rng;

/// Draws a value uniformly from `[min, max]`, never returning `excluded`.
///
/// The draw is taken from `[min, max - 1]` and bumped by one when it lands
/// on or above `excluded`, so every admissible value keeps equal
/// probability. `excluded` must lie in `[min, max]`, and the range must
/// contain at least two values.
pub fn uniform_int_except<R: Rng>(min: usize,
                                  max: usize,
                                  excluded: usize,
                                  rng: &mut R)
                                  -> usize {
    let random = rng.gen_range(min, max);
    if random < excluded {
        random
    } else {
        random + 1
    }
}

/// Samples distinct indices by partial Fisher-Yates shuffles.
///
/// The shuffle runs over an owned scratch permutation that is rebuilt only
/// when the requested range changes, so repeated draws over the same range
/// (the common case: once per onlooker slot, or once per mutation) cost
/// `count` swaps and no allocation. Each sampler belongs to exactly one
/// strategy instance; sharing one across colonies would let their draws
/// interleave through the same scratch.
#[derive(Debug)]
pub struct IndexSampler {
    numbers: Vec<usize>,
    base: usize,
}

impl IndexSampler {
    /// Creates a sampler with an empty scratch; the first draw fills it.
    pub fn new() -> IndexSampler {
        IndexSampler {
            numbers: Vec::new(),
            base: 0,
        }
    }

    fn prepare(&mut self, min: usize, max: usize) {
        let len = max - min + 1;
        if self.numbers.len() != len || self.base != min {
            self.numbers.clear();
            self.numbers.extend(min..max + 1);
            self.base = min;
        }
    }

    /// Returns `count` distinct values drawn uniformly from `[min, max]`.
    ///
    /// `count` must not exceed the size of the range.
    pub fn sample<R: Rng>(&mut self,
                          count: usize,
                          min: usize,
                          max: usize,
                          rng: &mut R)
                          -> &[usize] {
        self.prepare(min, max);
        for i in 0..count {
            let random = rng.gen_range(i, self.numbers.len());
            self.numbers.swap(i, random);
        }
        &self.numbers[..count]
    }

    /// Fills `out` with distinct values from `[min, max]`, none of them
    /// equal to `excluded`.
    ///
    /// Implemented by sampling from `[min, max - 1]` and bumping every draw
    /// that lands on or above `excluded`, mirroring
    /// [`uniform_int_except`](fn.uniform_int_except.html).
    pub fn sample_except<R: Rng>(&mut self,
                                 out: &mut [usize],
                                 min: usize,
                                 max: usize,
                                 excluded: usize,
                                 rng: &mut R) {
        let drawn = self.sample(out.len(), min, max - 1, rng);
        for (slot, number) in out.iter_mut().zip(drawn) {
            *slot = if *number < excluded {
                *number
            } else {
                *number + 1
            };
        }
    }
}

/// Returns the smallest index whose running fitness total reaches `target`.
///
/// `target` is expected to be drawn from `[0, total fitness)`; a
/// nonpositive target yields index 0, and a target that overshoots the
/// total (a floating-point edge when the total is maintained
/// incrementally) yields the last index. `items` must be nonempty.
pub fn roulette<T, F>(mut target: f64, items: &[T], fitness: F) -> usize
    where F: Fn(&T) -> f64
{
    let mut winner = 0;
    for item in items {
        target -= fitness(item);
        if target <= 0.0 {
            return winner;
        }
        winner += 1;
    }
    winner - 1
}

/// Euclidean distance between two points of the same dimensionality.
pub fn euclidean_dist<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    let mut result = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let diff = x - y;
        result += diff * diff;
    }
    result.sqrt()
}
