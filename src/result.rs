use std::result;
use std::fmt;
use std::error;

#[derive(Clone, Debug, PartialEq)]
/// Unifies the errors thrown when building a colony.
///
/// All of these are rejected inputs, caught before any bee is created: a
/// colony is never left in a partially-constructed state. Once a colony
/// exists, nothing in its operation can fail -- a cycle that happens not to
/// improve any candidate is a normal event for a stochastic search, not an
/// error.
pub enum Error {
    /// The dataset holds no points; there is nothing to cluster.
    EmptyDataset,

    /// The requested number of clusters is zero.
    ZeroClusters,

    /// The exhaustion limit is zero, which would re-scout every bee on
    /// every cycle.
    ZeroLimit,

    /// The swarm is too small for the mixing strategy to draw its buddies.
    /// Carries the minimum population the strategy needs.
    InsufficientPopulation(usize),

    /// The per-gene mutation rate lies outside `(0, 1]`. Carries the
    /// rejected rate.
    InvalidMutationRate(f64),
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match *self {
            Error::EmptyDataset => "the dataset holds no points",
            Error::ZeroClusters => "the number of clusters must be positive",
            Error::ZeroLimit => "the exhaustion limit must be positive",
            Error::InsufficientPopulation(_) => {
                "the population is too small for the mixing strategy"
            }
            Error::InvalidMutationRate(_) => {
                "the mutation rate must lie in (0, 1]"
            }
        }
    }

    fn cause(&self) -> Option<&error::Error> {
        None
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::EmptyDataset => write!(f, "the dataset holds no points"),
            Error::ZeroClusters => {
                write!(f, "the number of clusters must be positive")
            }
            Error::ZeroLimit => {
                write!(f, "the exhaustion limit must be positive")
            }
            Error::InsufficientPopulation(required) => {
                write!(f,
                       "the mixing strategy needs a population of at least {}",
                       required)
            }
            Error::InvalidMutationRate(rate) => {
                write!(f, "the mutation rate must lie in (0, 1], got {}", rate)
            }
        }
    }
}

/// Encodes the possibility of a colony being handed unusable parameters.
pub type Result<T> = result::Result<T, Error>;
