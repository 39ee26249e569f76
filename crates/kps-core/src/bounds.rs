use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_K_MAX, DEFAULT_N_MAX, DOMAIN_FLOOR};

#[derive(Debug, PartialEq, Eq)]
pub enum BoundsError {
    /// n_max leaves no queryable n (needs at least one integer >= 2 below it).
    NMaxTooSmall(usize),
    /// k_max of zero admits no query at all.
    KMaxZero,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::NMaxTooSmall(n) => {
                write!(f, "n_max must be at least {}, got {n}", DOMAIN_FLOOR + 1)
            }
            BoundsError::KMaxZero => write!(f, "k_max must be at least 1"),
        }
    }
}

impl std::error::Error for BoundsError {}

pub type Result<T> = std::result::Result<T, BoundsError>;

/// Query domain limits, fixed at construction and read-only thereafter.
///
/// `n_max` is exclusive (queries accept 2 <= n < n_max), `k_max` is
/// inclusive (1 <= k <= k_max). Everything the oracle computes stays
/// inside these limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    n_max: usize,
    k_max: usize,
}

impl Bounds {
    /// Validate and fix the domain limits.
    pub fn new(n_max: usize, k_max: usize) -> Result<Self> {
        if n_max <= DOMAIN_FLOOR {
            return Err(BoundsError::NMaxTooSmall(n_max));
        }
        if k_max == 0 {
            return Err(BoundsError::KMaxZero);
        }
        Ok(Self { n_max, k_max })
    }

    /// Exclusive upper bound on n.
    pub fn n_max(self) -> usize {
        self.n_max
    }

    /// Inclusive upper bound on k.
    pub fn k_max(self) -> usize {
        self.k_max
    }

    /// Whether (n, k) is inside the supported query domain.
    pub fn contains(self, n: usize, k: usize) -> bool {
        n >= DOMAIN_FLOOR && n < self.n_max && k >= 1 && k <= self.k_max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            n_max: DEFAULT_N_MAX,
            k_max: DEFAULT_K_MAX,
        }
    }
}
