use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::constants::DOMAIN_FLOOR;
use crate::memo::{Cell, MemoTable};
use crate::sieve::PrimeSieve;

/// Answer to a k-prime-sum query.
///
/// `Undefined` is the out-of-domain signal, not a failure: the inputs
/// fall outside the configured bounds and the oracle declines to answer.
/// It is deliberately distinct from `No`, which is a proven negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    No,
    Undefined,
}

impl Verdict {
    pub fn is_yes(self) -> bool {
        self == Verdict::Yes
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => write!(f, "yes"),
            Verdict::No => write!(f, "no"),
            Verdict::Undefined => write!(f, "undefined"),
        }
    }
}

/// Memoized decision procedure for "is n a sum of exactly k primes?".
///
/// The sieve is computed once at construction and settles every k = 1
/// answer up front (it is row 1 of the memo table). Higher rows fill
/// lazily as queries recurse: query(n, k) holds iff some prime p leaves
/// a remainder n - p that is a (k-1)-prime sum. Every (k, n) entry with
/// k >= 2 is computed at most once per oracle lifetime.
///
/// The table is owned privately; callers see only `query` and aggregate
/// statistics. Evaluation is single-threaded and synchronous, with
/// recursion depth bounded by k.
pub struct KPrimeSumOracle {
    bounds: Bounds,
    sieve: PrimeSieve,
    memo: MemoTable,
}

impl KPrimeSumOracle {
    /// Build the oracle for the given bounds: sieve [0, n_max), then
    /// copy the primality verdicts into memo row 1.
    pub fn new(bounds: Bounds) -> Self {
        let sieve = PrimeSieve::new(bounds.n_max());
        let mut memo = MemoTable::new(bounds.n_max(), bounds.k_max());
        for n in 0..bounds.n_max() {
            let cell = if sieve.is_prime(n) { Cell::Yes } else { Cell::No };
            memo.set(1, n, cell);
        }
        Self {
            bounds,
            sieve,
            memo,
        }
    }

    /// Oracle over the default reference bounds.
    pub fn with_default_bounds() -> Self {
        Self::new(Bounds::default())
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Read-only view of the underlying sieve.
    pub fn sieve(&self) -> &PrimeSieve {
        &self.sieve
    }

    /// Number of resolved memo entries (row 1 counts in full).
    pub fn resolved(&self) -> usize {
        self.memo.resolved()
    }

    /// Is n a sum of exactly k primes?
    ///
    /// Out-of-domain inputs (n < 2, n >= n_max, k < 1, k > k_max) get
    /// `Undefined`. In-domain answers are memoized and stable: repeated
    /// calls with the same arguments return the same verdict.
    pub fn query(&mut self, n: usize, k: usize) -> Verdict {
        if !self.bounds.contains(n, k) {
            return Verdict::Undefined;
        }
        match self.memo.get(k, n) {
            Cell::Yes => Verdict::Yes,
            Cell::No => Verdict::No,
            Cell::Unknown => self.resolve(n, k),
        }
    }

    /// Compute, record, and return the verdict for an unresolved (k, n).
    fn resolve(&mut self, n: usize, k: usize) -> Verdict {
        // Row 1 was settled at construction, so k >= 2 here.
        debug_assert!(k >= 2);

        // Try primes in ascending order, short-circuiting on the first
        // that leaves a (k-1)-prime remainder. Primes above n - 2 leave
        // a remainder below the domain floor and cannot contribute.
        for p in DOMAIN_FLOOR..=n - DOMAIN_FLOOR {
            if self.sieve.is_prime(p) && self.query(n - p, k - 1).is_yes() {
                self.memo.set(k, n, Cell::Yes);
                return Verdict::Yes;
            }
        }

        self.memo.set(k, n, Cell::No);
        Verdict::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle(n_max: usize, k_max: usize) -> KPrimeSumOracle {
        KPrimeSumOracle::new(Bounds::new(n_max, k_max).unwrap())
    }

    #[test]
    fn test_k1_matches_primality() {
        let mut o = oracle(50, 3);
        assert_eq!(o.query(7, 1), Verdict::Yes);
        assert_eq!(o.query(8, 1), Verdict::No);
        assert_eq!(o.query(2, 1), Verdict::Yes);
        assert_eq!(o.query(49, 1), Verdict::No);
    }

    #[test]
    fn test_two_prime_sums() {
        let mut o = oracle(50, 3);
        assert_eq!(o.query(4, 2), Verdict::Yes); // 2 + 2
        assert_eq!(o.query(10, 2), Verdict::Yes); // 3 + 7 or 5 + 5
        assert_eq!(o.query(5, 2), Verdict::Yes); // 2 + 3
        // 11 - p is never prime for prime p
        assert_eq!(o.query(11, 2), Verdict::No);
        // 2 and 3 are below the smallest two-prime sum
        assert_eq!(o.query(2, 2), Verdict::No);
        assert_eq!(o.query(3, 2), Verdict::No);
    }

    #[test]
    fn test_three_prime_sums() {
        let mut o = oracle(50, 3);
        assert_eq!(o.query(6, 3), Verdict::Yes); // 2 + 2 + 2
        assert_eq!(o.query(7, 3), Verdict::Yes); // 2 + 2 + 3
        assert_eq!(o.query(5, 3), Verdict::No); // smallest 3-sum is 6
        assert_eq!(o.query(49, 3), Verdict::Yes); // 3 + 3 + 43
    }

    #[test]
    fn test_domain_rejection() {
        let mut o = oracle(50, 3);
        assert_eq!(o.query(1, 1), Verdict::Undefined);
        assert_eq!(o.query(0, 1), Verdict::Undefined);
        assert_eq!(o.query(50, 1), Verdict::Undefined); // n_max exclusive
        assert_eq!(o.query(10, 0), Verdict::Undefined);
        assert_eq!(o.query(10, 4), Verdict::Undefined); // k_max inclusive
    }

    #[test]
    fn test_no_and_undefined_are_distinct() {
        let mut o = oracle(50, 3);
        assert_eq!(o.query(11, 2), Verdict::No); // in domain, proven impossible
        assert_eq!(o.query(11, 4), Verdict::Undefined); // k out of range
    }

    #[test]
    fn test_memo_fills_monotonically() {
        let mut o = oracle(100, 4);
        let base = o.resolved(); // row 1 is fully resolved up front
        assert_eq!(base, 100);

        o.query(90, 2);
        let after_first = o.resolved();
        assert!(after_first > base, "a computed query must resolve entries");

        // Identical query: answered from the table, nothing new resolved.
        o.query(90, 2);
        assert_eq!(o.resolved(), after_first);

        // Undefined queries never touch the table.
        o.query(500, 2);
        o.query(90, 9);
        assert_eq!(o.resolved(), after_first);
    }

    #[test]
    fn test_idempotent_verdicts() {
        let mut o = oracle(200, 4);
        for (n, k) in [(100, 2), (101, 3), (11, 2), (199, 4)] {
            let first = o.query(n, k);
            assert_eq!(o.query(n, k), first, "verdict changed for ({n}, {k})");
        }
    }

    #[test]
    fn test_spec_examples() {
        let mut o = oracle(25551, 6);
        assert_eq!(o.query(7, 1), Verdict::Yes);
        assert_eq!(o.query(8, 1), Verdict::No);
        assert_eq!(o.query(10, 2), Verdict::Yes);
        assert_eq!(o.query(1, 1), Verdict::Undefined);
        assert_eq!(o.query(4, 2), Verdict::Yes);
        assert_eq!(o.query(100, 7), Verdict::Undefined);
    }

    #[test]
    fn test_minimal_domain() {
        // n_max = 3 leaves n = 2 as the only query point.
        let mut o = oracle(3, 2);
        assert_eq!(o.query(2, 1), Verdict::Yes);
        assert_eq!(o.query(2, 2), Verdict::No);
        assert_eq!(o.query(3, 1), Verdict::Undefined);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Yes.to_string(), "yes");
        assert_eq!(Verdict::No.to_string(), "no");
        assert_eq!(Verdict::Undefined.to_string(), "undefined");
    }
}
