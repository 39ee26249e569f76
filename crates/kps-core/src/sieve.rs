/// Primality table for every integer in [0, limit), computed eagerly
/// once via the Sieve of Eratosthenes and immutable afterwards.
#[derive(Clone, Debug)]
pub struct PrimeSieve {
    limit: usize,
    prime: Vec<bool>,
}

impl PrimeSieve {
    /// Sieve all of [0, limit).
    ///
    /// Multiples of each prime are struck out all the way up to `limit`,
    /// so every composite below `limit` ends up marked — including those
    /// above sqrt(limit). Outer trial divisors stop at sqrt(limit): any
    /// composite below `limit` has a prime factor no larger than that.
    pub fn new(limit: usize) -> Self {
        let mut prime = vec![true; limit];
        if limit > 0 {
            prime[0] = false;
        }
        if limit > 1 {
            prime[1] = false;
        }

        let mut i = 2;
        while i * i < limit {
            if prime[i] {
                let mut multiple = i * i;
                while multiple < limit {
                    prime[multiple] = false;
                    multiple += i;
                }
            }
            i += 1;
        }

        Self { limit, prime }
    }

    /// Exclusive upper bound of the sieved range.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether n is prime. False for anything outside the sieved range.
    pub fn is_prime(&self, n: usize) -> bool {
        n < self.limit && self.prime[n]
    }

    /// All primes below the limit, ascending.
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        (2..self.limit).filter(move |&n| self.prime[n])
    }

    /// Number of primes below the limit.
    pub fn count(&self) -> usize {
        self.primes().count()
    }

    /// Largest prime below the limit, if any.
    pub fn largest(&self) -> Option<usize> {
        (2..self.limit).rev().find(|&n| self.prime[n])
    }
}
