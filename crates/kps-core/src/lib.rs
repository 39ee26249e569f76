//! k-prime-sum decision oracle.
//!
//! Answers whether an integer n can be written as a sum of exactly k
//! prime numbers (repetition allowed), for n below a configured bound
//! N_MAX and k up to a small maximum K_MAX. A prime sieve settles every
//! k = 1 answer eagerly at construction; higher k is decided by memoized
//! recursion over the sieve, one table entry per computed query.
//!
//! Zero I/O — pure math engine with no opinions about transport or
//! output format.

pub mod bounds;
pub mod constants;
pub mod memo;
pub mod oracle;
pub mod sieve;

pub use bounds::{Bounds, BoundsError};
pub use constants::{DEFAULT_K_MAX, DEFAULT_N_MAX, DOMAIN_FLOOR};
pub use memo::{Cell, MemoTable};
pub use oracle::{KPrimeSumOracle, Verdict};
pub use sieve::PrimeSieve;
