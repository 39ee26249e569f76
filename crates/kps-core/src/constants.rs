/// Default exclusive upper bound on n
pub const DEFAULT_N_MAX: usize = 25551;

/// Default inclusive upper bound on k
pub const DEFAULT_K_MAX: usize = 6;

/// Smallest queryable n — the smallest prime
pub const DOMAIN_FLOOR: usize = 2;
