//! Prime classification and the integer feature sets derived from it.
//!
//! Two primality paths are provided: plain trial division for single
//! queries and a sieve of Eratosthenes for whole ranges.  Both must
//! agree exactly; the test-suite cross-checks them.  On top of the
//! sieve sit the twin-prime set and the Euler polynomial trace
//! `k² + k + 41` used as overlays on the grid.

use std::collections::BTreeSet;

/// Constant term of Euler's prime-rich polynomial.
pub const LUCKY_POLYNOMIAL_OFFSET: u64 = 41;

/// Trial division up to `floor(sqrt(n))`, odd divisors only.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut f = 3u64;
    // f <= n / f  <=>  f * f <= n, without overflow near u64::MAX
    while f <= n / f {
        if n % f == 0 {
            return false;
        }
        f += 2;
    }
    true
}

/// Sieve of Eratosthenes over `[0, limit]`.
///
/// Kept as a value so callers can cross-reference arbitrary integers
/// against the prime set without re-sieving.
#[derive(Clone, Debug)]
pub struct PrimeTable {
    candidates: Vec<bool>,
}

impl PrimeTable {
    pub fn sieve(limit: u64) -> Self {
        let len = limit as usize + 1;
        let mut candidates = vec![true; len];
        for slot in candidates.iter_mut().take(2) {
            *slot = false;
        }
        let mut p = 2usize;
        while p * p < len {
            if candidates[p] {
                for multiple in (p * p..len).step_by(p) {
                    candidates[multiple] = false;
                }
            }
            p += 1;
        }
        Self { candidates }
    }

    /// Largest integer covered by the table.
    pub fn limit(&self) -> u64 {
        (self.candidates.len() - 1) as u64
    }

    /// Membership test; integers beyond the sieve limit are reported
    /// as not prime.
    #[inline]
    pub fn contains(&self, k: u64) -> bool {
        usize::try_from(k)
            .ok()
            .and_then(|i| self.candidates.get(i).copied())
            .unwrap_or(false)
    }

    /// All primes in the table, ascending.
    pub fn primes(&self) -> Vec<u64> {
        self.candidates
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(i, _)| i as u64)
            .collect()
    }

    /// Keep only the prime members of `values`, preserving order.
    pub fn retain_primes(&self, values: &[u64]) -> Vec<u64> {
        values.iter().copied().filter(|&v| self.contains(v)).collect()
    }
}

/// All primes in `[2, n]`, ascending.
pub fn primes_upto(n: u64) -> Vec<u64> {
    PrimeTable::sieve(n).primes()
}

/// Every member of a twin pair `(p, p + 2)` with `3 <= p <= n - 2`.
///
/// A prime belonging to two pairs (5 is both the larger of (3, 5) and the
/// smaller of (5, 7)) appears once.
pub fn twin_pairs_upto(n: u64) -> BTreeSet<u64> {
    let mut out = BTreeSet::new();
    if n < 5 {
        return out;
    }
    let table = PrimeTable::sieve(n);
    let mut p = 3u64;
    while p <= n - 2 {
        if table.contains(p) && table.contains(p + 2) {
            out.insert(p);
            out.insert(p + 2);
        }
        p += 2;
    }
    out
}

/// Smaller members `p <= n` of twin pairs, ascending.  The partner
/// `p + 2` may lie one step past `n`.
pub fn twin_primes_upto(n: u64) -> Vec<u64> {
    let table = PrimeTable::sieve(n.saturating_add(2));
    table
        .primes()
        .into_iter()
        .filter(|&p| p <= n && table.contains(p + 2))
        .collect()
}

/// `k² + k + 41` for `k = 0, 1, …` while the value stays `<= n`.
///
/// The values are not filtered for primality; see
/// [`lucky_prime_trace_primes`] for the cross-referenced variant.
pub fn lucky_prime_trace(n: u64) -> Vec<u64> {
    let mut out = Vec::new();
    let mut k = 0u64;
    loop {
        let v = k * k + k + LUCKY_POLYNOMIAL_OFFSET;
        if v > n {
            break;
        }
        out.push(v);
        k += 1;
    }
    out
}

/// The members of [`lucky_prime_trace`] that are actually prime.
pub fn lucky_prime_trace_primes(n: u64) -> Vec<u64> {
    PrimeTable::sieve(n).retain_primes(&lucky_prime_trace(n))
}
