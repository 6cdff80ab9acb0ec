//! Fixed-width fast path for operands that fit in a machine word.
//!
//! Mirrors the arbitrary-precision routines limb-for-limb, but on native
//! integers with `i128`/`u128` intermediates. Operands are capped at
//! [`WORD_BITS`] bits by the dispatch layer, so no product here can
//! overflow; the two paths agree on every input the fast path accepts.

use fastinv_types::MathError;

/// Operand width cap for this path. At 63 bits the worst intermediate,
/// a quotient times a Bézout coefficient, stays below 2^126.
pub const WORD_BITS: usize = 63;

/// Position of the most significant set bit, one-based. `bit_length(0) == 0`.
fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// Extended-Euclidean inverse of `a` modulo `n`, canonicalized into `[0, n)`.
pub(crate) fn mod_inv(a: i128, n: u64) -> Result<u64, MathError> {
    if n <= 1 {
        return Err(MathError::InvalidModulus);
    }
    let n = n as i128;

    let mut r1 = n;
    let mut r2 = a.rem_euclid(n);
    let (mut t1, mut t2): (i128, i128) = (0, 1);

    while r2 != 0 {
        let q = r1 / r2;
        (t1, t2) = (t2, t1 - q * t2);
        (r1, r2) = (r2, r1 - q * r2);
    }

    if r1 != 1 {
        return Err(MathError::NoInverse);
    }
    if t1 < 0 {
        t1 += n;
    }
    Ok(t1 as u64)
}

/// Single-chain inverse for a prime modulus; returns the raw, possibly
/// negative Bézout coefficient. Precondition: `n` prime (not checked).
pub(crate) fn prime_inv(mut a: i128, n: u64) -> i128 {
    let mut c = n as i128;
    let (mut u, mut w): (i128, i128) = (1, 0);

    while c != 0 {
        let q = a / c;
        let r = a % c;
        a = c;
        c = r;
        (u, w) = (w, u - q * w);
    }

    u
}

/// `g^k mod p` with the exponent reduced modulo `p - 1`, MSB-first
/// square-and-multiply. Precondition: `p` prime, `gcd(g, p) = 1`.
pub(crate) fn mod_exp(g: u64, k: u64, p: u64) -> u64 {
    debug_assert!(p > 1);
    let k = k % (p - 1);
    let g = (g % p) as u128;
    if k == 0 {
        return 1;
    }

    let p = p as u128;
    let mut r = g;
    for i in (0..bit_length(k) - 1).rev() {
        r = r * r % p;
        if (k >> i) & 1 == 1 {
            r = r * g % p;
        }
    }
    r as u64
}
