#![forbid(unsafe_code)]
#![doc = "Arbitrary-precision modular inverse and exponentiation engine."]
//!
//! Three pure operations over signed big integers: extended-Euclidean
//! modular inverse ([`modinv`]), a prime-modulus fast variant
//! ([`primeinv`] / [`primeinv_raw`]), and square-and-multiply modular
//! exponentiation with Fermat exponent reduction ([`modexp`]).
//!
//! The top-level functions dispatch on operand width: values at or below
//! 63 bits run on native words, everything else on the [`BigInt`] path.
//! Both paths are behaviorally identical for every input the word path
//! accepts.

mod bigint;
mod ct;
mod exp;
mod field;
mod inv;
mod ops;
mod rand;
mod sqrt;
mod word;

pub use bigint::BigInt;
pub use field::FieldElement;

use fastinv_types::MathError;

/// Operands up to this width take the fixed-width fast path.
const WORD_BITS: usize = word::WORD_BITS;

fn word_operand(x: &BigInt) -> Option<i128> {
    if x.bit_len() > WORD_BITS {
        return None;
    }
    x.to_i128()
}

/// Modular inverse of `a` modulo `n`, in `[0, n)`.
///
/// `Err(InvalidModulus)` for `n <= 1`, `Err(NoInverse)` when
/// `gcd(a, n) != 1`.
pub fn modinv(a: &BigInt, n: &BigInt) -> Result<BigInt, MathError> {
    if let (Some(aw), Some(nw)) = (word_operand(a), word_operand(n)) {
        if nw > 1 {
            return word::mod_inv(aw, nw as u64).map(BigInt::from_u64);
        }
    }
    a.mod_inv(n)
}

/// Raw prime-modulus inverse: the Bézout coefficient of `a`, possibly
/// negative, congruent to `a^(-1)` modulo `n`.
///
/// Precondition: `n` is prime (documented, not checked). See
/// [`BigInt::prime_inv_raw`].
pub fn primeinv_raw(a: &BigInt, n: &BigInt) -> Result<BigInt, MathError> {
    if let (Some(aw), Some(nw)) = (word_operand(a), word_operand(n)) {
        if nw > 1 {
            // Coefficients are bounded by max(|a|, n), so this fits i64.
            return Ok(BigInt::from_i64(word::prime_inv(aw, nw as u64) as i64));
        }
    }
    a.prime_inv_raw(n)
}

/// Prime-modulus inverse normalized into `[0, n)`.
///
/// Precondition: `n` is prime (documented, not checked).
pub fn primeinv(a: &BigInt, n: &BigInt) -> Result<BigInt, MathError> {
    primeinv_raw(a, n)?.mod_reduce(n)
}

/// `g^k mod p` with the exponent reduced modulo `p - 1`.
///
/// Precondition: `p` prime and `gcd(g, p) = 1` (documented, not checked);
/// the Fermat reduction is invalid otherwise.
pub fn modexp(g: &BigInt, k: &BigInt, p: &BigInt) -> Result<BigInt, MathError> {
    if let (Some(gw), Some(kw), Some(pw)) =
        (word_operand(g), word_operand(k), word_operand(p))
    {
        if pw > 1 {
            let p = pw as u64;
            let g = gw.rem_euclid(pw) as u64;
            let k = kw.rem_euclid(pw - 1) as u64;
            return Ok(BigInt::from_u64(word::mod_exp(g, k, p)));
        }
    }
    g.mod_exp_fermat(k, p)
}
