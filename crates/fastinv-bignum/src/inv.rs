//! Extended-Euclidean modular inverse.
//!
//! The same routine appears as a 64-bit reference in Bitcoin Core's test
//! framework; here it runs over arbitrary-precision integers.

use crate::bigint::BigInt;
use fastinv_types::MathError;

impl BigInt {
    /// Compute the modular inverse: the unique `i` in `[0, n)` with
    /// `self * i ≡ 1 (mod n)`.
    ///
    /// Returns `Err(InvalidModulus)` for `n <= 1` and `Err(NoInverse)` when
    /// `gcd(self, n) != 1`. Non-invertibility is never reported as a numeric
    /// result: zero is a value a caller could mistake for an answer.
    pub fn mod_inv(&self, n: &BigInt) -> Result<BigInt, MathError> {
        if *n <= BigInt::one() {
            return Err(MathError::InvalidModulus);
        }

        // Reducing self into [0, n) keeps the whole remainder chain
        // non-negative, so the final gcd test is exact for negative
        // operands as well.
        let mut r1 = n.clone();
        let mut r2 = self.mod_reduce(n)?;
        let mut t1 = BigInt::zero();
        let mut t2 = BigInt::one();

        // Invariant: t1 * self ≡ r1 and t2 * self ≡ r2 (mod n).
        // Both pairs must advance off the pre-update values.
        while !r2.is_zero() {
            let (q, rem) = r1.div_rem(&r2)?;
            let t_next = t1.sub(&q.mul(&t2));
            t1 = t2;
            t2 = t_next;
            r1 = r2;
            r2 = rem;
        }

        if !r1.is_one() {
            return Err(MathError::NoInverse);
        }

        // |t1| < n holds throughout, so one addition suffices.
        if t1.is_negative() {
            t1 = t1.add(n);
        }
        Ok(t1)
    }

    /// Modular inverse for a prime modulus, without the gcd check.
    ///
    /// Carries a single coefficient chain and returns the raw Bézout
    /// coefficient, which may be negative; it is congruent to the inverse
    /// modulo `n`. Use [`BigInt::prime_inv`] for a canonical result.
    ///
    /// Precondition: `n` is prime. This is not verified (primality testing
    /// costs far more than the inversion itself). If `n` is composite and
    /// `gcd(self, n) != 1`, the returned value is meaningless.
    pub fn prime_inv_raw(&self, n: &BigInt) -> Result<BigInt, MathError> {
        if *n <= BigInt::one() {
            return Err(MathError::InvalidModulus);
        }

        let mut a = self.clone();
        let mut c = n.clone();
        let mut u = BigInt::one();
        let mut w = BigInt::zero();

        while !c.is_zero() {
            // One divmod per step: quotient and remainder together.
            let (q, r) = a.div_rem(&c)?;
            a = c;
            c = r;
            let w_next = u.sub(&q.mul(&w));
            u = w;
            w = w_next;
        }

        Ok(u)
    }

    /// Modular inverse for a prime modulus, normalized into `[0, n)`.
    ///
    /// Same precondition as [`BigInt::prime_inv_raw`].
    pub fn prime_inv(&self, n: &BigInt) -> Result<BigInt, MathError> {
        self.prime_inv_raw(n)?.mod_reduce(n)
    }
}
