//! Square-and-multiply modular exponentiation.

use crate::bigint::BigInt;
use fastinv_types::MathError;

impl BigInt {
    /// self^k mod p by square-and-multiply, scanning the exponent bits from
    /// the most significant down. The base is reduced mod p up front, and
    /// the leading exponent bit is consumed by seeding the accumulator.
    ///
    /// Rejects negative exponents and `p <= 1`; this engine only serves
    /// moduli greater than one.
    pub fn mod_exp(&self, k: &BigInt, p: &BigInt) -> Result<BigInt, MathError> {
        if k.is_negative() {
            return Err(MathError::NegativeExponent);
        }
        if *p <= BigInt::one() {
            return Err(MathError::InvalidModulus);
        }

        // bit_len(0) == 0 is degenerate for the MSB-first scan, so the zero
        // exponent short-circuits: x^0 = 1 for p > 1.
        if k.is_zero() {
            return Ok(BigInt::one());
        }

        let base = self.mod_reduce(p)?;
        let mut acc = base.clone();
        for i in (0..k.bit_len() - 1).rev() {
            acc = acc.sqr().mod_reduce(p)?;
            if k.get_bit(i) == 1 {
                acc = acc.mul(&base).mod_reduce(p)?;
            }
        }
        Ok(acc)
    }

    /// self^k mod p with the exponent pre-reduced modulo `p - 1`.
    ///
    /// Precondition: `p` is prime and `gcd(self, p) = 1`, per Fermat's
    /// little theorem. Not verified at runtime; with a composite `p` or a
    /// base divisible by `p` the reduction is invalid and the result is
    /// meaningless. A negative exponent canonicalizes into `[0, p - 1)`,
    /// which is exactly the inverse-power semantics under the precondition.
    pub fn mod_exp_fermat(&self, k: &BigInt, p: &BigInt) -> Result<BigInt, MathError> {
        if *p <= BigInt::one() {
            return Err(MathError::InvalidModulus);
        }
        let k_red = k.mod_reduce(&p.sub(&BigInt::one()))?;
        self.mod_exp(&k_red, p)
    }
}
