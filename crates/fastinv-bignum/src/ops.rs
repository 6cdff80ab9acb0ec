//! Signed arithmetic for `BigInt`: add, sub, mul, divmod, modular reduction.

use crate::bigint::{BigInt, DoubleLimb, Limb, LIMB_BITS};
use fastinv_types::MathError;

impl BigInt {
    /// self + other.
    pub fn add(&self, other: &BigInt) -> BigInt {
        if self.is_negative() == other.is_negative() {
            let mut r = add_mag(self.limbs(), other.limbs());
            r.set_negative(self.is_negative());
            r
        } else if self.is_negative() {
            // (-a) + b = b - a
            sub_signed_mag(other.limbs(), self.limbs())
        } else {
            sub_signed_mag(self.limbs(), other.limbs())
        }
    }

    /// self - other.
    pub fn sub(&self, other: &BigInt) -> BigInt {
        if self.is_negative() != other.is_negative() {
            let mut r = add_mag(self.limbs(), other.limbs());
            r.set_negative(self.is_negative());
            r
        } else if self.is_negative() {
            // (-a) - (-b) = b - a
            sub_signed_mag(other.limbs(), self.limbs())
        } else {
            sub_signed_mag(self.limbs(), other.limbs())
        }
    }

    /// self * other.
    pub fn mul(&self, other: &BigInt) -> BigInt {
        let mut r = mul_mag(self.limbs(), other.limbs());
        r.set_negative(self.is_negative() != other.is_negative());
        r
    }

    /// self squared.
    pub fn sqr(&self) -> BigInt {
        mul_mag(self.limbs(), self.limbs())
    }

    /// Truncating division with remainder: returns (quotient, remainder).
    ///
    /// Follows the usual machine convention: the quotient is truncated
    /// toward zero and the remainder carries the sign of the dividend,
    /// so `self == q * divisor + r` and `|r| < |divisor|`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), MathError> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let (mut q, mut r) = divrem_mag(self.limbs(), divisor.limbs());
        q.set_negative(self.is_negative() != divisor.is_negative());
        r.set_negative(self.is_negative());
        Ok((q, r))
    }

    /// Canonical modular reduction: the unique value in `[0, |m|)` congruent
    /// to self modulo m.
    pub fn mod_reduce(&self, modulus: &BigInt) -> Result<BigInt, MathError> {
        let (_, mut r) = self.div_rem(modulus)?;
        if r.is_negative() {
            r = r.add(&modulus.abs());
        }
        Ok(r)
    }

    /// Logical right shift of the magnitude by `bits`; the sign is kept.
    pub fn shr(&self, bits: usize) -> BigInt {
        let limb_shift = bits / LIMB_BITS;
        let bit_shift = bits % LIMB_BITS;
        if limb_shift >= self.limbs().len() {
            return BigInt::zero();
        }
        let src = &self.limbs()[limb_shift..];
        let mut out = vec![0u64; src.len()];
        for i in 0..src.len() {
            out[i] = src[i] >> bit_shift;
            if bit_shift > 0 && i + 1 < src.len() {
                out[i] |= src[i + 1] << (LIMB_BITS - bit_shift);
            }
        }
        let mut r = BigInt::from_limbs(out);
        r.set_negative(self.is_negative());
        r
    }
}

/// Add two magnitudes.
fn add_mag(a: &[Limb], b: &[Limb]) -> BigInt {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut limbs = Vec::with_capacity(long.len() + 1);
    let mut carry: DoubleLimb = 0;
    for i in 0..long.len() {
        let sum = long[i] as DoubleLimb + *short.get(i).unwrap_or(&0) as DoubleLimb + carry;
        limbs.push(sum as Limb);
        carry = sum >> LIMB_BITS;
    }
    limbs.push(carry as Limb);
    BigInt::from_limbs(limbs)
}

/// a - b on magnitudes, with a correctly signed result.
fn sub_signed_mag(a: &[Limb], b: &[Limb]) -> BigInt {
    match cmp_mag(a, b) {
        std::cmp::Ordering::Equal => BigInt::zero(),
        std::cmp::Ordering::Greater => sub_mag(a, b),
        std::cmp::Ordering::Less => {
            let mut r = sub_mag(b, a);
            r.set_negative(true);
            r
        }
    }
}

/// a - b on magnitudes; caller guarantees a >= b.
fn sub_mag(a: &[Limb], b: &[Limb]) -> BigInt {
    let mut limbs = Vec::with_capacity(a.len());
    let mut borrow: u64 = 0;
    for i in 0..a.len() {
        let (d1, b1) = a[i].overflowing_sub(*b.get(i).unwrap_or(&0));
        let (d2, b2) = d1.overflowing_sub(borrow);
        limbs.push(d2);
        borrow = (b1 as u64) + (b2 as u64);
    }
    debug_assert_eq!(borrow, 0);
    BigInt::from_limbs(limbs)
}

/// Schoolbook multiplication of magnitudes.
fn mul_mag(a: &[Limb], b: &[Limb]) -> BigInt {
    let mut limbs = vec![0u64; a.len() + b.len()];
    for (i, &av) in a.iter().enumerate() {
        if av == 0 {
            continue;
        }
        let mut carry: DoubleLimb = 0;
        for (j, &bv) in b.iter().enumerate() {
            let t = av as DoubleLimb * bv as DoubleLimb + limbs[i + j] as DoubleLimb + carry;
            limbs[i + j] = t as Limb;
            carry = t >> LIMB_BITS;
        }
        limbs[i + b.len()] = carry as Limb;
    }
    BigInt::from_limbs(limbs)
}

fn cmp_mag(a: &[Limb], b: &[Limb]) -> std::cmp::Ordering {
    let max_len = a.len().max(b.len());
    for i in (0..max_len).rev() {
        let av = *a.get(i).unwrap_or(&0);
        let bv = *b.get(i).unwrap_or(&0);
        if av != bv {
            return av.cmp(&bv);
        }
    }
    std::cmp::Ordering::Equal
}

/// Binary long division of magnitudes: walks the dividend bits from the most
/// significant down, shifting each into the running remainder.
fn divrem_mag(a: &[Limb], b: &[Limb]) -> (BigInt, BigInt) {
    if cmp_mag(a, b) == std::cmp::Ordering::Less {
        return (BigInt::zero(), BigInt::from_limbs(a.to_vec()));
    }

    let bits = BigInt::from_limbs(a.to_vec()).bit_len();
    let mut q_limbs = vec![0u64; a.len()];
    let mut rem = vec![0u64; b.len() + 1];

    for i in (0..bits).rev() {
        // rem = (rem << 1) | bit i of a
        let mut carry = (a[i / LIMB_BITS] >> (i % LIMB_BITS)) & 1;
        for limb in rem.iter_mut() {
            let top = *limb >> (LIMB_BITS - 1);
            *limb = (*limb << 1) | carry;
            carry = top;
        }
        debug_assert_eq!(carry, 0);

        if cmp_mag(&rem, b) != std::cmp::Ordering::Less {
            // rem -= b
            let mut borrow: u64 = 0;
            for (j, limb) in rem.iter_mut().enumerate() {
                let (d1, b1) = limb.overflowing_sub(*b.get(j).unwrap_or(&0));
                let (d2, b2) = d1.overflowing_sub(borrow);
                *limb = d2;
                borrow = (b1 as u64) + (b2 as u64);
            }
            q_limbs[i / LIMB_BITS] |= 1u64 << (i % LIMB_BITS);
        }
    }

    (BigInt::from_limbs(q_limbs), BigInt::from_limbs(rem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = BigInt::from_u64(100);
        let b = BigInt::from_u64(200);
        assert_eq!(a.add(&b), BigInt::from_u64(300));
        assert_eq!(a.sub(&b), BigInt::from_i64(-100));
        assert_eq!(b.sub(&a), BigInt::from_u64(100));
    }

    #[test]
    fn test_add_carry_across_limbs() {
        let a = BigInt::from_u64(u64::MAX);
        let one = BigInt::one();
        let sum = a.add(&one);
        assert_eq!(sum.limbs(), &[0, 1]);
        assert_eq!(sum.sub(&one), a);
    }

    #[test]
    fn test_signed_add() {
        let a = BigInt::from_i64(-300);
        let b = BigInt::from_u64(100);
        assert_eq!(a.add(&b), BigInt::from_i64(-200));
        assert_eq!(b.add(&a), BigInt::from_i64(-200));
        assert_eq!(a.add(&a), BigInt::from_i64(-600));
    }

    #[test]
    fn test_mul() {
        let a = BigInt::from_u64(12345);
        let b = BigInt::from_u64(67890);
        assert_eq!(a.mul(&b), BigInt::from_u64(12345 * 67890));
        assert_eq!(a.mul(&BigInt::from_i64(-2)), BigInt::from_i64(-24690));
        assert_eq!(BigInt::from_i64(-3).sqr(), BigInt::from_u64(9));
    }

    #[test]
    fn test_mul_multi_limb() {
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1
        let a = BigInt::from_u64(u64::MAX);
        let sq = a.sqr();
        assert_eq!(sq.limbs(), &[1, u64::MAX - 1]);
    }

    #[test]
    fn test_div_rem_truncating() {
        let a = BigInt::from_u64(100);
        let b = BigInt::from_u64(7);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, BigInt::from_u64(14));
        assert_eq!(r, BigInt::from_u64(2));

        // Truncation toward zero, remainder keeps the dividend's sign.
        let (q, r) = BigInt::from_i64(-100).div_rem(&b).unwrap();
        assert_eq!(q, BigInt::from_i64(-14));
        assert_eq!(r, BigInt::from_i64(-2));

        let (q, r) = a.div_rem(&BigInt::from_i64(-7)).unwrap();
        assert_eq!(q, BigInt::from_i64(-14));
        assert_eq!(r, BigInt::from_u64(2));
    }

    #[test]
    fn test_div_rem_multi_limb() {
        let a = BigInt::from_bytes_be(&[0xFF; 24]);
        let b = BigInt::from_bytes_be(&[0xAB; 9]);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.mul(&b).add(&r), a);
        assert!(r.cmp_mag(&b).is_lt());
    }

    #[test]
    fn test_div_by_zero() {
        let a = BigInt::from_u64(100);
        assert!(matches!(
            a.div_rem(&BigInt::zero()),
            Err(MathError::DivisionByZero)
        ));
    }

    #[test]
    fn test_mod_reduce_canonical() {
        let m = BigInt::from_u64(11);
        assert_eq!(BigInt::from_u64(25).mod_reduce(&m).unwrap(), BigInt::from_u64(3));
        // Negative values land in [0, m)
        assert_eq!(
            BigInt::from_i64(-3).mod_reduce(&m).unwrap(),
            BigInt::from_u64(8)
        );
        assert_eq!(BigInt::zero().mod_reduce(&m).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_shr() {
        let n = BigInt::from_u64(0b110100);
        assert_eq!(n.shr(2), BigInt::from_u64(0b1101));
        let wide = BigInt::from_limbs(vec![0, 1]); // 2^64
        assert_eq!(wide.shr(1), BigInt::from_u64(1u64 << 63));
        assert_eq!(wide.shr(65), BigInt::zero());
    }
}
