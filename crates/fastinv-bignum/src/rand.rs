//! Random `BigInt` generation from OS randomness.

use crate::bigint::BigInt;
use fastinv_types::MathError;

/// Fill a buffer sized for `bits` bits and mask the excess high bits.
fn random_bytes(bits: usize) -> Result<Vec<u8>, MathError> {
    let num_bytes = bits.div_ceil(8);
    let mut buf = vec![0u8; num_bytes];
    getrandom::getrandom(&mut buf).map_err(|_| MathError::RandGenFail)?;
    let excess = num_bytes * 8 - bits;
    if excess > 0 {
        buf[0] &= 0xFF >> excess;
    }
    Ok(buf)
}

impl BigInt {
    /// Random non-negative value of exactly `bits` bits (MSB forced on).
    pub fn random(bits: usize) -> Result<BigInt, MathError> {
        if bits == 0 {
            return Ok(BigInt::zero());
        }
        let mut buf = random_bytes(bits)?;
        let msb = (bits - 1) % 8;
        buf[0] |= 1u8 << msb;
        Ok(BigInt::from_bytes_be(&buf))
    }

    /// Random value uniform in `[0, upper)`, by rejection sampling.
    pub fn random_below(upper: &BigInt) -> Result<BigInt, MathError> {
        if upper.is_zero() || upper.is_negative() {
            return Err(MathError::InvalidArg);
        }
        let bits = upper.bit_len();
        loop {
            let candidate = BigInt::from_bytes_be(&random_bytes(bits)?);
            if candidate < *upper {
                return Ok(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bits() {
        for bits in [1, 7, 8, 15, 16, 63, 64, 65, 127, 128, 256] {
            let r = BigInt::random(bits).unwrap();
            assert_eq!(r.bit_len(), bits, "random({bits}) has wrong width");
        }
    }

    #[test]
    fn test_random_zero_bits() {
        assert!(BigInt::random(0).unwrap().is_zero());
    }

    #[test]
    fn test_random_below() {
        let upper = BigInt::from_u64(1000);
        for _ in 0..50 {
            let r = BigInt::random_below(&upper).unwrap();
            assert!(!r.is_negative());
            assert!(r < upper);
        }
    }

    #[test]
    fn test_random_below_invalid() {
        assert!(BigInt::random_below(&BigInt::zero()).is_err());
        assert!(BigInt::random_below(&BigInt::from_i64(-5)).is_err());
    }
}
