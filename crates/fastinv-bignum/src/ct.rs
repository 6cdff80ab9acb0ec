//! Constant-time helpers for `BigInt`.
//!
//! No data-dependent branches; used by the field layer where operand
//! values may be secret.

use crate::bigint::BigInt;
use subtle::{Choice, ConstantTimeEq};

impl BigInt {
    /// Constant-time equality.
    pub fn ct_eq(&self, other: &BigInt) -> Choice {
        let max_len = self.limbs().len().max(other.limbs().len());
        let mut acc: u8 = (self.is_negative() as u8)
            .ct_eq(&(other.is_negative() as u8))
            .unwrap_u8();
        for i in 0..max_len {
            let a = self.limbs().get(i).copied().unwrap_or(0);
            let b = other.limbs().get(i).copied().unwrap_or(0);
            acc &= a.ct_eq(&b).unwrap_u8();
        }
        Choice::from(acc)
    }

    /// Constant-time select: `a` when choice is 0, `b` when choice is 1.
    pub fn ct_select(a: &BigInt, b: &BigInt, choice: Choice) -> BigInt {
        let mask = (choice.unwrap_u8() as u64).wrapping_neg();
        let max_len = a.limbs().len().max(b.limbs().len());
        let mut limbs = Vec::with_capacity(max_len);
        for i in 0..max_len {
            let av = a.limbs().get(i).copied().unwrap_or(0);
            let bv = b.limbs().get(i).copied().unwrap_or(0);
            limbs.push(av ^ (mask & (av ^ bv)));
        }
        let neg_a = a.is_negative() as u64;
        let neg_b = b.is_negative() as u64;
        let mut r = BigInt::from_limbs(limbs);
        r.set_negative(neg_a ^ (mask & (neg_a ^ neg_b)) != 0);
        r
    }

    /// If `self >= modulus`, return `self - modulus`, else `self`, with the
    /// comparison folded into the subtraction borrow. Both values must be
    /// non-negative.
    pub fn ct_sub_if_gte(&self, modulus: &BigInt) -> BigInt {
        let max_len = self.limbs().len().max(modulus.limbs().len());
        let mut diff = Vec::with_capacity(max_len);
        let mut borrow: u64 = 0;
        for i in 0..max_len {
            let a = self.limbs().get(i).copied().unwrap_or(0);
            let b = modulus.limbs().get(i).copied().unwrap_or(0);
            let (d1, b1) = a.overflowing_sub(b);
            let (d2, b2) = d1.overflowing_sub(borrow);
            diff.push(d2);
            borrow = (b1 as u64) + (b2 as u64);
        }
        // borrow == 0 exactly when self >= modulus
        let keep_diff = Choice::from((borrow == 0) as u8);
        BigInt::ct_select(self, &BigInt::from_limbs(diff), keep_diff)
    }
}

impl ConstantTimeEq for BigInt {
    fn ct_eq(&self, other: &Self) -> Choice {
        BigInt::ct_eq(self, other)
    }
}
