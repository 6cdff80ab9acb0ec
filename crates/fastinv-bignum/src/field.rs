//! Prime-field elements over `BigInt`.

use crate::bigint::BigInt;
use fastinv_types::MathError;

/// An element of the field of integers modulo a prime `p`.
///
/// Construction canonicalizes the value into `[0, p)`. Primality of the
/// modulus is the caller's responsibility: the engine deliberately does no
/// probabilistic primality testing, so a composite modulus silently breaks
/// the field axioms (inversion and square roots become meaningless) without
/// a runtime diagnostic.
#[derive(Clone, Debug)]
pub struct FieldElement {
    value: BigInt,
    modulus: BigInt,
}

impl FieldElement {
    /// Build an element, reducing `value` modulo `modulus`.
    ///
    /// Fails with `InvalidModulus` for `modulus <= 1`.
    pub fn new(value: BigInt, modulus: BigInt) -> Result<Self, MathError> {
        if modulus <= BigInt::one() {
            return Err(MathError::InvalidModulus);
        }
        let value = value.mod_reduce(&modulus)?;
        Ok(Self { value, modulus })
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    fn wrap(&self, value: BigInt) -> Self {
        Self {
            value,
            modulus: self.modulus.clone(),
        }
    }

    /// Both operands must belong to the same field.
    fn check_same_field(&self, other: &Self) -> Result<(), MathError> {
        if self.modulus != other.modulus {
            return Err(MathError::InvalidArg);
        }
        Ok(())
    }

    /// self + other mod p. Single conditional subtraction in constant time,
    /// since both operands are already canonical.
    pub fn add(&self, other: &Self) -> Result<Self, MathError> {
        self.check_same_field(other)?;
        let sum = self.value.add(&other.value);
        Ok(self.wrap(sum.ct_sub_if_gte(&self.modulus)))
    }

    /// self - other mod p, computed as self + (p - other) to stay
    /// non-negative throughout.
    pub fn sub(&self, other: &Self) -> Result<Self, MathError> {
        self.check_same_field(other)?;
        let lifted = self.value.add(&self.modulus).sub(&other.value);
        Ok(self.wrap(lifted.ct_sub_if_gte(&self.modulus)))
    }

    /// self * other mod p.
    pub fn mul(&self, other: &Self) -> Result<Self, MathError> {
        self.check_same_field(other)?;
        let prod = self.value.mul(&other.value).mod_reduce(&self.modulus)?;
        Ok(self.wrap(prod))
    }

    /// self^k mod p with the exponent reduced modulo p - 1. A negative
    /// exponent denotes inverse powers, valid for nonzero elements.
    pub fn pow(&self, k: &BigInt) -> Result<Self, MathError> {
        let r = self.value.mod_exp_fermat(k, &self.modulus)?;
        Ok(self.wrap(r))
    }

    /// Multiplicative inverse. `NoInverse` for the zero element.
    pub fn inv(&self) -> Result<Self, MathError> {
        let r = self.value.mod_inv(&self.modulus)?;
        Ok(self.wrap(r))
    }

    /// Square root in the field, or `None` for a quadratic non-residue.
    pub fn sqrt(&self) -> Result<Option<Self>, MathError> {
        let r = self.value.mod_sqrt(&self.modulus)?;
        Ok(r.map(|v| self.wrap(v)))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        // Value comparison is constant-time; field mismatch is not secret.
        self.modulus == other.modulus && bool::from(self.value.ct_eq(&other.value))
    }
}

impl Eq for FieldElement {}
