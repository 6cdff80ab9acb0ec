//! Arbitrary-precision signed integer type.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Limb type for the magnitude representation.
pub type Limb = u64;
/// Double-width type for multiplication and carry intermediates.
pub type DoubleLimb = u128;

/// Bits per limb.
pub const LIMB_BITS: usize = 64;

/// A heap-allocated signed big integer, zeroized on drop.
///
/// The magnitude is a little-endian array of `u64` limbs with a separate
/// sign flag. Values are always normalized: no leading zero limbs, and
/// zero is never negative. Every operation produces a new value; nothing
/// mutates an operand in place, so there is no aliasing and no manual
/// release on any path.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct BigInt {
    /// Little-endian limbs (limbs[0] is the least significant).
    limbs: Vec<Limb>,
    /// True if the value is below zero.
    negative: bool,
}

impl BigInt {
    /// The value 0.
    pub fn zero() -> Self {
        Self {
            limbs: vec![0],
            negative: false,
        }
    }

    /// The value 1.
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Build from an unsigned 64-bit value.
    pub fn from_u64(value: u64) -> Self {
        Self {
            limbs: vec![value],
            negative: false,
        }
    }

    /// Build from a signed 64-bit value.
    pub fn from_i64(value: i64) -> Self {
        Self {
            limbs: vec![value.unsigned_abs()],
            negative: value < 0,
        }
    }

    /// Build from a little-endian limb vector. Leading zero limbs are
    /// stripped; an empty vector yields zero.
    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        let mut n = Self {
            limbs: if limbs.is_empty() { vec![0] } else { limbs },
            negative: false,
        };
        n.normalize();
        n
    }

    /// Build a non-negative value from big-endian bytes.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut limbs = vec![0u64; bytes.len().div_ceil(8).max(1)];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            limbs[i / 8] |= (byte as u64) << ((i % 8) * 8);
        }
        Self::from_limbs(limbs)
    }

    /// Export the magnitude as big-endian bytes (minimal length, `[0]` for zero).
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let bits = self.bit_len();
        if bits == 0 {
            return vec![0];
        }
        let num_bytes = bits.div_ceil(8);
        let mut bytes = vec![0u8; num_bytes];
        for (i, out) in bytes.iter_mut().rev().enumerate() {
            *out = (self.limbs[i / 8] >> ((i % 8) * 8)) as u8;
        }
        bytes
    }

    /// Number of significant bits in the magnitude. `bit_len(0) == 0`.
    pub fn bit_len(&self) -> usize {
        match self.limbs.iter().rposition(|&l| l != 0) {
            Some(i) => (i + 1) * LIMB_BITS - self.limbs[i].leading_zeros() as usize,
            None => 0,
        }
    }

    /// Bit at position `idx`, counted from the least significant bit.
    pub fn get_bit(&self, idx: usize) -> u64 {
        self.limbs
            .get(idx / LIMB_BITS)
            .map_or(0, |l| (l >> (idx % LIMB_BITS)) & 1)
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    pub fn is_one(&self) -> bool {
        !self.negative && self.limbs.len() == 1 && self.limbs[0] == 1
    }

    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    pub fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// The magnitude of this value.
    pub fn abs(&self) -> BigInt {
        let mut r = self.clone();
        r.negative = false;
        r
    }

    /// Little-endian limbs of the magnitude.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    pub(crate) fn set_negative(&mut self, neg: bool) {
        self.negative = neg && !self.is_zero();
    }

    /// Convert to `i128` if the magnitude fits in 63 bits.
    pub fn to_i128(&self) -> Option<i128> {
        if self.bit_len() > 63 {
            return None;
        }
        let mag = self.limbs[0] as i128;
        Some(if self.is_negative() { -mag } else { mag })
    }

    fn normalize(&mut self) {
        while self.limbs.len() > 1 && *self.limbs.last().unwrap() == 0 {
            self.limbs.pop();
        }
        if self.is_zero() {
            self.negative = false;
        }
    }
}

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "BigInt({sign}0x")?;
        for b in self.to_bytes_be() {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.is_negative() == other.is_negative() && self.limbs == other.limbs
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_mag(other),
            (true, true) => other.cmp_mag(self),
        }
    }
}

impl BigInt {
    /// Compare magnitudes, ignoring sign.
    pub fn cmp_mag(&self, other: &BigInt) -> std::cmp::Ordering {
        let a_bits = self.bit_len();
        let b_bits = other.bit_len();
        if a_bits != b_bits {
            return a_bits.cmp(&b_bits);
        }
        // Equal bit length implies equal significant limb count.
        for i in (0..self.limbs.len().min(other.limbs.len())).rev() {
            if self.limbs[i] != other.limbs[i] {
                return self.limbs[i].cmp(&other.limbs[i]);
            }
        }
        std::cmp::Ordering::Equal
    }
}
