#![no_main]
use fastinv_bignum::{modinv, BigInt};
use fastinv_types::MathError;
use libfuzzer_sys::fuzz_target;

// Split the input into an operand and a modulus, then check that the
// dispatched inverse (word or bigint path, depending on width) verifies
// against the definition and that failures are the declared error kinds.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = (data[0] as usize % (data.len() - 1)) + 1;
    let a = BigInt::from_bytes_be(&data[1..split]);
    let n = BigInt::from_bytes_be(&data[split..]);

    match modinv(&a, &n) {
        Ok(inv) => {
            assert!(!inv.is_negative() && inv < n);
            assert!(a.mul(&inv).mod_reduce(&n).unwrap().is_one());
        }
        Err(MathError::InvalidModulus) => assert!(n <= BigInt::one()),
        Err(MathError::NoInverse) => {
            // gcd(a, n) != 1: the "inverse" from the prime-only chain must
            // not verify either.
            if let Ok(raw) = a.prime_inv_raw(&n) {
                assert!(!a.mul(&raw).mod_reduce(&n).unwrap().is_one());
            }
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
