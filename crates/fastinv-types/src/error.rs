/// Big-integer arithmetic errors.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    #[error("invalid argument")]
    InvalidArg,
    #[error("modulus must be greater than one")]
    InvalidModulus,
    #[error("division by zero")]
    DivisionByZero,
    /// gcd(a, n) != 1, so no modular inverse exists. Reported as its own
    /// variant so a caller can never confuse it with a numeric result.
    #[error("no modular inverse exists")]
    NoInverse,
    #[error("exponent must be non-negative")]
    NegativeExponent,
    #[error("random generation failed")]
    RandGenFail,
}
