pub mod lcg;

/// 2^31 - 1, the Mersenne prime every generator reduces by.
pub const MODULUS: u64 = 2147483647;

pub trait Prng {
    fn next_value(&mut self) -> u64;
    fn reset(&mut self);
}
