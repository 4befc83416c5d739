use super::{Prng, MODULUS};
use crate::utils::errors::{Error, Result};

/// Multiplicative congruential generator, `x' = x * factor mod 2^31 - 1`,
/// that only hands out values divisible by `multiple`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    start_value: u64,
    previous_value: u64,
    factor: u64,
    multiple: u64,
}

impl Generator {
    /// Fails for a `multiple` of 0, and for a `start_value` or `factor` that
    /// is 0 modulo 2^31 - 1: such a generator would emit nothing but 0.
    pub fn new(start_value: u64, factor: u64, multiple: u64) -> Result<Generator> {
        if multiple == 0 {
            return Err(Error::ZeroMultiple);
        }
        if start_value % MODULUS == 0 {
            return Err(Error::DegenerateSeed(start_value));
        }
        if factor % MODULUS == 0 {
            return Err(Error::DegenerateFactor(factor));
        }

        Ok(Generator {
            start_value,
            previous_value: start_value,
            factor,
            multiple,
        })
    }

    pub fn start_value(&self) -> u64 {
        self.start_value
    }

    pub fn previous_value(&self) -> u64 {
        self.previous_value
    }

    pub fn factor(&self) -> u64 {
        self.factor
    }

    pub fn multiple(&self) -> u64 {
        self.multiple
    }
}

impl Prng for Generator {
    fn next_value(&mut self) -> u64 {
        loop {
            // Both operands reduced first so the product stays below 2^62.
            let value = ((self.previous_value % MODULUS) * (self.factor % MODULUS)) % MODULUS;
            self.previous_value = value;

            if value % self.multiple == 0 {
                return value;
            }
        }
    }

    fn reset(&mut self) {
        self.previous_value = self.start_value;
    }
}

impl Iterator for Generator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_value())
    }
}

#[cfg(test)]
mod tests;
