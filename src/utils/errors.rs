use std::error;
use std::fmt::{self, Display, Formatter};
use std::result;

use crate::utils::prng::MODULUS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    ZeroMultiple,
    DegenerateSeed(u64),
    DegenerateFactor(u64),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::ZeroMultiple => write!(formatter, "generator multiple must be nonzero"),
            Error::DegenerateSeed(seed) => write!(
                formatter,
                "seed {} is a multiple of {} and would only ever produce 0",
                seed, MODULUS
            ),
            Error::DegenerateFactor(factor) => write!(
                formatter,
                "factor {} is a multiple of {} and would only ever produce 0",
                factor, MODULUS
            ),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;
