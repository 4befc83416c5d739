pub mod judge;

use itertools::Itertools;

use self::judge::{Judge, Round};
use crate::utils::bits::{decimal_width, render_binary};
use crate::utils::errors::Result;
use crate::utils::prng::lcg::Generator;

pub const GENERATOR_A_FACTOR: u64 = 16807;
pub const GENERATOR_B_FACTOR: u64 = 48271;

pub const GENERATOR_A_START_VALUE_EXAMPLE: u64 = 65;
pub const GENERATOR_B_START_VALUE_EXAMPLE: u64 = 8921;
pub const GENERATOR_A_START_VALUE_INPUT: u64 = 634;
pub const GENERATOR_B_START_VALUE_INPUT: u64 = 301;

pub const PART_1_RUNS: u64 = 40_000_000;
pub const PART_2_RUNS: u64 = 5_000_000;

pub const SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Example,
    Input,
}

impl Mode {
    pub fn start_values(self) -> (u64, u64) {
        match self {
            Mode::Example => (
                GENERATOR_A_START_VALUE_EXAMPLE,
                GENERATOR_B_START_VALUE_EXAMPLE,
            ),
            Mode::Input => (GENERATOR_A_START_VALUE_INPUT, GENERATOR_B_START_VALUE_INPUT),
        }
    }

    pub fn banner(self) -> &'static str {
        match self {
            Mode::Example => "Running in example mode",
            Mode::Input => "Running in input mode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn all() -> [Part; 2] {
        [Part::One, Part::Two]
    }

    pub fn config(self, mode: Mode) -> PartConfig {
        let (start_a, start_b) = mode.start_values();
        let (multiple_a, multiple_b, rounds) = match self {
            Part::One => (1, 1, PART_1_RUNS),
            Part::Two => (4, 8, PART_2_RUNS),
        };

        PartConfig {
            start_a,
            start_b,
            factor_a: GENERATOR_A_FACTOR,
            factor_b: GENERATOR_B_FACTOR,
            multiple_a,
            multiple_b,
            rounds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartConfig {
    pub start_a: u64,
    pub start_b: u64,
    pub factor_a: u64,
    pub factor_b: u64,
    pub multiple_a: u64,
    pub multiple_b: u64,
    pub rounds: u64,
}

impl PartConfig {
    pub fn generators(&self) -> Result<(Generator, Generator)> {
        let a = Generator::new(self.start_a, self.factor_a, self.multiple_a)?;
        let b = Generator::new(self.start_b, self.factor_b, self.multiple_b)?;

        Ok((a, b))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartReport {
    pub samples: Vec<(u64, u64)>,
    pub count: u64,
}

/// Draws `n` pairs, advancing both generators.
pub fn sample(a: &mut Generator, b: &mut Generator, n: usize) -> Vec<(u64, u64)> {
    a.by_ref().zip(b.by_ref()).take(n).collect()
}

pub fn solve(config: &PartConfig) -> Result<u64> {
    let (mut a, mut b) = config.generators()?;
    let mut judge = Judge::new(vec![&mut a, &mut b]);

    Ok(judge.run(config.rounds))
}

/// Sample draws followed by the judged run. The judge rewinds the
/// generators, so the sample never shifts the count.
pub fn play(config: &PartConfig) -> Result<PartReport> {
    let (mut a, mut b) = config.generators()?;
    let samples = sample(&mut a, &mut b, SAMPLE_SIZE);

    let mut judge = Judge::new(vec![&mut a, &mut b]);
    let count = judge.run(config.rounds);

    Ok(PartReport { samples, count })
}

pub fn format_samples(samples: &[(u64, u64)]) -> String {
    let width = decimal_width();
    let rows = samples
        .iter()
        .map(|&(a, b)| format!("{:>width$}  {:>width$}", a, b, width = width))
        .join("\n");

    format!("--Gen. A--  --Gen. B--\n{}", rows)
}

pub fn format_count(count: u64) -> String {
    format!("Count: {}", count)
}

pub fn format_round(round: &Round) -> String {
    round.values.iter().map(|&v| render_binary(v)).join("\n")
}
