use itertools::Itertools;

use crate::utils::bits::low_16;
use crate::utils::prng::Prng;

/// The masked values of one round and whether they all agreed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub values: Vec<u16>,
    pub matched: bool,
}

/// Advances a fixed set of generators in lockstep and counts the rounds in
/// which their low 16 bits agree.
///
/// The judge borrows its generators for its whole lifetime and rewinds them
/// all to their seeds on construction.
pub struct Judge<'a, G: Prng + ?Sized + 'a> {
    generators: Vec<&'a mut G>,
}

impl<'a, G: Prng + ?Sized + 'a> Judge<'a, G> {
    pub fn new(generators: Vec<&'a mut G>) -> Judge<'a, G> {
        let mut judge = Judge { generators };
        judge.reset();

        judge
    }

    pub fn reset(&mut self) {
        for generator in self.generators.iter_mut() {
            generator.reset();
        }
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn run(&mut self, times: u64) -> u64 {
        let mut values: Vec<u16> = vec![0; self.generators.len()];
        let mut count = 0;

        for _ in 0..times {
            if self.draw(&mut values[..]) {
                count += 1;
            }
        }

        count
    }

    pub fn next_round(&mut self) -> Round {
        let mut values: Vec<u16> = vec![0; self.generators.len()];
        let matched = self.draw(&mut values[..]);

        Round { values, matched }
    }

    // Every generator is drawn before anything is compared.
    fn draw(&mut self, values: &mut [u16]) -> bool {
        for (value, generator) in values.iter_mut().zip(self.generators.iter_mut()) {
            *value = low_16(generator.next_value());
        }

        values.iter().all_equal()
    }
}
