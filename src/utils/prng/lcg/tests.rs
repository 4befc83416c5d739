use super::*;
use rand::{thread_rng, Rng};

#[test]
fn first_value_is_seed_times_factor() {
    let mut rng = thread_rng();

    for _ in 0..100 {
        let seed: u64 = rng.gen_range(1, MODULUS);
        let factor: u64 = rng.gen_range(1, MODULUS);
        let mut generator = Generator::new(seed, factor, 1).unwrap();

        assert_eq!(generator.next_value(), (seed * factor) % MODULUS);
    }
}

#[test]
fn example_first_values() {
    let mut a = Generator::new(65, 16807, 1).unwrap();
    let mut b = Generator::new(8921, 48271, 1).unwrap();

    let a_values: Vec<u64> = a.by_ref().take(5).collect();
    let b_values: Vec<u64> = b.by_ref().take(5).collect();

    assert_eq!(
        a_values,
        vec![1092455, 1181022009, 245556042, 1744312007, 1352636452]
    );
    assert_eq!(
        b_values,
        vec![430625591, 1233683848, 1431495498, 137874439, 285222916]
    );
}

#[test]
fn example_first_values_filtered() {
    let mut a = Generator::new(65, 16807, 4).unwrap();
    let mut b = Generator::new(8921, 48271, 8).unwrap();

    let a_values: Vec<u64> = a.by_ref().take(5).collect();
    let b_values: Vec<u64> = b.by_ref().take(5).collect();

    assert_eq!(
        a_values,
        vec![1352636452, 1992081072, 530830436, 1980017072, 740335192]
    );
    assert_eq!(
        b_values,
        vec![1233683848, 862516352, 1159784568, 1616057672, 412269392]
    );
}

#[test]
fn reset_restores_seed() {
    let mut rng = thread_rng();

    for k in 0..20 {
        let seed: u64 = rng.gen_range(1, MODULUS);
        let mut fresh = Generator::new(seed, 48271, 1).unwrap();
        let mut used = fresh.clone();

        for _ in 0..k {
            used.next_value();
        }
        used.reset();

        assert_eq!(used.previous_value(), seed);
        assert_eq!(used.next_value(), fresh.next_value());
    }
}

#[test]
fn filtered_values_are_multiples() {
    let mut rng = thread_rng();

    for &multiple in &[2, 3, 4, 5, 8, 16] {
        let seed: u64 = rng.gen_range(1, MODULUS);
        let mut generator = Generator::new(seed, 16807, multiple).unwrap();

        for value in generator.by_ref().take(1000) {
            assert_eq!(value % multiple, 0);
        }
    }
}

#[test]
fn state_stays_inside_modulus() {
    let mut generator = Generator::new(634, 16807, 4).unwrap();

    for _ in 0..10000 {
        let value = generator.next_value();
        assert!(value >= 1 && value < MODULUS);
        assert_eq!(generator.previous_value(), value);
    }
}

#[test]
fn large_seed_and_factor_do_not_overflow() {
    let mut generator = Generator::new(u64::max_value(), u64::max_value() - 1, 1).unwrap();
    let expected = ((u64::max_value() % MODULUS) * ((u64::max_value() - 1) % MODULUS)) % MODULUS;

    assert_eq!(generator.next_value(), expected);
}

#[test]
fn rejects_degenerate_arguments() {
    assert_eq!(Generator::new(65, 16807, 0), Err(Error::ZeroMultiple));
    assert_eq!(Generator::new(0, 16807, 1), Err(Error::DegenerateSeed(0)));
    assert_eq!(
        Generator::new(MODULUS * 2, 16807, 1),
        Err(Error::DegenerateSeed(MODULUS * 2))
    );
    assert_eq!(
        Generator::new(65, MODULUS, 1),
        Err(Error::DegenerateFactor(MODULUS))
    );
}

#[test]
fn accessors() {
    let generator = Generator::new(301, 48271, 8).unwrap();

    assert_eq!(generator.start_value(), 301);
    assert_eq!(generator.previous_value(), 301);
    assert_eq!(generator.factor(), 48271);
    assert_eq!(generator.multiple(), 8);
}
