use nav_utility::weighted::{
    select_one, weighted_bool, SelectError, WeightTable, WeightedRandomizer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_env_log::test;

const DRAWS: usize = 100_000;

#[derive(Hash, Copy, Clone, Eq, PartialEq, Debug)]
enum Animal {
    Dog,
    Cat,
}

#[test]
fn test_ninety_ten_split_holds_over_many_draws() {
    let weights = WeightTable::from([(Animal::Dog, 90), (Animal::Cat, 10)]);
    let mut rng = StdRng::seed_from_u64(42);
    let dogs = (0..DRAWS)
        .filter(|_| select_one(&weights, &mut rng).unwrap() == Animal::Dog)
        .count();
    let frequency = dogs as f64 / DRAWS as f64;
    assert!(
        (frequency - 0.9).abs() < 0.02,
        "Dog frequency was {}",
        frequency
    );
}

#[test]
fn test_weighted_bool_split_holds_over_many_draws() {
    let trues = (0..DRAWS).filter(|_| weighted_bool(30)).count();
    let frequency = trues as f64 / DRAWS as f64;
    assert!(
        (frequency - 0.3).abs() < 0.02,
        "True frequency was {}",
        frequency
    );
}

#[test]
fn test_every_item_with_weight_comes_up() {
    let weights = WeightTable::from([("a", 1), ("b", 2), ("c", 3), ("zero", 0)]);
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        seen.insert(select_one(&weights, &mut rng).unwrap());
    }
    assert!(seen.contains("a"));
    assert!(seen.contains("b"));
    assert!(seen.contains("c"));
    assert!(!seen.contains("zero"));
}

#[test]
fn test_single_item_is_always_selected() {
    let weights = WeightTable::from([(Animal::Cat, 3)]);
    for _ in 0..1000 {
        assert_eq!(WeightedRandomizer::from(&weights).take_one(), Ok(Animal::Cat));
    }
}

#[test]
fn test_seeded_draws_repeat() {
    let weights = WeightTable::from([("a", 5), ("b", 5), ("c", 5)]);
    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..50)
            .map(|_| select_one(&weights, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(draw(99), draw(99));
}

#[test]
fn test_weighted_bool_edges() {
    for _ in 0..1000 {
        assert!(!weighted_bool(0));
        assert!(weighted_bool(100));
        assert!(!weighted_bool(-5));
        assert!(!weighted_bool(150));
    }
}

#[test]
fn test_invalid_tables_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);

    let empty: WeightTable<Animal> = WeightTable::new();
    assert_eq!(select_one(&empty, &mut rng), Err(SelectError::Empty));

    let zeros = WeightTable::from([(Animal::Dog, 0), (Animal::Cat, 0)]);
    assert_eq!(
        select_one(&zeros, &mut rng),
        Err(SelectError::ZeroTotalWeight)
    );

    let negative = WeightTable::from([(Animal::Dog, -1), (Animal::Cat, 5)]);
    assert_eq!(
        select_one(&negative, &mut rng),
        Err(SelectError::NegativeWeight { weight: -1 })
    );
}
