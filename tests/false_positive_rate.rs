use bloomset::{BloomFilter, FilterBuilder, Sizing};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn random_keys(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| (0..24).map(|_| char::from(rng.sample(Alphanumeric))).collect())
        .collect()
}

fn false_positive_fraction(filter: &BloomFilter, unknown: &[String]) -> f64 {
    let hits = unknown.iter().filter(|key| filter.contains(key)).count();
    hits as f64 / unknown.len() as f64
}

#[test]
fn test_no_false_negatives() {
    let mut rng = StdRng::seed_from_u64(7);
    let known = random_keys(&mut rng, 5_000);

    let mut filter = BloomFilter::with_estimates(5_000, 0.01);
    filter.add_all(&known);

    for key in &known {
        assert!(filter.contains(key), "false negative for {}", key);
    }
    assert!(filter.contains_all(&known));
}

#[test]
fn test_false_positive_rate_with_estimates() {
    let mut rng = StdRng::seed_from_u64(42);
    let known = random_keys(&mut rng, 10_000);
    let known_set: HashSet<&String> = known.iter().collect();
    let unknown: Vec<String> = random_keys(&mut rng, 10_500)
        .into_iter()
        .filter(|key| !known_set.contains(key))
        .take(10_000)
        .collect();

    let mut filter = BloomFilter::with_estimates(10_000, 0.01);
    filter.add_all(&known);

    assert!(false_positive_fraction(&filter, &unknown) < 0.02);
}

#[test]
fn test_false_positive_rate_exact_sizing() {
    let mut rng = StdRng::seed_from_u64(1234);
    let known = random_keys(&mut rng, 10_000);
    let known_set: HashSet<&String> = known.iter().collect();
    let unknown: Vec<String> = random_keys(&mut rng, 10_500)
        .into_iter()
        .filter(|key| !known_set.contains(key))
        .take(10_000)
        .collect();

    let mut filter = FilterBuilder::new()
        .expected_items(10_000)
        .false_positive_rate(0.01)
        .sizing(Sizing::Exact)
        .build()
        .unwrap();
    filter.add_all(&known);

    let observed = false_positive_fraction(&filter, &unknown);
    assert!(observed < 0.02, "observed false positive rate {}", observed);
    assert!(filter.estimated_false_positive_rate() < 0.02);
}

#[test]
fn test_detection_is_monotonic() {
    let mut rng = StdRng::seed_from_u64(99);
    let keys = random_keys(&mut rng, 2_000);

    let mut filter = BloomFilter::new(64, 5);
    filter.add(&keys[0]);
    for key in &keys[1..] {
        filter.add(key);
        assert!(filter.contains(&keys[0]));
    }
}
