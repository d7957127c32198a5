use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{MISS_NAME, SAMPLE_LEN, SizeTier, Workload, WorkloadError, synthetic_set};

/// Hit rates outside the closed interval are rejected before any timed work.
#[test]
fn hit_rate_bounds_are_enforced() {
	assert!(Workload::new(SizeTier::Small, 0.0).is_ok());
	assert!(Workload::new(SizeTier::Small, 1.0).is_ok());
	assert_eq!(
		Workload::new(SizeTier::Small, -0.1).unwrap_err(),
		WorkloadError::HitRateOutOfRange(-0.1)
	);
	assert_eq!(
		Workload::new(SizeTier::Small, 1.5).unwrap_err(),
		WorkloadError::HitRateOutOfRange(1.5)
	);
	assert!(Workload::new(SizeTier::Small, f64::NAN).is_err());
}

/// Synthetic sets match their tier's declared size.
#[test]
fn synthetic_sets_match_tier_sizes() {
	for tier in SizeTier::ALL {
		let set = synthetic_set(tier);
		assert_eq!(set.len(), tier.constant_count());
		assert_eq!(set.constants()[0].name(), "X0");
		let last = set.len() - 1;
		assert_eq!(set.constants()[last].name(), format!("X{last}"));
	}
}

/// Samples have fixed length and the declared hit/miss split.
#[test]
fn sample_split_matches_hit_rate() {
	for hit_rate in [0.2, 0.8] {
		let workload = Workload::new(SizeTier::Medium, hit_rate).unwrap();
		let set = synthetic_set(SizeTier::Medium);
		let mut rng = StdRng::seed_from_u64(42);
		let sample = workload.sample_names(&set, &mut rng);
		assert_eq!(sample.len(), SAMPLE_LEN);
		let misses = sample.iter().filter(|n| n.as_str() == MISS_NAME).count();
		assert_eq!(SAMPLE_LEN - misses, workload.hit_count());
	}
}

/// Hits are drawn only from the first, middle, and last constants.
#[test]
fn hits_probe_first_middle_last() {
	let workload = Workload::new(SizeTier::Large, 0.8).unwrap();
	let set = synthetic_set(SizeTier::Large);
	let constants = set.constants();
	let expected = [
		constants[0].name(),
		constants[constants.len() / 2].name(),
		constants[constants.len() - 1].name(),
	];
	let mut rng = StdRng::seed_from_u64(9);
	for name in workload.sample_names(&set, &mut rng) {
		assert!(
			name == MISS_NAME || expected.contains(&name.as_str()),
			"unexpected sample name {name:?}"
		);
	}
}

/// A seeded RNG makes sample generation reproducible.
#[test]
fn seeded_samples_are_deterministic() {
	let workload = Workload::new(SizeTier::Small, 0.5).unwrap();
	let set = synthetic_set(SizeTier::Small);
	let a = workload.sample_names(&set, &mut StdRng::seed_from_u64(3));
	let b = workload.sample_names(&set, &mut StdRng::seed_from_u64(3));
	assert_eq!(a, b);
}

/// Generated samples drive the cache exactly as declared: hit names resolve
/// and the sentinel misses.
#[test]
fn samples_hit_and_miss_as_declared() {
	let workload = Workload::new(SizeTier::Small, 0.2).unwrap();
	let set = synthetic_set(SizeTier::Small);
	let mut rng = StdRng::seed_from_u64(1);
	let mut hits = 0;
	for name in workload.sample_names(&set, &mut rng) {
		match constdex::get_if_present(&set, &name) {
			Some(constant) => {
				assert_eq!(constant.name(), name);
				hits += 1;
			}
			None => assert_eq!(name, MISS_NAME),
		}
	}
	assert_eq!(hits, workload.hit_count());
}
