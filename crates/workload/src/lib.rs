//! Synthetic lookup workloads for benchmarking the constdex cache.
//!
//! A [`Workload`] pairs a [`SizeTier`] with a target hit rate and produces
//! shuffled fixed-length name samples. Hits privilege the first, middle, and
//! last constants of the set to exercise different index positions; misses
//! use a sentinel name that matches nothing. The benches drive
//! [`constdex::get_if_present`] with these samples in a tight loop.

use std::sync::Arc;

use constdex::ConstantSet;
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of names in one generated sample sequence.
pub const SAMPLE_LEN: usize = 256;

/// Sentinel name guaranteed to miss in synthetic sets.
pub const MISS_NAME: &str = "INVALID";

/// Constant-set size tiers, from a handful of names to thousands.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SizeTier {
	Small,
	Medium,
	Large,
}

impl SizeTier {
	/// All tiers, in ascending size order.
	pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

	/// Number of constants in a synthetic set of this tier.
	pub fn constant_count(self) -> usize {
		match self {
			SizeTier::Small => 3,
			SizeTier::Medium => 100,
			SizeTier::Large => 2500,
		}
	}

	/// Human-readable tier label.
	pub fn label(self) -> &'static str {
		match self {
			SizeTier::Small => "small",
			SizeTier::Medium => "medium",
			SizeTier::Large => "large",
		}
	}
}

/// Builds a synthetic set for `tier` with names `X0..X{n-1}`.
pub fn synthetic_set(tier: SizeTier) -> Arc<ConstantSet> {
	let n = tier.constant_count();
	ConstantSet::new(tier.label(), (0..n).map(|i| format!("X{i}")))
}

/// Workload configuration errors, rejected before any timed work begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkloadError {
	/// The hit rate must lie in the closed interval [0, 1].
	#[error("hit rate must be within [0.0, 1.0], got {0}")]
	HitRateOutOfRange(f64),
}

/// A benchmark workload: one size tier plus a target hit rate.
#[derive(Copy, Clone, Debug)]
pub struct Workload {
	tier: SizeTier,
	hit_rate: f64,
}

impl Workload {
	/// Creates a workload, rejecting hit rates outside [0.0, 1.0] (NaN
	/// included) before any sample is generated.
	pub fn new(tier: SizeTier, hit_rate: f64) -> Result<Self, WorkloadError> {
		if !(0.0..=1.0).contains(&hit_rate) {
			return Err(WorkloadError::HitRateOutOfRange(hit_rate));
		}
		Ok(Self { tier, hit_rate })
	}

	/// Returns the workload's size tier.
	pub fn tier(self) -> SizeTier {
		self.tier
	}

	/// Returns the workload's target hit rate.
	pub fn hit_rate(self) -> f64 {
		self.hit_rate
	}

	/// Number of hit names in a generated sample.
	///
	/// Hits come in rounds of three (first, middle, last), so the count is
	/// the largest multiple of three at or below `hit_rate * SAMPLE_LEN`.
	pub fn hit_count(self) -> usize {
		let rounds = (self.hit_rate * SAMPLE_LEN as f64 / 3.0) as usize;
		rounds * 3
	}

	/// Generates the shuffled sample sequence of hit and miss names.
	///
	/// Hits cycle over the first, middle, and last constants of `set`;
	/// misses are [`MISS_NAME`]. The sequence is shuffled so the hit/miss
	/// ordering carries no branch-prediction signal.
	///
	/// # Panics
	///
	/// Panics if `set` declares no constants; workload sets always do.
	pub fn sample_names<R: Rng>(self, set: &ConstantSet, rng: &mut R) -> Vec<String> {
		assert!(!set.is_empty(), "workload sets must declare constants");

		let constants = set.constants();
		let probes = [
			constants[0].name(),
			constants[constants.len() / 2].name(),
			constants[constants.len() - 1].name(),
		];

		let mut names = Vec::with_capacity(SAMPLE_LEN);
		for _ in 0..self.hit_count() / 3 {
			for probe in probes {
				names.push(probe.to_string());
			}
		}
		while names.len() < SAMPLE_LEN {
			names.push(MISS_NAME.to_string());
		}
		names.shuffle(rng);
		names
	}
}

#[cfg(test)]
mod tests;
