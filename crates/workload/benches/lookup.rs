//! Lookup throughput across size tiers and hit rates.

use std::hint::black_box;

use constdex_workload::{SAMPLE_LEN, SizeTier, Workload, synthetic_set};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_get_if_present(c: &mut Criterion) {
	let mut group = c.benchmark_group("get_if_present");
	for tier in SizeTier::ALL {
		for hit_rate in [0.2, 0.8] {
			let workload = Workload::new(tier, hit_rate).expect("hit rate is in range");
			let set = synthetic_set(tier);
			let mut rng = StdRng::seed_from_u64(0xC0FFEE);
			let sample = workload.sample_names(&set, &mut rng);

			// Warm the cache so the timed loop measures steady-state lookups.
			let _ = constdex::get_if_present(&set, sample[0].as_str());

			group.bench_function(format!("{}/hit{hit_rate}", tier.label()), |b| {
				let mut i = 0usize;
				b.iter(|| {
					let name = &sample[i & (SAMPLE_LEN - 1)];
					i = i.wrapping_add(1);
					black_box(constdex::get_if_present(&set, name))
				});
			});
		}
	}
	group.finish();
}

criterion_group!(benches, bench_get_if_present);
criterion_main!(benches);
