//! Process-wide lookup cache with atomic publication and weak retention.
//!
//! # Role
//!
//! This module lazily materializes one [`NameIndex`] per live [`ConstantSet`]
//! and serves all name lookups through it. Snapshots are published with a
//! CAS loop; writers are restricted to insert-if-absent, so the first index
//! published for a set wins and is never rebuilt while the set is live.
//!
//! # Invariants
//!
//! - Entries hold only a `Weak` back-reference to their set; the cache is
//!   never the sole owner of a set's metadata.
//! - A reader that observes an entry for a live set observes a fully built,
//!   immutable index.

use std::sync::{Arc, LazyLock, Weak};

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;

use crate::index::NameIndex;
use crate::set::{Constant, ConstantSet};

#[derive(Clone)]
struct CacheEntry {
	/// Back-reference that detects pointer reuse and keeps the cache from
	/// pinning a dropped set's metadata.
	set: Weak<ConstantSet>,
	index: Arc<NameIndex>,
}

struct CacheSnapshot {
	/// Keyed by the address of the set's `Arc` allocation. The address alone
	/// is not trusted; see [`entry_is_for`].
	entries: FxHashMap<usize, CacheEntry>,
}

/// Process-wide cache of set → name index, weakly keyed on the set.
pub struct LookupCache {
	snap: ArcSwap<CacheSnapshot>,
}

impl LookupCache {
	/// Creates an empty cache.
	///
	/// The process-global instance behind [`get_if_present`] is the usual
	/// entry point; separate instances exist for isolation in tests.
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(CacheSnapshot {
				entries: FxHashMap::default(),
			}),
		}
	}

	/// Looks up `name` in `set`, building and caching the set's index on
	/// first use.
	///
	/// Unknown names (including empty or differently-cased ones) and sets
	/// with no constants resolve to `None`; no lookup is an error.
	pub fn get_if_present(&self, set: &Arc<ConstantSet>, name: &str) -> Option<Constant> {
		let key = Arc::as_ptr(set) as usize;
		let snap = self.snap.load();
		if let Some(entry) = snap.entries.get(&key)
			&& entry_is_for(entry, set)
		{
			return entry.index.get(name).cloned();
		}
		self.install_index(set, key).get(name).cloned()
	}

	/// Resolves the cached index for `set`, building it if absent.
	///
	/// The returned `Arc` is identical across calls for the same live set.
	pub fn index_for(&self, set: &Arc<ConstantSet>) -> Arc<NameIndex> {
		let key = Arc::as_ptr(set) as usize;
		let snap = self.snap.load();
		if let Some(entry) = snap.entries.get(&key)
			&& entry_is_for(entry, set)
		{
			return entry.index.clone();
		}
		self.install_index(set, key)
	}

	/// Builds an index for `set` and publishes it insert-if-absent.
	///
	/// Concurrent first-time builders may each construct an index (the build
	/// is deterministic, so the duplicate work is harmless); exactly one
	/// publication wins the CAS and losers discard their build in favor of
	/// the published one.
	fn install_index(&self, set: &Arc<ConstantSet>, key: usize) -> Arc<NameIndex> {
		let built = Arc::new(NameIndex::build(set));
		loop {
			let old = self.snap.load_full();
			if let Some(entry) = old.entries.get(&key)
				&& entry_is_for(entry, set)
			{
				// Lost the race; the published index wins.
				return entry.index.clone();
			}

			// Rebuild the map, sweeping entries whose set has been dropped.
			let mut entries: FxHashMap<usize, CacheEntry> = old
				.entries
				.iter()
				.filter(|(_, e)| e.set.strong_count() > 0)
				.map(|(k, e)| (*k, e.clone()))
				.collect();
			let swept = old.entries.len() - entries.len();
			entries.insert(
				key,
				CacheEntry {
					set: Arc::downgrade(set),
					index: built.clone(),
				},
			);

			let new = Arc::new(CacheSnapshot { entries });
			let prev = self.snap.compare_and_swap(&old, new);
			if Arc::ptr_eq(&prev, &old) {
				if swept > 0 {
					tracing::trace!(swept, "swept dead cache entries");
				}
				tracing::trace!(set = set.label(), "published name index");
				return built;
			}
			// CAS failed, retry against the updated snapshot.
		}
	}

	/// Returns the total number of entries in the current snapshot, including
	/// entries whose set has been dropped but not yet swept.
	pub fn len(&self) -> usize {
		self.snap.load().entries.len()
	}

	/// Returns true if the cache holds no entries at all.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of entries whose set is still live.
	pub fn live_len(&self) -> usize {
		self.snap
			.load()
			.entries
			.values()
			.filter(|e| e.set.strong_count() > 0)
			.count()
	}
}

impl Default for LookupCache {
	fn default() -> Self {
		Self::new()
	}
}

/// True if `entry` belongs to this exact live set. A matching map key alone
/// is not enough: an allocation address can be reused after the original set
/// dropped.
fn entry_is_for(entry: &CacheEntry, set: &Arc<ConstantSet>) -> bool {
	entry
		.set
		.upgrade()
		.is_some_and(|live| Arc::ptr_eq(&live, set))
}

static CACHE: LazyLock<LookupCache> = LazyLock::new(LookupCache::new);

/// Looks up `name` among `set`'s constants via the process-wide cache.
///
/// The set's index is built lazily on its first lookup and reused for every
/// later call. The cache holds only a weak reference to `set`, so dropping
/// the last external handle reclaims the set regardless of cache state.
#[inline]
pub fn get_if_present(set: &Arc<ConstantSet>, name: &str) -> Option<Constant> {
	CACHE.get_if_present(set, name)
}
