//! Immutable name index for one constant set.

use rustc_hash::FxHashMap;

use crate::set::{Constant, ConstantSet};

/// Exact-match name index for one [`ConstantSet`], built once and immutable
/// thereafter.
pub struct NameIndex {
	by_name: FxHashMap<Box<str>, Constant>,
}

impl NameIndex {
	/// Builds the index by enumerating every constant in `set`.
	///
	/// # Panics
	///
	/// Panics if two constants in `set` share a name. Names are unique in a
	/// well-formed set, so a duplicate is a malformed type definition, not a
	/// runtime condition to recover from.
	pub fn build(set: &ConstantSet) -> Self {
		let mut by_name = FxHashMap::with_capacity_and_hasher(set.len(), Default::default());
		for constant in set.constants() {
			if let Some(prev) = by_name.insert(Box::from(constant.name()), constant.clone()) {
				panic!(
					"duplicate constant name {:?} in set {:?} (ordinals {} and {})",
					constant.name(),
					set.label(),
					prev.ordinal(),
					constant.ordinal(),
				);
			}
		}
		tracing::trace!(set = set.label(), len = by_name.len(), "built name index");
		Self { by_name }
	}

	/// Looks up a constant by exact, case-sensitive name. No trimming, no
	/// normalization; an unknown name is `None`, never an error.
	#[inline]
	pub fn get(&self, name: &str) -> Option<&Constant> {
		self.by_name.get(name)
	}

	/// Returns the number of indexed names.
	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	/// Returns true if the index holds no names.
	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}
}
