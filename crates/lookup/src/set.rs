//! Closed constant-set types and their named constants.

use std::fmt;
use std::sync::Arc;

/// One named value belonging to exactly one [`ConstantSet`].
///
/// Cheap to clone; equality is identity, so a value resolved through the
/// cache compares equal to the value originally declared in its set.
#[derive(Clone)]
pub struct Constant(Arc<ConstantData>);

struct ConstantData {
	name: Box<str>,
	ordinal: u32,
}

impl Constant {
	fn new(name: &str, ordinal: u32) -> Self {
		Self(Arc::new(ConstantData {
			name: name.into(),
			ordinal,
		}))
	}

	/// Returns the constant's name, unique within its set.
	pub fn name(&self) -> &str {
		&self.0.name
	}

	/// Returns the constant's position in its set's declaration order.
	pub fn ordinal(&self) -> u32 {
		self.0.ordinal
	}
}

impl PartialEq for Constant {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for Constant {}

impl fmt::Debug for Constant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Constant")
			.field("name", &self.0.name)
			.field("ordinal", &self.0.ordinal)
			.finish()
	}
}

/// A closed constant-set type: a label plus a fixed, ordered list of named
/// constants. Sets are created once, before any lookup against them, and are
/// never mutated afterwards.
///
/// The `Arc<ConstantSet>` handle doubles as the set's identity: callers that
/// mean "the same type" hold clones of the same `Arc`.
pub struct ConstantSet {
	label: Box<str>,
	constants: Box<[Constant]>,
}

impl ConstantSet {
	/// Creates a new set whose constants carry `names`, in declaration order.
	pub fn new<I, S>(label: &str, names: I) -> Arc<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let constants = names
			.into_iter()
			.enumerate()
			.map(|(i, name)| Constant::new(name.as_ref(), i as u32))
			.collect();
		Arc::new(Self {
			label: label.into(),
			constants,
		})
	}

	/// Returns the set's label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns all constants in declaration order.
	pub fn constants(&self) -> &[Constant] {
		&self.constants
	}

	/// Returns the number of constants in the set.
	pub fn len(&self) -> usize {
		self.constants.len()
	}

	/// Returns true if the set declares no constants.
	pub fn is_empty(&self) -> bool {
		self.constants.is_empty()
	}
}

impl fmt::Debug for ConstantSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConstantSet")
			.field("label", &self.label)
			.field("len", &self.constants.len())
			.finish()
	}
}
