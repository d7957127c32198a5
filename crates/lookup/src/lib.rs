//! Exception-free lookup of named constants within closed constant sets.
//!
//! A [`ConstantSet`] declares a fixed collection of named [`Constant`]s. The
//! process-wide [`LookupCache`] lazily builds one immutable [`NameIndex`] per
//! set and answers [`get_if_present`] queries through it. Negative lookups
//! are values, not errors, and the cache retains sets only weakly: dropping
//! the last external handle to a set reclaims it, cache or no cache.

mod cache;
mod index;
mod set;

pub use cache::{LookupCache, get_if_present};
pub use index::NameIndex;
pub use set::{Constant, ConstantSet};
