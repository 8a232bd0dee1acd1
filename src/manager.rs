//! Tag manager seam
//!
//! The tag-collection capability the serializer glue consumes. A manager
//! is the association endpoint between one parent entity and its set of
//! tags; implementations live with the backing store, not in this crate.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Tag;

/// One entry of a replace-membership call
///
/// Membership is either a plain name (resolved by the store to a
/// new-or-existing tag) or a reference to an already-resolved tag from a
/// bulk id lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum TagMembership {
	/// Resolve by value: attach a new-or-existing tag with this name
	ByName(String),
	/// Attach an existing tag resolved earlier
	ByReference(Tag),
}

impl TagMembership {
	/// Display name of the member, regardless of variant
	pub fn name(&self) -> &str {
		match self {
			TagMembership::ByName(name) => name,
			TagMembership::ByReference(tag) => &tag.name,
		}
	}
}

/// Association endpoint between a parent entity and its tags
///
/// Mirrors the manager surface of the tagging subsystem: enumerate,
/// atomic full replace, and bulk id lookup against the backing tag model.
///
/// Consistency of `set` and `filter_by_ids` belongs to the backing store;
/// this crate performs no locking or retries of its own.
#[async_trait]
pub trait TagManager: Send + Sync {
	/// Enumerate the current members
	///
	/// `order_by` lists tag attribute names to sort by; an empty slice
	/// leaves the store's default order in place.
	async fn all(&self, order_by: &[String]) -> Result<Vec<Tag>>;

	/// Replace the entire membership in one atomic call
	///
	/// Full-set assignment semantics: any currently associated tag not in
	/// `members` is disassociated.
	async fn set(&self, members: Vec<TagMembership>) -> Result<()>;

	/// Bulk lookup against the tag model backing this collection
	///
	/// Unknown ids are silently dropped from the result; callers must not
	/// treat a shorter result as an error.
	async fn filter_by_ids(&self, ids: &[i64]) -> Result<Vec<Tag>>;
}
