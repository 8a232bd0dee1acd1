//! Tag model
//!
//! The tag handle this crate passes between the field adapter, the id
//! lookup, and the membership replace call. Tags are shared many-to-many
//! entities; their lifetime belongs to the tagging subsystem, never to a
//! single parent entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tag with a display name and a URL-friendly slug
///
/// `id` is `None` for tags that have not been persisted yet (by-name
/// members are resolved to new-or-existing tags by the backing store).
///
/// # Examples
///
/// ```
/// use reinhardt_taggit_serializer::Tag;
///
/// // Create a tag with auto-generated slug
/// let tag = Tag::from_name("Rust Programming");
/// assert_eq!(tag.slug, "rust-programming");
///
/// // Create a tag with explicit slug
/// let tag = Tag::new("Rust Programming", "rust-prog");
/// assert_eq!(tag.slug, "rust-prog");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
	/// Primary key, `None` until persisted
	pub id: Option<i64>,

	/// Display name
	pub name: String,

	/// URL-friendly unique identifier
	pub slug: String,

	/// Creation timestamp
	pub created_at: DateTime<Utc>,
}

impl Tag {
	/// Create a new tag with an explicit slug
	pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
		Self {
			id: None,
			name: name.into(),
			slug: slug.into(),
			created_at: Utc::now(),
		}
	}

	/// Create a new tag, deriving the slug from the name
	pub fn from_name(name: impl Into<String>) -> Self {
		let name = name.into();
		let slug = slug::slugify(&name);
		Self {
			id: None,
			name,
			slug,
			created_at: Utc::now(),
		}
	}

	/// Attach a primary key, marking the tag as persisted
	pub fn with_id(mut self, id: i64) -> Self {
		self.id = Some(id);
		self
	}
}
