//! Tag fixtures
//!
//! Reusable builders for Tag test data.

use reinhardt_taggit_serializer::Tag;

/// Default tag: name="rust", slug="rust"
pub fn default_tag() -> Tag {
	Tag::new("rust", "rust")
}

/// List of predefined tags
///
/// Returns multiple tags for bulk operations testing.
pub fn tag_list() -> Vec<Tag> {
	vec![
		Tag::new("rust", "rust"),
		Tag::new("python", "python"),
		Tag::new("javascript", "javascript"),
	]
}

/// Builder for creating custom Tag instances
///
/// # Examples
///
/// ```rust,ignore
/// let tag = TagBuilder::new("Web Development")
///     .id(7)
///     .slug("web-dev")
///     .build();
/// ```
pub struct TagBuilder {
	name: String,
	slug: Option<String>,
	id: Option<i64>,
}

impl TagBuilder {
	/// Create a new TagBuilder with the specified name
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			slug: None,
			id: None,
		}
	}

	/// Set a custom slug (defaults to the slugified name)
	pub fn slug(mut self, slug: impl Into<String>) -> Self {
		self.slug = Some(slug.into());
		self
	}

	/// Set the primary key
	pub fn id(mut self, id: i64) -> Self {
		self.id = Some(id);
		self
	}

	/// Build the Tag instance
	pub fn build(self) -> Tag {
		let mut tag = match self.slug {
			Some(slug) => Tag::new(&self.name, &slug),
			None => Tag::from_name(&self.name),
		};
		tag.id = self.id;
		tag
	}
}
