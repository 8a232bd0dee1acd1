//! Taggable trait definition
//!
//! Trait for entities whose tag collections the save mixin can reach.
//! Each declared tag field name maps to a tag-manager capability through
//! an explicit accessor, so the mixin never reflects over the entity.

use crate::manager::TagManager;

/// Trait for entities that expose tag collections by field name
///
/// The save mixin calls `tag_manager` once per declared tag field after
/// the base persistence routine has run. Returning `None` for a declared
/// field aborts the save with `UnknownTagField`.
///
/// # Examples
///
/// ```rust,ignore
/// use reinhardt_taggit_serializer::{TagManager, Taggable};
///
/// struct Article {
///     id: Option<i64>,
///     title: String,
///     tags: MyTagManager,
/// }
///
/// impl Taggable for Article {
///     fn tag_manager(&self, field_name: &str) -> Option<&dyn TagManager> {
///         match field_name {
///             "tags" => Some(&self.tags),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Taggable {
	/// Returns the tag collection registered under `field_name`
	///
	/// The mapping must cover every tag field the serializer declares for
	/// this entity type.
	fn tag_manager(&self, field_name: &str) -> Option<&dyn TagManager>;
}
