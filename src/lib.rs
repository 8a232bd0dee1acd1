//! # reinhardt-taggit-serializer
//!
//! Tag serializer support for the Reinhardt REST stack, inspired by
//! django-taggit-serializer.
//!
//! ## Features
//!
//! - `TagListField`: serializer field converting between wire input
//!   (JSON strings, native lists, id-bearing objects) and a canonical tag
//!   list, and projecting live tag collections to names, slugs, or
//!   custom-serialized objects
//! - `TaggitSerializer`: save mixin that strips tag fields from validated
//!   data, delegates the rest to the base create/update routine, then
//!   replaces each tag collection's membership
//! - `TagManager` / `Taggable`: the seams to the tagging subsystem and to
//!   tagged entities
//! - `UnitOfWork`: optional transactional wrapper around a save
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reinhardt_taggit_serializer::{TagListField, TaggitSerializer};
//!
//! let field = TagListField::new().serialize_slugs(true);
//!
//! // In a serializer declaring `tags` as a tag field:
//! let article = serializer.create(validated_data).await?;
//! assert_eq!(article.tags.all(&[]).await?.len(), 2);
//! ```

// Public modules
pub mod error;
pub mod fields;
pub mod manager;
pub mod models;
pub mod serializer;

// Re-exports for convenient access
pub use error::{Result, TagFieldError, TagSerializerError};
pub use fields::{ParsePolicy, TagItemSerializer, TagList, TagListField, TagsSource};
pub use manager::{TagManager, TagMembership};
pub use models::{Tag, Taggable};
pub use serializer::{TaggitSerializer, UnitOfWork};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::error::{Result, TagFieldError, TagSerializerError};
	pub use crate::fields::{ParsePolicy, TagItemSerializer, TagList, TagListField, TagsSource};
	pub use crate::manager::{TagManager, TagMembership};
	pub use crate::models::{Tag, Taggable};
	pub use crate::serializer::{TaggitSerializer, UnitOfWork};
}
