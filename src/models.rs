//! Model definitions for the tag serializer
//!
//! This module contains the data models the serializer glue works with:
//! - `Tag`: the tag handle resolved by id lookups and produced by projection
//! - `Taggable`: trait for entities that expose tag collections by field name

pub mod tag;
pub mod taggable;

pub use tag::Tag;
pub use taggable::Taggable;
