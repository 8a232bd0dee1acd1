use thiserror::Error;

/// Field-level validation failures raised while converting wire input
/// into a canonical tag list, or while partitioning tokens during tag
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagFieldError {
	/// String input could not be decoded as JSON under the strict policy
	#[error("Invalid json list. A tag list submitted in string form must be valid json")]
	InvalidJsonList,

	/// A list element is neither a string nor an object
	#[error("All list items must be of type str or dict, got \"{input_type}\"")]
	InvalidTagItemType { input_type: String },

	/// An object token carries no usable integer `id` key
	#[error("Tag instance objects must have an id")]
	MissingTagId,

	/// A token reaching tag application is neither a string nor an object
	#[error("All tags must either be strings or objects, got \"{input_type}\"")]
	InvalidTagTokenType { input_type: String },
}

/// Errors raised by the tagging-aware save pipeline
#[derive(Debug, Error)]
pub enum TagSerializerError {
	/// Validation failed for one named tag field
	#[error("Validation failed for field '{field}': {source}")]
	Validation {
		field: String,
		#[source]
		source: TagFieldError,
	},

	/// The entity exposes no tag collection for a declared tag field
	#[error("Entity has no tag manager for field '{field}'")]
	UnknownTagField { field: String },

	/// Backing-store failure surfaced by a collaborator
	#[error("Store error: {0}")]
	Store(String),

	/// Unit-of-work failure
	#[error("Transaction error: {0}")]
	Transaction(String),
}

impl TagFieldError {
	/// Attach the owning field name, lifting this into a serializer error
	pub fn for_field(self, field: impl Into<String>) -> TagSerializerError {
		TagSerializerError::Validation {
			field: field.into(),
			source: self,
		}
	}
}

/// Result type for tag serializer operations
pub type Result<T> = std::result::Result<T, TagSerializerError>;
