//! Tagging-aware save mixin
//!
//! Coordinates persistence of an entity alongside its tag fields: tag
//! entries are stripped from the validated data and parsed up front, the
//! remaining fields go through the implementor's base create/update
//! routine, and the parsed tags are applied to the persisted entity
//! through its tag managers.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, TagFieldError, TagSerializerError};
use crate::fields::{TagListField, json_type_name};
use crate::manager::TagMembership;
use crate::models::Taggable;

/// Transactional wrapper around one save operation
///
/// When a serializer supplies one, `create`/`update` run the base
/// persistence and the tag application inside a single begin/commit, and
/// roll back on any failure so a late tag error cannot leave the plain
/// fields persisted on their own.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
	async fn begin(&self) -> Result<()>;
	async fn commit(&self) -> Result<()>;
	async fn rollback(&self) -> Result<()>;
}

/// Serializer mixin that persists tag fields alongside an entity
///
/// Implementors declare their tag field set and supply the base
/// persistence routine; the provided methods handle partitioning,
/// delegation, and tag application.
///
/// # Examples
///
/// ```rust,ignore
/// use reinhardt_taggit_serializer::{TagListField, TaggitSerializer};
///
/// struct ArticleSerializer {
///     tag_fields: HashMap<String, TagListField>,
/// }
///
/// #[async_trait]
/// impl TaggitSerializer for ArticleSerializer {
///     type Instance = Article;
///
///     fn tag_fields(&self) -> &HashMap<String, TagListField> {
///         &self.tag_fields
///     }
///
///     async fn create_instance(&self, plain: Map<String, Value>) -> Result<Article> {
///         Article::objects().create(plain).await
///     }
///
///     async fn update_instance(&self, article: Article, plain: Map<String, Value>) -> Result<Article> {
///         Article::objects().update(article, plain).await
///     }
/// }
///
/// let article = serializer.create(validated_data).await?;
/// ```
#[async_trait]
pub trait TaggitSerializer: Send + Sync {
	/// The entity type this serializer persists
	type Instance: Taggable + Send + Sync;

	/// The declared tag field set, keyed by field name
	///
	/// Partitioning of validated data is driven by these keys; plain field
	/// values are never inspected for tag shapes.
	fn tag_fields(&self) -> &HashMap<String, TagListField>;

	/// Base persistence routine for creation
	///
	/// Receives the validated data with every tag field already removed.
	async fn create_instance(&self, plain_fields: Map<String, Value>) -> Result<Self::Instance>;

	/// Base persistence routine for update
	///
	/// Receives the validated data with every tag field already removed.
	async fn update_instance(
		&self,
		instance: Self::Instance,
		plain_fields: Map<String, Value>,
	) -> Result<Self::Instance>;

	/// Transactional wrapper for save operations, if any
	fn unit_of_work(&self) -> Option<&dyn UnitOfWork> {
		None
	}

	/// Create an entity, then apply its tag fields
	async fn create(&self, validated_data: Map<String, Value>) -> Result<Self::Instance> {
		let (to_be_tagged, plain_fields) = self.pop_tags(validated_data)?;

		if let Some(uow) = self.unit_of_work() {
			uow.begin().await?;
		}
		let outcome = async {
			let instance = self.create_instance(plain_fields).await?;
			self.save_tags(instance, &to_be_tagged).await
		}
		.await;
		self.finish(outcome).await
	}

	/// Update an entity, then apply its tag fields
	async fn update(
		&self,
		instance: Self::Instance,
		validated_data: Map<String, Value>,
	) -> Result<Self::Instance> {
		let (to_be_tagged, plain_fields) = self.pop_tags(validated_data)?;

		if let Some(uow) = self.unit_of_work() {
			uow.begin().await?;
		}
		let outcome = async {
			let instance = self.update_instance(instance, plain_fields).await?;
			self.save_tags(instance, &to_be_tagged).await
		}
		.await;
		self.finish(outcome).await
	}

	/// Partition validated data into parsed tag entries and plain fields
	///
	/// Runs each declared tag field's `to_internal_value`, so every
	/// field-level validation error surfaces before any persistence call.
	fn pop_tags(
		&self,
		mut validated_data: Map<String, Value>,
	) -> Result<(HashMap<String, Vec<Value>>, Map<String, Value>)> {
		let mut to_be_tagged = HashMap::new();
		for (name, field) in self.tag_fields() {
			if let Some(value) = validated_data.remove(name) {
				let tokens = field
					.to_internal_value(&value)
					.map_err(|err| err.for_field(name.clone()))?;
				to_be_tagged.insert(name.clone(), tokens);
			}
		}
		Ok((to_be_tagged, validated_data))
	}

	/// Apply every popped tag entry to the persisted entity
	async fn save_tags(
		&self,
		instance: Self::Instance,
		to_be_tagged: &HashMap<String, Vec<Value>>,
	) -> Result<Self::Instance> {
		for (field_name, tokens) in to_be_tagged {
			self.apply_tag_values(&instance, field_name, tokens).await?;
		}
		Ok(instance)
	}

	/// Replace one tag collection's membership from canonical tokens
	///
	/// Strings become by-name members; objects contribute their `id` to a
	/// single bulk lookup whose results become by-reference members. The
	/// membership is assigned with one full-replace `set` call, so omitted
	/// existing tags are removed. Partitioning errors abort before the
	/// manager is touched.
	async fn apply_tag_values(
		&self,
		instance: &Self::Instance,
		field_name: &str,
		values: &[Value],
	) -> Result<()> {
		let manager =
			instance
				.tag_manager(field_name)
				.ok_or_else(|| TagSerializerError::UnknownTagField {
					field: field_name.to_string(),
				})?;

		let mut members = Vec::new();
		let mut ids = Vec::new();
		for value in values {
			match value {
				Value::String(name) => members.push(TagMembership::ByName(name.clone())),
				Value::Object(object) => {
					let id = object
						.get("id")
						.and_then(Value::as_i64)
						.ok_or_else(|| TagFieldError::MissingTagId.for_field(field_name))?;
					ids.push(id);
				}
				other => {
					return Err(TagFieldError::InvalidTagTokenType {
						input_type: json_type_name(other).to_string(),
					}
					.for_field(field_name));
				}
			}
		}

		if !ids.is_empty() {
			// Unresolvable ids are dropped by the bulk lookup, not raised
			let resolved = manager.filter_by_ids(&ids).await?;
			members.extend(resolved.into_iter().map(TagMembership::ByReference));
		}

		debug!(
			field = field_name,
			members = members.len(),
			"replacing tag membership"
		);
		manager.set(members).await
	}

	/// Settle the unit of work around a finished save
	async fn finish(&self, outcome: Result<Self::Instance>) -> Result<Self::Instance> {
		match (outcome, self.unit_of_work()) {
			(Ok(instance), Some(uow)) => {
				uow.commit().await?;
				Ok(instance)
			}
			(Err(err), Some(uow)) => {
				// The original failure wins over a rollback failure
				uow.rollback().await.ok();
				Err(err)
			}
			(outcome, None) => outcome,
		}
	}
}
