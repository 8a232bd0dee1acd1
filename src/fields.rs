//! Tag list serializer field
//!
//! Bidirectional conversion between the wire format and the canonical
//! in-memory tag list for a single named field. Parsing accepts JSON
//! strings, bare strings (policy-dependent), single objects, and native
//! lists; projection renders a live tag collection as names, slugs, or
//! custom-serialized objects.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Result, TagFieldError};
use crate::manager::TagManager;
use crate::models::Tag;

/// How string input that fails JSON decoding is handled
///
/// The two policies coexist in the wild: strict parsing gives better
/// input-integrity guarantees, lenient parsing lets clients submit a bare
/// tag name without JSON-encoding it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
	/// Decoding failure is a validation error
	#[default]
	Strict,
	/// Decoding failure turns the raw string into a single tag token
	Lenient,
}

/// Pluggable serializer for a single tag object
///
/// When a field carries one, projection uses it for every tag instead of
/// the name/slug shortcut, so the output list holds nested objects.
pub trait TagItemSerializer: Send + Sync {
	/// Render one tag as its wire representation
	fn serialize_tag(&self, tag: &Tag) -> Value;
}

impl<F> TagItemSerializer for F
where
	F: Fn(&Tag) -> Value + Send + Sync,
{
	fn serialize_tag(&self, tag: &Tag) -> Value {
		self(tag)
	}
}

/// An ordered tag sequence with an attached rendering preference
///
/// The pretty flag controls only textual rendering density; it carries no
/// semantic weight and is excluded from equality.
///
/// # Examples
///
/// ```
/// use reinhardt_taggit_serializer::TagList;
/// use serde_json::json;
///
/// let tags = TagList::new(vec![json!("rust"), json!("web")], false);
/// assert_eq!(tags.to_string(), r#"["rust","web"]"#);
/// ```
#[derive(Debug, Clone)]
pub struct TagList {
	items: Vec<Value>,
	pretty_print: bool,
}

impl TagList {
	/// Create a tag list from already-projected wire values
	pub fn new(items: Vec<Value>, pretty_print: bool) -> Self {
		Self {
			items,
			pretty_print,
		}
	}

	/// The projected items
	pub fn items(&self) -> &[Value] {
		&self.items
	}

	/// Consume the list, yielding the projected items
	pub fn into_items(self) -> Vec<Value> {
		self.items
	}

	/// Whether rendering is indented
	pub fn pretty_print(&self) -> bool {
		self.pretty_print
	}

	/// Number of items
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// True when the list holds no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Concatenate two lists, keeping the left-hand rendering preference
	pub fn concat(mut self, rhs: TagList) -> TagList {
		self.items.extend(rhs.items);
		self
	}
}

impl PartialEq for TagList {
	fn eq(&self, other: &Self) -> bool {
		// pretty_print is cosmetic only
		self.items == other.items
	}
}

impl IntoIterator for TagList {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a TagList {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl fmt::Display for TagList {
	/// Deterministic JSON rendering
	///
	/// Pretty output is 4-space indented with keys in sorted order
	/// (`serde_json`'s default map is key-ordered); compact output holds
	/// the identical logical content.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let rendered = if self.pretty_print {
			let mut buf = Vec::new();
			let formatter = PrettyFormatter::with_indent(b"    ");
			let mut serializer = Serializer::with_formatter(&mut buf, formatter);
			self.items
				.serialize(&mut serializer)
				.map_err(|_| fmt::Error)?;
			String::from_utf8(buf).map_err(|_| fmt::Error)?
		} else {
			serde_json::to_string(&self.items).map_err(|_| fmt::Error)?
		};
		f.write_str(&rendered)
	}
}

/// Input to [`TagListField::to_representation`]
///
/// Projection short-circuits on values that are already plain sequences,
/// which keeps default values usable before the field is bound to a live
/// collection.
pub enum TagsSource<'a> {
	/// An already-projected list; returned unchanged
	List(TagList),
	/// A plain sequence of wire values
	Values(Vec<Value>),
	/// A live tag collection
	Manager(&'a dyn TagManager),
}

/// Serializer field for a many-to-many tag association
///
/// Converts wire input into a canonical tag list and projects a tag
/// collection back into wire output. One instance per declared tag field;
/// the owning serializer keys it by field name.
///
/// # Examples
///
/// ```
/// use reinhardt_taggit_serializer::{ParsePolicy, TagListField};
/// use serde_json::json;
///
/// let field = TagListField::new()
///     .serialize_slugs(true)
///     .parse_policy(ParsePolicy::Lenient);
///
/// let tokens = field.to_internal_value(&json!(r#"["rust","web"]"#)).unwrap();
/// assert_eq!(tokens, vec![json!("rust"), json!("web")]);
/// ```
#[derive(Clone)]
pub struct TagListField {
	pretty_print: bool,
	order_by: Option<Vec<String>>,
	serialize_slugs: bool,
	parse_policy: ParsePolicy,
	item_serializer: Option<Arc<dyn TagItemSerializer>>,
}

impl TagListField {
	/// Create a field with default options (pretty printing on, strict
	/// parsing, name projection)
	pub fn new() -> Self {
		Self {
			pretty_print: true,
			order_by: None,
			serialize_slugs: false,
			parse_policy: ParsePolicy::Strict,
			item_serializer: None,
		}
	}

	/// Control rendering density of projected output
	pub fn pretty_print(mut self, pretty_print: bool) -> Self {
		self.pretty_print = pretty_print;
		self
	}

	/// Sort key applied when enumerating a live collection
	pub fn order_by<I, S>(mut self, attrs: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.order_by = Some(attrs.into_iter().map(Into::into).collect());
		self
	}

	/// Project slugs instead of names when no item serializer is set
	pub fn serialize_slugs(mut self, serialize_slugs: bool) -> Self {
		self.serialize_slugs = serialize_slugs;
		self
	}

	/// Select the malformed-string handling policy
	pub fn parse_policy(mut self, policy: ParsePolicy) -> Self {
		self.parse_policy = policy;
		self
	}

	/// Install a custom per-tag serializer; takes precedence over the
	/// name/slug projection
	pub fn item_serializer(mut self, serializer: Arc<dyn TagItemSerializer>) -> Self {
		self.item_serializer = Some(serializer);
		self
	}

	/// Convert wire input into the canonical tag list
	///
	/// Accepts `Null` (absent), strings (JSON-decoded, or taken verbatim
	/// under the lenient policy), single tokens, and native lists. Every
	/// canonical element is a JSON string or object.
	pub fn to_internal_value(
		&self,
		value: &Value,
	) -> std::result::Result<Vec<Value>, TagFieldError> {
		let decoded = match value {
			Value::Null => return Ok(Vec::new()),
			Value::String(raw) => {
				if raw.is_empty() {
					return Ok(Vec::new());
				}
				match serde_json::from_str::<Value>(raw) {
					Ok(decoded) => decoded,
					Err(_) => match self.parse_policy {
						ParsePolicy::Strict => return Err(TagFieldError::InvalidJsonList),
						ParsePolicy::Lenient => Value::String(raw.clone()),
					},
				}
			}
			other => other.clone(),
		};

		let items = match decoded {
			Value::Array(items) => items,
			single => vec![single],
		};

		for item in &items {
			if !matches!(item, Value::String(_) | Value::Object(_)) {
				return Err(TagFieldError::InvalidTagItemType {
					input_type: json_type_name(item).to_string(),
				});
			}
		}

		Ok(items)
	}

	/// Project a tag collection into its wire representation
	///
	/// Already-projected sequences pass through unchanged; a live
	/// collection is enumerated (honoring `order_by`) and each member is
	/// mapped through the item serializer, the slug, or the name.
	pub async fn to_representation(&self, source: TagsSource<'_>) -> Result<TagList> {
		match source {
			TagsSource::List(list) => Ok(list),
			TagsSource::Values(values) => Ok(TagList::new(values, self.pretty_print)),
			TagsSource::Manager(manager) => {
				let order_by = self.order_by.as_deref().unwrap_or(&[]);
				let tags = manager.all(order_by).await?;
				let items = tags.iter().map(|tag| self.project_tag(tag)).collect();
				Ok(TagList::new(items, self.pretty_print))
			}
		}
	}

	fn project_tag(&self, tag: &Tag) -> Value {
		if let Some(serializer) = &self.item_serializer {
			serializer.serialize_tag(tag)
		} else if self.serialize_slugs {
			Value::String(tag.slug.clone())
		} else {
			Value::String(tag.name.clone())
		}
	}
}

impl Default for TagListField {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for TagListField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TagListField")
			.field("pretty_print", &self.pretty_print)
			.field("order_by", &self.order_by)
			.field("serialize_slugs", &self.serialize_slugs)
			.field("parse_policy", &self.parse_policy)
			.field("item_serializer", &self.item_serializer.is_some())
			.finish()
	}
}

/// JSON type name used in validation error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "str",
		Value::Array(_) => "list",
		Value::Object(_) => "dict",
	}
}
