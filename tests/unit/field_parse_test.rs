//! Unit tests for TagListField::to_internal_value
//!
//! Tests wire-input canonicalization under both parsing policies.

use reinhardt_taggit_serializer::{ParsePolicy, TagFieldError, TagListField};
use rstest::rstest;
use serde_json::{Value, json};

/// Test empty and absent inputs yield the empty canonical list
#[rstest]
#[case(json!(null))]
#[case(json!(""))]
#[case(json!("[]"))]
#[case(json!([]))]
fn test_empty_inputs(#[case] input: Value) {
	// Arrange
	let field = TagListField::new();

	// Act
	let tokens = field.to_internal_value(&input).unwrap();

	// Assert
	assert!(tokens.is_empty());
}

/// Test JSON-encoded string lists decode to their elements
#[test]
fn test_json_string_list() {
	// Arrange
	let field = TagListField::new();

	// Act
	let tokens = field.to_internal_value(&json!(r#"["a","b"]"#)).unwrap();

	// Assert
	assert_eq!(tokens, vec![json!("a"), json!("b")]);
}

/// Test native lists pass through, preserving mixed string/object tokens
#[test]
fn test_native_mixed_list() {
	// Arrange
	let field = TagListField::new();

	// Act
	let tokens = field
		.to_internal_value(&json!(["a", {"id": 3}]))
		.unwrap();

	// Assert
	assert_eq!(tokens.len(), 2);
	assert_eq!(tokens[0], json!("a"));
	assert_eq!(tokens[1], json!({"id": 3}));
}

/// Test a decoded non-list value is wrapped into a single-element list
#[rstest]
#[case(json!(r#""solo""#), json!("solo"))]
#[case(json!({"id": 5}), json!({"id": 5}))]
fn test_single_token_wrapped(#[case] input: Value, #[case] expected: Value) {
	// Arrange
	let field = TagListField::new();

	// Act
	let tokens = field.to_internal_value(&input).unwrap();

	// Assert
	assert_eq!(tokens, vec![expected]);
}

/// Test malformed string input fails under the strict policy
#[rstest]
#[case("not json")]
#[case("[unterminated")]
fn test_strict_rejects_malformed_strings(#[case] raw: &str) {
	// Arrange
	let field = TagListField::new().parse_policy(ParsePolicy::Strict);

	// Act
	let err = field.to_internal_value(&json!(raw)).unwrap_err();

	// Assert
	assert_eq!(err, TagFieldError::InvalidJsonList);
}

/// Test malformed string input becomes a single token under the lenient policy
#[test]
fn test_lenient_accepts_bare_string() {
	// Arrange
	let field = TagListField::new().parse_policy(ParsePolicy::Lenient);

	// Act
	let tokens = field.to_internal_value(&json!("not json")).unwrap();

	// Assert
	assert_eq!(tokens, vec![json!("not json")]);
}

/// Test a bare string that is valid JSON decodes even under lenient policy
#[test]
fn test_lenient_still_decodes_valid_json() {
	// Arrange
	let field = TagListField::new().parse_policy(ParsePolicy::Lenient);

	// Act
	let tokens = field.to_internal_value(&json!(r#"["a"]"#)).unwrap();

	// Assert
	assert_eq!(tokens, vec![json!("a")]);
}

/// Test elements that are neither strings nor objects are rejected,
/// naming the offending type
#[rstest]
#[case(json!([1]), "number")]
#[case(json!([true]), "bool")]
#[case(json!([["nested"]]), "list")]
#[case(json!(["ok", 2.5]), "number")]
#[case(json!("null"), "null")]
fn test_invalid_item_types(#[case] input: Value, #[case] expected_type: &str) {
	// Arrange
	let field = TagListField::new();

	// Act
	let err = field.to_internal_value(&input).unwrap_err();

	// Assert
	assert_eq!(
		err,
		TagFieldError::InvalidTagItemType {
			input_type: expected_type.to_string(),
		}
	);
}
