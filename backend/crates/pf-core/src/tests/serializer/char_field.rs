use crate::CharField;

use googletest::prelude::*;
use serde_json::json;

const NAME: CharField = CharField::new("name").with_max_length(5);

fn single(message: &str) -> Vec<String> {
    vec![message.to_string()]
}

#[test]
fn given_string_with_padding_when_coerced_then_trimmed() {
    let result = NAME.to_internal_value(&json!("  abc  "));

    assert_that!(result, ok(eq("abc")));
}

#[test]
fn given_number_when_coerced_then_uses_json_text() {
    assert_that!(NAME.to_internal_value(&json!(42)), ok(eq("42")));
    assert_that!(NAME.to_internal_value(&json!(1.5)), ok(eq("1.5")));
}

#[test]
fn given_null_when_coerced_then_null_message() {
    let result = NAME.to_internal_value(&json!(null));

    assert_eq!(result, Err(single("This field may not be null.")));
}

#[test]
fn given_non_scalar_when_coerced_then_invalid_message() {
    for value in [json!(true), json!(["a"]), json!({"a": 1})] {
        assert_eq!(
            NAME.to_internal_value(&value),
            Err(single("Not a valid string."))
        );
    }
}

#[test]
fn given_whitespace_only_when_coerced_then_blank_message() {
    let result = NAME.to_internal_value(&json!("   "));

    assert_eq!(result, Err(single("This field may not be blank.")));
}

#[test]
fn given_blank_allowed_when_coerced_then_empty_string_accepted() {
    let field = CharField {
        allow_blank: true,
        ..CharField::new("note")
    };

    assert_that!(field.to_internal_value(&json!("")), ok(eq("")));
}

#[test]
fn given_value_over_max_length_when_coerced_then_length_message() {
    let result = NAME.to_internal_value(&json!("abcdef"));

    assert_eq!(
        result,
        Err(single("Ensure this field has no more than 5 characters."))
    );
}

#[test]
fn given_multibyte_value_at_max_length_when_coerced_then_ok() {
    // five characters, more than five bytes
    let result = NAME.to_internal_value(&json!("ñandú"));

    assert_that!(result, ok(eq("ñandú")));
}

#[test]
fn given_nul_character_when_coerced_then_null_character_message() {
    let result = NAME.to_internal_value(&json!("a\u{0}b"));

    assert_eq!(result, Err(single("Null characters are not allowed.")));
}

#[test]
fn given_long_value_with_nul_when_coerced_then_both_messages() {
    let result = NAME.to_internal_value(&json!("abcdef\u{0}"));

    assert_eq!(
        result,
        Err(vec![
            "Ensure this field has no more than 5 characters.".to_string(),
            "Null characters are not allowed.".to_string(),
        ])
    );
}

#[test]
fn given_new_field_then_required_and_not_blank() {
    assert_that!(NAME.required, eq(true));
    assert_that!(NAME.allow_blank, eq(false));
    assert_that!(NAME.trim_whitespace, eq(true));
}
