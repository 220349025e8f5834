use crate::serializer::char_field::{NULL_MESSAGE, REQUIRED_MESSAGE};
use crate::{
    CharField, CoreError, CoreResult, FieldErrors, NON_FIELD_ERRORS, NewProject, WriteMode,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// Column limit on `pf_projects.title`.
pub const MAX_TITLE_LENGTH: usize = 100;

pub const TITLE_FIELD: CharField = CharField::new("title").with_max_length(MAX_TITLE_LENGTH);
pub const DESCRIPTION_FIELD: CharField = CharField::new("description");

/// Validated writable fields taken from a client document.
///
/// `None` means the field was absent, which only survives validation in
/// [`WriteMode::PartialUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPayload {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ProjectPayload {
    /// Validate a client document. Read-only and unknown keys are ignored;
    /// every field error is collected before failing.
    #[track_caller]
    pub fn from_json(data: &Value, mode: WriteMode) -> CoreResult<Self> {
        let mut errors = FieldErrors::new();

        let Some(object) = data.as_object() else {
            let message = match data {
                Value::Null => NULL_MESSAGE.to_string(),
                other => format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    python_type_name(other)
                ),
            };
            errors.add(NON_FIELD_ERRORS, message);
            return Err(CoreError::Validation {
                errors,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let title = read_field(&TITLE_FIELD, object, mode, &mut errors);
        let description = read_field(&DESCRIPTION_FIELD, object, mode, &mut errors);

        errors.into_result()?;

        Ok(Self { title, description })
    }

    /// Convert a payload validated in a full write mode into a new record.
    #[track_caller]
    pub fn into_new_project(self) -> CoreResult<NewProject> {
        let mut errors = FieldErrors::new();
        if self.title.is_none() {
            errors.add(TITLE_FIELD.name, REQUIRED_MESSAGE);
        }
        if self.description.is_none() {
            errors.add(DESCRIPTION_FIELD.name, REQUIRED_MESSAGE);
        }
        errors.into_result()?;

        Ok(NewProject {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

fn read_field(
    field: &CharField,
    object: &Map<String, Value>,
    mode: WriteMode,
    errors: &mut FieldErrors,
) -> Option<String> {
    match object.get(field.name) {
        None => {
            if field.required && !mode.is_partial() {
                errors.add(field.name, REQUIRED_MESSAGE);
            }
            None
        }
        Some(value) => match field.to_internal_value(value) {
            Ok(text) => Some(text),
            Err(messages) => {
                for message in messages {
                    errors.add(field.name, message);
                }
                None
            }
        },
    }
}

/// Python-style type names, as used in the "Expected a dictionary" message.
fn python_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
