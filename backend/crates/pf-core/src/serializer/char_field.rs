//! Declaration and coercion rules for a single text field.

use serde_json::Value;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const NULL_MESSAGE: &str = "This field may not be null.";
pub const BLANK_MESSAGE: &str = "This field may not be blank.";
pub const INVALID_MESSAGE: &str = "Not a valid string.";
pub const NULL_CHARACTER_MESSAGE: &str = "Null characters are not allowed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharField {
    pub name: &'static str,
    pub required: bool,
    pub allow_blank: bool,
    pub trim_whitespace: bool,
    pub max_length: Option<usize>,
}

impl CharField {
    /// A required, non-blank, whitespace-trimmed field without a length cap.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            allow_blank: false,
            trim_whitespace: true,
            max_length: None,
        }
    }

    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Coerce a client value into the stored string.
    ///
    /// Strings pass through, numbers use their JSON text. Anything else is
    /// rejected with the messages a client should see for this field; a
    /// value can fail more than one check at once.
    pub fn to_internal_value(&self, value: &Value) -> Result<String, Vec<String>> {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Null => return Err(vec![NULL_MESSAGE.to_string()]),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                return Err(vec![INVALID_MESSAGE.to_string()]);
            }
        };

        let text = if self.trim_whitespace {
            raw.trim().to_string()
        } else {
            raw
        };

        if text.is_empty() && !self.allow_blank {
            return Err(vec![BLANK_MESSAGE.to_string()]);
        }

        let mut messages = Vec::new();
        if let Some(max_length) = self.max_length
            && text.chars().count() > max_length
        {
            messages.push(format!(
                "Ensure this field has no more than {} characters.",
                max_length
            ));
        }
        if text.contains('\0') {
            messages.push(NULL_CHARACTER_MESSAGE.to_string());
        }

        if messages.is_empty() {
            Ok(text)
        } else {
            Err(messages)
        }
    }
}
