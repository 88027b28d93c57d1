use serde::{Deserialize, Serialize};

/// Messages used by the built-in validators.
///
/// Passed by reference into the validator constructors; there is no global
/// message table. Length templates use `{n}` for the limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub not_empty: String,
    pub email: String,
    pub min_length: String,
    pub max_length: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            not_empty: "This field cannot be empty".to_string(),
            email: "Enter a valid email address".to_string(),
            min_length: "Min length must be {n}".to_string(),
            max_length: "Max length must be {n}".to_string(),
        }
    }
}

impl ValidationMessages {
    /// Override the empty-value message.
    pub fn not_empty(mut self, msg: impl Into<String>) -> Self {
        self.not_empty = msg.into();
        self
    }

    /// Override the invalid-email message.
    pub fn email(mut self, msg: impl Into<String>) -> Self {
        self.email = msg.into();
        self
    }

    /// Override the min length template (`{n}` is replaced by the limit).
    pub fn min_length(mut self, template: impl Into<String>) -> Self {
        self.min_length = template.into();
        self
    }

    /// Override the max length template (`{n}` is replaced by the limit).
    pub fn max_length(mut self, template: impl Into<String>) -> Self {
        self.max_length = template.into();
        self
    }

    pub(crate) fn min_length_message(&self, n: usize) -> String {
        fill_limit(&self.min_length, n)
    }

    pub(crate) fn max_length_message(&self, n: usize) -> String {
        fill_limit(&self.max_length, n)
    }
}

fn fill_limit(template: &str, n: usize) -> String {
    template.replace("{n}", &n.to_string())
}
