//! Form field validation rules

use std::collections::BTreeMap;

/// Rules for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            email: false,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
            email: false,
        }
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// An empty optional field passes regardless of the length rules.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("The field {} is required", field_label));
            }
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "The field {} must have at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "The field {} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        if self.email && !looks_like_email(trimmed) {
            return Err(format!("The field {} must be a valid email", field_label));
        }

        Ok(())
    }
}

/// `local@domain.tld` shape check, nothing more.
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Field name → first error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error of `result` under `field`; an earlier error wins.
    pub fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.0.entry(field.to_string()).or_insert(message);
        }
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Merges server-side (422) field errors, keeping the first message per field.
    pub fn merge_server(&mut self, fields: &BTreeMap<String, Vec<String>>) {
        for (field, messages) in fields {
            if let Some(first) = messages.first() {
                self.insert(field, first.clone());
            }
        }
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "code"),
            Err("The field code is required".to_string())
        );
        assert!(rules.validate_string("x", "code").is_ok());
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rules = ValidationRules::required().min_length(3);
        assert_eq!(
            rules.validate_string("ab", "city"),
            Err("The field city must have at least 3 characters".to_string())
        );
        assert!(rules.validate_string("Ñoa", "city").is_ok());
    }

    #[test]
    fn test_optional_empty_passes() {
        let rules = ValidationRules::none().min_length(8);
        assert!(rules.validate_string("", "password").is_ok());
        assert!(rules.validate_string("short", "password").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("ana@example.com"));
        assert!(!looks_like_email("ana@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ana example@x.com"));
        assert!(!looks_like_email("a@b@c.com"));
    }

    #[test]
    fn test_form_errors_first_wins() {
        let mut errors = FormErrors::new();
        errors.check("name", Err("first".to_string()));
        errors.check("name", Err("second".to_string()));
        errors.check("email", Ok(()));
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_merge_server_errors() {
        let mut fields = BTreeMap::new();
        fields.insert(
            "email".to_string(),
            vec!["The email has already been taken.".to_string()],
        );
        fields.insert("name".to_string(), vec![]);

        let mut errors = FormErrors::new();
        errors.merge_server(&fields);
        assert_eq!(errors.get("email"), Some("The email has already been taken."));
        assert_eq!(errors.get("name"), None);
        assert!(errors.into_result().is_err());
    }
}
