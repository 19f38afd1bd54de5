use serde::{Deserialize, Serialize};

use crate::shared::validation::{FormErrors, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl Role {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    pub fn primary_role(&self) -> Option<&Role> {
        self.roles.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// The form picks a single role; it is sent as a one-element `roles` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
    pub roles: Vec<i64>,
    pub active: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: None,
            password_confirmation: None,
            roles: Vec::new(),
            active: true,
        }
    }
}

impl UserForm {
    const NAME: ValidationRules = ValidationRules::required().min_length(3);
    const EMAIL: ValidationRules = ValidationRules::required().email();
    const PASSWORD_ADD: ValidationRules = ValidationRules::required().min_length(8);
    const PASSWORD_EDIT: ValidationRules = ValidationRules::none().min_length(8);

    /// Edit form prefilled from an existing user; passwords are left blank.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: None,
            password_confirmation: None,
            roles: user.primary_role().map(|r| vec![r.id]).unwrap_or_default(),
            active: user.active,
        }
    }

    pub fn validate(&self, mode: FormMode) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("name", Self::NAME.validate_string(&self.name, "name"));
        errors.check("email", Self::EMAIL.validate_string(&self.email, "email"));

        let password = self.password.as_deref().unwrap_or("");
        let rules = match mode {
            FormMode::Add => Self::PASSWORD_ADD,
            FormMode::Edit => Self::PASSWORD_EDIT,
        };
        errors.check("password", rules.validate_string(password, "password"));

        if !password.is_empty() {
            let confirmation = self.password_confirmation.as_deref().unwrap_or("");
            if confirmation.is_empty() {
                errors.insert("password_confirmation", "Confirm the password");
            } else if confirmation != password {
                errors.insert("password_confirmation", "Passwords do not match");
            }
        }

        if self.roles.is_empty() {
            errors.insert("roles", "The field role is required");
        }

        errors.into_result()
    }

    /// Drops blank passwords so an edit keeps the current one.
    pub fn normalized(&self) -> Self {
        let blank_to_none = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: blank_to_none(&self.password),
            password_confirmation: blank_to_none(&self.password_confirmation),
            roles: self.roles.clone(),
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> UserForm {
        UserForm {
            name: "Ana Perez".to_string(),
            email: "ana@example.com".to_string(),
            password: Some("secret123".to_string()),
            password_confirmation: Some("secret123".to_string()),
            roles: vec![1],
            active: true,
        }
    }

    #[test]
    fn test_add_requires_password() {
        let form = UserForm {
            password: None,
            password_confirmation: None,
            ..valid_form()
        };
        let errors = form.validate(FormMode::Add).unwrap_err();
        assert_eq!(errors.get("password"), Some("The field password is required"));

        assert!(form.validate(FormMode::Edit).is_ok());
    }

    #[test]
    fn test_edit_password_still_checked_when_given() {
        let form = UserForm {
            password: Some("short".to_string()),
            password_confirmation: Some("short".to_string()),
            ..valid_form()
        };
        let errors = form.validate(FormMode::Edit).unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("The field password must have at least 8 characters")
        );
    }

    #[test]
    fn test_confirmation_must_match() {
        let form = UserForm {
            password_confirmation: Some("secret124".to_string()),
            ..valid_form()
        };
        let errors = form.validate(FormMode::Add).unwrap_err();
        assert_eq!(errors.get("password_confirmation"), Some("Passwords do not match"));
    }

    #[test]
    fn test_role_and_email_required() {
        let form = UserForm {
            email: "not-an-email".to_string(),
            roles: vec![],
            ..valid_form()
        };
        let errors = form.validate(FormMode::Add).unwrap_err();
        assert_eq!(errors.get("email"), Some("The field email must be a valid email"));
        assert_eq!(errors.get("roles"), Some("The field role is required"));
    }

    #[test]
    fn test_blank_password_not_serialized() {
        let form = UserForm {
            password: Some(String::new()),
            password_confirmation: Some(String::new()),
            ..valid_form()
        };
        let json = serde_json::to_value(form.normalized()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["roles"], serde_json::json!([1]));
    }

    #[test]
    fn test_from_user_takes_first_role() {
        let user: User = serde_json::from_str(
            r#"{"id": 5, "name": "Luis", "email": "luis@example.com", "active": false,
                "roles": [{"id": 2, "name": "seller", "label": "Seller"}, {"id": 1, "name": "admin"}]}"#,
        )
        .unwrap();
        let form = UserForm::from_user(&user);
        assert_eq!(form.roles, vec![2]);
        assert!(!form.active);
        assert_eq!(user.roles[0].display_label(), "Seller");
        assert_eq!(user.roles[1].display_label(), "admin");
    }
}
