use serde::{Deserialize, Serialize};

/// Shown when either login field is blank.
pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Signed-in user. Nothing is verified; the name is the email's local part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Email as typed.
    pub email: String,
}

impl User {
    /// User named after the part of `email` before the `@`.
    #[must_use]
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email);
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Login form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email field.
    pub email: String,
    /// Password field; only checked for presence.
    pub password: String,
    error: Option<String>,
}

impl LoginForm {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with both fields filled.
    #[must_use]
    pub fn filled(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    /// Validation message from the last submit.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and produce the user, or record the error and return `None`.
    pub fn submit(&mut self) -> Option<User> {
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_FIELDS.to_string());
            return None;
        }
        self.error = None;
        Some(User::from_email(&self.email))
    }
}

/// Who is logged in, if anyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log `user` in, replacing any previous user.
    pub fn login(&mut self, user: User) {
        tracing::info!(user = %user.name, "logged in");
        self.user = Some(user);
    }

    /// Forget the user.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.name, "logged out");
        }
    }

    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The logged-in user.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_field_blocks_login() {
        let mut form = LoginForm::filled("ana@bank.com", "");
        assert!(form.submit().is_none());
        assert_eq!(form.error(), Some(MISSING_FIELDS));

        form.password = "secret".into();
        let user = form.submit().unwrap();
        assert_eq!(user.name, "ana");
        assert!(form.error().is_none());
    }

    #[test]
    fn email_without_at_sign_names_user_after_whole_address() {
        assert_eq!(User::from_email("analyst").name, "analyst");
    }

    #[test]
    fn logout_clears_user() {
        let mut s = Session::new();
        s.login(User::from_email("a@b.c"));
        assert!(s.is_logged_in());
        s.logout();
        assert!(s.user().is_none());
    }
}
