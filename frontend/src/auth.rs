//! Login, signup and logout against the local user collection.
//!
//! Credentials are compared as sanitized plaintext; nothing here hashes.

use log::info;
use thiserror::Error;

use crate::clock::Clock;
use crate::local_store::LocalStore;
use crate::models::User;
use crate::sanitize::{
    is_valid_email, is_valid_password, sanitize_email, sanitize_name, sanitize_password,
};
use crate::seed::SEED_ACCOUNTS;
use crate::storage::StoragePort;

pub const INVALID_EMAIL_MESSAGE: &'static str = "Please enter a valid email address";
pub const PASSWORD_MISMATCH_MESSAGE: &'static str = "Passwords do not match";

/// Failures shown to the user next to the form. The form stays open.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in a valid email and password.")]
    IncompleteForm,

    #[error("User with this email already exists. Please login instead.")]
    EmailTaken,

    #[error("User is not registered. Please sign up first.")]
    NotRegistered,

    #[error("Invalid password. Please try again.")]
    InvalidPassword,
}

/// Makes sure the demo accounts exist, matching by email.
pub fn ensure_seed_users<S: StoragePort, C: Clock>(store: &LocalStore<S, C>) {
    let existing = store.get_users();

    for account in SEED_ACCOUNTS.iter() {
        if existing.iter().any(|user| user.email == account.email) {
            continue;
        }

        store.save_user(User {
            id: account.email.into(),
            name: sanitize_name(account.name),
            email: sanitize_email(account.email),
            password: sanitize_password(account.password),
            avatar: None,
        });
    }
}

/// The part of an address before `@`, cleaned up as a display name.
pub fn username_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    sanitize_name(local)
}

pub fn signup<S: StoragePort, C: Clock>(
    store: &LocalStore<S, C>,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let email = sanitize_email(email);
    let password = sanitize_password(password);

    if store.get_users().iter().any(|user| user.email == email) {
        return Err(AuthError::EmailTaken);
    }

    let user = User {
        id: store.clock().now_millis().to_string(),
        name: username_from_email(&email),
        email,
        password,
        avatar: None,
    };

    store.save_user(user.clone());
    store.set_current_user(Some(&user));
    info!("signed up {}", user.email);

    Ok(user)
}

pub fn login<S: StoragePort, C: Clock>(
    store: &LocalStore<S, C>,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let email = sanitize_email(email);
    let password = sanitize_password(password);

    let users = store.get_users();
    let user = users
        .into_iter()
        .find(|user| user.email == email)
        .ok_or(AuthError::NotRegistered)?;

    if user.password != password {
        return Err(AuthError::InvalidPassword);
    }

    let user = User {
        avatar: None,
        ..user
    };
    store.set_current_user(Some(&user));
    info!("logged in {}", user.email);

    Ok(user)
}

pub fn logout<S: StoragePort, C: Clock>(store: &LocalStore<S, C>) {
    store.set_current_user(None);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    SignIn,
    SignUp,
}

/// State of the sign-in / sign-up form, independent of any rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mode: FormMode,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub submit_error: Option<AuthError>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, raw: &str) {
        self.email = sanitize_email(raw);
        self.submit_error = None;
        self.email_error = if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            Some(INVALID_EMAIL_MESSAGE)
        } else {
            None
        };
    }

    pub fn set_password(&mut self, raw: &str) {
        self.password = sanitize_password(raw);
        self.submit_error = None;
        self.password_error = None;
    }

    pub fn set_repeat_password(&mut self, raw: &str) {
        self.repeat_password = sanitize_password(raw);
        self.password_error = None;
        if self.repeat_password != self.password && !self.repeat_password.trim().is_empty() {
            self.password_error = Some(PASSWORD_MISMATCH_MESSAGE);
        }
    }

    pub fn switch_mode(&mut self) {
        let mode = match self.mode {
            FormMode::SignIn => FormMode::SignUp,
            FormMode::SignUp => FormMode::SignIn,
        };
        *self = LoginForm {
            mode,
            ..LoginForm::default()
        };
    }

    pub fn clear(&mut self) {
        *self = LoginForm {
            mode: self.mode,
            ..LoginForm::default()
        };
    }

    pub fn is_valid(&self) -> bool {
        let common = is_valid_email(&self.email)
            && is_valid_password(&self.password)
            && self.email_error.is_none();

        match self.mode {
            FormMode::SignIn => common,
            FormMode::SignUp => {
                common && self.password == self.repeat_password && self.password_error.is_none()
            }
        }
    }

    /// Runs the flow for the current mode. On success the form is cleared and
    /// the user is the new session; on failure the error is kept for display.
    pub fn submit<S: StoragePort, C: Clock>(
        &mut self,
        store: &LocalStore<S, C>,
    ) -> Result<User, AuthError> {
        if !self.is_valid() {
            return Err(AuthError::IncompleteForm);
        }

        let result = match self.mode {
            FormMode::SignIn => login(store, &self.email, &self.password),
            FormMode::SignUp => signup(store, &self.email, &self.password),
        };

        match &result {
            Ok(_) => self.clear(),
            Err(err) => self.submit_error = Some(err.clone()),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_the_local_part() {
        assert_eq!(username_from_email("jane.doe@example.com"), "jane.doe");
        assert_eq!(username_from_email("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn email_error_only_for_non_empty_invalid_input() {
        let mut form = LoginForm::new();
        form.set_email("   ");
        assert_eq!(form.email_error, None);

        form.set_email("half@");
        assert_eq!(form.email_error, Some(INVALID_EMAIL_MESSAGE));

        form.set_email("Demo@Example.com");
        assert_eq!(form.email, "demo@example.com");
        assert_eq!(form.email_error, None);
    }

    #[test]
    fn repeat_password_mismatch_is_flagged() {
        let mut form = LoginForm::new();
        form.switch_mode();
        form.set_email("new@example.com");
        form.set_password("secret1");
        form.set_repeat_password("secret2");
        assert_eq!(form.password_error, Some(PASSWORD_MISMATCH_MESSAGE));
        assert!(!form.is_valid());

        form.set_repeat_password("secret1");
        assert_eq!(form.password_error, None);
        assert!(form.is_valid());
    }

    #[test]
    fn switching_mode_clears_the_form() {
        let mut form = LoginForm::new();
        form.set_email("demo@example.com");
        form.set_password("password123");
        form.switch_mode();

        assert_eq!(form.mode, FormMode::SignUp);
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
    }

    #[test]
    fn sign_in_ignores_repeat_password() {
        let mut form = LoginForm::new();
        form.set_email("demo@example.com");
        form.set_password("password123");
        assert!(form.is_valid());
    }
}
