//! Demo Authentication
//!
//! Session handling on top of the mock database. Passwords are accepted
//! but never checked or stored: any known email signs in, and an unknown
//! email on the login form creates an account.

use serde::{Deserialize, Serialize};

use crate::error::{AgriError, Result};
use crate::model::{ProfileUpdate, User};
use crate::store::{KeyValueStore, MockDatabase, keys};

/// Validated signup data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// How a login form submission ended up signed in
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Existing account
    LoggedIn(User),
    /// No account matched, so one was created
    SignedUp(User),
}

impl LoginOutcome {
    pub const fn user(&self) -> &User {
        match self {
            Self::LoggedIn(user) | Self::SignedUp(user) => user,
        }
    }

    pub fn into_user(self) -> User {
        match self {
            Self::LoggedIn(user) | Self::SignedUp(user) => user,
        }
    }
}

/// Login, signup and profile updates backed by a [`MockDatabase`]
#[derive(Clone, Debug)]
pub struct AuthService<S> {
    db: MockDatabase<S>,
}

impl<S: KeyValueStore> AuthService<S> {
    pub const fn new(store: S) -> Self {
        Self {
            db: MockDatabase::new(store),
        }
    }

    pub const fn database(&self) -> &MockDatabase<S> {
        &self.db
    }

    /// Signed-in user from a previous visit. A session that fails to
    /// parse is removed.
    pub fn restore(&self) -> Result<Option<User>> {
        let Some(raw) = self.db.store().get_item(keys::SESSION)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed session");
                self.db.store().remove_item(keys::SESSION)?;
                Ok(None)
            }
        }
    }

    fn write_session(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.db.store().set_item(keys::SESSION, &json)
    }

    /// Sign in by email. Returns `None` when no account matches.
    pub fn login(&self, email: &str, _password: &str) -> Result<Option<User>> {
        let Some(user) = self.db.user_by_email(email.trim())? else {
            return Ok(None);
        };
        self.write_session(&user)?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(Some(user))
    }

    /// Create an account and sign it in
    pub fn signup(&self, request: SignupRequest) -> Result<User> {
        let email = request.email.trim();
        if self.db.user_by_email(email)?.is_some() {
            return Err(AgriError::EmailExists(email.to_string()));
        }

        let user = User::new(email, request.name.trim());
        self.db.add_user(user.clone())?;
        self.write_session(&user)?;
        tracing::info!(user_id = %user.id, "User signed up");
        Ok(user)
    }

    /// Login form behaviour: sign in, or create an account named after the
    /// local part of the email.
    pub fn login_or_signup(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        if let Some(user) = self.login(email, password)? {
            return Ok(LoginOutcome::LoggedIn(user));
        }

        let email = email.trim();
        let name = email.split('@').next().unwrap_or(email);
        let user = self.signup(SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;
        Ok(LoginOutcome::SignedUp(user))
    }

    pub fn logout(&self) -> Result<()> {
        self.db.store().remove_item(keys::SESSION)?;
        tracing::info!("User logged out");
        Ok(())
    }

    /// Merge `update` into the signed-in user and persist it to both the
    /// session and the users collection
    pub fn update_profile(&self, update: ProfileUpdate) -> Result<User> {
        let mut user = self.restore()?.ok_or(AgriError::NotAuthenticated)?;
        user.apply(update);
        self.write_session(&user)?;
        if !self.db.update_user(&user)? {
            tracing::warn!(user_id = %user.id, "Session user missing from users collection");
        }
        Ok(user)
    }
}

fn required(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(AgriError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Raw login form fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<()> {
        required(&self.email, "email")?;
        required(&self.password, "password")
    }
}

/// Raw signup form fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest> {
        required(&self.name, "name")?;
        required(&self.email, "email")?;
        required(&self.password, "password")?;
        if self.password != self.confirm_password {
            return Err(AgriError::PasswordMismatch);
        }
        Ok(SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::model::Subscription;
    use crate::store::MemoryStore;
    use crate::store::seed::DEMO_EMAIL;

    fn service() -> AuthService<MemoryStore> {
        AuthService::new(MemoryStore::new())
    }

    fn request(email: &str) -> SignupRequest {
        SignupRequest {
            name: "Rahim".into(),
            email: email.into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn test_login_known_user_writes_session() {
        let auth = service();
        let user = auth.login(DEMO_EMAIL, "anything").unwrap().unwrap();
        assert_eq!(user.name, "Demo User");
        assert_eq!(auth.restore().unwrap(), Some(user));
    }

    #[test]
    fn test_login_unknown_user() {
        let auth = service();
        assert!(auth.login("ghost@farm.bd", "x").unwrap().is_none());
        assert!(auth.restore().unwrap().is_none());
    }

    #[test]
    fn test_signup_defaults() {
        let auth = service();
        let user = auth.signup(request("rahim@farm.bd")).unwrap();
        assert!(user.id.starts_with("user_"));
        assert_eq!(user.language, Language::En);
        assert_eq!(user.subscription, Subscription::Free);
        assert_eq!(auth.database().users().unwrap().len(), 2);
        assert_eq!(auth.restore().unwrap().unwrap().email, "rahim@farm.bd");
    }

    #[test]
    fn test_signup_duplicate_email_adds_nothing() {
        let auth = service();
        let err = auth.signup(request(DEMO_EMAIL)).unwrap_err();
        assert!(matches!(err, AgriError::EmailExists(_)));
        assert_eq!(auth.database().users().unwrap().len(), 1);
        assert!(auth.restore().unwrap().is_none());
    }

    #[test]
    fn test_login_or_signup_creates_account() {
        let auth = service();
        let outcome = auth.login_or_signup("karim@farm.bd", "pw").unwrap();
        assert!(matches!(outcome, LoginOutcome::SignedUp(_)));
        assert_eq!(outcome.user().name, "karim");

        let again = auth.login_or_signup("karim@farm.bd", "other").unwrap();
        assert!(matches!(again, LoginOutcome::LoggedIn(_)));
        assert_eq!(again.into_user().id, outcome.user().id);
    }

    #[test]
    fn test_malformed_session_removed() {
        let auth = service();
        auth.database().store().set_item(keys::SESSION, "{oops").unwrap();
        assert!(auth.restore().unwrap().is_none());
        assert!(auth.database().store().get_item(keys::SESSION).unwrap().is_none());
    }

    #[test]
    fn test_logout() {
        let auth = service();
        auth.login(DEMO_EMAIL, "").unwrap();
        auth.logout().unwrap();
        assert!(auth.restore().unwrap().is_none());
    }

    #[test]
    fn test_update_profile_merges_everywhere() {
        let auth = service();
        assert!(matches!(
            auth.update_profile(ProfileUpdate::default()),
            Err(AgriError::NotAuthenticated)
        ));

        auth.login(DEMO_EMAIL, "").unwrap();
        let updated = auth
            .update_profile(ProfileUpdate {
                location: Some("Khulna".into()),
                language: Some(Language::Bn),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.name, "Demo User");
        assert_eq!(updated.location.as_deref(), Some("Khulna"));

        let stored = auth.database().user_by_email(DEMO_EMAIL).unwrap().unwrap();
        assert_eq!(stored, updated);
        assert_eq!(auth.restore().unwrap().unwrap().language, Language::Bn);
    }

    #[test]
    fn test_form_validation() {
        assert!(matches!(
            LoginForm::default().validate(),
            Err(AgriError::MissingField("email"))
        ));

        let mut form = SignupForm {
            name: " Fatima ".into(),
            email: "fatima@farm.bd".into(),
            password: "abc".into(),
            confirm_password: "abd".into(),
        };
        assert!(matches!(form.validate(), Err(AgriError::PasswordMismatch)));

        form.confirm_password = "abc".into();
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Fatima");
    }
}
