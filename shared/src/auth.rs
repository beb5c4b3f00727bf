use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::constants::{
    ADD_ONS, INVALID_CREDENTIALS_ERROR, INVALID_EMAIL_ERROR, INVALID_NAME_ERROR,
    INVALID_PASSWORD_ERROR, NETWORK_ERROR,
};
use crate::storage::{KeyValueStore, StorageError, AUTH_KEY};
use crate::validation::{validate_display_name, validate_email};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Starter,
    Standard,
    Pro,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Starter, Plan::Standard, Plan::Pro];

    pub fn label(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Standard => "Standard",
            Self::Pro => "Pro",
        }
    }

    pub fn from_name(name: &str) -> Option<Plan> {
        Self::ALL
            .into_iter()
            .find(|plan| plan.label().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub plan: Plan,
    #[serde(default)]
    pub add_ons: BTreeSet<String>,
    pub expires_at: DateTime<Utc>,
    /// Bearer token from the hosted auth service; never set in demo mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl AuthUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn has_add_on(&self, add_on: &str) -> bool {
        self.add_ons.contains(add_on)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password does not meet requirements")]
    WeakPassword,
    #[error("invalid display name")]
    InvalidName,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("network error: {0}")]
    Network(String),
    #[error("account created for {0}, awaiting email confirmation")]
    ConfirmationRequired(String),
    #[error("auth service rejected the request: {0}")]
    Rejected(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("malformed session record: {0}")]
    Serialization(String),
}

impl AuthError {
    /// Text suitable for showing under a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail => INVALID_EMAIL_ERROR.to_string(),
            Self::WeakPassword => INVALID_PASSWORD_ERROR.to_string(),
            Self::InvalidName => INVALID_NAME_ERROR.to_string(),
            Self::InvalidCredentials => INVALID_CREDENTIALS_ERROR.to_string(),
            Self::Network(_) => NETWORK_ERROR.to_string(),
            Self::ConfirmationRequired(email) => {
                format!("Check your inbox: we sent a confirmation link to {email}.")
            }
            Self::Rejected(reason) => reason.clone(),
            Self::Storage(_) | Self::Serialization(_) => {
                "Could not save your session in this browser".to_string()
            }
        }
    }
}

/// Sign-in capability. The site holds exactly one implementation, picked by
/// configuration at startup.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    fn current_user(&self) -> Option<AuthUser>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Persists the signed-in user as JSON under [`AUTH_KEY`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the stored user, discarding records that fail to parse or have expired.
    pub fn load(&self) -> Option<AuthUser> {
        let raw = self.store.get(AUTH_KEY)?;
        match serde_json::from_str::<AuthUser>(&raw) {
            Ok(user) if user.is_expired(Utc::now()) => {
                log::info!("Session for {} expired at {}", user.email, user.expires_at);
                self.discard();
                None
            }
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("Discarding unreadable session record: {err}");
                self.discard();
                None
            }
        }
    }

    pub fn save(&self, user: &AuthUser) -> Result<(), AuthError> {
        let raw = serde_json::to_string(user).map_err(|e| AuthError::Serialization(e.to_string()))?;
        self.store.set(AUTH_KEY, &raw)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), AuthError> {
        self.store.remove(AUTH_KEY)?;
        Ok(())
    }

    fn discard(&self) {
        if let Err(err) = self.store.remove(AUTH_KEY) {
            log::warn!("Failed to remove session record: {err}");
        }
    }
}

/// Turns `ada.lovelace+news` into `Ada Lovelace`.
pub fn name_from_email(email: &str) -> Option<String> {
    let local = email.split('@').next()?.split('+').next()?;
    let words: Vec<String> = local
        .split(['.', '_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Stand-in provider for running the site without an auth backend.
///
/// Passwords are never checked. Every sign-in produces a fresh Pro user with
/// every add-on so that all dashboard sections can be demoed.
#[derive(Debug, Clone)]
pub struct DemoAuthProvider<S> {
    sessions: SessionStore<S>,
    session_ttl: Duration,
}

impl<S: KeyValueStore> DemoAuthProvider<S> {
    pub fn new(store: S, session_ttl: Duration) -> Self {
        Self {
            sessions: SessionStore::new(store),
            session_ttl,
        }
    }

    fn fabricate(&self, email: &str, name: Option<&str>) -> Result<AuthUser, AuthError> {
        validate_email(email).map_err(|_| AuthError::InvalidEmail)?;
        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => {
                validate_display_name(name).map_err(|_| AuthError::InvalidName)?;
                Some(name.to_string())
            }
            None => name_from_email(email),
        };
        let expires_at = Utc::now()
            .checked_add_signed(self.session_ttl)
            .ok_or_else(|| AuthError::Serialization("session expiry out of range".to_string()))?;
        let user = AuthUser {
            id: Uuid::new_v4().to_string(),
            email: email.trim().to_lowercase(),
            name,
            plan: Plan::Pro,
            add_ons: ADD_ONS.iter().map(|add_on| add_on.id.to_string()).collect(),
            expires_at,
            access_token: None,
        };
        self.sessions.save(&user)?;
        log::info!("Demo session started for {}", user.email);
        Ok(user)
    }
}

impl<S: KeyValueStore> AuthProvider for DemoAuthProvider<S> {
    fn current_user(&self) -> Option<AuthUser> {
        self.sessions.load()
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthUser, AuthError> {
        self.fabricate(email, None)
    }

    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        name: Option<&str>,
    ) -> Result<AuthUser, AuthError> {
        self.fabricate(email, name)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        log::info!("Demo session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use futures::executor::block_on;

    fn provider(store: &MemoryStore) -> DemoAuthProvider<MemoryStore> {
        DemoAuthProvider::new(store.clone(), Duration::hours(24))
    }

    #[test]
    fn test_sign_in_fabricates_pro_user() {
        let store = MemoryStore::new();
        let auth = provider(&store);
        for password in ["", "hunter2", "a much longer passphrase"] {
            let user = block_on(auth.sign_in("Ada.Lovelace@Folio.app", password)).unwrap();
            assert_eq!(user.email, "ada.lovelace@folio.app");
            assert_eq!(user.name.as_deref(), Some("Ada Lovelace"));
            assert_eq!(user.plan, Plan::Pro);
            assert_eq!(user.add_ons.len(), ADD_ONS.len());
            assert!(user.expires_at > Utc::now());
            assert_eq!(auth.current_user(), Some(user));
        }
    }

    #[test]
    fn test_repeated_sign_in_is_structurally_identical() {
        let auth = provider(&MemoryStore::new());
        let first = block_on(auth.sign_in("ada@folio.app", "x")).unwrap();
        let second = block_on(auth.sign_in("ada@folio.app", "y")).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(
            (&first.email, &first.name, first.plan, &first.add_ons),
            (&second.email, &second.name, second.plan, &second.add_ons)
        );
    }

    #[test]
    fn test_sign_in_rejects_malformed_email() {
        let store = MemoryStore::new();
        let auth = provider(&store);
        assert_eq!(block_on(auth.sign_in("not-an-email", "pw")), Err(AuthError::InvalidEmail));
        assert!(store.get(AUTH_KEY).is_none());
    }

    #[test]
    fn test_sign_up_keeps_given_name() {
        let auth = provider(&MemoryStore::new());
        let user = block_on(auth.sign_up("grace@folio.app", "pw", Some("  Grace H. "))).unwrap();
        assert_eq!(user.name.as_deref(), Some("Grace H."));
        let user = block_on(auth.sign_up("grace@folio.app", "pw", Some(""))).unwrap();
        assert_eq!(user.name.as_deref(), Some("Grace"));
    }

    #[test]
    fn test_sign_out_survives_reload() {
        let store = MemoryStore::new();
        let auth = provider(&store);
        block_on(auth.sign_in("ada@folio.app", "pw")).unwrap();
        block_on(auth.sign_out()).unwrap();

        let reloaded = provider(&store);
        assert_eq!(reloaded.current_user(), None);
        assert!(store.get(AUTH_KEY).is_none());
    }

    #[test]
    fn test_unreadable_record_is_discarded() {
        let store = MemoryStore::new();
        store.set(AUTH_KEY, "{not json").unwrap();
        assert_eq!(provider(&store).current_user(), None);
        assert!(store.get(AUTH_KEY).is_none());
    }

    #[test]
    fn test_expired_record_is_discarded() {
        let store = MemoryStore::new();
        let auth = provider(&store);
        let mut user = block_on(auth.sign_in("ada@folio.app", "pw")).unwrap();
        user.expires_at = Utc::now() - Duration::minutes(1);
        SessionStore::new(store.clone()).save(&user).unwrap();

        assert_eq!(auth.current_user(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_out_of_range_ttl_fails_without_saving() {
        let store = MemoryStore::new();
        let auth = DemoAuthProvider::new(store.clone(), Duration::days(100_000_000));
        assert!(matches!(
            block_on(auth.sign_in("ada@folio.app", "pw")),
            Err(AuthError::Serialization(_))
        ));
        assert!(store.get(AUTH_KEY).is_none());
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let store = MemoryStore::new();
        block_on(provider(&store).sign_in("ada@folio.app", "pw")).unwrap();
        let raw = store.get(AUTH_KEY).unwrap();
        assert!(raw.contains("\"addOns\""));
        assert!(raw.contains("\"expiresAt\""));
        assert!(!raw.contains("accessToken"));
    }

    #[test]
    fn test_name_from_email() {
        assert_eq!(name_from_email("jean-luc_picard+crew@x.io").as_deref(), Some("Jean Luc Picard"));
        assert_eq!(name_from_email("@x.io"), None);
    }

    #[test]
    fn test_plan_ordering() {
        assert!(Plan::Starter < Plan::Standard && Plan::Standard < Plan::Pro);
        assert_eq!(Plan::from_name("PRO"), Some(Plan::Pro));
    }
}
