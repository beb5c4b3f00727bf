use chrono::{Duration, Utc};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use shared::auth::{name_from_email, AuthError, AuthProvider, AuthUser, Plan, SessionStore};
use shared::config::RemoteAuthConfig;
use shared::constants::MAX_SESSION_TTL_HOURS;
use shared::validation::{validate_display_name, validate_email, validate_password};

use crate::storage::BrowserStore;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpData<'a>,
}

#[derive(Serialize)]
struct SignUpData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    access_token: String,
    expires_in: i64,
    user: RemoteUser,
}

/// `signup` answers with a session, or with just the user while the address
/// still awaits confirmation.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SignUpResponse {
    Session(TokenResponse),
    Pending(RemoteUser),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteUser {
    id: String,
    email: String,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserMetadata {
    name: Option<String>,
    plan: Option<String>,
    #[serde(default)]
    add_ons: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error_description", alias = "msg")]
    message: Option<String>,
}

impl TokenResponse {
    pub(crate) fn into_user(self) -> AuthUser {
        let metadata = self.user.user_metadata;
        let plan = metadata
            .plan
            .as_deref()
            .and_then(Plan::from_name)
            .unwrap_or_default();
        AuthUser {
            name: metadata.name.or_else(|| name_from_email(&self.user.email)),
            id: self.user.id,
            email: self.user.email,
            plan,
            add_ons: metadata.add_ons.into_iter().collect(),
            expires_at: Utc::now() + token_lifetime(self.expires_in),
            access_token: Some(self.access_token),
        }
    }
}

impl SignUpResponse {
    pub(crate) fn into_user(self) -> Result<AuthUser, AuthError> {
        match self {
            Self::Session(token) => Ok(token.into_user()),
            Self::Pending(user) => Err(AuthError::ConfirmationRequired(user.email)),
        }
    }
}

/// Server lifetimes are capped at the longest session the site allows.
fn token_lifetime(expires_in: i64) -> Duration {
    Duration::seconds(expires_in.clamp(0, MAX_SESSION_TTL_HOURS * 3600))
}

/// Verifies credentials against the hosted auth service.
#[derive(Debug, Clone)]
pub struct RemoteAuthProvider {
    config: RemoteAuthConfig,
    sessions: SessionStore<BrowserStore>,
}

impl RemoteAuthProvider {
    pub fn new(config: RemoteAuthConfig) -> Self {
        Self {
            config,
            sessions: SessionStore::new(BrowserStore),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    fn keep_session(&self, user: AuthUser) -> Result<AuthUser, AuthError> {
        self.sessions.save(&user)?;
        log::info!("Signed in {} on the {} plan", user.email, user.plan);
        Ok(user)
    }

    async fn check_status(response: Response) -> Result<Response, AuthError> {
        match response.status() {
            200..=299 => Ok(response),
            400 | 401 => Err(AuthError::InvalidCredentials),
            status => {
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(|body| body.message)
                    .unwrap_or_else(|| format!("status {status}"));
                log::warn!("Auth service returned {status}: {message}");
                Err(AuthError::Rejected(message))
            }
        }
    }
}

impl AuthProvider for RemoteAuthProvider {
    fn current_user(&self) -> Option<AuthUser> {
        self.sessions.load()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        validate_email(email).map_err(|_| AuthError::InvalidEmail)?;
        let response = Request::post(&self.endpoint("token?grant_type=password"))
            .header("apikey", &self.config.anon_key)
            .json(&Credentials {
                email: email.trim(),
                password,
            })
            .map_err(|e| AuthError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let token = Self::check_status(response)
            .await?
            .json::<TokenResponse>()
            .await
            .map_err(|e| AuthError::Serialization(e.to_string()))?;
        self.keep_session(token.into_user())
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthUser, AuthError> {
        validate_email(email).map_err(|_| AuthError::InvalidEmail)?;
        validate_password(password).map_err(|_| AuthError::WeakPassword)?;
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        if let Some(name) = name {
            validate_display_name(name).map_err(|_| AuthError::InvalidName)?;
        }
        let response = Request::post(&self.endpoint("signup"))
            .header("apikey", &self.config.anon_key)
            .json(&SignUpRequest {
                email: email.trim(),
                password,
                data: SignUpData { name },
            })
            .map_err(|e| AuthError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let outcome = Self::check_status(response)
            .await?
            .json::<SignUpResponse>()
            .await
            .map_err(|e| AuthError::Serialization(e.to_string()))?;
        match outcome.into_user() {
            Ok(user) => self.keep_session(user),
            Err(err) => {
                log::info!("Sign-up for {email} awaits email confirmation");
                Err(err)
            }
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let token = self.sessions.load().and_then(|user| user.access_token);
        // The local session goes regardless of what the service says.
        self.sessions.clear()?;
        let Some(token) = token else {
            return Ok(());
        };
        let result = Request::post(&self.endpoint("logout"))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await;
        match result {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => {
                log::warn!("Remote logout returned {}", response.status());
                Ok(())
            }
            Err(err) => Err(AuthError::Network(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_maps_metadata() {
        let raw = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {
                "id": "u-1",
                "email": "grace@folio.app",
                "user_metadata": {
                    "name": "Grace",
                    "plan": "standard",
                    "add_ons": ["tax-reports"]
                }
            }
        }"#;
        let user = serde_json::from_str::<TokenResponse>(raw).unwrap().into_user();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.display_name(), "Grace");
        assert_eq!(user.plan, Plan::Standard);
        assert!(user.has_add_on("tax-reports"));
        assert_eq!(user.access_token.as_deref(), Some("jwt"));
        assert!(!user.is_expired(Utc::now()));
    }

    #[test]
    fn test_missing_metadata_defaults_to_starter() {
        let raw = r#"{
            "access_token": "jwt",
            "expires_in": 60,
            "user": { "id": "u-2", "email": "alan.turing@folio.app" }
        }"#;
        let user = serde_json::from_str::<TokenResponse>(raw).unwrap().into_user();
        assert_eq!(user.plan, Plan::Starter);
        assert!(user.add_ons.is_empty());
        assert_eq!(user.name.as_deref(), Some("Alan Turing"));
    }

    #[test]
    fn test_sign_up_without_session_needs_confirmation() {
        let raw = r#"{
            "id": "u-3",
            "aud": "authenticated",
            "email": "hedy@folio.app",
            "confirmation_sent_at": "2026-10-16T09:00:00Z",
            "user_metadata": { "name": "Hedy" }
        }"#;
        let outcome = serde_json::from_str::<SignUpResponse>(raw).unwrap().into_user();
        let err = outcome.unwrap_err();
        assert_eq!(err, AuthError::ConfirmationRequired("hedy@folio.app".into()));
        assert!(err.user_message().contains("hedy@folio.app"));
    }

    #[test]
    fn test_sign_up_with_session_signs_in() {
        let raw = r#"{
            "access_token": "jwt",
            "expires_in": 3600,
            "user": { "id": "u-4", "email": "hedy@folio.app" }
        }"#;
        let user = serde_json::from_str::<SignUpResponse>(raw).unwrap().into_user().unwrap();
        assert_eq!(user.access_token.as_deref(), Some("jwt"));
    }

    #[test]
    fn test_huge_expiry_is_capped() {
        let raw = format!(
            r#"{{"access_token": "jwt", "expires_in": {}, "user": {{ "id": "u-5", "email": "a@folio.app" }}}}"#,
            i64::MAX
        );
        let user = serde_json::from_str::<TokenResponse>(&raw).unwrap().into_user();
        assert!(user.expires_at <= Utc::now() + Duration::hours(MAX_SESSION_TTL_HOURS));
        assert_eq!(token_lifetime(-5), Duration::zero());
    }
}
