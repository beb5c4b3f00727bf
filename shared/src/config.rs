use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS};
use crate::theme::ThemeName;

pub const PROFILE_VAR: &str = "FOLIO_PROFILE";
pub const BYPASS_AUTH_VAR: &str = "FOLIO_BYPASS_AUTH";
pub const AUTH_MODE_VAR: &str = "FOLIO_AUTH_MODE";
pub const AUTH_URL_VAR: &str = "FOLIO_AUTH_URL";
pub const AUTH_ANON_KEY_VAR: &str = "FOLIO_AUTH_ANON_KEY";
pub const SESSION_TTL_VAR: &str = "FOLIO_SESSION_TTL_HOURS";
pub const DEFAULT_THEME_VAR: &str = "FOLIO_DEFAULT_THEME";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be set when FOLIO_AUTH_MODE=remote")]
    Missing { key: &'static str },
    #[error("{key} has invalid value `{value}`")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Development,
    Production,
}

impl Profile {
    /// Accepts `development`/`dev` and `production`/`prod`, ignoring case.
    pub fn parse(raw: &str) -> Option<Profile> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAuthConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Demo,
    Remote(RemoteAuthConfig),
}

/// Build-time settings, injected into the app instead of living as source constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    pub bypass_auth: bool,
    pub auth_mode: AuthMode,
    pub session_ttl_hours: i64,
    pub default_theme: ThemeName,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Development,
            bypass_auth: true,
            auth_mode: AuthMode::Demo,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            default_theme: ThemeName::Dark,
        }
    }
}

impl SiteConfig {
    /// Builds the config from a variable lookup (process env, `option_env!`, or a test map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let profile = match get(PROFILE_VAR) {
            None => Profile::Development,
            Some(raw) => Profile::parse(&raw).ok_or_else(|| invalid(PROFILE_VAR, &raw))?,
        };

        let bypass_auth = match get(BYPASS_AUTH_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid(BYPASS_AUTH_VAR, &raw))?,
            None => profile == Profile::Development,
        };

        let auth_mode = match get(AUTH_MODE_VAR).as_deref() {
            None | Some("demo") => AuthMode::Demo,
            Some("remote") => AuthMode::Remote(RemoteAuthConfig {
                url: get(AUTH_URL_VAR)
                    .map(|url| url.trim_end_matches('/').to_string())
                    .ok_or(ConfigError::Missing { key: AUTH_URL_VAR })?,
                anon_key: get(AUTH_ANON_KEY_VAR)
                    .ok_or(ConfigError::Missing { key: AUTH_ANON_KEY_VAR })?,
            }),
            Some(other) => return Err(invalid(AUTH_MODE_VAR, other)),
        };

        let session_ttl_hours = match get(SESSION_TTL_VAR) {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|hours| (1..=MAX_SESSION_TTL_HOURS).contains(hours))
                .ok_or_else(|| invalid(SESSION_TTL_VAR, &raw))?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };

        let default_theme = match get(DEFAULT_THEME_VAR) {
            Some(raw) => raw.parse().map_err(|_| invalid(DEFAULT_THEME_VAR, &raw))?,
            None => ThemeName::default(),
        };

        Ok(Self {
            profile,
            bypass_auth,
            auth_mode,
            session_ttl_hours,
            default_theme,
        })
    }

    /// Falls back to the default TTL for a hand-built config outside the accepted range.
    pub fn session_ttl(&self) -> Duration {
        let hours = if (1..=MAX_SESSION_TTL_HOURS).contains(&self.session_ttl_hours) {
            self.session_ttl_hours
        } else {
            DEFAULT_SESSION_TTL_HOURS
        };
        Duration::hours(hours)
    }

    pub fn is_demo(&self) -> bool {
        self.auth_mode == AuthMode::Demo
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_match_development() {
        assert_eq!(config(&[]).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_production_enforces_access_by_default() {
        let cfg = config(&[(PROFILE_VAR, "production")]).unwrap();
        assert_eq!(cfg.profile, Profile::Production);
        assert!(!cfg.bypass_auth);

        let cfg = config(&[(PROFILE_VAR, "production"), (BYPASS_AUTH_VAR, "yes")]).unwrap();
        assert!(cfg.bypass_auth);
    }

    #[test]
    fn test_remote_mode_requires_credentials() {
        assert_eq!(
            config(&[(AUTH_MODE_VAR, "remote"), (AUTH_URL_VAR, "https://auth.folio.app")]),
            Err(ConfigError::Missing { key: AUTH_ANON_KEY_VAR })
        );

        let cfg = config(&[
            (AUTH_MODE_VAR, "remote"),
            (AUTH_URL_VAR, "https://auth.folio.app/"),
            (AUTH_ANON_KEY_VAR, "anon"),
        ])
        .unwrap();
        assert_eq!(
            cfg.auth_mode,
            AuthMode::Remote(RemoteAuthConfig {
                url: "https://auth.folio.app".into(),
                anon_key: "anon".into(),
            })
        );
    }

    #[test]
    fn test_credentials_alone_do_not_select_remote() {
        let cfg = config(&[(AUTH_URL_VAR, "https://auth.folio.app"), (AUTH_ANON_KEY_VAR, "anon")]).unwrap();
        assert!(cfg.is_demo());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(config(&[(PROFILE_VAR, "staging")]), Err(ConfigError::Invalid { key: PROFILE_VAR, .. })));
        assert!(config(&[(BYPASS_AUTH_VAR, "maybe")]).is_err());
        assert!(config(&[(SESSION_TTL_VAR, "0")]).is_err());
        assert!(config(&[(SESSION_TTL_VAR, "abc")]).is_err());
        assert!(config(&[(DEFAULT_THEME_VAR, "neon")]).is_err());
        assert_eq!(config(&[(DEFAULT_THEME_VAR, "paper")]).unwrap().default_theme, ThemeName::Paper);
    }

    #[test]
    fn test_session_ttl_is_bounded() {
        for huge in ["1000000000000", "9000000000000000", "8761"] {
            assert!(matches!(
                config(&[(SESSION_TTL_VAR, huge)]),
                Err(ConfigError::Invalid { key: SESSION_TTL_VAR, .. })
            ));
        }
        let cfg = config(&[(SESSION_TTL_VAR, "8760")]).unwrap();
        assert_eq!(cfg.session_ttl(), Duration::hours(MAX_SESSION_TTL_HOURS));

        let hand_built = SiteConfig {
            session_ttl_hours: i64::MAX,
            ..SiteConfig::default()
        };
        assert_eq!(hand_built.session_ttl(), Duration::hours(DEFAULT_SESSION_TTL_HOURS));
    }

    #[test]
    fn test_profile_ignores_case() {
        assert_eq!(config(&[(PROFILE_VAR, "Production")]).unwrap().profile, Profile::Production);
        assert_eq!(config(&[(PROFILE_VAR, "DEV")]).unwrap().profile, Profile::Development);
        assert!(!config(&[(PROFILE_VAR, "PROD")]).unwrap().bypass_auth);
    }
}
