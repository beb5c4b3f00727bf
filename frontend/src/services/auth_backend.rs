use shared::auth::{AuthError, AuthProvider, AuthUser, DemoAuthProvider};
use shared::config::{AuthMode, SiteConfig};

use super::remote_auth::RemoteAuthProvider;
use crate::storage::BrowserStore;

/// The one auth provider the site runs with, chosen from `SiteConfig::auth_mode`.
#[derive(Debug, Clone)]
pub enum AuthBackend {
    Demo(DemoAuthProvider<BrowserStore>),
    Remote(RemoteAuthProvider),
}

impl AuthBackend {
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.auth_mode {
            AuthMode::Demo => {
                log::debug!("Using demo auth, sessions last {}h", config.session_ttl_hours);
                AuthBackend::Demo(DemoAuthProvider::new(BrowserStore, config.session_ttl()))
            }
            AuthMode::Remote(remote) => {
                log::debug!("Using remote auth at {}", remote.url);
                AuthBackend::Remote(RemoteAuthProvider::new(remote.clone()))
            }
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, AuthBackend::Demo(_))
    }
}

impl AuthProvider for AuthBackend {
    fn current_user(&self) -> Option<AuthUser> {
        match self {
            AuthBackend::Demo(provider) => provider.current_user(),
            AuthBackend::Remote(provider) => provider.current_user(),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        match self {
            AuthBackend::Demo(provider) => provider.sign_in(email, password).await,
            AuthBackend::Remote(provider) => provider.sign_in(email, password).await,
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthUser, AuthError> {
        match self {
            AuthBackend::Demo(provider) => provider.sign_up(email, password, name).await,
            AuthBackend::Remote(provider) => provider.sign_up(email, password, name).await,
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        match self {
            AuthBackend::Demo(provider) => provider.sign_out().await,
            AuthBackend::Remote(provider) => provider.sign_out().await,
        }
    }
}
