use once_cell::sync::Lazy;
use shared::config::{
    Profile, SiteConfig, AUTH_ANON_KEY_VAR, AUTH_MODE_VAR, AUTH_URL_VAR, BYPASS_AUTH_VAR,
    DEFAULT_THEME_VAR, PROFILE_VAR, SESSION_TTL_VAR,
};

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_lookup(build_var) {
    Ok(config) => {
        log::info!(
            "Site config: {} profile, {} auth, access checks {}",
            config.profile,
            if config.is_demo() { "demo" } else { "remote" },
            if config.bypass_auth { "bypassed" } else { "enforced" }
        );
        config
    }
    Err(err) => {
        log::error!("Invalid build configuration ({err}); running with demo defaults");
        fallback_config()
    }
});

/// Demo defaults, except that a production build never falls back to open access.
fn fallback_config() -> SiteConfig {
    if raw_profile_is_production() {
        SiteConfig {
            profile: Profile::Production,
            bypass_auth: false,
            ..SiteConfig::default()
        }
    } else {
        SiteConfig::default()
    }
}

fn raw_profile_is_production() -> bool {
    is_production_profile(build_var(PROFILE_VAR).as_deref())
}

fn is_production_profile(raw: Option<&str>) -> bool {
    raw.and_then(Profile::parse) == Some(Profile::Production)
}

/// Variables are baked in at compile time; a WASM bundle has no process environment.
fn build_var(key: &str) -> Option<String> {
    let value = match key {
        PROFILE_VAR => option_env!("FOLIO_PROFILE"),
        BYPASS_AUTH_VAR => option_env!("FOLIO_BYPASS_AUTH"),
        AUTH_MODE_VAR => option_env!("FOLIO_AUTH_MODE"),
        AUTH_URL_VAR => option_env!("FOLIO_AUTH_URL"),
        AUTH_ANON_KEY_VAR => option_env!("FOLIO_AUTH_ANON_KEY"),
        SESSION_TTL_VAR => option_env!("FOLIO_SESSION_TTL_HOURS"),
        DEFAULT_THEME_VAR => option_env!("FOLIO_DEFAULT_THEME"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

/// Decided from the raw profile variable so the logger can start before the
/// full config is parsed (and any parse error gets logged).
pub fn log_level() -> log::Level {
    if raw_profile_is_production() {
        log::Level::Info
    } else {
        log::Level::Debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_profile_ignores_case() {
        for raw in ["production", "Production", " PROD "] {
            assert!(is_production_profile(Some(raw)), "{raw}");
        }
        assert!(!is_production_profile(Some("Development")));
        assert!(!is_production_profile(Some("staging")));
        assert!(!is_production_profile(None));
    }
}
