//! Which dashboard sections a visitor may open.
//!
//! The policy table is always evaluated. The development bypass is a single
//! [`SiteConfig::bypass_auth`] value injected at startup, so turning it off
//! exercises exactly the same code path the production build runs.

use crate::auth::{AuthUser, Plan};
use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardSection {
    Overview,
    Holdings,
    Transactions,
    Performance,
    Allocation,
    Dividends,
    Watchlist,
    Alerts,
    Analytics,
    TaxReports,
    Imports,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRequirement {
    pub requires_auth: bool,
    pub required_plan: Option<Plan>,
    pub required_add_ons: &'static [&'static str],
}

const PUBLIC: AuthRequirement = AuthRequirement {
    requires_auth: false,
    required_plan: None,
    required_add_ons: &[],
};

const SIGNED_IN: AuthRequirement = AuthRequirement {
    requires_auth: true,
    required_plan: None,
    required_add_ons: &[],
};

const fn plan(required: Plan, add_ons: &'static [&'static str]) -> AuthRequirement {
    AuthRequirement {
        requires_auth: true,
        required_plan: Some(required),
        required_add_ons: add_ons,
    }
}

impl DashboardSection {
    pub const ALL: [DashboardSection; 12] = [
        DashboardSection::Overview,
        DashboardSection::Holdings,
        DashboardSection::Transactions,
        DashboardSection::Performance,
        DashboardSection::Allocation,
        DashboardSection::Dividends,
        DashboardSection::Watchlist,
        DashboardSection::Alerts,
        DashboardSection::Analytics,
        DashboardSection::TaxReports,
        DashboardSection::Imports,
        DashboardSection::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Holdings => "Holdings",
            Self::Transactions => "Transactions",
            Self::Performance => "Performance",
            Self::Allocation => "Allocation",
            Self::Dividends => "Dividends",
            Self::Watchlist => "Watchlist",
            Self::Alerts => "Alerts",
            Self::Analytics => "Analytics",
            Self::TaxReports => "Tax reports",
            Self::Imports => "Broker imports",
            Self::Settings => "Settings",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Overview => "Net worth, today's change and recent activity.",
            Self::Holdings => "Every position across every account, with cost basis.",
            Self::Transactions => "Buys, sells, splits and transfers in one ledger.",
            Self::Performance => "Time-weighted and money-weighted returns against a benchmark.",
            Self::Allocation => "Exposure by asset class, region, sector and currency.",
            Self::Dividends => "Upcoming payouts, yield on cost and income history.",
            Self::Watchlist => "Instruments you follow but do not own yet.",
            Self::Alerts => "Price, drift and dividend notifications.",
            Self::Analytics => "Attribution, drawdowns and correlation matrices.",
            Self::TaxReports => "Realised gains and income summaries per tax year.",
            Self::Imports => "Connect brokers and upload statements.",
            Self::Settings => "Profile, currency and notification preferences.",
        }
    }

    pub fn requirement(self) -> AuthRequirement {
        match self {
            Self::Overview => PUBLIC,
            Self::Holdings | Self::Transactions | Self::Settings => SIGNED_IN,
            Self::Allocation | Self::Imports => plan(Plan::Starter, &[]),
            Self::Performance | Self::Alerts => plan(Plan::Standard, &[]),
            Self::Dividends => plan(Plan::Standard, &["dividend-tracker"]),
            Self::Watchlist => plan(Plan::Pro, &[]),
            Self::Analytics => plan(Plan::Pro, &["advanced-analytics"]),
            Self::TaxReports => plan(Plan::Standard, &["tax-reports"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    NotRequired,
    Granted,
    SignInRequired,
    UpgradeRequired(Plan),
    AddOnsRequired(Vec<String>),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::NotRequired | Self::Granted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    bypass_auth: bool,
}

impl AccessPolicy {
    pub fn new(config: &SiteConfig) -> Self {
        if config.bypass_auth {
            log::warn!("Access checks bypassed by configuration ({} profile)", config.profile);
        }
        Self { bypass_auth: config.bypass_auth }
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypass_auth
    }

    pub fn evaluate(&self, section: DashboardSection, user: Option<&AuthUser>) -> AccessDecision {
        if self.bypass_auth {
            return AccessDecision::NotRequired;
        }
        check_requirement(&section.requirement(), user)
    }
}

pub fn check_requirement(requirement: &AuthRequirement, user: Option<&AuthUser>) -> AccessDecision {
    if !requirement.requires_auth {
        return AccessDecision::NotRequired;
    }
    let Some(user) = user else {
        return AccessDecision::SignInRequired;
    };
    if let Some(required) = requirement.required_plan {
        if user.plan < required {
            return AccessDecision::UpgradeRequired(required);
        }
    }
    let missing: Vec<String> = requirement
        .required_add_ons
        .iter()
        .filter(|add_on| !user.has_add_on(add_on))
        .map(|add_on| add_on.to_string())
        .collect();
    if missing.is_empty() {
        AccessDecision::Granted
    } else {
        AccessDecision::AddOnsRequired(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;
    use chrono::{Duration, Utc};
    use std::collections::BTreeSet;

    fn user(plan: Plan, add_ons: &[&str]) -> AuthUser {
        AuthUser {
            id: "u-1".into(),
            email: "ada@folio.app".into(),
            name: None,
            plan,
            add_ons: add_ons.iter().map(|a| a.to_string()).collect::<BTreeSet<_>>(),
            expires_at: Utc::now() + Duration::hours(1),
            access_token: None,
        }
    }

    fn enforcing() -> AccessPolicy {
        AccessPolicy::new(&SiteConfig {
            bypass_auth: false,
            ..SiteConfig::default()
        })
    }

    #[test]
    fn test_bypass_reports_not_required_everywhere() {
        let policy = AccessPolicy::new(&SiteConfig {
            profile: Profile::Development,
            bypass_auth: true,
            ..SiteConfig::default()
        });
        let starter = user(Plan::Starter, &[]);
        for section in DashboardSection::ALL {
            assert_eq!(policy.evaluate(section, None), AccessDecision::NotRequired);
            assert_eq!(policy.evaluate(section, Some(&starter)), AccessDecision::NotRequired);
        }
    }

    #[test]
    fn test_anonymous_visitor() {
        let policy = enforcing();
        assert_eq!(policy.evaluate(DashboardSection::Overview, None), AccessDecision::NotRequired);
        assert_eq!(policy.evaluate(DashboardSection::Holdings, None), AccessDecision::SignInRequired);
        assert_eq!(policy.evaluate(DashboardSection::Analytics, None), AccessDecision::SignInRequired);
    }

    #[test]
    fn test_plan_gates() {
        let policy = enforcing();
        let starter = user(Plan::Starter, &[]);
        assert_eq!(
            policy.evaluate(DashboardSection::Performance, Some(&starter)),
            AccessDecision::UpgradeRequired(Plan::Standard)
        );
        assert_eq!(
            policy.evaluate(DashboardSection::Allocation, Some(&starter)),
            AccessDecision::Granted
        );
        let standard = user(Plan::Standard, &[]);
        assert_eq!(
            policy.evaluate(DashboardSection::Watchlist, Some(&standard)),
            AccessDecision::UpgradeRequired(Plan::Pro)
        );
    }

    #[test]
    fn test_add_on_gates() {
        let policy = enforcing();
        let pro = user(Plan::Pro, &["tax-reports"]);
        assert_eq!(
            policy.evaluate(DashboardSection::Analytics, Some(&pro)),
            AccessDecision::AddOnsRequired(vec!["advanced-analytics".into()])
        );
        assert!(policy.evaluate(DashboardSection::TaxReports, Some(&pro)).is_allowed());
    }

    #[test]
    fn test_demo_user_opens_every_section() {
        let policy = enforcing();
        let everything: Vec<&str> = crate::constants::ADD_ONS.iter().map(|a| a.id).collect();
        let pro = user(Plan::Pro, &everything);
        for section in DashboardSection::ALL {
            assert!(policy.evaluate(section, Some(&pro)).is_allowed(), "{:?}", section);
        }
    }
}
