use crate::auth::Plan;
use crate::page::PageId;

pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const INVALID_PASSWORD_ERROR: &str = "Password must be at least 8 characters long and contain uppercase, lowercase, number, and special character";
pub const INVALID_NAME_ERROR: &str = "Name must be between 1 and 64 characters";
pub const INVALID_CREDENTIALS_ERROR: &str = "Email or password is incorrect";
pub const NETWORK_ERROR: &str = "Network error. Please try again";

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_NAME_LENGTH: usize = 64;
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

pub struct Company {
    pub name: &'static str,
    pub legal_name: &'static str,
    pub tagline: &'static str,
    pub address: &'static str,
    pub support_email: &'static str,
    pub legal_email: &'static str,
    pub privacy_email: &'static str,
    pub founded: u16,
}

pub const COMPANY: Company = Company {
    name: "Folio",
    legal_name: "Folio Analytics Ltd.",
    tagline: "Every holding, every account, one honest number.",
    address: "18 Wharf Street, Dublin D02 X285, Ireland",
    support_email: "support@folio.app",
    legal_email: "legal@folio.app",
    privacy_email: "privacy@folio.app",
    founded: 2021,
};

pub struct NavLink {
    pub label: &'static str,
    pub page: PageId,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", page: PageId::Features },
    NavLink { label: "Pricing", page: PageId::Pricing },
    NavLink { label: "Integrations", page: PageId::Integrations },
    NavLink { label: "Security", page: PageId::Security },
    NavLink { label: "FAQ", page: PageId::Faq },
];

pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "Product",
        links: &[
            NavLink { label: "Features", page: PageId::Features },
            NavLink { label: "Pricing", page: PageId::Pricing },
            NavLink { label: "Integrations", page: PageId::Integrations },
            NavLink { label: "Mobile apps", page: PageId::MobileApps },
            NavLink { label: "Changelog", page: PageId::Changelog },
            NavLink { label: "Roadmap", page: PageId::Roadmap },
        ],
    },
    FooterSection {
        title: "Company",
        links: &[
            NavLink { label: "About", page: PageId::About },
            NavLink { label: "Careers", page: PageId::Careers },
            NavLink { label: "Press", page: PageId::Press },
            NavLink { label: "Partners", page: PageId::Partners },
            NavLink { label: "Affiliates", page: PageId::Affiliates },
            NavLink { label: "Contact", page: PageId::Contact },
        ],
    },
    FooterSection {
        title: "Resources",
        links: &[
            NavLink { label: "Blog", page: PageId::Blog },
            NavLink { label: "Help center", page: PageId::HelpCenter },
            NavLink { label: "Developers", page: PageId::Developers },
            NavLink { label: "FAQ", page: PageId::Faq },
            NavLink { label: "Glossary", page: PageId::Glossary },
            NavLink { label: "System status", page: PageId::Status },
        ],
    },
    FooterSection {
        title: "Legal",
        links: &[
            NavLink { label: "Terms of Service", page: PageId::Terms },
            NavLink { label: "Privacy Policy", page: PageId::Privacy },
            NavLink { label: "Cookie Policy", page: PageId::Cookies },
            NavLink { label: "Refund Policy", page: PageId::Refunds },
            NavLink { label: "Disclaimer", page: PageId::Disclaimer },
            NavLink { label: "Acceptable Use", page: PageId::AcceptableUse },
            NavLink { label: "Data Processing", page: PageId::DataProcessing },
            NavLink { label: "Accessibility", page: PageId::Accessibility },
        ],
    },
];

pub struct AddOn {
    pub id: &'static str,
    pub name: &'static str,
    pub monthly_price: u32,
}

pub const ADD_ONS: &[AddOn] = &[
    AddOn { id: "tax-reports", name: "Tax reports", monthly_price: 4 },
    AddOn { id: "advanced-analytics", name: "Advanced analytics", monthly_price: 6 },
    AddOn { id: "dividend-tracker", name: "Dividend tracker", monthly_price: 3 },
    AddOn { id: "priority-support", name: "Priority support", monthly_price: 5 },
];

pub struct PlanInfo {
    pub plan: Plan,
    /// Whole euros per month.
    pub monthly_price: u32,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PLANS: &[PlanInfo] = &[
    PlanInfo {
        plan: Plan::Starter,
        monthly_price: 0,
        tagline: "Track a single portfolio, free forever.",
        features: &[
            "1 portfolio, up to 25 holdings",
            "Manual transactions and CSV import",
            "Daily price updates",
            "Allocation overview",
        ],
        highlighted: false,
    },
    PlanInfo {
        plan: Plan::Standard,
        monthly_price: 9,
        tagline: "For investors with a few accounts to reconcile.",
        features: &[
            "5 portfolios, unlimited holdings",
            "Broker sync for 40+ institutions",
            "Time-weighted and money-weighted returns",
            "Dividend calendar",
            "Price alerts",
        ],
        highlighted: true,
    },
    PlanInfo {
        plan: Plan::Pro,
        monthly_price: 19,
        tagline: "Everything, for people who read the footnotes.",
        features: &[
            "Unlimited portfolios",
            "Benchmark comparison and attribution",
            "Multi-currency cost basis",
            "Watchlists and custom alerts",
            "All add-ons available",
        ],
        highlighted: false,
    },
];

/// Annual billing charges ten months for twelve.
pub const ANNUAL_BILLED_MONTHS: u32 = 10;

impl PlanInfo {
    pub fn annual_price(&self) -> u32 {
        self.monthly_price * ANNUAL_BILLED_MONTHS
    }

    /// Effective monthly price when billed yearly, rounded to cents.
    pub fn annual_monthly_equivalent(&self) -> f64 {
        (f64::from(self.annual_price()) / 12.0 * 100.0).round() / 100.0
    }
}

pub fn plan_info(plan: Plan) -> &'static PlanInfo {
    PLANS
        .iter()
        .find(|info| info.plan == plan)
        .unwrap_or(&PLANS[0])
}

pub fn add_on_name(id: &str) -> &str {
    ADD_ONS
        .iter()
        .find(|add_on| add_on.id == id)
        .map_or(id, |add_on| add_on.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_plan_has_catalogue_entry() {
        for plan in Plan::ALL {
            assert_eq!(plan_info(plan).plan, plan);
        }
    }

    #[test]
    fn test_annual_price_discounts_two_months() {
        let standard = plan_info(Plan::Standard);
        assert_eq!(standard.annual_price(), 90);
        assert_eq!(standard.annual_monthly_equivalent(), 7.5);
        assert_eq!(plan_info(Plan::Starter).annual_price(), 0);
    }

    #[test]
    fn test_footer_links_are_unique_per_section() {
        for section in FOOTER_SECTIONS {
            let mut pages: Vec<_> = section.links.iter().map(|l| l.page.slug()).collect();
            pages.sort_unstable();
            pages.dedup();
            assert_eq!(pages.len(), section.links.len(), "{}", section.title);
        }
    }

    #[test]
    fn test_add_on_name_lookup() {
        assert_eq!(add_on_name("tax-reports"), "Tax reports");
        assert_eq!(add_on_name("unknown"), "unknown");
    }
}
