use super::{Document, Section};

const UPDATED: &str = "1 September 2026";

pub const TERMS: Document = Document {
    title: "Terms of Service",
    summary: "The agreement between you and Folio Analytics Ltd. when you use Folio.",
    updated: UPDATED,
    sections: &[
        Section {
            heading: "1. Acceptance of terms",
            paragraphs: &[
                "By creating an account or otherwise using Folio you agree to these terms. If you use Folio on behalf of an organisation, you confirm that you are authorised to bind that organisation.",
                "We may update these terms from time to time. Material changes are announced by email at least 30 days before they take effect; continued use after that date means you accept the new terms.",
            ],
        },
        Section {
            heading: "2. The service",
            paragraphs: &[
                "Folio aggregates holdings, transactions and prices that you enter or that your connected institutions provide, and presents analytics derived from them.",
                "Folio is an information tool. It does not execute trades, hold client money or provide personalised investment advice.",
            ],
        },
        Section {
            heading: "3. Accounts",
            paragraphs: &[
                "You are responsible for keeping your credentials confidential and for all activity under your account. Tell us at once at support@folio.app if you suspect unauthorised access.",
                "You must be at least 18 years old, or the age of majority where you live, to hold an account.",
            ],
        },
        Section {
            heading: "4. Subscriptions and fees",
            paragraphs: &[
                "Paid plans and add-ons are billed in advance, monthly or annually. Prices exclude VAT, which is added where applicable.",
                "You can cancel at any time from the billing settings. Cancellation takes effect at the end of the current billing period; refunds are governed by our Refund Policy.",
            ],
        },
        Section {
            heading: "5. Your data",
            paragraphs: &[
                "You keep all rights to the data you put into Folio. You grant us a licence to process it solely to provide and improve the service, as described in the Privacy Policy.",
                "You can export your portfolios as CSV or JSON at any time, and for 30 days after your account is closed.",
            ],
        },
        Section {
            heading: "6. Limitation of liability",
            paragraphs: &[
                "Market data may be delayed or inaccurate. To the extent permitted by law, Folio is not liable for investment decisions made on the basis of information shown in the service.",
                "Our aggregate liability for any claim is limited to the fees you paid in the twelve months before the claim arose.",
            ],
        },
        Section {
            heading: "7. Governing law",
            paragraphs: &[
                "These terms are governed by the laws of Ireland. The courts of Dublin have exclusive jurisdiction, without prejudice to mandatory consumer protections in your country of residence.",
            ],
        },
    ],
};

pub const PRIVACY: Document = Document {
    title: "Privacy Policy",
    summary: "What personal data Folio collects, why, and the choices you have.",
    updated: UPDATED,
    sections: &[
        Section {
            heading: "Who we are",
            paragraphs: &[
                "Folio Analytics Ltd. is the controller of personal data processed through folio.app. Our data protection contact is privacy@folio.app.",
            ],
        },
        Section {
            heading: "Data we collect",
            paragraphs: &[
                "Account data: your email address, name and plan. Portfolio data: holdings, transactions and account labels you enter or import. Technical data: browser type, coarse location derived from IP address, and error reports.",
                "We never ask for, and never store, the passwords to your brokerage accounts. Broker connections use read-only tokens issued by the institution or its aggregator.",
            ],
        },
        Section {
            heading: "How we use it",
            paragraphs: &[
                "To run the service, to bill you, to answer support requests, and to keep the platform secure. We use aggregated, de-identified statistics to decide what to build next.",
                "We do not sell personal data and do not use portfolio contents for advertising.",
            ],
        },
        Section {
            heading: "Retention",
            paragraphs: &[
                "Account and portfolio data are kept while your account is open and deleted 30 days after closure. Invoices are kept for seven years to meet accounting obligations.",
            ],
        },
        Section {
            heading: "Your rights",
            paragraphs: &[
                "You can access, correct, export or delete your data, object to processing, and lodge a complaint with the Data Protection Commission. Most of this is self-service from your account settings.",
            ],
        },
    ],
};

pub const COOKIES: Document = Document {
    title: "Cookie Policy",
    summary: "The small amount of browser storage Folio relies on.",
    updated: UPDATED,
    sections: &[
        Section {
            heading: "Strictly necessary storage",
            paragraphs: &[
                "Folio stores your session and your chosen colour theme in your browser's local storage. Without these the site cannot keep you signed in or remember your preference.",
            ],
        },
        Section {
            heading: "Analytics",
            paragraphs: &[
                "We measure page views with a cookieless, self-hosted analytics tool that does not build profiles or track you across sites.",
            ],
        },
        Section {
            heading: "Managing storage",
            paragraphs: &[
                "Clearing site data in your browser signs you out and resets the theme. No other functionality depends on stored data.",
            ],
        },
    ],
};

pub const REFUNDS: Document = Document {
    title: "Refund Policy",
    summary: "When and how we refund subscription payments.",
    updated: UPDATED,
    sections: &[
        Section {
            heading: "14-day guarantee",
            paragraphs: &[
                "If Folio is not for you, ask for a refund within 14 days of your first paid charge and we will return it in full, no questions asked.",
            ],
        },
        Section {
            heading: "Renewals",
            paragraphs: &[
                "Annual renewals can be refunded pro rata if you contact us within 30 days of the renewal date. Monthly renewals are not refunded, but you keep access until the end of the period.",
            ],
        },
        Section {
            heading: "Add-ons",
            paragraphs: &[
                "Add-ons follow the billing cycle of your plan. Removing an add-on mid-cycle credits the unused portion to your next invoice.",
            ],
        },
        Section {
            heading: "How to request a refund",
            paragraphs: &[
                "Email support@folio.app from the address on your account. Refunds are issued to the original payment method within 10 business days.",
            ],
        },
    ],
};

pub const DISCLAIMER: Document = Document {
    title: "Investment Disclaimer",
    summary: "Folio shows numbers. It does not tell you what to buy.",
    updated: UPDATED,
    sections: &[
        Section {
            heading: "No investment advice",
            paragraphs: &[
                "Nothing on folio.app or in the Folio application is a recommendation to buy, sell or hold any security. Folio Analytics Ltd. is not a regulated investment firm.",
            ],
        },
        Section {
            heading: "Data accuracy",
            paragraphs: &[
                "Prices, exchange rates and corporate actions come from third-party providers and can be delayed, incomplete or wrong. Always confirm figures with your broker before acting on them.",
            ],
        },
        Section {
            heading: "Past performance",
            paragraphs: &[
                "Historical returns and backtests shown in Folio are not a reliable indicator of future results. The value of investments can go down as well as up.",
            ],
        },
        Section {
            heading: "Tax information",
            paragraphs: &[
                "Tax reports are a convenience based on the transactions you provide. They are not tax advice; consult a qualified adviser for your situation.",
            ],
        },
    ],
};

pub const ACCEPTABLE_USE: Document = Document {
    title: "Acceptable Use Policy",
    summary: "Rules that keep Folio fast and safe for everyone.",
    updated: UPDATED,
    sections: &[
        Section {
            heading: "Prohibited activity",
            paragraphs: &[
                "Do not probe, scan or test the vulnerability of the service except through our disclosure programme, attempt to access other users' data, or interfere with the platform's operation.",
                "Do not use Folio to store data you have no right to process, or to run a commercial data-resale service on top of our market data.",
            ],
        },
        Section {
            heading: "Automated access",
            paragraphs: &[
                "Use the public API for automation. Scraping the web application is not permitted. API limits are documented on the Developers page.",
            ],
        },
        Section {
            heading: "Enforcement",
            paragraphs: &[
                "We may suspend accounts that breach this policy. Where possible we will warn you first and explain what needs to change.",
            ],
        },
    ],
};

pub const DATA_PROCESSING: Document = Document {
    title: "Data Processing Addendum",
    summary: "For advisers and businesses that put client data into Folio.",
    updated: UPDATED,
    sections: &[
        Section {
            heading: "Roles",
            paragraphs: &[
                "When you add portfolios belonging to your clients, you are the controller and Folio Analytics Ltd. acts as your processor under Article 28 GDPR.",
            ],
        },
        Section {
            heading: "Processing instructions",
            paragraphs: &[
                "We process client data only to provide the service you configured, and only on your documented instructions, which these terms and your use of the product constitute.",
            ],
        },
        Section {
            heading: "Sub-processors",
            paragraphs: &[
                "We use a small set of sub-processors for hosting, email delivery and payments, all located in the EEA or covered by standard contractual clauses. We give 30 days' notice before adding one.",
            ],
        },
        Section {
            heading: "Security and breaches",
            paragraphs: &[
                "Data is encrypted in transit and at rest. We notify you without undue delay, and in any case within 48 hours, after becoming aware of a personal data breach affecting your clients.",
            ],
        },
    ],
};

pub const ACCESSIBILITY: Document = Document {
    title: "Accessibility Statement",
    summary: "Our commitment to making Folio usable by everyone.",
    updated: UPDATED,
    sections: &[
        Section {
            heading: "Standard",
            paragraphs: &[
                "We aim to meet WCAG 2.2 level AA across the marketing site and the application. Every colour theme is checked for contrast before it ships.",
            ],
        },
        Section {
            heading: "Known limitations",
            paragraphs: &[
                "Some interactive charts do not yet expose their data to screen readers. A tabular view of the same data is available from each chart's menu.",
            ],
        },
        Section {
            heading: "Feedback",
            paragraphs: &[
                "If you hit a barrier, email support@folio.app with the page and what you were trying to do. We reply within two business days.",
            ],
        },
    ],
};

pub const IMPRINT: Document = Document {
    title: "Imprint",
    summary: "Company information required by law.",
    updated: UPDATED,
    sections: &[
        Section {
            heading: "Company",
            paragraphs: &[
                "Folio Analytics Ltd., 18 Wharf Street, Dublin D02 X285, Ireland. Registered in Ireland under company number 712334.",
            ],
        },
        Section {
            heading: "Contact",
            paragraphs: &[
                "Email: legal@folio.app. VAT number: IE 3712334QH. Directors: Niamh Byrne, Tomasz Wiśniewski.",
            ],
        },
    ],
};
