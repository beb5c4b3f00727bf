use super::{Document, Section};

const EVERGREEN: &str = "";

pub const FEATURES: Document = Document {
    title: "Everything your spreadsheet was trying to be",
    summary: "Folio brings every account into one ledger and does the arithmetic you keep postponing.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "One ledger for every account",
            paragraphs: &[
                "Connect brokers, pensions and crypto exchanges, or import statements as CSV. Folio reconciles transfers between accounts so a position moved from one broker to another is never counted twice.",
            ],
        },
        Section {
            heading: "Returns you can explain",
            paragraphs: &[
                "See time-weighted return to judge your picks and money-weighted return to judge your timing, side by side, against the benchmark of your choice.",
                "Every figure links back to the transactions behind it, so you can answer why as well as how much.",
            ],
        },
        Section {
            heading: "Income, planned",
            paragraphs: &[
                "The dividend calendar projects payouts for the next twelve months from declared and historical distributions, in your base currency.",
            ],
        },
        Section {
            heading: "Allocation at a glance",
            paragraphs: &[
                "Break your portfolio down by asset class, region, sector and currency, look through funds to their underlying holdings, and set drift alerts for your targets.",
            ],
        },
    ],
};

pub const COMPARE: Document = Document {
    title: "Folio vs. spreadsheets",
    summary: "Spreadsheets are flexible. They are also where cost basis goes to die.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Corporate actions",
            paragraphs: &[
                "Splits, spin-offs, mergers and ticker changes are applied automatically. In a spreadsheet each one is a manual edit that silently breaks every formula downstream.",
            ],
        },
        Section {
            heading: "Currencies",
            paragraphs: &[
                "Folio stores the exchange rate on the day of every trade and dividend, so currency gains are separated from asset gains without a single lookup formula.",
            ],
        },
        Section {
            heading: "Keeping it",
            paragraphs: &[
                "Your data stays exportable. If you ever want your spreadsheet back, one click produces a clean CSV of every transaction.",
            ],
        },
    ],
};

pub const INTEGRATIONS: Document = Document {
    title: "Integrations",
    summary: "Folio connects to more than 40 brokers and exchanges, with statement import for the rest.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Brokers",
            paragraphs: &[
                "Interactive Brokers, Degiro, Trading 212, Saxo, Scalable Capital, Trade Republic, Fidelity, Schwab and many more sync nightly through read-only connections.",
            ],
        },
        Section {
            heading: "Crypto",
            paragraphs: &[
                "Read-only API keys for the major exchanges, and public-address tracking for on-chain wallets.",
            ],
        },
        Section {
            heading: "Everything else",
            paragraphs: &[
                "Our statement importer recognises dozens of CSV layouts and lets you map columns once for anything it does not know yet.",
            ],
        },
    ],
};

pub const MOBILE_APPS: Document = Document {
    title: "Folio in your pocket",
    summary: "Native apps for iOS and Android, included with every plan.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Glanceable",
            paragraphs: &[
                "A home-screen widget shows today's change and next dividend without opening the app.",
            ],
        },
        Section {
            heading: "Private",
            paragraphs: &[
                "Hide balances with a tap when you are in public, and lock the app behind Face ID or fingerprint.",
            ],
        },
    ],
};

pub const SECURITY: Document = Document {
    title: "Security at Folio",
    summary: "Your portfolio is sensitive. We treat it that way.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Read-only by construction",
            paragraphs: &[
                "Broker connections use read-only tokens. Folio cannot place trades or move money, even if someone compromised our systems.",
            ],
        },
        Section {
            heading: "Encryption",
            paragraphs: &[
                "TLS 1.3 in transit, AES-256 at rest, and per-tenant keys for connection tokens, rotated automatically.",
            ],
        },
        Section {
            heading: "Responsible disclosure",
            paragraphs: &[
                "Found a vulnerability? Email security@folio.app. We acknowledge reports within one business day and credit researchers who want to be credited.",
            ],
        },
    ],
};

pub const CHANGELOG: Document = Document {
    title: "Changelog",
    summary: "What shipped recently.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "September 2026",
            paragraphs: &[
                "New Midnight and Paper colour themes. Look-through allocation for multi-asset ETFs. Faster statement import for large files.",
            ],
        },
        Section {
            heading: "August 2026",
            paragraphs: &[
                "Drift alerts for target allocations. Dividend calendar now includes special dividends and return-of-capital distributions.",
            ],
        },
        Section {
            heading: "July 2026",
            paragraphs: &[
                "Tax reports add-on launched for Ireland, the UK and Germany, with wash-sale and bed-and-breakfast rules applied per jurisdiction.",
            ],
        },
    ],
};

pub const ROADMAP: Document = Document {
    title: "Roadmap",
    summary: "What we are building next, in roughly this order.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Now",
            paragraphs: &[
                "Shared household portfolios with per-member permissions, and options positions with proper multiplier handling.",
            ],
        },
        Section {
            heading: "Next",
            paragraphs: &[
                "Scenario planning for withdrawals in retirement, and tax-lot selection strategies for sells.",
            ],
        },
        Section {
            heading: "Later",
            paragraphs: &[
                "Adviser workspaces with client reporting and white-label PDF exports.",
            ],
        },
    ],
};

pub const ABOUT: Document = Document {
    title: "About Folio",
    summary: "A small, independent team in Dublin building the portfolio tracker we wanted for ourselves.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Why we started",
            paragraphs: &[
                "In 2021 two of us spent a weekend reconciling four brokers in a spreadsheet to answer a simple question: how are we actually doing? Folio is the answer we wished we had that weekend.",
            ],
        },
        Section {
            heading: "How we work",
            paragraphs: &[
                "We are funded by subscriptions, not advertising, so the only people we need to please are the ones who pay us. We publish our roadmap and our changelog and we answer support email ourselves.",
            ],
        },
    ],
};

pub const CAREERS: Document = Document {
    title: "Careers",
    summary: "Join a team of eleven that ships every week.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Open roles",
            paragraphs: &[
                "Senior Rust engineer (market data pipeline), product designer, and customer success lead. All roles are remote within Europe, with optional desks in Dublin.",
            ],
        },
        Section {
            heading: "Benefits",
            paragraphs: &[
                "Salary bands published in every posting, 30 days of annual leave, a learning budget, and a Pro plan for you and your family.",
            ],
        },
    ],
};

pub const PRESS: Document = Document {
    title: "Press",
    summary: "Resources for journalists writing about Folio.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Press kit",
            paragraphs: &[
                "Logos, product screenshots and founder photos are available on request from press@folio.app.",
            ],
        },
        Section {
            heading: "Fast facts",
            paragraphs: &[
                "Founded in 2021 in Dublin. More than 60,000 investors track over four billion euros in assets with Folio.",
            ],
        },
    ],
};

pub const PARTNERS: Document = Document {
    title: "Partners",
    summary: "Work with us to bring better portfolio insight to your customers.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Brokers and platforms",
            paragraphs: &[
                "Offer your customers a direct Folio connection. We handle the analytics; you keep the relationship.",
            ],
        },
        Section {
            heading: "Financial educators",
            paragraphs: &[
                "Course creators and communities get group pricing and a shared sandbox portfolio for teaching.",
            ],
        },
    ],
};

pub const AFFILIATES: Document = Document {
    title: "Affiliate program",
    summary: "Recommend Folio and earn 30% of the first year's subscription.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "How it works",
            paragraphs: &[
                "Share your personal link. When someone subscribes within 60 days of clicking it, you earn 30% of every payment they make in their first year.",
            ],
        },
        Section {
            heading: "Rules",
            paragraphs: &[
                "No paid search on our brand name and no claims about investment returns. Payouts are monthly once your balance exceeds 50 euros.",
            ],
        },
    ],
};

pub const TESTIMONIALS: Document = Document {
    title: "Customer stories",
    summary: "How investors use Folio.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Aoife, Cork",
            paragraphs: &[
                "\"I had accounts in three countries and no idea what my real return was. Folio told me in an afternoon, and it was not the number I expected.\"",
            ],
        },
        Section {
            heading: "Markus, Munich",
            paragraphs: &[
                "\"The dividend calendar is the first thing I open every month. It turned my income portfolio into something I can plan around.\"",
            ],
        },
        Section {
            heading: "Priya, London",
            paragraphs: &[
                "\"Tax season used to be a week of spreadsheets. With the tax reports add-on it is an export and a coffee.\"",
            ],
        },
    ],
};

pub const BLOG: Document = Document {
    title: "Blog",
    summary: "Notes on investing arithmetic and on building Folio.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Time-weighted vs money-weighted returns",
            paragraphs: &[
                "Two numbers, two questions. We walk through a worked example showing why your broker's return figure might disagree with ours, and why both can be right.",
            ],
        },
        Section {
            heading: "What a look-through allocation reveals",
            paragraphs: &[
                "Holding five global ETFs can mean holding the same ten companies five times. We show how to spot concentration hiding inside funds.",
            ],
        },
    ],
};

pub const HELP_CENTER: Document = Document {
    title: "Help center",
    summary: "Guides for getting the most out of Folio.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Getting started",
            paragraphs: &[
                "Create a portfolio, connect your first broker or import a statement, and set your base currency. Most people are up and running in ten minutes.",
            ],
        },
        Section {
            heading: "Fixing a wrong number",
            paragraphs: &[
                "Open the holding, check the transaction list for missing corporate actions or duplicates, and use the reconcile tool to compare with your broker's statement.",
            ],
        },
        Section {
            heading: "Contacting support",
            paragraphs: &[
                "Still stuck? Email support@folio.app. Pro customers with the priority support add-on get a reply within four business hours.",
            ],
        },
    ],
};

pub const DEVELOPERS: Document = Document {
    title: "Developers",
    summary: "A REST API for your own portfolio data.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Authentication",
            paragraphs: &[
                "Create a personal access token in settings and send it as a bearer token. Tokens are read-only unless you explicitly grant write scope.",
            ],
        },
        Section {
            heading: "Rate limits",
            paragraphs: &[
                "600 requests per minute per token. Responses include remaining-quota headers so clients can back off before hitting the limit.",
            ],
        },
    ],
};

pub const STATUS: Document = Document {
    title: "System status",
    summary: "Current availability of Folio services.",
    updated: EVERGREEN,
    sections: &[
        Section {
            heading: "Web application",
            paragraphs: &[
                "Operational. 99.98% uptime over the last 90 days.",
            ],
        },
        Section {
            heading: "Broker sync",
            paragraphs: &[
                "Operational. Individual institutions occasionally delay their data; affected connections show a notice in the app.",
            ],
        },
        Section {
            heading: "Market data",
            paragraphs: &[
                "Operational. End-of-day prices are published by 02:00 UTC for all supported exchanges.",
            ],
        },
    ],
};
