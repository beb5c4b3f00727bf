#[derive(Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

const fn entry(category: &'static str, question: &'static str, answer: &'static str) -> FaqEntry {
    FaqEntry { category, question, answer }
}

pub const FAQ: &[FaqEntry] = &[
    entry(
        "Getting started",
        "Is there a free plan?",
        "Yes. Starter is free forever for one portfolio with up to 25 holdings. No card required.",
    ),
    entry(
        "Getting started",
        "Which brokers can I connect?",
        "More than 40 brokers and exchanges sync automatically, and any other institution can be imported from a CSV statement.",
    ),
    entry(
        "Getting started",
        "Can I try the dashboard without an account?",
        "Yes. Use demo sign-in with any email address to explore a fully unlocked Pro dashboard. Nothing is sent to our servers in demo mode.",
    ),
    entry(
        "Billing",
        "Can I switch plans later?",
        "Upgrades apply immediately and are prorated. Downgrades take effect at the end of your billing period.",
    ),
    entry(
        "Billing",
        "Do you offer refunds?",
        "Every first payment is covered by a 14-day money-back guarantee. See the Refund Policy for renewals.",
    ),
    entry(
        "Billing",
        "What are add-ons?",
        "Optional modules such as tax reports or advanced analytics that you can attach to a Standard or Pro plan.",
    ),
    entry(
        "Data & security",
        "Can Folio trade on my behalf?",
        "No. All broker connections are read-only. Folio cannot place orders or move money.",
    ),
    entry(
        "Data & security",
        "Where is my data stored?",
        "In data centres inside the European Union, encrypted at rest and in transit.",
    ),
    entry(
        "Data & security",
        "How do I delete my account?",
        "From settings, choose Delete account. Your data is removed within 30 days; you can export it first.",
    ),
    entry(
        "Features",
        "Does Folio handle multiple currencies?",
        "Yes. Every transaction keeps its original currency and the exchange rate of the day, and reports convert to your base currency.",
    ),
    entry(
        "Features",
        "Are dividends reinvested automatically?",
        "If your broker reports a reinvestment, Folio records both the dividend and the purchase so your income and cost basis stay correct.",
    ),
];

/// Categories in first-appearance order.
pub fn faq_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for entry in FAQ {
        if !categories.contains(&entry.category) {
            categories.push(entry.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_keep_first_appearance_order() {
        assert_eq!(
            faq_categories(),
            vec!["Getting started", "Billing", "Data & security", "Features"]
        );
    }

    #[test]
    fn test_questions_are_unique() {
        for (i, a) in FAQ.iter().enumerate() {
            assert!(a.question.ends_with('?'));
            assert!(FAQ[i + 1..].iter().all(|b| b.question != a.question));
        }
    }
}
