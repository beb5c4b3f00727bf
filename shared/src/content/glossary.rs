#[derive(Debug, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

const fn entry(term: &'static str, definition: &'static str) -> GlossaryEntry {
    GlossaryEntry { term, definition }
}

// Kept alphabetical.
pub const GLOSSARY: &[GlossaryEntry] = &[
    entry("Asset allocation", "How a portfolio is divided between asset classes such as equities, bonds and cash."),
    entry("Benchmark", "An index or portfolio used as a yardstick for performance, for example a global equity index."),
    entry("Cost basis", "The original value of an asset for tax purposes, usually the purchase price plus fees, adjusted for corporate actions."),
    entry("Currency gain", "The part of a return caused by exchange-rate movements rather than by the asset's price in its own currency."),
    entry("Dividend yield", "Annual dividends per share divided by the current share price."),
    entry("Drawdown", "The decline from a portfolio's peak value to its subsequent low, usually expressed as a percentage."),
    entry("Drift", "How far current weights have moved away from target allocation since the last rebalance."),
    entry("ETF", "Exchange-traded fund: a pooled investment that trades on an exchange like a share."),
    entry("Look-through", "Analysing a fund by the securities it holds rather than as a single position."),
    entry("Money-weighted return", "A return measure that accounts for the timing and size of your deposits and withdrawals; also called internal rate of return."),
    entry("Realised gain", "Profit locked in by selling an asset for more than its cost basis."),
    entry("Rebalancing", "Buying and selling to bring a portfolio back to its target allocation."),
    entry("Spin-off", "A corporate action in which a company distributes shares of a new, separate company to its shareholders."),
    entry("Time-weighted return", "A return measure that removes the effect of cash flows, isolating the performance of the investments themselves."),
    entry("Unrealised gain", "The paper profit on an asset you still hold."),
    entry("Yield on cost", "Annual dividends divided by your original purchase price rather than the current price."),
];

/// Case-insensitive match on term or definition; results sorted by term.
pub fn search_glossary(query: &str) -> Vec<&'static GlossaryEntry> {
    let needle = query.trim().to_lowercase();
    let mut hits: Vec<&'static GlossaryEntry> = GLOSSARY
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.term.to_lowercase().contains(&needle)
                || entry.definition.to_lowercase().contains(&needle)
        })
        .collect();
    hits.sort_by_key(|entry| entry.term.to_lowercase());
    hits
}

/// Distinct first letters of the terms, for the A-Z jump bar.
pub fn glossary_letters() -> Vec<char> {
    let mut letters: Vec<char> = GLOSSARY
        .iter()
        .filter_map(|entry| entry.term.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    letters.sort_unstable();
    letters.dedup();
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glossary_is_alphabetical() {
        let terms: Vec<String> = GLOSSARY.iter().map(|e| e.term.to_lowercase()).collect();
        let mut sorted = terms.clone();
        sorted.sort();
        assert_eq!(terms, sorted);
    }

    #[test]
    fn test_search_matches_term_and_definition() {
        let hits: Vec<&str> = search_glossary("RETURN").iter().map(|e| e.term).collect();
        assert!(hits.contains(&"Money-weighted return"));
        assert!(hits.contains(&"Time-weighted return"));
        assert!(hits.contains(&"Currency gain"));

        assert_eq!(search_glossary("").len(), GLOSSARY.len());
        assert!(search_glossary("zzz").is_empty());
    }

    #[test]
    fn test_letters() {
        let letters = glossary_letters();
        assert_eq!(letters.first(), Some(&'A'));
        assert!(letters.windows(2).all(|w| w[0] < w[1]));
    }
}
