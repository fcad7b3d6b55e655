//! Claim classifier: keyword matching against fixed per-category sets.
//!
//! Pure and total; the first matching category in priority order wins,
//! with general misinformation as the fallback.

use super::models::Category;

const VACCINE_KEYWORDS: &[&str] = &["vaccine", "vaccination", "microchip", "tracking"];
const ELECTION_KEYWORDS: &[&str] = &["election", "vote", "fraud", "rigged"];
const HEALTH_KEYWORDS: &[&str] = &["covid", "coronavirus", "pandemic", "lockdown"];
const CLIMATE_KEYWORDS: &[&str] = &["climate", "global warming", "carbon"];
const FINANCIAL_KEYWORDS: &[&str] = &["economy", "stock", "financial", "crash"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Classify a claim into a misinformation category.
pub fn classify(text: &str) -> Category {
    let text = text.to_lowercase();

    if contains_any(&text, VACCINE_KEYWORDS) {
        Category::VaccineConspiracy
    } else if contains_any(&text, ELECTION_KEYWORDS) {
        Category::ElectionMisinformation
    } else if contains_any(&text, HEALTH_KEYWORDS) {
        Category::HealthMisinformation
    } else if contains_any(&text, CLIMATE_KEYWORDS) {
        Category::ClimateMisinformation
    } else if contains_any(&text, FINANCIAL_KEYWORDS) {
        Category::FinancialMisinformation
    } else {
        Category::GeneralMisinformation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vaccine_claims_match_first() {
        assert_eq!(
            classify("COVID vaccines contain microchips for tracking"),
            Category::VaccineConspiracy
        );
    }

    #[test]
    fn vaccine_outranks_election() {
        // "vaccine" and "election" both present; vaccine has priority
        assert_eq!(
            classify("the election was rigged by vaccine makers"),
            Category::VaccineConspiracy
        );
    }

    #[test]
    fn election_outranks_health() {
        assert_eq!(
            classify("covid lockdowns rigged the vote"),
            Category::ElectionMisinformation
        );
    }

    #[test]
    fn climate_and_financial_categories() {
        assert_eq!(
            classify("global warming is a hoax"),
            Category::ClimateMisinformation
        );
        assert_eq!(
            classify("the stock market will crash tomorrow"),
            Category::FinancialMisinformation
        );
    }

    #[test]
    fn falls_back_to_general() {
        assert_eq!(
            classify("the moon is made of cheese"),
            Category::GeneralMisinformation
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("VACCINE NEWS"), Category::VaccineConspiracy);
    }

    #[test]
    fn classification_is_idempotent() {
        let text = "unverified claim about pandemic response";
        assert_eq!(classify(text), classify(text));
    }
}
