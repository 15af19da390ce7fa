use crate::domain::model::Domain;

/// Ordered domain keyword table; the first domain with a keyword present in
/// title or description wins.
const DOMAIN_KEYWORDS: [(Domain, [&str; 2]); 8] = [
    (Domain::Healthcare, ["health", "medical"]),
    (Domain::Agriculture, ["agri", "farm"]),
    (Domain::Transportation, ["transport", "traffic"]),
    (Domain::Education, ["education", "learning"]),
    (Domain::Environment, ["environment", "pollution"]),
    (Domain::Fintech, ["finance", "banking"]),
    (Domain::Smartcity, ["smart city", "urban"]),
    (Domain::Tourism, ["tourist", "travel"]),
];

/// Map a problem statement to its sector. Total: unmatched input resolves to
/// `Domain::General`.
pub fn classify(title: &str, description: &str) -> Domain {
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    DOMAIN_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| title.contains(keyword) || description.contains(keyword))
        })
        .map(|(domain, _)| *domain)
        .unwrap_or(Domain::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_from_title() {
        assert_eq!(
            classify("Smart Traffic Management System", ""),
            Domain::Transportation
        );
        assert_eq!(
            classify("Digital Health Monitoring Platform", ""),
            Domain::Healthcare
        );
    }

    #[test]
    fn classifies_from_description() {
        assert_eq!(
            classify("Yield Booster", "Help every farm plan irrigation."),
            Domain::Agriculture
        );
        assert_eq!(
            classify("Open Ledger", "Rural banking access for all."),
            Domain::Fintech
        );
    }

    #[test]
    fn first_match_wins_over_later_domains() {
        // "traffic" (transportation) outranks "urban" (smartcity).
        assert_eq!(
            classify("Urban Traffic Planner", "urban congestion"),
            Domain::Transportation
        );
    }

    #[test]
    fn unmatched_input_falls_back_to_general() {
        assert_eq!(classify("Library Catalogue", "Sort books faster."), Domain::General);
        assert_eq!(classify("", ""), Domain::General);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("POLLUTION WATCH", ""), Domain::Environment);
        assert_eq!(classify("", "A TOURIST safety app"), Domain::Tourism);
    }

    #[test]
    fn every_input_maps_to_some_domain() {
        for text in ["", "x", "健康", "completely unrelated words"] {
            let _ = classify(text, text);
        }
    }
}
