use crate::domain::model::ExtractedFeatures;
use regex::Regex;

const REQUIREMENT_KEYWORDS: [&str; 6] = ["should", "must", "require", "need", "expected", "solution"];

const STAKEHOLDER_KEYWORDS: [&str; 11] = [
    "farmer",
    "student",
    "patient",
    "citizen",
    "user",
    "government",
    "ministry",
    "department",
    "hospital",
    "school",
    "college",
];

const CHALLENGE_KEYWORDS: [&str; 9] = [
    "challenge",
    "problem",
    "issue",
    "difficulty",
    "lack",
    "limited",
    "poor",
    "inadequate",
    "insufficient",
];

const MAX_REQUIREMENTS: usize = 6;
const MAX_STAKEHOLDERS: usize = 5;
const MAX_CHALLENGES: usize = 4;

/// Scan a problem description for requirement sentences, stakeholder
/// keywords, challenge sentences and the "Expected Solution" section.
/// Total over any input: no matches means empty sequences, never an error.
pub fn extract(description: &str) -> ExtractedFeatures {
    ExtractedFeatures {
        requirements: matching_sentences(description, &REQUIREMENT_KEYWORDS, MAX_REQUIREMENTS),
        stakeholders: extract_stakeholders(description),
        challenges: matching_sentences(description, &CHALLENGE_KEYWORDS, MAX_CHALLENGES),
        expected_solution: extract_expected_solution(description),
    }
}

/// Sentences (split on `.`, `!`, `?`) that contain any keyword, kept in
/// original order, rendered as bullet lines.
fn matching_sentences(description: &str, keywords: &[&str], cap: usize) -> Vec<String> {
    description
        .split(['.', '!', '?'])
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            keywords.iter().any(|keyword| lower.contains(keyword))
        })
        .take(cap)
        .map(|sentence| format!("• {}", sentence.trim()))
        .collect()
}

fn extract_stakeholders(description: &str) -> Vec<String> {
    let lower = description.to_lowercase();
    STAKEHOLDER_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .take(MAX_STAKEHOLDERS)
        .map(|keyword| keyword.to_string())
        .collect()
}

/// Text of a literal "Expected Solution" section up to the next blank line,
/// with the heading stripped. Empty when the heading is absent.
fn extract_expected_solution(description: &str) -> String {
    let section = Regex::new(r"(?is)expected solution:?(.*?)(?:\n\n|\z)").unwrap();
    section
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_keep_order_and_cap_at_six() {
        let description = "The system must track crops. It should alert farmers. \
            Data is required daily. Users need dashboards. Reports are expected weekly. \
            A solution must scale. The platform must be offline-capable. Nothing here.";
        let features = extract(description);
        assert_eq!(features.requirements.len(), 6);
        assert!(features.requirements[0].starts_with("• "));
        assert!(features.requirements[0].contains("must track crops"));
    }

    #[test]
    fn stakeholders_follow_scan_order() {
        let description =
            "Students and farmers interact with the government portal run by the ministry.";
        let features = extract(description);
        assert_eq!(
            features.stakeholders,
            vec!["farmer", "student", "government", "ministry"]
        );
    }

    #[test]
    fn stakeholders_cap_at_five() {
        let description =
            "farmer student patient citizen user government ministry department hospital";
        let features = extract(description);
        assert_eq!(features.stakeholders.len(), 5);
        assert_eq!(
            features.stakeholders,
            vec!["farmer", "student", "patient", "citizen", "user"]
        );
    }

    #[test]
    fn challenges_cap_at_four() {
        let description = "A major challenge exists. There is a problem. One issue remains. \
            Poor connectivity persists. Limited bandwidth hurts. Lack of data hurts.";
        let features = extract(description);
        assert_eq!(features.challenges.len(), 4);
    }

    #[test]
    fn expected_solution_section_is_captured() {
        let description = "Rural clinics lack staff.\n\nExpected Solution: A telemedicine \
            kiosk network with remote triage.\n\nBudget: unlimited.";
        let features = extract(description);
        assert_eq!(
            features.expected_solution,
            "A telemedicine kiosk network with remote triage."
        );
    }

    #[test]
    fn expected_solution_runs_to_end_without_blank_line() {
        let description = "Intro text.\n\nExpected Solution\nAn offline-first mobile app.";
        let features = extract(description);
        assert_eq!(features.expected_solution, "An offline-first mobile app.");
    }

    #[test]
    fn empty_description_yields_empty_features() {
        let features = extract("");
        assert!(features.requirements.is_empty());
        assert!(features.stakeholders.is_empty());
        assert!(features.challenges.is_empty());
        assert!(features.expected_solution.is_empty());
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let features = extract("The portal MUST serve every Citizen");
        assert_eq!(features.requirements.len(), 1);
        assert_eq!(features.stakeholders, vec!["citizen"]);
    }
}
