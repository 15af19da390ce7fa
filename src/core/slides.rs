//! Per-slide bullet planning. Deck layout is fixed: six content sections
//! with per-section caps, fed by the bundle's bullet lines.

use crate::domain::model::ContentBundle;
use serde::{Deserialize, Serialize};

const MAX_KEY_FEATURES: usize = 6;
const MAX_TECHNOLOGIES: usize = 7;
const MAX_RISK_MITIGATION: usize = 6;
const MAX_OUTCOMES: usize = 6;
const MAX_CITATIONS: usize = 5;

/// Bullet lists for the deck sections, already trimmed and capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePlan {
    pub key_features: Vec<String>,
    pub technologies: Vec<String>,
    pub risk_mitigation: Vec<String>,
    pub outcomes: Vec<String>,
    pub citations: Vec<String>,
}

/// Split a prose block into its bullet lines: newline-delimited, trimmed,
/// keeping only lines that start with the marker.
pub fn bullet_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('•'))
        .map(str::to_string)
        .collect()
}

pub fn plan_slides(bundle: &ContentBundle) -> SlidePlan {
    SlidePlan {
        key_features: capped(bullet_lines(&bundle.summary), MAX_KEY_FEATURES),
        technologies: capped(bullet_lines(&bundle.technical_approach), MAX_TECHNOLOGIES),
        risk_mitigation: capped(bullet_lines(&bundle.feasibility), MAX_RISK_MITIGATION),
        outcomes: capped(bullet_lines(&bundle.impact), MAX_OUTCOMES),
        citations: bundle.references.iter().take(MAX_CITATIONS).cloned().collect(),
    }
}

fn capped(mut lines: Vec<String>, cap: usize) -> Vec<String> {
    lines.truncate(cap);
    lines
}
