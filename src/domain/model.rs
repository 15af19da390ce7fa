use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sector classification assigned to a problem statement for template
/// selection. `General` is the fallback and triggers dynamic synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Healthcare,
    Agriculture,
    Transportation,
    Education,
    Environment,
    Fintech,
    Smartcity,
    Tourism,
    General,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthcare => "healthcare",
            Self::Agriculture => "agriculture",
            Self::Transportation => "transportation",
            Self::Education => "education",
            Self::Environment => "environment",
            Self::Fintech => "fintech",
            Self::Smartcity => "smartcity",
            Self::Tourism => "tourism",
            Self::General => "general",
        }
    }
}

/// Immutable input to one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemContext {
    pub ps_id: String,
    pub title: String,
    pub description: String,
    pub idea: String,
    pub enrichment_text: Option<String>,
}

/// Features scanned out of a problem description. Derived per call and
/// discarded once the content bundle is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFeatures {
    /// Bullet-prefixed requirement sentences, at most 6.
    pub requirements: Vec<String>,
    /// Stakeholder keywords in scan order, at most 5.
    pub stakeholders: Vec<String>,
    /// Bullet-prefixed challenge sentences, at most 4.
    pub challenges: Vec<String>,
    /// Text of the "Expected Solution" section, empty when absent.
    pub expected_solution: String,
}

/// The five prose blocks standing in for slide content. Each text field is a
/// newline-joined sequence of `• `-prefixed lines; downstream consumers split
/// on newline and filter on the marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    pub summary: String,
    pub technical_approach: String,
    pub feasibility: String,
    pub impact: String,
    pub references: Vec<String>,
}

/// Heuristic 1-10 scores. The rule set deliberately biases high: every field
/// lands in [9, 10] for any input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTriple {
    pub novelty: u8,
    pub feasibility: u8,
    pub impact: u8,
}

/// What a caller asks the pipeline to do: which problem, and the team's idea.
#[derive(Debug, Clone)]
pub struct PitchRequest {
    /// Problem statement id or title, resolved against the dataset.
    pub problem: String,
    pub idea: String,
}

/// Caller-visible result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchPack {
    pub ps_id: String,
    pub title: String,
    pub domain: Domain,
    #[serde(flatten)]
    pub bundle: ContentBundle,
    pub scores: ScoreTriple,
    pub ai_generated: bool,
}

/// One problem statement from the reference dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    #[serde(alias = "problem_statement_id")]
    pub ps_id: String,
    #[serde(alias = "problem_statement_title")]
    pub title: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// Read-only problem dataset handed to the pipeline. Replaces the original
/// system's process-global list.
#[derive(Debug, Clone, Default)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Look a problem up by statement id or title, whichever matches first.
    pub fn find(&self, key: &str) -> Option<&Problem> {
        self.problems
            .iter()
            .find(|p| p.ps_id == key || p.title == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }
}

/// A registered team, as exported for the coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: String,
    pub team_name: String,
    pub contact_email: String,
    #[serde(default)]
    pub members: Vec<String>,
}

/// A team's problem selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub team_id: String,
    pub ps_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Scores recorded for one team/problem pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub team_id: String,
    pub ps_id: String,
    pub novelty_score: u8,
    pub feasibility_score: u8,
    pub impact_score: u8,
}
