//! Coordinator-facing reporting: the bulk CSV export and the dashboard
//! aggregates, computed over plain record slices.

use crate::domain::model::{ProblemSet, ScoreRecord, SelectionRecord, TeamRecord};
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

const CSV_HEADER: [&str; 10] = [
    "Team ID",
    "Team Name",
    "Contact Email",
    "Members",
    "Problem Title",
    "Theme",
    "Novelty Score",
    "Feasibility Score",
    "Impact Score",
    "Submission Date",
];

/// One CSV row per selection; teams that never selected a problem still get
/// a placeholder row so the coordinator sees every registration.
pub fn teams_csv(
    teams: &[TeamRecord],
    selections: &[SelectionRecord],
    scores: &[ScoreRecord],
    problems: &ProblemSet,
) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for team in teams {
        let team_selections: Vec<&SelectionRecord> = selections
            .iter()
            .filter(|s| s.team_id == team.team_id)
            .collect();

        let members = team.members.join("; ");

        if team_selections.is_empty() {
            writer.write_record([
                team.team_id.as_str(),
                team.team_name.as_str(),
                team.contact_email.as_str(),
                members.as_str(),
                "No Selection",
                "N/A",
                "",
                "",
                "",
                "",
            ])?;
            continue;
        }

        for selection in team_selections {
            let problem = problems.find(&selection.ps_id);
            let score = scores
                .iter()
                .find(|r| r.ps_id == selection.ps_id && r.team_id == selection.team_id);

            let title = problem
                .map(|p| p.title.clone())
                .unwrap_or_else(|| selection.ps_id.clone());
            let theme = problem
                .map(|p| p.theme.clone())
                .unwrap_or_else(|| "Unknown".to_string());
            let (novelty, feasibility, impact) = match score {
                Some(r) => (
                    r.novelty_score.to_string(),
                    r.feasibility_score.to_string(),
                    r.impact_score.to_string(),
                ),
                None => (String::new(), String::new(), String::new()),
            };
            let submitted = selection
                .created_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default();

            writer.write_record([
                team.team_id.as_str(),
                team.team_name.as_str(),
                team.contact_email.as_str(),
                members.as_str(),
                title.as_str(),
                theme.as_str(),
                novelty.as_str(),
                feasibility.as_str(),
                impact.as_str(),
                submitted.as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::utils::error::PitchError::processing(e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| crate::utils::error::PitchError::processing(e.to_string()))
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AverageScores {
    pub novelty: f64,
    pub feasibility: f64,
    pub impact: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_teams: usize,
    pub total_submissions: usize,
    pub avg_scores: AverageScores,
    pub theme_distribution: BTreeMap<String, usize>,
}

/// Aggregate view over all selections. Averages cover only fully scored
/// submissions and are zero when there are none.
pub fn dashboard_stats(
    selections: &[SelectionRecord],
    scores: &[ScoreRecord],
    problems: &ProblemSet,
) -> DashboardStats {
    let unique_teams: HashSet<&str> = selections.iter().map(|s| s.team_id.as_str()).collect();

    let mut theme_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for selection in selections {
        let theme = problems
            .find(&selection.ps_id)
            .map(|p| p.theme.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        *theme_distribution.entry(theme).or_default() += 1;
    }

    let scored: Vec<&ScoreRecord> = selections
        .iter()
        .filter_map(|s| {
            scores
                .iter()
                .find(|r| r.ps_id == s.ps_id && r.team_id == s.team_id)
        })
        .collect();

    let avg_scores = if scored.is_empty() {
        AverageScores::default()
    } else {
        let n = scored.len() as f64;
        AverageScores {
            novelty: scored.iter().map(|r| r.novelty_score as f64).sum::<f64>() / n,
            feasibility: scored.iter().map(|r| r.feasibility_score as f64).sum::<f64>() / n,
            impact: scored.iter().map(|r| r.impact_score as f64).sum::<f64>() / n,
        }
    };

    DashboardStats {
        total_teams: unique_teams.len(),
        total_submissions: selections.len(),
        avg_scores,
        theme_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Problem;
    use chrono::TimeZone;

    fn fixture_problems() -> ProblemSet {
        ProblemSet::new(vec![
            Problem {
                ps_id: "SIH-1".into(),
                title: "Crop Advisory".into(),
                theme: "Agriculture".into(),
                category: "Software".into(),
                description: String::new(),
            },
            Problem {
                ps_id: "SIH-2".into(),
                title: "Telemedicine Mesh".into(),
                theme: "MedTech".into(),
                category: "Software".into(),
                description: String::new(),
            },
        ])
    }

    fn fixture_teams() -> Vec<TeamRecord> {
        vec![
            TeamRecord {
                team_id: "T1".into(),
                team_name: "Binary Bandits".into(),
                contact_email: "t1@example.com".into(),
                members: vec!["Asha".into(), "Ravi".into()],
            },
            TeamRecord {
                team_id: "T2".into(),
                team_name: "Null Pointers".into(),
                contact_email: "t2@example.com".into(),
                members: vec!["Meera".into()],
            },
        ]
    }

    #[test]
    fn export_emits_header_and_selection_rows() {
        let selections = vec![SelectionRecord {
            team_id: "T1".into(),
            ps_id: "SIH-1".into(),
            created_at: Some(chrono::Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()),
        }];
        let scores = vec![ScoreRecord {
            team_id: "T1".into(),
            ps_id: "SIH-1".into(),
            novelty_score: 10,
            feasibility_score: 9,
            impact_score: 9,
        }];

        let csv = teams_csv(&fixture_teams(), &selections, &scores, &fixture_problems()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Team ID,Team Name,Contact Email,Members,Problem Title,Theme,\
             Novelty Score,Feasibility Score,Impact Score,Submission Date"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("Binary Bandits"));
        assert!(row.contains("Asha; Ravi"));
        assert!(row.contains("Crop Advisory"));
        assert!(row.contains("Agriculture"));
        assert!(row.contains("10"));
    }

    #[test]
    fn team_without_selection_gets_placeholder_row() {
        let csv = teams_csv(&fixture_teams(), &[], &[], &fixture_problems()).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 3); // header + 2 teams
        assert!(rows[1].contains("No Selection"));
        assert!(rows[1].contains("N/A"));
        assert!(rows[2].contains("No Selection"));
    }

    #[test]
    fn unknown_problem_falls_back_to_ps_id_and_unknown_theme() {
        let selections = vec![SelectionRecord {
            team_id: "T2".into(),
            ps_id: "SIH-404".into(),
            created_at: None,
        }];
        let csv = teams_csv(&fixture_teams(), &selections, &[], &fixture_problems()).unwrap();
        let row: &str = csv.lines().nth(2).unwrap();
        assert!(row.contains("SIH-404"));
        assert!(row.contains("Unknown"));
    }

    #[test]
    fn stats_count_distinct_teams_and_theme_distribution() {
        let selections = vec![
            SelectionRecord {
                team_id: "T1".into(),
                ps_id: "SIH-1".into(),
                created_at: None,
            },
            SelectionRecord {
                team_id: "T1".into(),
                ps_id: "SIH-2".into(),
                created_at: None,
            },
            SelectionRecord {
                team_id: "T2".into(),
                ps_id: "SIH-1".into(),
                created_at: None,
            },
        ];
        let stats = dashboard_stats(&selections, &[], &fixture_problems());
        assert_eq!(stats.total_teams, 2);
        assert_eq!(stats.total_submissions, 3);
        assert_eq!(stats.theme_distribution["Agriculture"], 2);
        assert_eq!(stats.theme_distribution["MedTech"], 1);
        assert_eq!(stats.avg_scores, AverageScores::default());
    }

    #[test]
    fn stats_average_only_scored_submissions() {
        let selections = vec![
            SelectionRecord {
                team_id: "T1".into(),
                ps_id: "SIH-1".into(),
                created_at: None,
            },
            SelectionRecord {
                team_id: "T2".into(),
                ps_id: "SIH-2".into(),
                created_at: None,
            },
        ];
        let scores = vec![ScoreRecord {
            team_id: "T1".into(),
            ps_id: "SIH-1".into(),
            novelty_score: 10,
            feasibility_score: 10,
            impact_score: 9,
        }];
        let stats = dashboard_stats(&selections, &scores, &fixture_problems());
        assert_eq!(stats.avg_scores.novelty, 10.0);
        assert_eq!(stats.avg_scores.feasibility, 10.0);
        assert_eq!(stats.avg_scores.impact, 9.0);
    }
}
