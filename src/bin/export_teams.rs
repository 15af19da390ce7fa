use anyhow::Context;
use clap::Parser;
use pitch_forge::adapters::dataset;
use pitch_forge::core::export;
use pitch_forge::domain::model::{ScoreRecord, SelectionRecord, TeamRecord};
use pitch_forge::utils::logger;

#[derive(Parser)]
#[command(name = "export-teams")]
#[command(about = "Export team selections and scores as CSV for the coordinator")]
struct Args {
    /// Teams file (JSON array of team records)
    #[arg(long, default_value = "./data/teams.json")]
    teams: String,

    /// Selections file (JSON array of selection records)
    #[arg(long, default_value = "./data/selections.json")]
    selections: String,

    /// Scores file (JSON array of score records)
    #[arg(long, default_value = "./data/scores.json")]
    scores: String,

    /// Problems dataset (JSON array)
    #[arg(long, default_value = "./data/problems.json")]
    problems: String,

    /// Where to write the CSV; stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_json<T: serde::de::DeserializeOwned>(path: &str, what: &str) -> anyhow::Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {} from '{}'", what, path))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {} from '{}'", what, path))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let teams: Vec<TeamRecord> = load_json(&args.teams, "teams")?;
    let selections: Vec<SelectionRecord> = load_json(&args.selections, "selections")?;
    let scores: Vec<ScoreRecord> = load_json(&args.scores, "scores")?;
    let problems =
        dataset::load_problems(&args.problems).context("loading the problems dataset")?;

    tracing::info!(
        "📚 Loaded {} teams, {} selections, {} score records",
        teams.len(),
        selections.len(),
        scores.len()
    );

    let csv = export::teams_csv(&teams, &selections, &scores, &problems)
        .context("building the CSV export")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &csv).with_context(|| format!("writing CSV to '{}'", path))?;
            println!("✅ Export written to: {}", path);
        }
        None => print!("{}", csv),
    }

    let stats = export::dashboard_stats(&selections, &scores, &problems);
    eprintln!(
        "📊 {} teams, {} submissions | avg scores: novelty {:.1}, feasibility {:.1}, impact {:.1}",
        stats.total_teams,
        stats.total_submissions,
        stats.avg_scores.novelty,
        stats.avg_scores.feasibility,
        stats.avg_scores.impact
    );
    for (theme, count) in &stats.theme_distribution {
        eprintln!("   {}: {}", theme, count);
    }

    Ok(())
}
