//! Problems dataset loading. The dataset is read once and handed to the
//! pipeline as an explicit read-only value.

use crate::domain::model::{Problem, ProblemSet};
use crate::utils::error::Result;
use std::path::Path;

pub fn load_problems<P: AsRef<Path>>(path: P) -> Result<ProblemSet> {
    let content = std::fs::read_to_string(path)?;
    parse_problems(&content)
}

pub fn parse_problems(content: &str) -> Result<ProblemSet> {
    let problems: Vec<Problem> = serde_json::from_str(content)?;
    tracing::debug!("Loaded {} problem statements", problems.len());
    Ok(ProblemSet::new(problems))
}
