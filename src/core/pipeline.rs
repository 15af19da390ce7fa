use crate::core::{classifier, content, extractor, scoring, slides};
use crate::domain::model::{PitchPack, PitchRequest, ProblemContext, ProblemSet};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TextGenerator};
use crate::utils::error::{PitchError, Result};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

const PACK_FILENAME: &str = "pitch_pack.zip";

pub struct ContentPipeline<G: TextGenerator, S: Storage, C: ConfigProvider> {
    problems: ProblemSet,
    generator: G,
    storage: S,
    config: C,
}

impl<G: TextGenerator, S: Storage, C: ConfigProvider> ContentPipeline<G, S, C> {
    pub fn new(problems: ProblemSet, generator: G, storage: S, config: C) -> Self {
        Self {
            problems,
            generator,
            storage,
            config,
        }
    }

    fn enrichment_prompt(title: &str, description: &str, idea: &str) -> String {
        format!(
            "Problem: {}\n\nContext: {}\n\nSolution Approach: {}\n\n\
             Generate specific technical solution with implementation details, \
             feasibility analysis, and measurable impact metrics for this exact \
             problem statement.",
            title, description, idea
        )
    }
}

#[async_trait::async_trait]
impl<G: TextGenerator, S: Storage, C: ConfigProvider> Pipeline for ContentPipeline<G, S, C> {
    async fn gather(&self, request: &PitchRequest) -> Result<ProblemContext> {
        let problem = self.problems.find(&request.problem).ok_or_else(|| {
            PitchError::processing(format!(
                "problem '{}' not found in dataset ({} entries)",
                request.problem,
                self.problems.len()
            ))
        })?;

        tracing::debug!("Resolved '{}' to {}", request.problem, problem.ps_id);

        let prompt = Self::enrichment_prompt(&problem.title, &problem.description, &request.idea);
        let enrichment_text = self.generator.generate(&prompt).await;
        if enrichment_text.is_some() {
            tracing::info!("🤖 Enrichment text obtained");
        } else {
            tracing::debug!("No enrichment available, continuing with templates only");
        }

        Ok(ProblemContext {
            ps_id: problem.ps_id.clone(),
            title: problem.title.clone(),
            description: problem.description.clone(),
            idea: request.idea.clone(),
            enrichment_text,
        })
    }

    async fn compose(&self, context: ProblemContext) -> Result<PitchPack> {
        let domain = classifier::classify(&context.title, &context.description);
        let features = extractor::extract(&context.description);
        let bundle = content::build_content(
            domain,
            &features,
            &context.title,
            &context.description,
            context.enrichment_text.as_deref(),
        );
        let scores = scoring::score(&context.idea, &context.title);

        tracing::debug!(
            "Composed {} bundle: {} summary bullets",
            domain.as_str(),
            bundle.summary.lines().count()
        );

        Ok(PitchPack {
            ps_id: context.ps_id,
            title: context.title,
            domain,
            bundle,
            scores,
            ai_generated: context.enrichment_text.is_some(),
        })
    }

    async fn package(&self, pack: &PitchPack) -> Result<String> {
        let plan = slides::plan_slides(&pack.bundle);

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            zip.start_file::<_, ()>("summary.txt", FileOptions::default())?;
            zip.write_all(pack.bundle.summary.as_bytes())?;

            zip.start_file::<_, ()>("technical_approach.txt", FileOptions::default())?;
            zip.write_all(pack.bundle.technical_approach.as_bytes())?;

            zip.start_file::<_, ()>("feasibility.txt", FileOptions::default())?;
            zip.write_all(pack.bundle.feasibility.as_bytes())?;

            zip.start_file::<_, ()>("impact.txt", FileOptions::default())?;
            zip.write_all(pack.bundle.impact.as_bytes())?;

            zip.start_file::<_, ()>("references.txt", FileOptions::default())?;
            zip.write_all(pack.bundle.references.join("\n").as_bytes())?;

            zip.start_file::<_, ()>("pack.json", FileOptions::default())?;
            zip.write_all(serde_json::to_string_pretty(pack)?.as_bytes())?;

            zip.start_file::<_, ()>("slides.json", FileOptions::default())?;
            zip.write_all(serde_json::to_string_pretty(&plan)?.as_bytes())?;

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing pack ({} bytes) to storage", zip_data.len());
        self.storage.write_file(PACK_FILENAME, &zip_data).await?;

        Ok(format!("{}/{}", self.config.output_path(), PACK_FILENAME))
    }
}
