use clap::Parser;
use pitch_forge::adapters::dataset;
use pitch_forge::core::{ConfigProvider, PitchRequest};
use pitch_forge::utils::{logger, validation::Validate};
use pitch_forge::{CliConfig, ContentPipeline, InferenceChain, LocalStorage, PitchEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pitch-forge CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let problems = match dataset::load_problems(&config.problems_file) {
        Ok(problems) => problems,
        Err(e) => {
            tracing::error!("❌ Failed to load problems dataset: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!("📚 Loaded {} problem statements", problems.len());

    let token = config
        .api_token()
        .map(str::to_string)
        .or_else(|| std::env::var("PITCH_FORGE_API_TOKEN").ok());
    let generator = InferenceChain::new(
        config.enrichment_endpoints().to_vec(),
        token,
        config.request_timeout_seconds(),
    );

    let request = PitchRequest {
        problem: config.problem.clone(),
        idea: config.idea.clone(),
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ContentPipeline::new(problems, generator, storage, config);

    let engine = PitchEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run(&request).await {
        Ok(output_path) => {
            tracing::info!("✅ Pitch pack generated successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Pitch pack generated successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Pitch generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                pitch_forge::utils::error::ErrorSeverity::Low => 0,
                pitch_forge::utils::error::ErrorSeverity::Medium => 2,
                pitch_forge::utils::error::ErrorSeverity::High => 1,
                pitch_forge::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
