use clap::Parser;
use pitch_forge::adapters::dataset;
use pitch_forge::config::toml_config::TomlConfig;
use pitch_forge::core::{ConfigProvider, PitchRequest};
use pitch_forge::utils::{logger, validation::Validate};
use pitch_forge::{ContentPipeline, InferenceChain, LocalStorage, PitchEngine};

#[derive(Parser)]
#[command(name = "toml-pitch")]
#[command(about = "Pitch generation driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "pitch-config.toml")]
    config: String,

    /// Problem statement id or title to pitch
    #[arg(long)]
    problem: String,

    /// The team's solution idea
    #[arg(long, default_value = "")]
    idea: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be generated without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based pitch tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No content will be generated");
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let problems = dataset::load_problems(&config.problems.file)?;
    tracing::info!("📚 Loaded {} problem statements", problems.len());

    let generator = InferenceChain::new(
        config.enrichment_endpoints().to_vec(),
        config.api_token().map(str::to_string),
        config.request_timeout_seconds(),
    );

    let request = PitchRequest {
        problem: args.problem.clone(),
        idea: args.idea.clone(),
    };

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ContentPipeline::new(problems, generator, storage, config);
    let engine = PitchEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run(&request).await {
        Ok(output_path) => {
            tracing::info!("✅ Pitch pack generated successfully!");
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!("  Problems: {}", config.problems.file);
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output.formats.join(", "));

    if config.enrichment_enabled() {
        println!(
            "  Enrichment: {} endpoint(s), {}s timeout",
            config.enrichment_endpoints().len(),
            config.request_timeout_seconds()
        );
        println!(
            "  Token: {}",
            if config.api_token().is_some() {
                "configured"
            } else {
                "absent (anonymous requests)"
            }
        );
    } else {
        println!("  Enrichment: disabled");
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
