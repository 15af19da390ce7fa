use crate::core::Pipeline;
use crate::domain::model::PitchRequest;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct PitchEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PitchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self, request: &PitchRequest) -> Result<String> {
        println!("Starting pitch generation...");
        self.monitor.log_stats("Start");

        // Gather
        println!("Gathering problem context...");
        let context = self.pipeline.gather(request).await?;
        println!("Resolved problem: {}", context.title);
        self.monitor.log_stats("Gather");

        // Compose
        println!("Composing content pack...");
        let pack = self.pipeline.compose(context).await?;
        println!(
            "Composed {} content with {} summary points ({})",
            pack.domain.as_str(),
            pack.bundle.summary.lines().count(),
            if pack.ai_generated { "Enhanced" } else { "Fallback" }
        );
        self.monitor.log_stats("Compose");

        // Package
        println!("Packaging output...");
        let output_path = self.pipeline.package(&pack).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_stats("Package");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
