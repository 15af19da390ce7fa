use crate::domain::model::{PitchPack, PitchRequest, ProblemContext};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn enrichment_endpoints(&self) -> &[String];
    fn api_token(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
}

/// Best-effort text generation. Implementations never fail outward: any
/// transport or payload problem resolves to `None`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Option<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Resolve the request against the dataset and gather optional
    /// enrichment text.
    async fn gather(&self, request: &PitchRequest) -> Result<ProblemContext>;
    /// Pure content-and-score composition. Deterministic for a fixed context.
    async fn compose(&self, context: ProblemContext) -> Result<PitchPack>;
    /// Write the pack to its output location, returning the path.
    async fn package(&self, pack: &PitchPack) -> Result<String>;
}
