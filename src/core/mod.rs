pub mod classifier;
pub mod content;
pub mod engine;
pub mod export;
pub mod extractor;
pub mod pipeline;
pub mod scoring;
pub mod slides;
pub mod templates;

pub use crate::domain::model::{
    ContentBundle, Domain, ExtractedFeatures, PitchPack, PitchRequest, ProblemContext, ProblemSet,
    ScoreTriple,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TextGenerator};
pub use crate::utils::error::Result;
