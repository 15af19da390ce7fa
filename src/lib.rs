pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::enrichment::InferenceChain;
pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::PitchEngine, pipeline::ContentPipeline};
pub use utils::error::{PitchError, Result};
