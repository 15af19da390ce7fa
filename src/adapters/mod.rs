// Adapters layer: concrete implementations for external systems (hosted
// inference endpoints, dataset files).

pub mod dataset;
pub mod enrichment;
