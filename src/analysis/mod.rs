//! Guided root-cause analysis.
//!
//! The dashboard asks a [`SummaryEngine`] for a directional summary of a
//! free-text question. The only engine shipped is [`SampleSummaryEngine`],
//! which assembles a plausible summary from the static dataset. It is a
//! placeholder and says so in every summary it produces.

mod sample;

pub use sample::SampleSummaryEngine;

use crate::data::Dataset;
use serde::Serialize;

/// Number of driver bullets in every summary.
pub const DRIVER_COUNT: usize = 3;
/// Upper bound on suggested actions.
pub const MAX_ACTIONS: usize = 3;

/// A short, directional answer to a root-cause question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionalSummary {
    /// The question as typed, trimmed
    pub query: String,
    pub drivers: [String; DRIVER_COUNT],
    pub impact: String,
    /// At most [`MAX_ACTIONS`] entries
    pub actions: Vec<String>,
    /// Name of the engine that produced the summary
    pub engine: &'static str,
    /// Disclaimer rendered alongside the result
    pub notice: &'static str,
}

/// Trait for root-cause summary backends.
///
/// Implementations must be deterministic for a given query and dataset.
pub trait SummaryEngine: Send + Sync {
    /// Produce a summary for a non-blank query.
    fn summarize(&self, query: &str, dataset: &Dataset) -> DirectionalSummary;

    /// Get the name of this engine.
    fn name(&self) -> &'static str;
}

/// Summarize `query` with the built-in sample engine.
#[must_use]
pub fn generate_directional_summary(query: &str, dataset: &Dataset) -> DirectionalSummary {
    SampleSummaryEngine.summarize(query, dataset)
}
