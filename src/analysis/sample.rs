//! Placeholder summary engine seeded from the query hash.

use super::{DirectionalSummary, SummaryEngine, DRIVER_COUNT, MAX_ACTIONS};
use crate::data::Dataset;
use crate::derived::{format_rate_percent, format_volume, volume_share};
use crate::model::RegionSummary;
use crate::utils::{normalize_query, query_seed};

const SAMPLE_NOTICE: &str =
    "Sample output assembled from the demo dataset; not a computed root-cause analysis.";
const NO_SIGNAL: &str = "No further signal in the current snapshot.";

/// Builds summaries by sampling insight details and region notes.
///
/// The same normalized query always yields the same summary. A query that
/// names a region (by code or label) anchors the impact line on that region.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSummaryEngine;

impl SummaryEngine for SampleSummaryEngine {
    fn summarize(&self, query: &str, dataset: &Dataset) -> DirectionalSummary {
        let mut rng = SplitMix64::new(query_seed(query));
        let normalized = normalize_query(query);

        let mut driver_pool: Vec<&str> = dataset
            .insights
            .iter()
            .flat_map(|i| {
                let observations = i.details.len().saturating_sub(1);
                i.details[..observations].iter().map(String::as_str)
            })
            .collect();
        driver_pool.extend(dataset.regions.iter().map(|r| r.note.as_str()));

        let mut picked = rng.pick_distinct(&driver_pool, DRIVER_COUNT).into_iter();
        let drivers: [String; DRIVER_COUNT] = std::array::from_fn(|_| {
            picked
                .next()
                .map_or_else(|| NO_SIGNAL.to_string(), str::to_string)
        });

        let action_pool: Vec<&str> = dataset
            .insights
            .iter()
            .filter_map(|i| i.details.last().map(String::as_str))
            .collect();
        let actions = rng
            .pick_distinct(&action_pool, MAX_ACTIONS)
            .into_iter()
            .map(str::to_string)
            .collect();

        let impact = mentioned_region(&normalized, &dataset.regions)
            .or_else(|| rng.pick(&dataset.regions))
            .map_or_else(
                || NO_SIGNAL.to_string(),
                |region| impact_line(region, dataset.total_region_volume()),
            );

        tracing::debug!(
            query = %normalized,
            drivers = drivers.len(),
            "Generated sample directional summary"
        );

        DirectionalSummary {
            query: query.trim().to_string(),
            drivers,
            impact,
            actions,
            engine: self.name(),
            notice: SAMPLE_NOTICE,
        }
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}

fn mentioned_region<'a>(normalized: &str, regions: &'a [RegionSummary]) -> Option<&'a RegionSummary> {
    let tokens: Vec<&str> = normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    regions.iter().find(|r| {
        let code = r.code.to_lowercase();
        tokens.contains(&code.as_str()) || normalized.contains(&r.label.to_lowercase())
    })
}

fn impact_line(region: &RegionSummary, total_volume: u64) -> String {
    format!(
        "{} carries {} ({:.1}% of volume) at {} fraud and {:.0}% approvals, trending {}.",
        region.label,
        format_volume(region.volume),
        volume_share(region.volume, total_volume),
        format_rate_percent(region.fraud_rate),
        region.approval_rate,
        region.trend_label,
    )
}

/// SplitMix64 step function.
struct SplitMix64(u64);

impl SplitMix64 {
    const fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.below(items.len()))
        }
    }

    /// Up to `count` distinct entries, by partial Fisher-Yates.
    fn pick_distinct<'a>(&mut self, items: &[&'a str], count: usize) -> Vec<&'a str> {
        let mut pool = items.to_vec();
        let take = count.min(pool.len());
        for i in 0..take {
            let j = i + self.below(pool.len() - i);
            pool.swap(i, j);
        }
        pool.truncate(take);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::generate_directional_summary;

    #[test]
    fn test_summary_is_deterministic() {
        let data = Dataset::demo();
        let a = generate_directional_summary("Why did EU approvals drop?", &data);
        let b = generate_directional_summary("  why did eu   approvals drop? ", &data);
        assert_eq!(a.drivers, b.drivers);
        assert_eq!(a.impact, b.impact);
        assert_eq!(a.actions, b.actions);
    }

    #[test]
    fn test_summary_shape() {
        let data = Dataset::demo();
        let summary = generate_directional_summary("chargebacks up", &data);
        assert_eq!(summary.query, "chargebacks up");
        assert!(summary.actions.len() <= MAX_ACTIONS);
        assert!(!summary.actions.is_empty());
        assert_eq!(summary.engine, "sample");
        assert!(summary.notice.contains("Sample"));

        let mut unique = summary.drivers.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), DRIVER_COUNT);
    }

    #[test]
    fn test_region_mention_anchors_impact() {
        let data = Dataset::demo();
        let summary = generate_directional_summary("what is happening in LATAM", &data);
        assert!(summary.impact.starts_with("Latin America"), "{}", summary.impact);
        assert!(summary.impact.contains("190k tx"));
        assert!(summary.impact.contains("14.6% of volume"));

        let summary = generate_directional_summary("europe checkout issue", &data);
        assert!(summary.impact.starts_with("Europe"));
    }

    #[test]
    fn test_empty_dataset_pads_drivers() {
        let mut data = Dataset::demo();
        data.insights.clear();
        data.regions.clear();
        let summary = generate_directional_summary("anything", &data);
        assert!(summary.drivers.iter().all(|d| d == NO_SIGNAL));
        assert_eq!(summary.impact, NO_SIGNAL);
        assert!(summary.actions.is_empty());
    }

    #[test]
    fn test_pick_distinct_caps_at_pool_size() {
        let mut rng = SplitMix64::new(7);
        let picked = rng.pick_distinct(&["a", "b"], 3);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
    }
}
