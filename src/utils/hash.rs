//! Stable hashing for free-text queries.

use xxhash_rust::xxh3::xxh3_64;

/// Normalize a query so that case and spacing do not change its seed.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic seed for a free-text query.
#[must_use]
pub fn query_seed(query: &str) -> u64 {
    xxh3_64(normalize_query(query).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_seed_is_stable() {
        let seed = query_seed("why did EU approvals drop");
        assert_eq!(seed, query_seed("why did EU approvals drop"));
        assert_ne!(seed, query_seed("why did LATAM disputes rise"));
    }

    #[test]
    fn test_seed_ignores_case_and_spacing() {
        assert_eq!(
            query_seed("  Why did   EU approvals drop "),
            query_seed("why did eu approvals drop")
        );
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("\tFoo  BAR\n"), "foo bar");
        assert_eq!(normalize_query("   "), "");
    }
}
