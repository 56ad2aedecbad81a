//! Two-stage path extraction and delay ranking.

use crate::path::PathTuple;
use crate::query::PathQuery;
use netpath_report::TimingDocument;
use std::num::NonZeroUsize;

/// The slowest matching paths plus the size of the full match set.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedPaths {
    /// Matching paths, slowest first, at most `limit` long.
    pub paths: Vec<PathTuple>,
    /// Number of matching pairs before truncation.
    pub matched: usize,
}

/// Collects every path whose driver and endpoint pass the query filters.
///
/// Nets are tested first: a net whose driver does not contain the source
/// filter is skipped without looking at its endpoints. Surviving endpoints
/// are then tested against the destination filter. Results are in report
/// order and unranked.
pub fn extract_paths(document: &TimingDocument, query: &PathQuery) -> Vec<PathTuple> {
    let mut paths = Vec::new();
    for net in document.nets() {
        if !query.matches_source(&net.driver) {
            continue;
        }
        for endpoint in &net.endpoints {
            if query.matches_destination(&endpoint.cell) {
                paths.push(PathTuple::new(
                    net.driver.as_str(),
                    endpoint.cell.as_str(),
                    endpoint.delay.clone(),
                ));
            }
        }
    }
    paths
}

/// Sorts paths by delay, slowest first, and keeps at most `limit`.
///
/// The sort is stable: paths with equal delay stay in discovery order.
pub fn rank_paths(mut paths: Vec<PathTuple>, limit: NonZeroUsize) -> Vec<PathTuple> {
    paths.sort_by(|a, b| b.delay.total_cmp(&a.delay));
    paths.truncate(limit.get());
    paths
}

/// Extracts and ranks the slowest paths matching `query`.
pub fn top_paths(document: &TimingDocument, query: &PathQuery) -> RankedPaths {
    let matched_paths = extract_paths(document, query);
    let matched = matched_paths.len();
    let paths = rank_paths(matched_paths, query.limit);
    tracing::debug!(
        source = %query.source_filter,
        destination = %query.destination_filter,
        matched,
        kept = paths.len(),
        "ranked net delays"
    );
    RankedPaths { paths, matched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpath_report::{Delay, EndpointTiming, NetTiming, TimingAnalysis};
    use proptest::prelude::*;

    fn net(driver: &str, endpoints: &[(&str, u32)]) -> NetTiming {
        NetTiming {
            driver: driver.to_string(),
            endpoints: endpoints
                .iter()
                .map(|&(cell, delay)| EndpointTiming {
                    cell: cell.to_string(),
                    delay: Delay::from(delay),
                    port: None,
                    budget: None,
                })
                .collect(),
            net: None,
            port: None,
        }
    }

    fn document(nets: Vec<NetTiming>) -> TimingDocument {
        TimingDocument {
            timing_analysis: TimingAnalysis {
                detailed_net_timings: nets,
            },
        }
    }

    fn sample() -> TimingDocument {
        document(vec![
            net("A", &[("X", 5), ("Y", 9)]),
            net("B", &[("X", 2)]),
        ])
    }

    fn limit(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn triples(paths: &[PathTuple]) -> Vec<(&str, &str, f64)> {
        paths
            .iter()
            .map(|p| (p.source.as_str(), p.destination.as_str(), p.delay.as_f64()))
            .collect()
    }

    #[test]
    fn destination_filter_only() {
        let query = PathQuery::new(limit(10)).with_destination("X");
        let ranked = top_paths(&sample(), &query);
        assert_eq!(triples(&ranked.paths), vec![("A", "X", 5.0), ("B", "X", 2.0)]);
        assert_eq!(ranked.matched, 2);
    }

    #[test]
    fn source_filter_with_limit() {
        let query = PathQuery::new(limit(1)).with_source("A");
        let ranked = top_paths(&sample(), &query);
        assert_eq!(triples(&ranked.paths), vec![("A", "Y", 9.0)]);
        assert_eq!(ranked.matched, 2);
    }

    #[test]
    fn no_driver_matches() {
        let query = PathQuery::default().with_source("Z");
        let ranked = top_paths(&sample(), &query);
        assert!(ranked.paths.is_empty());
        assert_eq!(ranked.matched, 0);
    }

    #[test]
    fn empty_report() {
        let ranked = top_paths(&document(Vec::new()), &PathQuery::default());
        assert!(ranked.paths.is_empty());
    }

    #[test]
    fn empty_filters_return_everything_ranked() {
        let ranked = top_paths(&sample(), &PathQuery::default());
        assert_eq!(
            triples(&ranked.paths),
            vec![("A", "Y", 9.0), ("A", "X", 5.0), ("B", "X", 2.0)]
        );
    }

    #[test]
    fn driver_filter_skips_whole_net() {
        // Net "B" is rejected on its driver; its endpoints are never examined.
        let doc = document(vec![net("A", &[("X", 1)]), net("B", &[("AX", 7)])]);
        let query = PathQuery::default().with_source("A").with_destination("X");
        let paths = extract_paths(&doc, &query);
        assert_eq!(triples(&paths), vec![("A", "X", 1.0)]);
    }

    #[test]
    fn extraction_keeps_report_order() {
        let paths = extract_paths(&sample(), &PathQuery::default());
        assert_eq!(
            triples(&paths),
            vec![("A", "X", 5.0), ("A", "Y", 9.0), ("B", "X", 2.0)]
        );
    }

    #[test]
    fn ties_keep_discovery_order() {
        let doc = document(vec![
            net("n0", &[("a", 3), ("b", 4)]),
            net("n1", &[("c", 3), ("d", 4)]),
        ]);
        let ranked = top_paths(&doc, &PathQuery::default());
        let order: Vec<&str> = ranked.paths.iter().map(|p| p.destination.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn integer_and_float_delays_compare_numerically() {
        let doc: TimingDocument = serde_json::from_str(
            r#"{"timing_analysis":{"detailed_net_timings":[
                {"driver":"A","endpoints":[{"cell":"X","delay":2},{"cell":"Y","delay":2.5},
                                           {"cell":"Z","delay":10}]}]}}"#,
        )
        .unwrap();
        let ranked = top_paths(&doc, &PathQuery::default());
        let lines: Vec<String> = ranked.paths.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["A -> Z : 10", "A -> Y : 2.5", "A -> X : 2"]);
    }

    #[test]
    fn net_without_endpoints_contributes_nothing() {
        let doc = document(vec![net("A", &[]), net("B", &[("X", 1)])]);
        let ranked = top_paths(&doc, &PathQuery::default());
        assert_eq!(ranked.matched, 1);
    }

    fn arb_document() -> impl Strategy<Value = TimingDocument> {
        let endpoint_strategy = ("[a-c]{0,3}", 0u32..50);
        let net_strategy = ("[a-c]{0,3}", prop::collection::vec(endpoint_strategy, 0..5));
        prop::collection::vec(net_strategy, 0..8).prop_map(|nets| {
            document(
                nets.into_iter()
                    .map(|(driver, endpoints)| {
                        let refs: Vec<(&str, u32)> =
                            endpoints.iter().map(|(c, d)| (c.as_str(), *d)).collect();
                        net(&driver, &refs)
                    })
                    .collect(),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_results_satisfy_filters(
            doc in arb_document(),
            src in "[a-c]{0,2}",
            dst in "[a-c]{0,2}",
            n in 1usize..20,
        ) {
            let query = PathQuery::new(limit(n)).with_source(src.clone()).with_destination(dst.clone());
            let ranked = top_paths(&doc, &query);
            for path in &ranked.paths {
                prop_assert!(path.source.contains(src.as_str()));
                prop_assert!(path.destination.contains(dst.as_str()));
            }
            prop_assert!(ranked.paths.len() <= n);
            prop_assert!(ranked.paths.len() <= ranked.matched);
            prop_assert_eq!(ranked.paths.len(), ranked.matched.min(n));
        }

        #[test]
        fn prop_results_sorted_descending(doc in arb_document(), n in 1usize..20) {
            let ranked = top_paths(&doc, &PathQuery::new(limit(n)));
            for pair in ranked.paths.windows(2) {
                prop_assert!(pair[0].delay.as_f64() >= pair[1].delay.as_f64());
            }
        }

        #[test]
        fn prop_empty_filters_cover_all_endpoints(doc in arb_document(), n in 1usize..40) {
            let ranked = top_paths(&doc, &PathQuery::new(limit(n)));
            prop_assert_eq!(ranked.matched, doc.endpoint_count());
            prop_assert_eq!(ranked.paths.len(), doc.endpoint_count().min(n));
        }

        #[test]
        fn prop_extraction_is_deterministic(doc in arb_document(), src in "[a-c]{0,2}") {
            let query = PathQuery::default().with_source(src);
            prop_assert_eq!(top_paths(&doc, &query), top_paths(&doc, &query));
        }

        #[test]
        fn prop_delays_come_from_endpoints(doc in arb_document()) {
            let ranked = top_paths(&doc, &PathQuery::default());
            for path in &ranked.paths {
                let found = doc.nets().iter().any(|net| {
                    net.driver == path.source
                        && net.endpoints.iter().any(|e| e.cell == path.destination && e.delay == path.delay)
                });
                prop_assert!(found);
            }
        }
    }
}
