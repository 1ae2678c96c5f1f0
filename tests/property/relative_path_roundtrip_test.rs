//! Property-based tests for the path translator.
//!
//! **Property: round trip.** For any base document B and target T under the
//! same root, resolving `relative_path(B, T)` against B must reproduce T's
//! path, query, and fragment exactly.

use proptest::prelude::*;
use url::Url;
use zoomkeeper::services::path_translator::relative_path;

/// A single path segment: lowercase alphanumeric, no dots, never empty.
fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn arb_dirs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_segment(), 0..4)
}

fn file_url(dirs: &[String], name: &str, suffix: &str) -> Url {
    let mut path = dirs.join("/");
    if !path.is_empty() {
        path.push('/');
    }
    Url::parse(&format!("file:///{}{}.html{}", path, name, suffix)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn relative_path_round_trips(
        base_dirs in arb_dirs(),
        base_name in arb_segment(),
        target_dirs in arb_dirs(),
        target_name in arb_segment(),
        with_query in any::<bool>(),
        with_fragment in any::<bool>(),
    ) {
        let base = file_url(&base_dirs, &base_name, "");
        let mut suffix = String::new();
        if with_query {
            suffix.push_str("?x=1");
        }
        if with_fragment {
            suffix.push_str("#y");
        }
        let target = file_url(&target_dirs, &target_name, &suffix);

        let rel = relative_path(&base, &target);
        let resolved = base.join(&rel).expect("relative output must resolve");

        prop_assert_eq!(resolved.path(), target.path());
        prop_assert_eq!(resolved.query(), target.query());
        prop_assert_eq!(resolved.fragment(), target.fragment());
    }

    // The climb count is exactly the base directory depth below the common
    // prefix: the output never contains a `../` following a named segment.
    #[test]
    fn climbs_only_at_the_front(
        base_dirs in arb_dirs(),
        base_name in arb_segment(),
        target_dirs in arb_dirs(),
        target_name in arb_segment(),
    ) {
        let base = file_url(&base_dirs, &base_name, "");
        let target = file_url(&target_dirs, &target_name, "");

        let rel = relative_path(&base, &target);
        let stripped = rel.trim_start_matches("../");
        prop_assert!(!stripped.contains("../"));
    }
}
