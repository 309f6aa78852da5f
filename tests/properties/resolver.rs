//! Property tests for target selection.

use proptest::prelude::*;

use target_select::{select_targets, Axis, TargetSpec};

use crate::common::*;

/// Arguments drawn from catalog names, compound names and junk
fn argument() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "win32-msvc",
            "macosx-clang",
            "linux-gcc",
            "debug",
            "production",
            "release",
            "default",
            "special",
        ])
        .prop_map(String::from),
        (0usize..3, 0usize..3, 0usize..2).prop_map(|(c, v, s)| {
            let catalog = reference_catalog();
            catalog
                .describe(&TargetSpec::new(c, v, s), '-')
                .unwrap_or_default()
        }),
        "[a-z_]{1,8}(-[a-z_]{1,8}){0,2}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolving the same input twice gives the same result.
    #[test]
    fn property_resolution_is_idempotent(args in prop::collection::vec(argument(), 0..8)) {
        let catalog = reference_catalog();
        prop_assert_eq!(select_targets(&catalog, &args), select_targets(&catalog, &args));
    }

    /// PROPERTY: Argument order never changes the result.
    #[test]
    fn property_resolution_is_order_independent(
        args in prop::collection::vec(argument(), 0..8).prop_shuffle()
    ) {
        let catalog = reference_catalog();
        let mut sorted = args.clone();
        sorted.sort();
        prop_assert_eq!(select_targets(&catalog, &args), select_targets(&catalog, &sorted));
    }

    /// PROPERTY: Output is sorted and free of duplicates.
    #[test]
    fn property_output_is_sorted_and_unique(args in prop::collection::vec(argument(), 0..8)) {
        let selection = select_targets(&reference_catalog(), &args);
        prop_assert!(!selection.specs.is_empty());
        prop_assert!(selection.specs.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(selection.names.windows(2).all(|w| w[0] < w[1]));
    }

    /// PROPERTY: Touching two axes yields m x n specs on the untouched axis default.
    #[test]
    fn property_cross_product_cardinality(
        configs in prop::sample::subsequence(vec!["win32-msvc", "macosx-clang", "linux-gcc"], 1..=3),
        variants in prop::sample::subsequence(vec!["debug", "production", "release"], 1..=3),
    ) {
        let args: Vec<&str> = configs.iter().chain(variants.iter()).copied().collect();
        let selection = select_targets(&reference_catalog(), &args);

        prop_assert_eq!(selection.specs.len(), configs.len() * variants.len());
        prop_assert!(selection.specs.iter().all(|s| s.index(Axis::SubVariant) == 0));
    }

    /// PROPERTY: A fully decomposable argument yields exactly its own spec.
    #[test]
    fn property_compound_argument_pins_one_spec(c in 0usize..3, v in 0usize..3, s in 0usize..2) {
        let catalog = reference_catalog();
        let spec = TargetSpec::new(c, v, s);
        let name = catalog.describe(&spec, '-').unwrap();

        let selection = select_targets(&catalog, [name.as_str()]);
        prop_assert_eq!(selection.specs, vec![spec]);
        prop_assert!(selection.names.is_empty());
    }

    /// PROPERTY: A compound argument's spec survives any surrounding arguments.
    #[test]
    fn property_compound_argument_survives_extra_args(
        c in 0usize..3,
        v in 0usize..3,
        s in 0usize..2,
        extra in prop::collection::vec(argument(), 0..6),
        at in any::<prop::sample::Index>(),
    ) {
        let catalog = reference_catalog();
        let spec = TargetSpec::new(c, v, s);
        let name = catalog.describe(&spec, '-').unwrap();

        let mut args = extra;
        let position = at.index(args.len() + 1);
        args.insert(position, name);

        let selection = select_targets(&catalog, &args);
        prop_assert!(
            selection.specs.contains(&spec),
            "{:?} missing from {:?} for {:?}",
            spec,
            selection.specs,
            args
        );
    }

    /// PROPERTY: Junk arguments are forwarded verbatim and touch no axis.
    #[test]
    fn property_junk_is_passed_through(junk in "[A-Z][a-z0-9_]{0,12}") {
        let catalog = reference_catalog();
        let selection = select_targets(&catalog, [junk.as_str()]);

        prop_assert_eq!(selection.specs, vec![catalog.default_spec()]);
        prop_assert_eq!(selection.names, vec![junk]);
    }
}
