//! Property-based tests for the collection operations.

use proptest::prelude::*;
use recordkit::testing::assert_collections_unordered_equal;
use recordkit::*;

fn stage_name(i: u8) -> &'static str {
    ["Open", "Closed", "Won", "Lost"][usize::from(i % 4)]
}

fn records() -> impl Strategy<Value = Vec<DynRecord>> {
    prop::collection::vec((0u8..4, prop::option::of(-50i64..50)), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (stage, amount))| {
                DynRecord::new("Opportunity")
                    .with_id(format!("006{i:012}"))
                    .with("Seq", i as i64)
                    .with("StageName", stage_name(stage))
                    .with("Amount", amount)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn filter_partitions_the_input(rs in records(), threshold in -50i64..50) {
        let p = FieldPredicate::new("Amount", ">=", threshold).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let kept = ops::filter(&rs, |r: &DynRecord| p.accepts(r));
        let dropped = ops::filter(&rs, Not(|r: &DynRecord| p.accepts(r)));

        prop_assert_eq!(kept.len() + dropped.len(), rs.len());
        prop_assert!(kept.iter().all(|r| p.accepts(r)));

        let seqs: Vec<_> = kept.iter().map(|r| r.get("Seq")).collect();
        let mut sorted = seqs.clone();
        sorted.sort_by(FieldValue::sort_cmp);
        prop_assert_eq!(seqs, sorted);
    }

    #[test]
    fn group_by_is_an_exact_partition(rs in records()) {
        let groups = Collection::new(rs.clone()).group_by(FieldKey::new("StageName"));
        let flattened: Vec<DynRecord> = groups.values().flatten().cloned().collect();
        assert_collections_unordered_equal(&flattened, &rs);

        for (stage, members) in &groups {
            prop_assert!(members.iter().all(|r| &r.get("StageName") == stage));
            prop_assert!(members.windows(2).all(|w| w[0].get("Seq").sort_cmp(&w[1].get("Seq")).is_lt()));
        }
    }

    #[test]
    fn sort_is_stable_and_idempotent(rs in records()) {
        let once = Collection::new(rs).sort_by_field("StageName", SortDirection::Ascending);
        let twice = once.clone().sort_by_field("StageName", SortDirection::Ascending);
        prop_assert_eq!(&once, &twice);

        for w in once.as_slice().windows(2) {
            if w[0].get("StageName") == w[1].get("StageName") {
                prop_assert!(w[0].get("Seq").sort_cmp(&w[1].get("Seq")).is_lt());
            }
        }
    }

    #[test]
    fn map_by_unique_keys_keeps_every_record(rs in records()) {
        let by_id = ops::map_by(&rs, IdKey);
        prop_assert_eq!(by_id.len(), rs.len());
        let strict = ops::map_by_unique(&rs, IdKey).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(strict.len(), rs.len());
    }

    #[test]
    fn reduce_counts_every_record(rs in records(), seed in any::<i32>()) {
        let count = Collection::new(rs.clone()).reduce(0usize, |acc, _, _| acc + 1);
        prop_assert_eq!(count, rs.len());
        prop_assert_eq!(Collection::<DynRecord>::empty().reduce(seed, |acc, _, _| acc.wrapping_add(1)), seed);
    }

    #[test]
    fn fill_appends_independent_copies(rs in records(), n in 0usize..10) {
        let proto = DynRecord::new("Lead").with("Company", "Acme");
        let mut filled = Collection::new(rs.clone()).fill(n, &proto, None).into_vec();
        prop_assert_eq!(filled.len(), rs.len() + n);

        if n >= 2 {
            let last = filled.len() - 1;
            filled[last].set("Company", "Changed");
            prop_assert_eq!(filled[last - 1].get("Company"), FieldValue::from("Acme"));
            prop_assert_eq!(proto.get("Company"), FieldValue::from("Acme"));
        }
    }
}
