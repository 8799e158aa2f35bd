use recordkit::testing::*;
use recordkit::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn case_prototype() -> DynRecord {
    RecordBuilder::new("Case")
        .id("500000000000001")
        .field("Subject", "Printer on fire")
        .auto_number("CaseNumber", "00001042")
        .audited("2024-03-01T09:30:00Z")
        .related("Account", sample_accounts().remove(0))
        .build()
}

#[test]
fn fill_five_independent_copies() {
    let proto = case_prototype();
    let mut cases = Collection::new(vec![proto.clone()]).fill(5, &proto, None).into_vec();
    assert_eq!(cases.len(), 6);

    cases[1].set("Subject", "Resolved");
    assert_eq!(cases[2].get("Subject"), FieldValue::from("Printer on fire"));
    assert_eq!(proto.get("Subject"), FieldValue::from("Printer on fire"));

    assert_all(&cases[1..], |c: &DynRecord| c.id().is_none());
    assert_all(&cases[1..], |c: &DynRecord| c.get("CreatedDate").is_null());
    assert_all(&cases[1..], |c: &DynRecord| c.get("CaseNumber").is_null());
}

#[test]
fn clone_spec_flags_are_independent() {
    let proto = case_prototype();
    let spec = CloneSpec::new().with_identity(true).with_generated_timestamps(true);
    let copies = ops::fill(&Vec::<DynRecord>::new(), 2, &proto, Some(spec));

    assert_all(&copies, |c: &DynRecord| c.id() == proto.id());
    assert_all(&copies, |c: &DynRecord| c.get("LastModifiedDate") == proto.get("LastModifiedDate"));
    assert_all(&copies, |c: &DynRecord| c.get("CaseNumber").is_null());
    assert_all(&copies, |c: &DynRecord| c.get("Account.Name") == FieldValue::from("Acme"));
}

#[test]
fn replicator_builds_similar_records() -> anyhow::Result<()> {
    let proto = case_prototype();
    let cases = Replicator::new()
        .create(2, &proto)
        .similarly(3, |c: &mut DynRecord, i| c.set("Priority", if i == 0 { "High" } else { "Low" }))?
        .similarly_from(1, &RecordBuilder::new("Case").field("Subject", "Other").build())?
        .build();

    assert_eq!(cases.len(), 6);
    let by_priority = cases.clone().group_by(FieldKey::new("Priority"));
    assert_eq!(by_priority[&FieldValue::from("Low")].len(), 2);
    assert_eq!(by_priority[&FieldValue::Null].len(), 3);
    assert_eq!(cases[5].get("Subject"), FieldValue::from("Other"));
    Ok(())
}

#[test]
fn replicator_state_errors() {
    let err = Replicator::<DynRecord>::new()
        .similarly_from(1, &case_prototype())
        .unwrap_err();
    assert!(matches!(category(&err), Some(CollectionError::State(_))));

    let err = Replicator::new()
        .create(1, &case_prototype())
        .similarly_from(1, &DynRecord::new("Lead"))
        .unwrap_err();
    assert!(err.to_string().contains("Case"));
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StageCount {
    stage: String,
    count: usize,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
struct StageReport {
    stage: String,
    count: u32,
}

#[test]
fn cast_reshapes_results() -> anyhow::Result<()> {
    let counts: Vec<StageCount> = Collection::new(sample_opportunities())
        .group_by(FieldKey::new("StageName"))
        .into_iter()
        .map(|(stage, members)| StageCount {
            stage: stage.to_string(),
            count: members.len(),
        })
        .collect();

    let reports: Collection<StageReport> = Collection::new(counts.clone()).cast_into()?;
    assert_eq!(reports.len(), 3);
    let prospecting = reports.find(|r: &StageReport| r.stage == "Prospecting").expect("present");
    assert_eq!(prospecting.count, 2);

    let by_stage: HashMap<String, usize> = counts.iter().map(|c| (c.stage.clone(), c.count)).collect();
    let same: HashMap<String, u64> = cast(Some(&by_stage))?;
    assert_eq!(same["Closed Won"], 1);

    let none: HashMap<String, u64> = cast::<HashMap<String, usize>, _>(None)?;
    assert!(none.is_empty());
    Ok(())
}

#[test]
fn cast_rejects_incompatible_shapes() {
    let err = cast::<_, Vec<StageReport>>(Some(&vec!["not a report"])).unwrap_err();
    assert!(matches!(category(&err), Some(CollectionError::Conversion(_))));
}

#[test]
fn cache_indexes_fixtures() -> anyhow::Result<()> {
    let mut cache = IndexedCache::new(["AccountId"])?;
    cache.extend(sample_opportunities());

    let acme = sample_accounts().remove(0);
    let acme_key = [acme.get("Id")];
    assert_field_values(cache.get_all(&acme_key), "Name", ["Acme Renewal", "Umbrella Upsell"]);
    assert_eq!(cache.get(&acme_key).map(|o| o.get("Name")), Some(FieldValue::from("Acme Renewal")));

    let removed = cache.remove(&acme_key);
    assert_eq!(removed.len(), 2);
    assert_eq!(cache.len(), 2);
    assert!(!cache.contains(&acme_key));
    Ok(())
}
