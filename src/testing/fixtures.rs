//! Pre-built record sets for common testing scenarios.
//!
//! The datasets are small and fixed so tests can assert on exact contents.
//! Ids follow platform conventions: `001` accounts, `006` opportunities.

use crate::record::{DynRecord, Record};
use crate::testing::builders::RecordBuilder;
use crate::value::{FieldValue, RecordId};
use serde::{Deserialize, Serialize};

/// Three accounts: Acme (EU), Globex (US) and Initech (US).
///
/// # Example
///
/// ```
/// use recordkit::testing::sample_accounts;
///
/// assert_eq!(sample_accounts().len(), 3);
/// ```
#[must_use]
pub fn sample_accounts() -> Vec<DynRecord> {
    [("Acme", "EU", 120), ("Globex", "US", 4_000), ("Initech", "US", 45)]
        .into_iter()
        .enumerate()
        .map(|(i, (name, region, employees))| {
            RecordBuilder::new("Account")
                .sequential_id("001", i + 1)
                .field("Name", name)
                .field("Region", region)
                .field("NumberOfEmployees", employees)
                .build()
        })
        .collect()
}

/// Four opportunities over [`sample_accounts`], each with its account
/// attached as the `Account` relationship.
///
/// | Name             | StageName   | Amount | Account |
/// |------------------|-------------|--------|---------|
/// | Acme Renewal     | Prospecting | 5000   | Acme    |
/// | Globex Expansion | Closed Won  | 250000 | Globex  |
/// | Initech Pilot    | Prospecting | null   | Initech |
/// | Umbrella Upsell  | Closed Lost | 1200.5 | Acme    |
///
/// # Example
///
/// ```
/// use recordkit::testing::sample_opportunities;
/// use recordkit::{FieldValue, Record};
///
/// let opps = sample_opportunities();
/// assert_eq!(opps[1].get("Account.Name"), FieldValue::from("Globex"));
/// ```
#[must_use]
pub fn sample_opportunities() -> Vec<DynRecord> {
    let accounts = sample_accounts();
    let rows: [(&str, &str, FieldValue, usize); 4] = [
        ("Acme Renewal", "Prospecting", 5_000.into(), 0),
        ("Globex Expansion", "Closed Won", 250_000.into(), 1),
        ("Initech Pilot", "Prospecting", FieldValue::Null, 2),
        ("Umbrella Upsell", "Closed Lost", 1_200.5.into(), 0),
    ];
    rows.into_iter()
        .enumerate()
        .map(|(i, (name, stage, amount, account))| {
            let account = accounts[account].clone();
            RecordBuilder::new("Opportunity")
                .sequential_id("006", i + 1)
                .field("Name", name)
                .field("StageName", stage)
                .field("Amount", amount)
                .field("AccountId", account.id())
                .related("Account", account)
                .build()
        })
        .collect()
}

/// A typed record: a store with an optional location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleStore {
    pub id: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Record for SampleStore {
    fn id(&self) -> Option<RecordId> {
        Some(RecordId::new(self.id.as_str()))
    }

    fn get(&self, field: &str) -> FieldValue {
        match field {
            "Id" => FieldValue::Id(RecordId::new(self.id.as_str())),
            "Name" => FieldValue::from(self.name.as_str()),
            "Latitude" => self.latitude.into(),
            "Longitude" => self.longitude.into(),
            _ => FieldValue::Null,
        }
    }

    fn record_type(&self) -> &str {
        "Store"
    }
}

/// Five stores: Paris, Versailles (~17 km from Paris), London (~344 km),
/// New York, and one without coordinates.
///
/// # Example
///
/// ```
/// use recordkit::testing::sample_locations;
///
/// assert!(sample_locations().iter().any(|s| s.latitude.is_none()));
/// ```
#[must_use]
pub fn sample_locations() -> Vec<SampleStore> {
    [
        ("Paris", Some((48.8566, 2.3522))),
        ("Versailles", Some((48.8049, 2.1204))),
        ("London", Some((51.5074, -0.1278))),
        ("New York", Some((40.7128, -74.0060))),
        ("Online", None),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, coords))| SampleStore {
        id: format!("a0S{:012}", i + 1),
        name: name.to_string(),
        latitude: coords.map(|(lat, _)| lat),
        longitude: coords.map(|(_, lon)| lon),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opportunities_point_at_their_accounts() {
        let opps = sample_opportunities();
        for opp in &opps {
            assert_eq!(opp.get("AccountId"), opp.get("Account.Id"));
        }
        assert_eq!(opps[2].get("Amount"), FieldValue::Null);
    }

    #[test]
    fn stores_read_as_records() {
        let stores = sample_locations();
        assert_eq!(stores[0].get("Latitude"), FieldValue::from(48.8566));
        assert_eq!(stores[4].get("Longitude"), FieldValue::Null);
        assert_eq!(stores[0].record_type(), "Store");
    }
}
