//! Distance threshold over a pair of coordinate fields.

use super::Predicate;
use crate::error::{CollectionError, ValidationError};
use crate::record::Record;
use anyhow::Result;
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0088;
const EARTH_RADIUS_MI: f64 = 3958.7613;

/// Unit of a distance threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    const fn earth_radius(self) -> f64 {
        match self {
            Self::Kilometers => EARTH_RADIUS_KM,
            Self::Miles => EARTH_RADIUS_MI,
        }
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle (haversine) distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self, unit: DistanceUnit) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * unit.earth_radius() * a.sqrt().min(1.0).asin()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::field("origin", "latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::field("origin", "longitude must be within [-180, 180]"));
        }
        Ok(())
    }
}

/// Accepts records whose coordinates lie within `max_distance` of `origin`.
///
/// Records with a missing or non-numeric coordinate are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct WithinDistance {
    latitude_field: String,
    longitude_field: String,
    origin: GeoPoint,
    max_distance: f64,
    unit: DistanceUnit,
}

impl WithinDistance {
    /// # Errors
    /// Returns a validation error for a negative or non-finite distance, or an
    /// origin outside the valid coordinate range.
    pub fn new<A, B>(
        latitude_field: A,
        longitude_field: B,
        origin: GeoPoint,
        max_distance: f64,
        unit: DistanceUnit,
    ) -> Result<Self>
    where
        A: Into<String>,
        B: Into<String>,
    {
        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(CollectionError::from(ValidationError::field(
                "max_distance",
                format!("must be a finite, non-negative number, got {max_distance}"),
            ))
            .into());
        }
        origin.validate().map_err(CollectionError::from)?;
        Ok(Self {
            latitude_field: latitude_field.into(),
            longitude_field: longitude_field.into(),
            origin,
            max_distance,
            unit,
        })
    }

    fn point_of<T: Record>(&self, record: &T) -> Option<GeoPoint> {
        let latitude = record.get(&self.latitude_field).as_f64()?;
        let longitude = record.get(&self.longitude_field).as_f64()?;
        Some(GeoPoint { latitude, longitude })
    }
}

impl<T: Record> Predicate<T> for WithinDistance {
    fn accepts(&self, record: &T) -> bool {
        self.point_of(record)
            .is_some_and(|p| self.origin.distance_to(&p, self.unit) <= self.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::category;
    use crate::record::DynRecord;

    const PARIS: GeoPoint = GeoPoint::new(48.8566, 2.3522);
    const LONDON: GeoPoint = GeoPoint::new(51.5074, -0.1278);

    fn site(point: GeoPoint) -> DynRecord {
        DynRecord::new("Site")
            .with("Lat__c", point.latitude)
            .with("Lon__c", point.longitude)
    }

    #[test]
    fn haversine_matches_known_distance() {
        let km = PARIS.distance_to(&LONDON, DistanceUnit::Kilometers);
        let mi = PARIS.distance_to(&LONDON, DistanceUnit::Miles);
        assert!((km - 343.5).abs() < 1.0, "km = {km}");
        assert!((mi - 213.4).abs() < 1.0, "mi = {mi}");
        assert!(PARIS.distance_to(&PARIS, DistanceUnit::Miles).abs() < 1e-9);
    }

    #[test]
    fn threshold_is_unit_aware() -> Result<()> {
        let london = site(LONDON);
        assert!(WithinDistance::new("Lat__c", "Lon__c", PARIS, 350.0, DistanceUnit::Kilometers)?.accepts(&london));
        assert!(!WithinDistance::new("Lat__c", "Lon__c", PARIS, 200.0, DistanceUnit::Miles)?.accepts(&london));
        assert!(WithinDistance::new("Lat__c", "Lon__c", PARIS, 220.0, DistanceUnit::Miles)?.accepts(&london));
        Ok(())
    }

    #[test]
    fn missing_coordinates_are_rejected() -> Result<()> {
        let p = WithinDistance::new("Lat__c", "Lon__c", PARIS, 10_000.0, DistanceUnit::Kilometers)?;
        assert!(!p.accepts(&DynRecord::new("Site").with("Lat__c", 1.0)));
        assert!(!p.accepts(&DynRecord::new("Site").with("Lat__c", "north").with("Lon__c", 1.0)));
        Ok(())
    }

    #[test]
    fn rejects_bad_configuration() {
        for max in [-1.0, f64::NAN, f64::INFINITY] {
            let err = WithinDistance::new("a", "b", PARIS, max, DistanceUnit::Kilometers).unwrap_err();
            assert!(category(&err).is_some_and(CollectionError::is_validation));
        }
        let err = WithinDistance::new("a", "b", GeoPoint::new(91.0, 0.0), 1.0, DistanceUnit::Miles).unwrap_err();
        assert!(category(&err).is_some_and(CollectionError::is_validation));
    }
}
