use foundation::geo::GeoExtent;
use foundation::math::{LatLonError, SphereCalibration, Vec2, sphere_surface_point};
use scene::{CountryRecord, CountryStore};
use serde_json::Value;

use crate::country_info::CountryInfoEntry;

/// Placement parameters applied once per record at store-build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StoreBuildConfig {
    pub sphere_radius: f64,
    pub calibration: SphereCalibration,
}

impl Default for StoreBuildConfig {
    fn default() -> Self {
        Self {
            sphere_radius: 1.0,
            calibration: SphereCalibration::country_outlines(),
        }
    }
}

/// Why one document entry was skipped. The batch itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum CountryDataError {
    /// The entry did not decode (missing or mistyped field).
    Malformed { index: usize, reason: String },
    /// Lat/lon fell outside the legal ranges.
    Placement {
        index: usize,
        name: String,
        source: LatLonError,
    },
    /// Bounding-box corners were inverted or non-finite.
    InvalidExtent { index: usize, name: String },
}

impl CountryDataError {
    /// Document index of the offending entry.
    pub fn index(&self) -> usize {
        match self {
            CountryDataError::Malformed { index, .. }
            | CountryDataError::Placement { index, .. }
            | CountryDataError::InvalidExtent { index, .. } => *index,
        }
    }
}

impl std::fmt::Display for CountryDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountryDataError::Malformed { index, reason } => {
                write!(f, "invalid entry at index {index}: {reason}")
            }
            CountryDataError::Placement {
                index,
                name,
                source,
            } => {
                write!(f, "entry {index} ({name}): {source}")
            }
            CountryDataError::InvalidExtent { index, name } => {
                write!(f, "entry {index} ({name}): bounding box is inverted or not finite")
            }
        }
    }
}

impl std::error::Error for CountryDataError {}

/// Builds a record from one decoded entry: validates ranges, solves the
/// sphere placement, and derives the extent area. Both derived values are
/// computed here, exactly once per record.
pub fn record_from_entry(
    index: usize,
    entry: &CountryInfoEntry,
    config: &StoreBuildConfig,
) -> Result<CountryRecord, CountryDataError> {
    let extent = GeoExtent::new(
        Vec2::new(entry.min[0], entry.min[1]),
        Vec2::new(entry.max[0], entry.max[1]),
    );
    if !extent.is_valid() {
        return Err(CountryDataError::InvalidExtent {
            index,
            name: entry.name.clone(),
        });
    }

    let world_position =
        sphere_surface_point(entry.lat, entry.lon, config.sphere_radius, config.calibration)
            .map_err(|source| CountryDataError::Placement {
                index,
                name: entry.name.clone(),
                source,
            })?;

    Ok(CountryRecord {
        name: entry.name.clone(),
        lat_deg: entry.lat,
        lon_deg: entry.lon,
        area: extent.area(),
        extent,
        world_position,
    })
}

/// Builds the store from raw document values, one batch.
///
/// Malformed or out-of-range entries are skipped and reported; survivors
/// keep their document order, which becomes the store's stable iteration
/// order.
pub fn build_store(
    values: &[Value],
    config: &StoreBuildConfig,
) -> (CountryStore, Vec<CountryDataError>) {
    let mut records = Vec::with_capacity(values.len());
    let mut skipped = Vec::new();

    for (index, value) in values.iter().enumerate() {
        let entry: CountryInfoEntry = match serde_json::from_value(value.clone()) {
            Ok(entry) => entry,
            Err(e) => {
                skipped.push(CountryDataError::Malformed {
                    index,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match record_from_entry(index, &entry, config) {
            Ok(record) => records.push(record),
            Err(e) => skipped.push(e),
        }
    }

    (CountryStore::new(records), skipped)
}
