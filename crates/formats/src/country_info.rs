use serde::{Deserialize, Serialize};

/// One entry of the country-info JSON document: an array of
/// `{"name", "lat", "lon", "min": [lon, lat], "max": [lon, lat]}` objects.
/// All fields are required; `min`/`max` are the corners of the territory's
/// lon/lat bounding box in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfoEntry {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub min: [f64; 2],
    pub max: [f64; 2],
}
