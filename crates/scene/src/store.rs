use foundation::geo::GeoExtent;
use foundation::math::Vec3;

/// Immutable per-country geodata plus the values derived from it once at
/// load time. Never mutated after construction; per-frame state lives in
/// the label pipeline's transient buffer instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    /// Displayed label text.
    pub name: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub extent: GeoExtent,
    /// Extent width times height (squared degrees), the label prominence
    /// measure compared against the area threshold.
    pub area: f64,
    /// Sphere-surface anchor point for the label.
    pub world_position: Vec3,
}

/// Ordered collection of country records.
///
/// Iteration order is load order and stays stable for the life of the
/// store, so equal-depth labels resolve deterministically. Records are
/// created in one batch at data-load time and only discarded wholesale.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CountryStore {
    records: Vec<CountryRecord>,
}

impl CountryStore {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CountryRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }
}
