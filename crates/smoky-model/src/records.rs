//! Flat observation records built from the nested biodiversity documents.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Key holding the observation year in every output record.
pub const YEAR_FIELD: &str = "Year";

/// Key holding the yearly total in a [`YearRecord`].
pub const TOTAL_FIELD: &str = "Total Animals Spotted";

/// Total number of animals spotted in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRecord {
    pub year: u32,
    pub total: Value,
}

impl Serialize for YearRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(YEAR_FIELD, &self.year)?;
        map.serialize_entry(TOTAL_FIELD, &self.total)?;
        map.end()
    }
}

/// Per-species counts for one year, in the order the species were listed.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesRecord {
    pub year: u32,
    pub counts: Vec<(String, Value)>,
}

impl SpeciesRecord {
    /// Flatten into one object: `Year` first, then one key per species.
    ///
    /// A species named `Year` replaces the year value in place.
    pub fn to_object(&self) -> Map<String, Value> {
        let mut object = Map::with_capacity(self.counts.len() + 1);
        object.insert(YEAR_FIELD.to_string(), Value::from(self.year));
        for (species, count) in &self.counts {
            object.insert(species.clone(), count.clone());
        }
        object
    }
}

impl Serialize for SpeciesRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let object = self.to_object();
        let mut map = serializer.serialize_map(Some(object.len()))?;
        for (key, value) in &object {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Combined output: yearly totals and per-year species layers.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct FlattenedDocument {
    pub years: Vec<YearRecord>,
    pub layers: Vec<SpeciesRecord>,
}

impl FlattenedDocument {
    /// Distinct species names across all layers, first-seen order.
    pub fn species_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for layer in &self.layers {
            for (species, _) in &layer.counts {
                if !names.contains(&species.as_str()) {
                    names.push(species);
                }
            }
        }
        names
    }
}
