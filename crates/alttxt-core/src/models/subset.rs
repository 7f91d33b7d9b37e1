//! A single set or set-intersection row.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::{DECIMAL_PLACES, EMPTY_INTERSECTION_NAME};
use crate::types::{IntersectionType, SubsetField};

/// Raw intersection row as produced by the export parser, before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsetRecord {
    pub name: String,
    pub size: u64,
    #[serde(alias = "deviation")]
    pub dev: f64,
    pub degree: u32,
    #[serde(default)]
    pub set_membership: BTreeSet<String>,
}

impl SubsetRecord {
    pub fn new<I, S>(name: impl Into<String>, size: u64, dev: f64, degree: u32, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            size,
            dev,
            degree,
            set_membership: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// One row of the UpSet plot. Immutable once built; the classification is
/// fixed against the set count it was computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subset {
    name: String,
    size: u64,
    dev: f64,
    degree: u32,
    classification: IntersectionType,
    set_membership: BTreeSet<String>,
    #[serde(skip)]
    classified_with: usize,
}

impl Subset {
    /// Build a subset from a parsed record and its classification.
    ///
    /// `set_count` is the total number of sets the classification was computed
    /// against. The "unincluded" row is renamed to the empty intersection and
    /// the deviation is rounded to two decimals.
    pub fn from_record(
        record: SubsetRecord,
        classification: IntersectionType,
        set_count: usize,
    ) -> Self {
        let name = if record.name.eq_ignore_ascii_case("unincluded") {
            EMPTY_INTERSECTION_NAME.to_string()
        } else {
            record.name
        };

        Self {
            name,
            size: record.size,
            dev: round_to(record.dev, DECIMAL_PLACES),
            degree: record.degree,
            classification,
            set_membership: record.set_membership,
            classified_with: set_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn dev(&self) -> f64 {
        self.dev
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn classification(&self) -> IntersectionType {
        self.classification
    }

    pub fn set_membership(&self) -> &BTreeSet<String> {
        &self.set_membership
    }

    /// The set count this subset was classified against.
    pub fn classified_with(&self) -> usize {
        self.classified_with
    }

    /// Numeric value of a field, for sorting and percentiles.
    /// `Name` has no numeric value and yields 0.
    pub fn numeric(&self, field: SubsetField) -> f64 {
        match field {
            SubsetField::Name => 0.0,
            SubsetField::Size => self.size as f64,
            SubsetField::Deviation => self.dev,
            SubsetField::Degree => self.degree as f64,
        }
    }
}

/// Round to `places` decimals, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unincluded_row_is_renamed() {
        let record = SubsetRecord::new("Unincluded", 4, 0.0, 0, Vec::<String>::new());
        let subset = Subset::from_record(record, IntersectionType::Empty, 3);
        assert_eq!(subset.name(), "the empty intersection");
        assert!(subset.set_membership().is_empty());
    }

    #[test]
    fn test_deviation_rounded_on_construction() {
        let record = SubsetRecord::new("A", 4, -1.23456, 1, ["A"]);
        let subset = Subset::from_record(record, IntersectionType::Individual, 3);
        assert_eq!(subset.dev(), -1.23);
        assert_eq!(subset.classified_with(), 3);
    }

    #[test]
    fn test_record_deserializes_export_field_names() {
        let json = r#"{"name":"A∩B","size":5,"deviation":0.5,"degree":2,"setMembership":["A","B"]}"#;
        let record: SubsetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.dev, 0.5);
        assert_eq!(record.set_membership.len(), 2);
    }
}
