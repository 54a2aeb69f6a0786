// src/models.rs
use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// A single year of one metric domain.
pub trait YearRecord: Clone {
    fn year(&self) -> i32;

    /// Every numeric field as `(name, value)`, used to validate baselines.
    fn fields(&self) -> Vec<(&'static str, f64)>;

    /// Domain-specific bound beyond non-negativity, as an error message.
    fn out_of_range(&self) -> Option<String> {
        None
    }
}

/// Scope 1+2 emissions in Mt CO2e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhgRecord {
    pub year: i32,
    pub emissions: f64,
}

/// Water withdrawal in million m³.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterRecord {
    pub year: i32,
    pub freshwater: f64,
    pub non_freshwater: f64,
}

/// Total consumption in million GJ and the renewable share (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    pub year: i32,
    pub total_energy: f64,
    pub renewables_pct: f64,
}

/// Waste in thousand tonnes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    pub year: i32,
    pub hazardous: f64,
    pub non_hazardous: f64,
}

/// Restoration progress. Display only, no scenario touches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiodiversityRecord {
    pub year: i32,
    pub habitat_restored: f64,
    pub sites_with_projects: u32,
}

impl YearRecord for GhgRecord {
    fn year(&self) -> i32 {
        self.year
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![("emissions", self.emissions)]
    }
}

impl YearRecord for WaterRecord {
    fn year(&self) -> i32 {
        self.year
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("freshwater", self.freshwater),
            ("non_freshwater", self.non_freshwater),
        ]
    }
}

impl YearRecord for EnergyRecord {
    fn year(&self) -> i32 {
        self.year
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("total_energy", self.total_energy),
            ("renewables_pct", self.renewables_pct),
        ]
    }

    fn out_of_range(&self) -> Option<String> {
        if self.renewables_pct > 100.0 {
            Some(format!(
                "renewables_pct = {} in year {} exceeds 100",
                self.renewables_pct, self.year
            ))
        } else {
            None
        }
    }
}

impl YearRecord for WasteRecord {
    fn year(&self) -> i32 {
        self.year
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("hazardous", self.hazardous),
            ("non_hazardous", self.non_hazardous),
        ]
    }
}

impl YearRecord for BiodiversityRecord {
    fn year(&self) -> i32 {
        self.year
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("habitat_restored", self.habitat_restored),
            ("sites_with_projects", f64::from(self.sites_with_projects)),
        ]
    }
}

/// Year-ascending series of records for one domain, years unique.
///
/// Baselines are built once through [`Dataset::new`] and never mutated;
/// scenarios produce fresh datasets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset<R> {
    records: Vec<R>,
}

impl<R: YearRecord> Dataset<R> {
    /// Sorts by year and validates that years are unique and every numeric
    /// field is finite and non-negative.
    pub fn new(mut records: Vec<R>) -> Result<Self, ScenarioError> {
        records.sort_by_key(|r| r.year());

        if let Some(pair) = records.windows(2).find(|w| w[0].year() == w[1].year()) {
            return Err(ScenarioError::DuplicateYear(pair[0].year()));
        }

        for record in &records {
            for (field, value) in record.fields() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ScenarioError::InvalidInput(format!(
                        "{} = {} in year {} must be a finite non-negative number",
                        field,
                        value,
                        record.year()
                    )));
                }
            }
            if let Some(msg) = record.out_of_range() {
                return Err(ScenarioError::InvalidInput(msg));
            }
        }

        Ok(Dataset { records })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year()).collect()
    }

    pub fn get(&self, year: i32) -> Option<&R> {
        self.records
            .binary_search_by_key(&year, |r| r.year())
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn latest(&self) -> Option<&R> {
        self.records.last()
    }

    /// The record before the latest one, if any.
    pub fn previous(&self) -> Option<&R> {
        self.records.iter().rev().nth(1)
    }

    /// Record-wise rewrite. `f` must keep the year, so ordering carries over.
    pub(crate) fn map_records<F>(&self, f: F) -> Self
    where
        F: Fn(&R) -> R,
    {
        Dataset {
            records: self.records.iter().map(f).collect(),
        }
    }
}

impl<R> Default for Dataset<R> {
    fn default() -> Self {
        Dataset { records: Vec::new() }
    }
}
