// src/services/loader.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::Reader;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::ScenarioError;
use crate::models::{
    BiodiversityRecord, Dataset, EnergyRecord, GhgRecord, WasteRecord, WaterRecord, YearRecord,
};

/// Immutable baselines for every domain, loaded once and shared across requests.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    pub ghg: Dataset<GhgRecord>,
    pub water: Dataset<WaterRecord>,
    pub energy: Dataset<EnergyRecord>,
    pub waste: Dataset<WasteRecord>,
    pub biodiversity: Dataset<BiodiversityRecord>,
    pub loaded_at: DateTime<Utc>,
}

impl DatasetStore {
    /// Reads `ghg.csv`, `water.csv`, `energy.csv`, `waste.csv` and
    /// `biodiversity.csv` from `data_dir`.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        info!("Loading baseline datasets from {}", dir.display());

        let store = DatasetStore {
            ghg: read_dataset(&dir.join("ghg.csv"))?,
            water: read_dataset(&dir.join("water.csv"))?,
            energy: read_dataset(&dir.join("energy.csv"))?,
            waste: read_dataset(&dir.join("waste.csv"))?,
            biodiversity: read_dataset(&dir.join("biodiversity.csv"))?,
            loaded_at: Utc::now(),
        };

        info!(
            "Loaded datasets: ghg={} water={} energy={} waste={} biodiversity={}",
            store.ghg.len(),
            store.water.len(),
            store.energy.len(),
            store.waste.len(),
            store.biodiversity.len()
        );
        Ok(store)
    }
}

/// Parses one domain's CSV file. Headers must match the record's field names.
pub fn read_dataset<R>(path: &Path) -> Result<Dataset<R>>
where
    R: YearRecord + DeserializeOwned,
{
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open dataset file {}", path.display()))?;
    let mut rdr = Reader::from_reader(file);

    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<R>().enumerate() {
        // Line 1 is the header.
        let record = row
            .map_err(|e| ScenarioError::InvalidInput(format!("line {}: {}", idx + 2, e)))
            .with_context(|| format!("Malformed record in {}", path.display()))?;
        records.push(record);
    }
    debug!("Read {} records from {}", records.len(), path.display());

    Dataset::new(records).with_context(|| format!("Invalid dataset in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn bundled_data_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn loads_bundled_data() {
        let store = DatasetStore::load(bundled_data_dir()).unwrap();
        assert_eq!(store.ghg.years(), vec![2018, 2019, 2020, 2021, 2022, 2023]);
        assert_eq!(store.ghg.latest().unwrap().emissions, 2.29);
        assert_eq!(store.water.latest().unwrap().freshwater, 17.4);
        assert_eq!(store.energy.latest().unwrap().renewables_pct, 9.0);
        assert_eq!(store.waste.latest().unwrap().hazardous, 23.9);
        assert_eq!(store.biodiversity.len(), 5);
        assert_eq!(store.biodiversity.latest().unwrap().sites_with_projects, 7);
    }

    #[test]
    fn sorts_unordered_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ghg.csv");
        fs::write(&path, "year,emissions\n2020,2.5\n2018,2.9\n").unwrap();

        let ds: Dataset<GhgRecord> = read_dataset(&path).unwrap();
        assert_eq!(ds.years(), vec![2018, 2020]);
    }

    #[test]
    fn reports_non_numeric_cell_with_file_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("water.csv");
        fs::write(&path, "year,freshwater,non_freshwater\n2018,lots,48.8\n").unwrap();

        let err = read_dataset::<WaterRecord>(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("water.csv"));
        assert!(matches!(
            err.downcast_ref::<ScenarioError>(),
            Some(ScenarioError::InvalidInput(msg)) if msg.starts_with("line 2")
        ));
    }

    #[test]
    fn rejects_missing_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("waste.csv");
        fs::write(&path, "year,hazardous\n2018,29.5\n").unwrap();

        assert!(read_dataset::<WasteRecord>(&path).is_err());
    }

    #[test]
    fn rejects_duplicate_years() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ghg.csv");
        fs::write(&path, "year,emissions\n2018,2.9\n2018,2.8\n").unwrap();

        let err = read_dataset::<GhgRecord>(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ScenarioError>(),
            Some(&ScenarioError::DuplicateYear(2018))
        );
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("energy.csv");
        fs::write(&path, "year,total_energy,renewables_pct\n").unwrap();

        let ds: Dataset<EnergyRecord> = read_dataset(&path).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = DatasetStore::load(dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("ghg.csv"));
    }
}
