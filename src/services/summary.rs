// src/services/summary.rs
use serde::Serialize;

use super::loader::DatasetStore;
use crate::models::{Dataset, YearRecord};

/// Latest-year value of one metric with its change against the year before.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub unit: &'static str,
    pub year: i32,
    pub value: f64,
    pub previous_year: Option<i32>,
    /// Percent change vs. `previous_year`; absent when there is no earlier
    /// year or the earlier value is zero.
    pub change_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiodiversitySnapshot {
    pub year: i32,
    pub habitat_restored: f64,
    pub sites_with_projects: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub kpis: Vec<Kpi>,
    pub biodiversity: Option<BiodiversitySnapshot>,
}

fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous * 100.0)
    }
}

/// Builds the KPI for `metric` from the last two years of `dataset`.
fn latest_kpi<R, F>(
    dataset: &Dataset<R>,
    label: &'static str,
    unit: &'static str,
    metric: F,
) -> Option<Kpi>
where
    R: YearRecord,
    F: Fn(&R) -> f64,
{
    let latest = dataset.latest()?;
    let previous = dataset.previous();
    let value = metric(latest);

    Some(Kpi {
        label,
        unit,
        year: latest.year(),
        value,
        previous_year: previous.map(|p| p.year()),
        change_pct: previous.and_then(|p| percent_change(metric(p), value)),
    })
}

/// Headline figures for the dashboard landing page. Empty datasets are skipped.
pub fn executive_summary(store: &DatasetStore) -> ExecutiveSummary {
    let kpis = [
        latest_kpi(&store.ghg, "GHG (Scope 1 & 2)", "Mt CO2e", |r| r.emissions),
        latest_kpi(&store.water, "Freshwater", "million m³", |r| r.freshwater),
        latest_kpi(&store.waste, "Hazardous Waste", "k tonnes", |r| r.hazardous),
    ]
    .into_iter()
    .flatten()
    .collect();

    let biodiversity = store.biodiversity.latest().map(|r| BiodiversitySnapshot {
        year: r.year,
        habitat_restored: r.habitat_restored,
        sites_with_projects: r.sites_with_projects,
    });

    ExecutiveSummary { kpis, biodiversity }
}
