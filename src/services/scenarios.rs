// src/services/scenarios.rs
use crate::error::ScenarioError;
use crate::models::{Dataset, EnergyRecord, GhgRecord, WasteRecord, WaterRecord};

/// Each full $10M of recycling investment cuts freshwater use by 1 point.
const WATER_INVESTMENT_STEP_M: f64 = 10.0;
/// Each full 10 MW of new solar adds 1 point of renewable share.
const SOLAR_STEP_MW: f64 = 10.0;
const RENEWABLES_CAP_PCT: f64 = 100.0;
/// Fraction of hazardous waste avoided per thousand tonnes reused.
const HAZARDOUS_RECOVERY_PER_K: f64 = 0.005;
/// Fraction of non-hazardous waste avoided per thousand tonnes reused.
const NON_HAZARDOUS_RECOVERY_PER_K: f64 = 0.003;

fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ScenarioError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScenarioError::non_finite(name, value))
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, ScenarioError> {
    let value = ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(ScenarioError::OutOfDomainParameter { name, value });
    }
    Ok(value)
}

/// Applies an extra percentage cut to every year's emissions.
///
/// Negative percentages are accepted and raise emissions. Above 100% the
/// result is floored at zero instead of going negative.
pub fn transform_ghg(
    baseline: &Dataset<GhgRecord>,
    additional_reduction_pct: f64,
) -> Result<Dataset<GhgRecord>, ScenarioError> {
    let pct = ensure_finite("additional_reduction_pct", additional_reduction_pct)?;
    let factor = 1.0 - pct / 100.0;

    Ok(baseline.map_records(|r| GhgRecord {
        year: r.year,
        emissions: (r.emissions * factor).max(0.0),
    }))
}

/// Cuts freshwater withdrawal by one point per full $10M invested.
///
/// Returns the new dataset and the reduction percentage that was applied.
/// Non-freshwater withdrawal is left untouched.
pub fn transform_water(
    baseline: &Dataset<WaterRecord>,
    investment_million_usd: f64,
) -> Result<(Dataset<WaterRecord>, f64), ScenarioError> {
    let investment = ensure_non_negative("investment_million_usd", investment_million_usd)?;
    let reduction_pct = (investment / WATER_INVESTMENT_STEP_M).floor();
    let factor = 1.0 - reduction_pct / 100.0;

    let scenario = baseline.map_records(|r| WaterRecord {
        year: r.year,
        freshwater: (r.freshwater * factor).max(0.0),
        non_freshwater: r.non_freshwater,
    });

    Ok((scenario, reduction_pct))
}

/// Raises the renewable share by one point per full 10 MW of solar, capped at 100%.
pub fn transform_energy(
    baseline: &Dataset<EnergyRecord>,
    solar_mw_added: f64,
) -> Result<Dataset<EnergyRecord>, ScenarioError> {
    let solar_mw = ensure_non_negative("solar_mw_added", solar_mw_added)?;
    let step = (solar_mw / SOLAR_STEP_MW).floor();

    Ok(baseline.map_records(|r| EnergyRecord {
        year: r.year,
        total_energy: r.total_energy,
        renewables_pct: (r.renewables_pct + step).min(RENEWABLES_CAP_PCT),
    }))
}

/// Proportional waste reduction from byproduct reuse.
///
/// Hazardous waste drops 0.5% and non-hazardous 0.3% of its own value per
/// thousand tonnes reused. Each field is floored at zero independently.
pub fn transform_waste(
    baseline: &Dataset<WasteRecord>,
    reuse_k_tonnes: f64,
) -> Result<Dataset<WasteRecord>, ScenarioError> {
    let reuse = ensure_non_negative("reuse_k_tonnes", reuse_k_tonnes)?;

    Ok(baseline.map_records(|r| WasteRecord {
        year: r.year,
        hazardous: (r.hazardous - r.hazardous * HAZARDOUS_RECOVERY_PER_K * reuse).max(0.0),
        non_hazardous: (r.non_hazardous - r.non_hazardous * NON_HAZARDOUS_RECOVERY_PER_K * reuse)
            .max(0.0),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn ghg_baseline() -> Dataset<GhgRecord> {
        Dataset::new(
            [(2018, 2.94), (2019, 2.65), (2020, 2.51), (2021, 2.54), (2022, 2.41), (2023, 2.29)]
                .into_iter()
                .map(|(year, emissions)| GhgRecord { year, emissions })
                .collect(),
        )
        .unwrap()
    }

    fn water_baseline() -> Dataset<WaterRecord> {
        Dataset::new(vec![
            WaterRecord { year: 2022, freshwater: 19.6, non_freshwater: 49.4 },
            WaterRecord { year: 2023, freshwater: 17.4, non_freshwater: 47.3 },
        ])
        .unwrap()
    }

    fn energy_baseline() -> Dataset<EnergyRecord> {
        Dataset::new(vec![
            EnergyRecord { year: 2022, total_energy: 35.1, renewables_pct: 8.0 },
            EnergyRecord { year: 2023, total_energy: 36.4, renewables_pct: 9.0 },
        ])
        .unwrap()
    }

    fn waste_baseline() -> Dataset<WasteRecord> {
        Dataset::new(vec![
            WasteRecord { year: 2022, hazardous: 28.0, non_hazardous: 10.5 },
            WasteRecord { year: 2023, hazardous: 23.9, non_hazardous: 21.5 },
        ])
        .unwrap()
    }

    #[test]
    fn ghg_scales_every_year() {
        let baseline = ghg_baseline();
        for pct in [0.0, 10.0, 30.0, 100.0] {
            let scenario = transform_ghg(&baseline, pct).unwrap();
            assert_eq!(scenario.years(), baseline.years());
            for (b, s) in baseline.records().iter().zip(scenario.records()) {
                assert_eq!(s.emissions, b.emissions * (1.0 - pct / 100.0));
            }
        }
    }

    #[test]
    fn ghg_zero_reduction_is_identity() {
        let baseline = ghg_baseline();
        assert_eq!(transform_ghg(&baseline, 0.0).unwrap(), baseline);
    }

    #[test]
    fn ghg_negative_pct_raises_emissions() {
        let baseline = ghg_baseline();
        let scenario = transform_ghg(&baseline, -10.0).unwrap();
        let last = scenario.latest().unwrap();
        assert!((last.emissions - 2.29 * 1.1).abs() < EPS);
    }

    #[test]
    fn ghg_over_hundred_pct_floors_at_zero() {
        let scenario = transform_ghg(&ghg_baseline(), 150.0).unwrap();
        assert!(scenario.records().iter().all(|r| r.emissions == 0.0));
    }

    #[test]
    fn ghg_rejects_nan() {
        assert!(matches!(
            transform_ghg(&ghg_baseline(), f64::NAN),
            Err(ScenarioError::InvalidInput(_))
        ));
    }

    #[test]
    fn water_is_a_step_function() {
        let baseline = water_baseline();

        let (unchanged, pct) = transform_water(&baseline, 0.0).unwrap();
        assert_eq!(pct, 0.0);
        assert_eq!(unchanged, baseline);

        let (_, pct) = transform_water(&baseline, 9.99).unwrap();
        assert_eq!(pct, 0.0);

        let (scenario, pct) = transform_water(&baseline, 25.0).unwrap();
        assert_eq!(pct, 2.0);
        let last = scenario.latest().unwrap();
        assert!((last.freshwater - 17.4 * 0.98).abs() < EPS);
        assert_eq!(last.non_freshwater, 47.3);
    }

    #[test]
    fn water_rejects_negative_investment() {
        let err = transform_water(&water_baseline(), -10.0).unwrap_err();
        assert_eq!(
            err,
            ScenarioError::OutOfDomainParameter { name: "investment_million_usd", value: -10.0 }
        );
    }

    #[test]
    fn water_huge_investment_floors_at_zero() {
        let (scenario, pct) = transform_water(&water_baseline(), 5000.0).unwrap();
        assert_eq!(pct, 500.0);
        assert!(scenario.records().iter().all(|r| r.freshwater == 0.0));
    }

    #[test]
    fn energy_adds_whole_steps() {
        let scenario = transform_energy(&energy_baseline(), 95.0).unwrap();
        let last = scenario.latest().unwrap();
        assert_eq!(last.renewables_pct, 18.0);
        assert_eq!(last.total_energy, 36.4);
    }

    #[test]
    fn energy_caps_at_hundred() {
        let scenario = transform_energy(&energy_baseline(), 2000.0).unwrap();
        assert!(scenario.records().iter().all(|r| r.renewables_pct == 100.0));
    }

    #[test]
    fn energy_rejects_negative_solar() {
        assert!(matches!(
            transform_energy(&energy_baseline(), -5.0),
            Err(ScenarioError::OutOfDomainParameter { name: "solar_mw_added", .. })
        ));
    }

    #[test]
    fn waste_reduces_proportionally() {
        let scenario = transform_waste(&waste_baseline(), 5.0).unwrap();
        let last = scenario.latest().unwrap();
        assert!((last.hazardous - 23.3025).abs() < EPS);
        assert!((last.non_hazardous - 21.5 * 0.985).abs() < EPS);
    }

    #[test]
    fn waste_floors_each_field_at_zero() {
        // 250k zeroes hazardous (0.005 * 250 = 1.25) but not non-hazardous (0.75).
        let scenario = transform_waste(&waste_baseline(), 250.0).unwrap();
        for r in scenario.records() {
            assert_eq!(r.hazardous, 0.0);
            assert!(r.non_hazardous > 0.0);
        }
    }

    #[test]
    fn waste_rejects_infinite_reuse() {
        assert!(matches!(
            transform_waste(&waste_baseline(), f64::INFINITY),
            Err(ScenarioError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_baselines_stay_empty() {
        assert!(transform_ghg(&Dataset::default(), 10.0).unwrap().is_empty());
        assert!(transform_water(&Dataset::default(), 10.0).unwrap().0.is_empty());
        assert!(transform_energy(&Dataset::default(), 10.0).unwrap().is_empty());
        assert!(transform_waste(&Dataset::default(), 10.0).unwrap().is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let ghg = ghg_baseline();
        let a = transform_ghg(&ghg, 12.5).unwrap();
        let b = transform_ghg(&ghg, 12.5).unwrap();
        for (x, y) in a.records().iter().zip(b.records()) {
            assert_eq!(x.emissions.to_bits(), y.emissions.to_bits());
        }

        let water = water_baseline();
        let (a, pct_a) = transform_water(&water, 37.0).unwrap();
        let (b, pct_b) = transform_water(&water, 37.0).unwrap();
        assert_eq!(pct_a.to_bits(), pct_b.to_bits());
        for (x, y) in a.records().iter().zip(b.records()) {
            assert_eq!(x.freshwater.to_bits(), y.freshwater.to_bits());
            assert_eq!(x.non_freshwater.to_bits(), y.non_freshwater.to_bits());
        }

        let energy = energy_baseline();
        let a = transform_energy(&energy, 45.0).unwrap();
        let b = transform_energy(&energy, 45.0).unwrap();
        for (x, y) in a.records().iter().zip(b.records()) {
            assert_eq!(x.renewables_pct.to_bits(), y.renewables_pct.to_bits());
            assert_eq!(x.total_energy.to_bits(), y.total_energy.to_bits());
        }

        let waste = waste_baseline();
        let a = transform_waste(&waste, 7.0).unwrap();
        let b = transform_waste(&waste, 7.0).unwrap();
        for (x, y) in a.records().iter().zip(b.records()) {
            assert_eq!(x.hazardous.to_bits(), y.hazardous.to_bits());
            assert_eq!(x.non_hazardous.to_bits(), y.non_hazardous.to_bits());
        }
    }

    #[test]
    fn energy_zero_solar_is_identity() {
        let baseline = energy_baseline();
        assert_eq!(transform_energy(&baseline, 0.0).unwrap(), baseline);
    }

    #[test]
    fn outputs_stay_non_negative() {
        for p in [0.0, 1.0, 10.0, 99.0, 100.0, 1000.0, 1e6] {
            let g = transform_ghg(&ghg_baseline(), p).unwrap();
            assert!(g.records().iter().all(|r| r.emissions >= 0.0));
            let (w, _) = transform_water(&water_baseline(), p).unwrap();
            assert!(w
                .records()
                .iter()
                .all(|r| r.freshwater >= 0.0 && r.non_freshwater >= 0.0));
            let e = transform_energy(&energy_baseline(), p).unwrap();
            assert!(e
                .records()
                .iter()
                .all(|r| (0.0..=100.0).contains(&r.renewables_pct)));
            let ws = transform_waste(&waste_baseline(), p).unwrap();
            assert!(ws
                .records()
                .iter()
                .all(|r| r.hazardous >= 0.0 && r.non_hazardous >= 0.0));
        }
    }

    #[test]
    fn transforms_run_in_parallel_threads() {
        let baseline = std::sync::Arc::new(ghg_baseline());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let baseline = baseline.clone();
                std::thread::spawn(move || transform_ghg(&baseline, i as f64 * 10.0).unwrap())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let scenario = handle.join().unwrap();
            assert_eq!(scenario, transform_ghg(&baseline, i as f64 * 10.0).unwrap());
        }
    }
}
