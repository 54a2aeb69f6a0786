use dotenv::dotenv;
use env_logger;
use esg_scenario_dashboard::config::AppConfig;
use esg_scenario_dashboard::services::loader::DatasetStore;
use esg_scenario_dashboard::services::parameters::{
    GHG_REDUCTION, SOLAR_CAPACITY, WASTE_REUSE, WATER_INVESTMENT,
};
use esg_scenario_dashboard::services::scenarios::{
    transform_energy, transform_ghg, transform_waste, transform_water,
};
use esg_scenario_dashboard::services::scoring::score_breakdown;
use esg_scenario_dashboard::services::summary::executive_summary;
use log::info;
use std::env;

fn param(var: &str, default: f64) -> Result<f64, Box<dyn std::error::Error>> {
    match env::var(var) {
        Ok(raw) => Ok(raw.trim().parse::<f64>()?),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    let store = DatasetStore::load(&config.data_dir)?;

    let ghg_pct = param("GHG_REDUCTION_PCT", GHG_REDUCTION.default)?;
    let investment = param("WATER_INVESTMENT_M", WATER_INVESTMENT.default)?;
    let solar_mw = param("SOLAR_MW", SOLAR_CAPACITY.default)?;
    let reuse = param("WASTE_REUSE_K", WASTE_REUSE.default)?;

    info!(
        "Running scenarios with ghg={}% water=${}M solar={}MW reuse={}k",
        ghg_pct, investment, solar_mw, reuse
    );

    for kpi in executive_summary(&store).kpis {
        info!(
            "  {} ({}): {} {} ({:?}% vs {:?})",
            kpi.label, kpi.year, kpi.value, kpi.unit, kpi.change_pct, kpi.previous_year
        );
    }

    info!("GHG scenario:");
    for r in transform_ghg(&store.ghg, ghg_pct)?.records() {
        info!("  {}: {:.3} Mt CO2e", r.year, r.emissions);
    }

    let (water, reduction_pct) = transform_water(&store.water, investment)?;
    info!("Water scenario (freshwater -{}%):", reduction_pct);
    for r in water.records() {
        info!(
            "  {}: fresh {:.2} / non-fresh {:.2} million m³",
            r.year, r.freshwater, r.non_freshwater
        );
    }

    info!("Energy scenario:");
    for r in transform_energy(&store.energy, solar_mw)?.records() {
        info!(
            "  {}: {}% renewables of {} million GJ",
            r.year, r.renewables_pct, r.total_energy
        );
    }

    info!("Waste scenario:");
    for r in transform_waste(&store.waste, reuse)?.records() {
        info!(
            "  {}: hazardous {:.3} / non-hazardous {:.3} k tonnes",
            r.year, r.hazardous, r.non_hazardous
        );
    }

    let breakdown = score_breakdown(ghg_pct, investment, solar_mw, reuse)?;
    info!("Overall ESG scenario score: {} / 100", breakdown.total);
    println!("{}", serde_json::to_string_pretty(&breakdown)?);

    Ok(())
}
