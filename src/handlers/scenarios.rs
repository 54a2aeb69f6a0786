// src/handlers/scenarios.rs
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::error::ScenarioError;
use crate::models::Dataset;
use crate::services::loader::DatasetStore;
use crate::services::parameters::{
    catalog, GHG_REDUCTION, SOLAR_CAPACITY, WASTE_REUSE, WATER_INVESTMENT,
};
use crate::services::scenarios::{transform_energy, transform_ghg, transform_waste, transform_water};

#[derive(Serialize)]
struct ScenarioResponse<'a, R> {
    parameter: f64,
    baseline: &'a Dataset<R>,
    scenario: Dataset<R>,
}

#[derive(Serialize)]
struct WaterScenarioResponse<'a, R> {
    parameter: f64,
    reduction_pct: f64,
    baseline: &'a Dataset<R>,
    scenario: Dataset<R>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GhgQuery {
    pub reduction_pct: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WaterQuery {
    pub investment_m: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnergyQuery {
    pub solar_mw: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WasteQuery {
    pub reuse_k: Option<f64>,
}

fn reject(domain: &str, e: ScenarioError) -> Rejection {
    error!("Failed to apply {} scenario: {}", domain, e);
    warp::reject::custom(ApiError::from(e))
}

pub async fn get_ghg_scenario(
    query: GhgQuery,
    store: Arc<DatasetStore>,
) -> Result<Json, Rejection> {
    let pct = query.reduction_pct.unwrap_or(GHG_REDUCTION.default);
    info!("Handling GHG scenario request: reduction_pct={}", pct);

    let scenario = transform_ghg(&store.ghg, pct).map_err(|e| reject("GHG", e))?;
    Ok(warp::reply::json(&ScenarioResponse {
        parameter: pct,
        baseline: &store.ghg,
        scenario,
    }))
}

pub async fn get_water_scenario(
    query: WaterQuery,
    store: Arc<DatasetStore>,
) -> Result<Json, Rejection> {
    let investment = query.investment_m.unwrap_or(WATER_INVESTMENT.default);
    info!("Handling water scenario request: investment_m={}", investment);

    let (scenario, reduction_pct) =
        transform_water(&store.water, investment).map_err(|e| reject("water", e))?;
    info!("Estimated freshwater reduction: {}%", reduction_pct);

    Ok(warp::reply::json(&WaterScenarioResponse {
        parameter: investment,
        reduction_pct,
        baseline: &store.water,
        scenario,
    }))
}

pub async fn get_energy_scenario(
    query: EnergyQuery,
    store: Arc<DatasetStore>,
) -> Result<Json, Rejection> {
    let solar_mw = query.solar_mw.unwrap_or(SOLAR_CAPACITY.default);
    info!("Handling energy scenario request: solar_mw={}", solar_mw);

    let scenario = transform_energy(&store.energy, solar_mw).map_err(|e| reject("energy", e))?;
    Ok(warp::reply::json(&ScenarioResponse {
        parameter: solar_mw,
        baseline: &store.energy,
        scenario,
    }))
}

pub async fn get_waste_scenario(
    query: WasteQuery,
    store: Arc<DatasetStore>,
) -> Result<Json, Rejection> {
    let reuse = query.reuse_k.unwrap_or(WASTE_REUSE.default);
    info!("Handling waste scenario request: reuse_k={}", reuse);

    let scenario = transform_waste(&store.waste, reuse).map_err(|e| reject("waste", e))?;
    Ok(warp::reply::json(&ScenarioResponse {
        parameter: reuse,
        baseline: &store.waste,
        scenario,
    }))
}

pub async fn get_parameters() -> Result<Json, Rejection> {
    Ok(warp::reply::json(&catalog()))
}
