// src/handlers/score.rs
use log::{error, info};
use serde::Deserialize;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::services::parameters::{SCORE_GHG, SCORE_SOLAR, SCORE_WASTE, SCORE_WATER};
use crate::services::scoring::score_breakdown;

#[derive(Debug, Default, Deserialize)]
pub struct ScoreQuery {
    pub ghg: Option<f64>,
    pub water: Option<f64>,
    pub solar: Option<f64>,
    pub waste: Option<f64>,
}

pub async fn get_score(query: ScoreQuery) -> Result<Json, Rejection> {
    let ghg = query.ghg.unwrap_or(SCORE_GHG.default);
    let water = query.water.unwrap_or(SCORE_WATER.default);
    let solar = query.solar.unwrap_or(SCORE_SOLAR.default);
    let waste = query.waste.unwrap_or(SCORE_WASTE.default);
    info!(
        "Handling score request: ghg={} water={} solar={} waste={}",
        ghg, water, solar, waste
    );

    let breakdown = score_breakdown(ghg, water, solar, waste).map_err(|e| {
        error!("Failed to score scenario: {}", e);
        warp::reject::custom(ApiError::from(e))
    })?;

    info!("Scenario score: {}", breakdown.total);
    Ok(warp::reply::json(&breakdown))
}
