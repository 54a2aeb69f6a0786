// src/routes.rs
use std::sync::Arc;
use warp::reject::Rejection;
use crate::handlers::{
    datasets::get_dataset,
    health::get_health,
    scenarios::{
        get_energy_scenario, get_ghg_scenario, get_parameters, get_waste_scenario,
        get_water_scenario, EnergyQuery, GhgQuery, WasteQuery, WaterQuery,
    },
    score::{get_score, ScoreQuery},
    summary::get_summary,
};
use crate::services::loader::DatasetStore;
use log::{debug, info};

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Filter, Reply};
use crate::handlers::error::ApiError;

// Turn rejections into JSON error bodies
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else if let Some(e) = err.find::<warp::reject::InvalidQuery>() {
        code = StatusCode::BAD_REQUEST;
        message = e.to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }
    debug!("Request rejected with {}: {}", code, message);

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(
    store: Arc<DatasetStore>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let store_filter = warp::any().map(move || store.clone());

    let dataset_route = warp::path!("api" / "v1" / "datasets" / String)
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_dataset);

    let ghg_route = warp::path!("api" / "v1" / "scenarios" / "ghg")
        .and(warp::get())
        .and(warp::query::<GhgQuery>())
        .and(store_filter.clone())
        .and_then(get_ghg_scenario);

    let water_route = warp::path!("api" / "v1" / "scenarios" / "water")
        .and(warp::get())
        .and(warp::query::<WaterQuery>())
        .and(store_filter.clone())
        .and_then(get_water_scenario);

    let energy_route = warp::path!("api" / "v1" / "scenarios" / "energy")
        .and(warp::get())
        .and(warp::query::<EnergyQuery>())
        .and(store_filter.clone())
        .and_then(get_energy_scenario);

    let waste_route = warp::path!("api" / "v1" / "scenarios" / "waste")
        .and(warp::get())
        .and(warp::query::<WasteQuery>())
        .and(store_filter.clone())
        .and_then(get_waste_scenario);

    let parameters_route = warp::path!("api" / "v1" / "scenarios" / "parameters")
        .and(warp::get())
        .and_then(get_parameters);

    let score_route = warp::path!("api" / "v1" / "score")
        .and(warp::get())
        .and(warp::query::<ScoreQuery>())
        .and_then(get_score);

    let summary_route = warp::path!("api" / "v1" / "summary")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_summary);

    let health_route = warp::path!("api" / "v1" / "health")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_health);

    info!("All routes configured successfully.");

    dataset_route
        .or(ghg_route)
        .or(water_route)
        .or(energy_route)
        .or(waste_route)
        .or(parameters_route)
        .or(score_route)
        .or(summary_route)
        .or(health_route)
        .recover(handle_rejection)
}
