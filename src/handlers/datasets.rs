// src/handlers/datasets.rs
use log::{error, info};
use std::str::FromStr;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::services::loader::DatasetStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Ghg,
    Water,
    Energy,
    Waste,
    Biodiversity,
}

impl FromStr for Domain {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ghg" => Ok(Domain::Ghg),
            "water" => Ok(Domain::Water),
            "energy" => Ok(Domain::Energy),
            "waste" => Ok(Domain::Waste),
            "biodiversity" => Ok(Domain::Biodiversity),
            other => Err(ApiError::not_found(format!("Unknown dataset: {}", other))),
        }
    }
}

pub async fn get_dataset(domain: String, store: Arc<DatasetStore>) -> Result<Json, Rejection> {
    info!("Handling request for {} baseline", domain);

    let domain: Domain = domain.parse().map_err(|e: ApiError| {
        error!("{}", e);
        warp::reject::custom(e)
    })?;

    let reply = match domain {
        Domain::Ghg => warp::reply::json(&store.ghg),
        Domain::Water => warp::reply::json(&store.water),
        Domain::Energy => warp::reply::json(&store.energy),
        Domain::Waste => warp::reply::json(&store.waste),
        Domain::Biodiversity => warp::reply::json(&store.biodiversity),
    };
    Ok(reply)
}
