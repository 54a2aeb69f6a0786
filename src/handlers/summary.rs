// src/handlers/summary.rs
use log::info;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use crate::services::loader::DatasetStore;
use crate::services::summary::executive_summary;

pub async fn get_summary(store: Arc<DatasetStore>) -> Result<Json, Rejection> {
    info!("Handling request for executive summary");
    let summary = executive_summary(&store);
    Ok(warp::reply::json(&summary))
}
