// src/handlers/health.rs
use serde_json::json;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use crate::services::loader::DatasetStore;

pub async fn get_health(store: Arc<DatasetStore>) -> Result<Json, Rejection> {
    Ok(warp::reply::json(&json!({
        "status": "ok",
        "loaded_at": store.loaded_at,
    })))
}
