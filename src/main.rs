use dotenv::dotenv;
use env_logger;
use log::{error, info};
use std::sync::Arc;
use warp::Filter;

use esg_scenario_dashboard::config::AppConfig;
use esg_scenario_dashboard::routes;
use esg_scenario_dashboard::services::loader::DatasetStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = AppConfig::from_env()?;
    info!("Using PORT: {}", config.port);

    let store = match DatasetStore::load(&config.data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to load baseline datasets: {:#}", e);
            return Err(e);
        }
    };

    let addr = config.socket_addr();
    info!("Will bind to: {}", addr);

    // Set up CORS
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET"]);

    let api = routes::routes(store).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
    Ok(())
}
