mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use crate::{
    config::Config, scheduler::pending_sweep, service::pending::PendingActionService,
    state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let _log_guard =
        startup::init_tracing(config.as_ref().ok().and_then(|c| c.log_dir.as_deref()));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Clan bot stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), error::AppError> {
    let db = startup::connect_to_database(&config).await?;
    let pending = PendingActionService::new();

    let mut scheduler = pending_sweep::start_scheduler(pending.clone()).await?;

    let state = AppState::new(db, pending, config.guild_id);
    let client = bot::start::init_bot(&config, state).await?;

    tracing::info!("Starting clan bot for guild {}", config.guild_id);
    let result = bot::start::start_bot(client).await;

    scheduler.shutdown().await?;
    tracing::info!("Clan bot stopped");

    result
}
