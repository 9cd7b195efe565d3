use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord client with the clan event handler.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built (e.g. malformed token)
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Runs the Discord client until it disconnects or a shutdown signal arrives.
///
/// Ctrl+C and SIGTERM close every shard, which makes this function return.
///
/// # Returns
/// - `Ok(())` - Client stopped after a shutdown signal
/// - `Err(AppError)` - Connection to Discord failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, closing shards");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
