use sea_orm::DatabaseConnection;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::Config, error::AppError};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "clanbot=debug,serenity=warn,info";

/// Name of the daily rolling log file written inside `LOG_DIR`.
const LOG_FILE_NAME: &str = "clanbot.log";

/// Installs the global tracing subscriber.
///
/// Logs always go to the console. When `log_dir` is set they are also written to a daily
/// rolling file in that directory through a non-blocking writer.
///
/// # Arguments
/// - `log_dir` - Directory for the log file, console only when `None`
///
/// # Returns
/// - `Some(WorkerGuard)` - Guard flushing the file writer, to be held until exit
/// - `None` - No file output configured
pub fn init_tracing(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the clan event log table
/// exists before the bot handles any interaction.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
