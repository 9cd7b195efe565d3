use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::pending::PendingActionService};

/// Starts the pending prompt sweep.
///
/// Runs every minute and evicts prompts whose 60 second lifetime has passed. Expired
/// prompts are already inert when touched; the sweep only keeps the table from holding
/// prompts nobody answered.
///
/// # Arguments
/// - `pending`: Shared table of pending prompts
///
/// # Returns
/// - `Ok(JobScheduler)`: The running scheduler, to be shut down on exit
/// - `Err(AppError)`: The scheduler or job could not be created
pub async fn start_scheduler(pending: PendingActionService) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let pending = pending.clone();

        Box::pin(async move {
            let evicted = pending.sweep().await;
            tracing::debug!("Evicted {} expired pending prompts", evicted);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Pending prompt sweep scheduler started");

    Ok(scheduler)
}
