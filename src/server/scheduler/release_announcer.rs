use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::release::ReleaseAnnouncer};

/// Every ten minutes, on the minute.
const SCHEDULE: &str = "0 */10 * * * *";

/// Starts the release announcement scheduler
///
/// The first check runs on the next tick of the schedule and only records the
/// current release; later checks announce any newer tag.
///
/// # Arguments
/// - `announcer`: Release announcer configured with the watched repository
pub async fn start_scheduler(announcer: ReleaseAnnouncer) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let announcer = announcer.clone();

        Box::pin(async move {
            if let Err(e) = announcer.check().await {
                tracing::error!("Error checking for new releases: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Release announcement scheduler started");

    Ok(())
}
