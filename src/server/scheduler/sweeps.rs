use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{license::LicenseService, payment::PaymentService},
};

/// Every hour at minute 0.
const SWEEP_SCHEDULE: &str = "0 0 * * * *";

/// Starts the hourly license expiry and overdue dues sweeps.
///
/// A failing sweep is logged and retried on the next tick.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            run_sweeps(&db, Utc::now()).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Sweep scheduler started");

    Ok(())
}

/// Outcome of one sweep run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub expired_licenses: usize,
    pub overdue_payments: usize,
}

/// Runs both sweeps as of `now`. A failure in one does not skip the other.
pub async fn run_sweeps(db: &DatabaseConnection, now: DateTime<Utc>) -> SweepReport {
    let mut report = SweepReport::default();

    match LicenseService::new(db).expire_lapsed(now).await {
        Ok(expired) => report.expired_licenses = expired.len(),
        Err(e) => tracing::error!("License expiry sweep failed: {}", e),
    }

    match PaymentService::new(db).mark_overdue(now).await {
        Ok(overdue) => report.overdue_payments = overdue.len(),
        Err(e) => tracing::error!("Overdue payment sweep failed: {}", e),
    }

    report
}
