//! Cron-driven runs of both workflows.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use xun_agent::Workflows;
use xun_core::AppConfig;

/// Start the scheduler and block until ctrl-c.
pub(crate) async fn run_schedule(workflows: Workflows, config: &AppConfig) -> anyhow::Result<()> {
    let workflows = Arc::new(workflows);
    let mut scheduler = JobScheduler::new().await?;

    register_trends_job(&scheduler, &config.trend_cron, Arc::clone(&workflows)).await?;
    register_mentions_job(&scheduler, &config.mentions_cron, workflows).await?;

    scheduler.start().await?;
    tracing::info!(
        trends = %config.trend_cron,
        mentions = %config.mentions_cron,
        "scheduler started"
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down scheduler");
    scheduler.shutdown().await?;
    Ok(())
}

async fn register_trends_job(
    scheduler: &JobScheduler,
    cron: &str,
    workflows: Arc<Workflows>,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async(cron, move |_uuid, _lock| {
        let workflows = Arc::clone(&workflows);
        Box::pin(async move {
            match workflows.trends.run().await {
                Ok(result) => tracing::info!(tweet_id = %result.post.id, "scheduler: trend analysis posted"),
                Err(e) => tracing::error!(error = %e, "scheduler: trend analysis failed"),
            }
        })
    })?;
    scheduler.add(job).await?;
    Ok(())
}

/// A tick that fires while the previous triage run is still going is skipped.
async fn register_mentions_job(
    scheduler: &JobScheduler,
    cron: &str,
    workflows: Arc<Workflows>,
) -> Result<(), JobSchedulerError> {
    let running = Arc::new(Mutex::new(()));
    let job = Job::new_async(cron, move |_uuid, _lock| {
        let workflows = Arc::clone(&workflows);
        let running = Arc::clone(&running);
        Box::pin(async move {
            let Ok(_guard) = running.try_lock() else {
                tracing::warn!("scheduler: previous mention triage still running, skipping tick");
                return;
            };
            match workflows.mentions.run().await {
                Ok(report) => tracing::info!(
                    processed = report.outcomes.len(),
                    failed = report.failed_count(),
                    "scheduler: mention triage complete"
                ),
                Err(e) => tracing::error!(error = %e, "scheduler: mention triage failed"),
            }
        })
    })?;
    scheduler.add(job).await?;
    Ok(())
}
