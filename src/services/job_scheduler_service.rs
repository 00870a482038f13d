use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::errors::AppError;
use crate::external::price_provider::PriceProvider;
use crate::services::score_cache::ScoreCache;
use crate::services::scoring_service::ScoringConfig;

/// Everything a background job needs, passed explicitly - no process-wide
/// globals.
#[derive(Clone)]
pub struct JobContext {
    pub cache: Arc<dyn ScoreCache>,
    pub price_provider: Arc<dyn PriceProvider>,
    pub universe: Arc<Vec<String>>,
    pub scoring: ScoringConfig,
    pub last_refresh: Arc<RwLock<Option<RefreshSummary>>>,
}

#[derive(Debug)]
pub struct JobResult {
    pub items_processed: i32,
    pub items_failed: i32,
}

/// Outcome of the most recent refresh pass, kept in process for the manual
/// trigger response and diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshSummary {
    pub processed: i32,
    pub failed: i32,
    pub duration_ms: i64,
    pub finished_at: DateTime<Utc>,
}

pub struct JobSchedulerService {
    scheduler: JobScheduler,
    context: JobContext,
    refresh_schedule: String,
}

impl JobSchedulerService {
    pub async fn new(context: JobContext, refresh_schedule: String) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::External(format!("failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            context,
            refresh_schedule,
        })
    }

    /// Register and start the scheduled jobs.
    pub async fn start(&mut self) -> Result<(), AppError> {
        info!("🚀 Starting job scheduler...");

        // Test mode runs the refresh every minute instead of once per
        // trading day.
        let test_mode = std::env::var("JOB_SCHEDULER_TEST_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        let (schedule, description) = if test_mode {
            info!("⚠️  JOB SCHEDULER IN TEST MODE - jobs run every minute!");
            ("0 */1 * * * *".to_string(), "Every minute (TEST MODE)".to_string())
        } else {
            (
                self.refresh_schedule.clone(),
                "Business-day mornings at market open".to_string(),
            )
        };

        self.schedule_job(
            &schedule,
            "refresh_scores",
            &description,
            crate::jobs::score_refresh_job::refresh_all_scores,
        )
        .await?;

        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::External(format!("failed to start scheduler: {e}")))?;

        info!("✅ Job scheduler started");
        Ok(())
    }

    /// Stop the scheduler gracefully.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        info!("🛑 Stopping job scheduler...");
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::External(format!("failed to stop scheduler: {e}")))?;
        info!("✅ Job scheduler stopped");
        Ok(())
    }

    async fn schedule_job<F, Fut>(
        &mut self,
        schedule: &str,
        job_name: &'static str,
        description: &str,
        job_fn: F,
    ) -> Result<(), AppError>
    where
        F: Fn(JobContext) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<JobResult, AppError>> + Send + 'static,
    {
        let context = self.context.clone();
        let job_fn = Arc::new(job_fn);

        let job = Job::new_async(schedule, move |_uuid, _l| {
            let context = context.clone();
            let job_fn = job_fn.clone();
            Box::pin(async move {
                run_job(job_name, context, job_fn).await;
            })
        })
        .map_err(|e| AppError::External(format!("failed to create job {job_name}: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::External(format!("failed to add job {job_name}: {e}")))?;

        info!("📅 Scheduled: {} - {} [cron: {}]", job_name, description, schedule);
        Ok(())
    }
}

async fn run_job<F, Fut>(job_name: &str, context: JobContext, job_fn: Arc<F>)
where
    F: Fn(JobContext) -> Fut,
    Fut: std::future::Future<Output = Result<JobResult, AppError>>,
{
    info!("🏃 Starting job: {}", job_name);
    let started_at = Utc::now();

    match job_fn(context).await {
        Ok(result) => {
            let duration_ms = (Utc::now() - started_at).num_milliseconds();
            info!(
                "✅ Job completed: {} (processed: {}, failed: {}, duration: {}ms)",
                job_name, result.items_processed, result.items_failed, duration_ms
            );
        }
        Err(e) => {
            error!("❌ Job failed: {} - {}", job_name, e);
        }
    }
}
