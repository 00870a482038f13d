//! Score refresh background job.
//!
//! Runs once per trading day at market open (and on demand through the
//! manual trigger route). For every symbol in the configured universe it
//! recomputes the full score record and overwrites the cached row. This job
//! is the ONLY writer to the score cache; the request-serving paths never
//! write, so refresh passes cannot race each other's symbols and readers
//! simply observe a mix of old and new rows mid-pass.

use chrono::Utc;
use tokio::time::Duration;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::services::job_scheduler_service::{JobContext, JobResult, RefreshSummary};
use crate::services::scoring_service;

/// Pacing between provider calls within a pass.
const INTER_SYMBOL_DELAY_MS: u64 = 200;

/// One full pass over the universe. Per-symbol failures are recorded and
/// skipped; the pass itself always completes and reports its counts.
pub async fn refresh_all_scores(ctx: JobContext) -> Result<JobResult, AppError> {
    info!("📊 Refreshing scores for {} universe symbols", ctx.universe.len());
    if !ctx.cache.enabled() {
        info!("score cache disabled - this pass computes but persists nothing");
    }
    let started_at = Utc::now();

    let mut processed = 0;
    let mut failed = 0;

    for symbol in ctx.universe.iter() {
        match scoring_service::compute_score(ctx.price_provider.as_ref(), symbol, &ctx.scoring)
            .await
        {
            Ok(record) => match ctx.cache.upsert(&record).await {
                Ok(()) => {
                    processed += 1;
                    info!(
                        "✅ Refreshed {} (final score {:.1}, {})",
                        symbol, record.final_score, record.signal
                    );
                }
                Err(e) => {
                    failed += 1;
                    warn!("❌ Failed to store score for {}: {}", symbol, e);
                }
            },
            Err(e) => {
                failed += 1;
                warn!("❌ Failed to score {}: {}", symbol, e);
            }
        }

        tokio::time::sleep(Duration::from_millis(INTER_SYMBOL_DELAY_MS)).await;
    }

    let duration_ms = (Utc::now() - started_at).num_milliseconds();
    info!(
        "✅ Score refresh completed: {} refreshed, {} failed, {}ms",
        processed, failed, duration_ms
    );

    *ctx.last_refresh.write() = Some(RefreshSummary {
        processed,
        failed,
        duration_ms,
        finished_at: Utc::now(),
    });

    Ok(JobResult {
        items_processed: processed,
        items_failed: failed,
    })
}
