//! Background jobs executed by the job scheduler service, independently of
//! user requests.
//!
//! Jobs are fault-tolerant (per-item failures are counted, never fatal to a
//! run), idempotent (safe to re-run; the cache upsert overwrites), and
//! observable through tracing plus the shared last-run summary.

pub mod score_refresh_job;
