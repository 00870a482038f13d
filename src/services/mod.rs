pub mod indicators;
pub mod job_scheduler_service;
pub mod query_service;
pub mod score_cache;
pub mod score_combiner;
pub mod scoring_service;
pub mod timing_model;
pub mod value_model;
