pub mod score_queries;
