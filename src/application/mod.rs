// Application layer - Chart pipelines and summary access
pub mod chart_service;
pub mod summary_repository;
pub mod summary_store;
