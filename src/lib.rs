pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod ml;
pub mod models;
pub mod recommend;
