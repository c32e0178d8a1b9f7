pub mod app;
pub mod cli;
pub mod config;
pub mod detail;
pub mod error;
pub mod github;
pub mod models;
pub mod render;
pub mod routes;
pub mod search;
pub mod storage;
pub mod store;
pub mod types;
