pub mod error;
pub mod config;
pub mod telemetry;
pub mod validation;
pub mod model;
pub mod db;
pub mod ops;
pub mod queries;
pub mod ai;
