pub mod config;
pub mod engine;
pub mod errors;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod schema;
pub mod storage;
