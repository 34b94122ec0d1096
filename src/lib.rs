pub mod engine;
pub mod loader;
pub mod model;
pub mod observability;
pub mod query;
pub mod runner;
