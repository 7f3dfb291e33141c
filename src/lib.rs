pub mod engine;
pub mod fixtures;
pub mod report;
pub mod rules;
pub mod types;
