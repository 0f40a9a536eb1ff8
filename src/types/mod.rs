pub mod config;
pub mod crop;
pub mod report;
pub mod scoring;
pub mod weather;
