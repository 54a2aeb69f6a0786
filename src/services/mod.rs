// src/services/mod.rs
pub mod loader;
pub mod parameters;
pub mod scenarios;
pub mod scoring;
pub mod summary;
