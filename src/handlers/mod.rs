// src/handlers/mod.rs
pub mod datasets;
pub mod error;
pub mod health;
pub mod scenarios;
pub mod score;
pub mod summary;
