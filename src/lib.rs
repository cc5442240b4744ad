// src/lib.rs
pub mod config;
pub mod error;
pub mod health;
pub mod indicator;
pub mod schedule;
