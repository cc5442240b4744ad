// src/schedule/mod.rs
mod task;

pub use task::RepeatingTask;
