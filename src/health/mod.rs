// src/health/mod.rs
mod checker;
mod response;
mod status;

pub use checker::{PollOutcome, StatusPoller, HEALTH_PATH, POLL_INTERVAL};
pub use response::HealthResponse;
pub use status::{Labels, Locale, Status};
