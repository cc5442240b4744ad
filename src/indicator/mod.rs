// src/indicator/mod.rs
mod display;

pub use display::{IndicatorState, LogIndicator, MemoryIndicator};

use crate::health::Status;

/// Base class every indicator carries in front of its status token.
pub const CLASS_PREFIX: &str = "status-indicator";

pub const SERVER_STATUS_ID: &str = "server-status";
pub const DB_STATUS_ID: &str = "db-status";

/// A UI element showing one of {unknown, ok, error}.
pub trait StatusIndicator: Send + Sync {
    fn set_class_name(&self, class_name: &str);
    fn set_text(&self, text: &str);
}

pub fn class_name(status: Status) -> String {
    format!("{} {}", CLASS_PREFIX, status)
}

/// Sets the indicator's class to the base class plus `status`, and its text to `text`.
pub fn render_status(indicator: &dyn StatusIndicator, status: Status, text: &str) {
    indicator.set_class_name(&class_name(status));
    indicator.set_text(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_sets_prefixed_class_and_text() {
        let indicator = MemoryIndicator::new("Неизвестно");
        render_status(&indicator, Status::Error, "Ошибка");

        let state = indicator.state();
        assert_eq!(state.class_name, "status-indicator error");
        assert_eq!(state.text, "Ошибка");
        assert!(state.updated_at.is_some());
    }

    #[test]
    fn last_render_wins() {
        let indicator = MemoryIndicator::new("Неизвестно");
        render_status(&indicator, Status::Error, "Ошибка");
        render_status(&indicator, Status::Ok, "Работает");

        assert_eq!(indicator.state().class_name, "status-indicator ok");
        assert_eq!(indicator.state().text, "Работает");
    }
}
