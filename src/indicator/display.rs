// src/indicator/display.rs

use super::{class_name, StatusIndicator};
use crate::health::Status;
use chrono::{DateTime, Utc};
use std::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorState {
    pub class_name: String,
    pub text: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl IndicatorState {
    fn initial(text: &str) -> Self {
        Self {
            class_name: class_name(Status::Unknown),
            text: text.to_string(),
            updated_at: None,
        }
    }
}

/// Keeps the rendered state in memory so it can be inspected.
#[derive(Debug)]
pub struct MemoryIndicator {
    state: RwLock<IndicatorState>,
}

impl MemoryIndicator {
    pub fn new(initial_text: &str) -> Self {
        Self {
            state: RwLock::new(IndicatorState::initial(initial_text)),
        }
    }

    pub fn state(&self) -> IndicatorState {
        match self.state.read() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Sets the class and returns the one it replaced, under a single write lock.
    pub fn swap_class_name(&self, class_name: &str) -> String {
        self.update(|s| std::mem::replace(&mut s.class_name, class_name.to_string()))
    }

    fn update<R>(&self, f: impl FnOnce(&mut IndicatorState) -> R) -> R {
        let mut state = match self.state.write() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        let out = f(&mut state);
        state.updated_at = Some(Utc::now());
        out
    }
}

impl StatusIndicator for MemoryIndicator {
    fn set_class_name(&self, class_name: &str) {
        self.update(|s| s.class_name = class_name.to_string());
    }

    fn set_text(&self, text: &str) {
        self.update(|s| s.text = text.to_string());
    }
}

/// Terminal stand-in for a page element: logs whenever the shown state changes.
#[derive(Debug)]
pub struct LogIndicator {
    id: String,
    inner: MemoryIndicator,
}

impl LogIndicator {
    pub fn new(id: impl Into<String>, initial_text: &str) -> Self {
        Self {
            id: id.into(),
            inner: MemoryIndicator::new(initial_text),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> IndicatorState {
        self.inner.state()
    }
}

impl StatusIndicator for LogIndicator {
    fn set_class_name(&self, class_name: &str) {
        let before = self.inner.swap_class_name(class_name);

        if before != class_name {
            info!(indicator = %self.id, from = %before, to = %class_name, "Indicator changed");
        } else {
            debug!(indicator = %self.id, class = %class_name, "Indicator unchanged");
        }
    }

    // Text follows the class, so only the class change is worth an info line.
    fn set_text(&self, text: &str) {
        self.inner.set_text(text);
        debug!(indicator = %self.id, text, "Indicator text set");
    }
}
