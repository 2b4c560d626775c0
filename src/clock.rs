use chrono::Local;

// -----------------------------------------------------------------------------
// Clock trait

/// Source of the date segments used in daily-note paths.
pub trait Clock {
    /// `%Y-%m`, e.g. `2025-03`.
    fn year_month(&self) -> String;
    /// `%Y-%m-%d`, e.g. `2025-03-26`.
    fn date(&self) -> String;
}

/// Real clock using the local date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn year_month(&self) -> String {
        Local::now().format("%Y-%m").to_string()
    }

    fn date(&self) -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }
}

/// Fixed clock for tests and the documented placeholder mode.
pub struct FixedClock {
    pub year_month: String,
    pub date: String,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            year_month: "2025-03".to_string(),
            date: "2025-03-26".to_string(),
        }
    }
}

impl Clock for FixedClock {
    fn year_month(&self) -> String {
        self.year_month.clone()
    }

    fn date(&self) -> String {
        self.date.clone()
    }
}
