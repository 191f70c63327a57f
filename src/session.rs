//! In-memory session statistics
//!
//! Lives only as long as the process; nothing here is saved.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    /// Highest level number started this session
    pub best_level: u32,
    /// Tokens collected across all levels
    pub total_tokens: u64,
    pub wins: u32,
    pub catches: u32,
}

impl SessionRecord {
    pub fn record_level(&mut self, level: u32) {
        self.best_level = self.best_level.max(level);
    }

    pub fn record_token(&mut self) {
        self.total_tokens += 1;
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_catch(&mut self) {
        self.catches += 1;
    }
}
