use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::Team;

/// Venue parameters a scheduler is created with
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Upper bound on the number of rounds; the scheduler uses one fewer
    /// when that many rounds cannot all be filled
    pub max_rounds: usize,
    /// Courts available in parallel, capping the matches per round
    pub available_courts: usize,
}

impl SchedulerConfig {
    pub fn new(max_rounds: usize, available_courts: usize) -> Self {
        Self {
            max_rounds,
            available_courts,
        }
    }
}

/// A complete scheduling request as submitted by the API collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub teams: Vec<Team>,
    pub date_start: DateTime<Utc>,
    pub max_rounds: usize,
    pub available_courts: usize,
    /// Independent attempts raced in parallel; at least 1
    pub attempts: usize,
    /// Wall-clock budget for the whole race
    pub timeout: Duration,
}
