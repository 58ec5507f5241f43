//! Prelude module with commonly used types
//!
//! Import this module to get all the essential types for using RodeoForge:
//!
//! ```rust
//! use rodeoforge::prelude::*;
//! ```

pub use crate::{
    error::{Result, RodeoError},
    graph::{Edge, Graph, Matching, Node},
    schema::{
        gender_count, parse_roster, teams_by_gender, Gender, Match, MatchStatus, Person, Round,
        Team, Tournament, TournamentKind,
    },
    scheduler::{make_rodeo, schedule, CancelFlag, RodeoScheduler, ScheduleRequest, SchedulerConfig},
    solver::{solve_parameters, ScheduleParams},
};

// Re-export common external dependencies
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use std::time::Duration;
