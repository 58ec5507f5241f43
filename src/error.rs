use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RodeoError {
    #[error("no feasible match parameters for {teams} teams, {max_rounds} rounds, {courts} courts")]
    InfeasibleParameters {
        teams: usize,
        max_rounds: usize,
        courts: usize,
    },

    #[error("backtracking exhausted every bucket assignment without a valid schedule")]
    NoSolution,

    #[error("schedule generation was cancelled")]
    Cancelled,

    #[error("no attempt produced a valid schedule within {0:?}")]
    Timeout(Duration),

    #[error("generated schedule failed validation: {0}")]
    InvalidSchedule(String),
}

pub type Result<T> = std::result::Result<T, RodeoError>;
