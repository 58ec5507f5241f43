use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::team::Team;

/// Lifecycle of a match. The scheduler only ever emits `Scheduled`; the
/// later states belong to result tracking by downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Scheduled,
    Ongoing,
    Completed,
}

/// A single match between two teams on a numbered court
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub team_a: Team,
    pub team_b: Team,
    /// Court the match is played on, numbered from 1 within each round
    pub court_id: usize,
    pub status: MatchStatus,
}

/// A set of matches played in parallel on distinct courts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub matches: Vec<Match>,
}

/// Tournament formats this crate can produce. Only the rodeo format exists
/// today; the tag keeps persisted tournaments self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentKind {
    Rodeo,
}

impl TournamentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TournamentKind::Rodeo => "Rodeo",
        }
    }
}

/// A fully scheduled rodeo tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub name: String,
    pub date_start: DateTime<Utc>,
    /// Teams in scheduler-internal order; matches reference this ordering
    pub teams: Vec<Team>,
    pub rounds: Vec<Round>,
}

impl Tournament {
    pub fn new(
        name: impl Into<String>,
        date_start: DateTime<Utc>,
        teams: Vec<Team>,
        rounds: Vec<Round>,
    ) -> Self {
        Self {
            name: name.into(),
            date_start,
            teams,
            rounds,
        }
    }

    pub fn kind(&self) -> TournamentKind {
        TournamentKind::Rodeo
    }

    /// Total number of matches across all rounds
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    /// Renders the schedule as CSV, one line per round:
    /// `Round 1,Match 1,Ann - Bea,Cleo - Dora,Match 2,...`
    pub fn to_csv(&self) -> String {
        let mut out = String::new();

        for (i, round) in self.rounds.iter().enumerate() {
            out.push_str(&format!("Round {},", i + 1));

            for (j, m) in round.matches.iter().enumerate() {
                out.push_str(&format!(
                    "Match {},{} - {},{} - {},",
                    j + 1,
                    m.team_a.p1.name,
                    m.team_a.p2.name,
                    m.team_b.p1.name,
                    m.team_b.p2.name,
                ));
            }

            out.push('\n');
        }

        out
    }
}
