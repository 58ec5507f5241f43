pub mod team;
pub mod tournament;

pub use team::{gender_count, parse_roster, teams_by_gender, Gender, Person, Team};
pub use tournament::{Match, MatchStatus, Round, Tournament, TournamentKind};
