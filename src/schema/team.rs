use serde::{Deserialize, Serialize};

/// One of the two players forming a doubles team
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Bracket a team competes in. `Else` covers mixed and unspecified teams and
/// is a bracket of its own: an Else vs Else match counts as same-bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "M")]
    Male,
    #[serde(alias = "F")]
    Female,
    Else,
}

impl Gender {
    /// All brackets, in the order the scheduler lays them out
    pub fn all() -> [Gender; 3] {
        [Gender::Male, Gender::Female, Gender::Else]
    }
}

/// A doubles team: two players and the bracket they play in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub p1: Person,
    pub p2: Person,
    pub gender: Gender,
}

impl Team {
    pub fn new(p1: Person, p2: Person, gender: Gender) -> Self {
        Self { p1, p2, gender }
    }
}

/// Number of teams registered in the given bracket
pub fn gender_count(teams: &[Team], gender: Gender) -> usize {
    teams.iter().filter(|t| t.gender == gender).count()
}

/// Teams registered in the given bracket, in input order
pub fn teams_by_gender(teams: &[Team], gender: Gender) -> Vec<Team> {
    teams
        .iter()
        .filter(|t| t.gender == gender)
        .cloned()
        .collect()
}

/// Parses a plain-text roster, one team per line as `player1, player2`.
///
/// Lines with fewer than two comma-separated fields are skipped and player
/// names are trimmed. Every parsed team lands in the Male bracket; callers
/// collecting brackets separately reassign the gender afterwards.
pub fn parse_roster(input: &str) -> Vec<Team> {
    let mut teams = Vec::new();

    for line in input.lines() {
        let row: Vec<&str> = line.split(',').collect();
        if row.len() < 2 {
            continue;
        }

        teams.push(Team::new(
            Person::new(row[0].trim()),
            Person::new(row[1].trim()),
            Gender::Male,
        ));
    }

    teams
}
