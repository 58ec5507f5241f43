use std::collections::{HashMap, HashSet};

use log::warn;

use crate::error::{Result, RodeoError};
use crate::graph::{Matching, Node};
use crate::schema::Team;

use super::params::ScheduleParams;

/// Structural checks on a complete set of matchings before they become
/// rounds. A failure here means a matcher bug rather than a bad request, so
/// every violation is logged and surfaced as a distinct
/// [`RodeoError::InvalidSchedule`].
pub fn validate_matchings(
    rounds: &[Matching],
    teams: &[Team],
    total_rounds: usize,
    params: &ScheduleParams,
) -> Result<()> {
    check_matchings(rounds, teams, total_rounds, params).map_err(|e| {
        warn!("schedule validation failed: {e}");
        e
    })
}

fn check_matchings(
    rounds: &[Matching],
    teams: &[Team],
    total_rounds: usize,
    params: &ScheduleParams,
) -> Result<()> {
    if rounds.len() != total_rounds {
        return Err(invalid(format!(
            "expected {total_rounds} rounds, got {}",
            rounds.len()
        )));
    }

    let cap = params.max_matches_per_round();
    for (i, round) in rounds.iter().enumerate() {
        if round.len() > cap {
            return Err(invalid(format!(
                "round {} holds {} matches, cap is {cap}",
                i + 1,
                round.len()
            )));
        }
    }

    let mut scheduled = Matching::new();
    let mut total_scheduled = 0;
    for (i, round) in rounds.iter().enumerate() {
        for &edge in round {
            total_scheduled += 1;
            if !scheduled.insert(edge) {
                return Err(invalid(format!(
                    "{} vs {} scheduled again in round {}",
                    team_label(teams, edge.low()),
                    team_label(teams, edge.high()),
                    i + 1
                )));
            }
        }
    }

    if total_scheduled != params.total_matches {
        return Err(invalid(format!(
            "scheduled {total_scheduled} matches, expected {}",
            params.total_matches
        )));
    }

    let mut appearances: HashMap<Node, usize> = HashMap::new();
    for (i, round) in rounds.iter().enumerate() {
        let mut in_round: HashSet<Node> = HashSet::new();

        for &edge in round {
            for node in [edge.low(), edge.high()] {
                if !in_round.insert(node) {
                    return Err(invalid(format!(
                        "{} plays twice in round {}",
                        team_label(teams, node),
                        i + 1
                    )));
                }
                *appearances.entry(node).or_insert(0) += 1;
            }
        }
    }

    for (node, count) in appearances {
        if count != params.matches_per_team {
            return Err(invalid(format!(
                "{} is scheduled {count} times, expected {}",
                team_label(teams, node),
                params.matches_per_team
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> RodeoError {
    RodeoError::InvalidSchedule(message)
}

fn team_label(teams: &[Team], node: Node) -> String {
    match teams.get(node) {
        Some(t) => format!("{} / {}", t.p1.name, t.p2.name),
        None => format!("team #{node}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::schema::{Gender, Person};
    use crate::solver::params::solve_parameters;

    fn teams(n: usize) -> Vec<Team> {
        (0..n)
            .map(|i| {
                Team::new(
                    Person::new(format!("P{}", 2 * i)),
                    Person::new(format!("P{}", 2 * i + 1)),
                    Gender::Male,
                )
            })
            .collect()
    }

    fn good_rounds() -> Vec<Matching> {
        vec![
            [Edge::new(0, 1), Edge::new(2, 3), Edge::new(4, 5)].into(),
            [Edge::new(1, 2), Edge::new(3, 4), Edge::new(0, 5)].into(),
            [Edge::new(0, 3), Edge::new(1, 4), Edge::new(2, 5)].into(),
        ]
    }

    fn params() -> ScheduleParams {
        solve_parameters(6, 3, 3).unwrap()
    }

    #[test]
    fn accepts_a_complete_partition() {
        assert!(validate_matchings(&good_rounds(), &teams(6), 3, &params()).is_ok());
    }

    #[test]
    fn rejects_wrong_round_count() {
        let rounds = &good_rounds()[..2];
        let err = validate_matchings(rounds, &teams(6), 3, &params()).unwrap_err();
        assert!(err.to_string().contains("expected 3 rounds"));
    }

    #[test]
    fn rejects_duplicate_pairings() {
        let mut rounds = good_rounds();
        rounds[2].remove(&Edge::new(0, 3));
        rounds[2].insert(Edge::new(0, 1)); // already played in round 1

        let err = validate_matchings(&rounds, &teams(6), 3, &params()).unwrap_err();
        assert!(err.to_string().contains("scheduled again"));
    }

    #[test]
    fn rejects_incomplete_schedules() {
        let mut rounds = good_rounds();
        rounds[2].remove(&Edge::new(0, 3));

        let err = validate_matchings(&rounds, &teams(6), 3, &params()).unwrap_err();
        assert!(err.to_string().contains("expected 9"));
    }

    #[test]
    fn rejects_team_playing_twice_in_a_round() {
        let mut rounds = good_rounds();
        rounds[2].remove(&Edge::new(0, 3));
        rounds[2].insert(Edge::new(1, 3)); // team 1 already plays 4

        let err = validate_matchings(&rounds, &teams(6), 3, &params()).unwrap_err();
        assert!(err.to_string().contains("plays twice in round 3"));
    }

    #[test]
    fn rejects_oversized_rounds() {
        let rounds = vec![
            good_rounds().into_iter().flatten().collect::<Matching>(),
            Matching::new(),
            Matching::new(),
        ];

        let err = validate_matchings(&rounds, &teams(6), 3, &params()).unwrap_err();
        assert!(err.to_string().contains("cap is 3"));
    }
}
