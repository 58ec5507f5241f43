use std::collections::VecDeque;

use crate::schema::{gender_count, teams_by_gender, Gender, Team};

/// True when every bracket that has teams at all has more than
/// `matches_per_team` of them, i.e. each bracket alone can supply every one
/// of its teams enough distinct opponents. In that case the schedule never
/// needs to pair teams across brackets.
pub fn gender_split_possible(teams: &[Team], matches_per_team: usize) -> bool {
    Gender::all().iter().all(|&g| {
        let count = gender_count(teams, g);
        count == 0 || count > matches_per_team
    })
}

/// Teams grouped by bracket: the Male block, then Female, then Else. Node
/// ids handed to the edge builder follow this order, so each bracket
/// occupies a contiguous id range.
pub fn order_teams_split(teams: &[Team]) -> Vec<Team> {
    let mut ordered = Vec::with_capacity(teams.len());
    for g in Gender::all() {
        ordered.extend(teams_by_gender(teams, g));
    }
    ordered
}

/// Contiguous node-id ranges per bracket, laid out like
/// [`order_teams_split`]. Empty brackets yield empty ranges.
pub fn split_node_groups(teams: &[Team]) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();
    let mut next = 0;

    for g in Gender::all() {
        let len = gender_count(teams, g);
        groups.push((next..next + len).collect());
        next += len;
    }

    groups
}

/// Interleaved ordering for mixed-bracket play: Female teams sit in the
/// middle, Else teams are laid alternately in front of and behind them
/// (front first), and Male teams take the extremes the same way.
///
/// The circulant edge builder connects nearby ids, so clustering brackets
/// this way maximises same-bracket pairings even when a full split is off
/// the table.
pub fn order_teams_mixed(teams: &[Team]) -> Vec<Team> {
    let mut ordered: VecDeque<Team> = teams_by_gender(teams, Gender::Female).into();

    for g in [Gender::Else, Gender::Male] {
        let mut front = true;
        for team in teams_by_gender(teams, g) {
            if front {
                ordered.push_front(team);
            } else {
                ordered.push_back(team);
            }
            front = !front;
        }
    }

    Vec::from(ordered)
}
