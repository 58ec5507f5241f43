pub mod backtracking;
pub mod circulant;
pub mod heuristic;
pub mod ordering;
pub mod params;
pub mod validation;

pub use params::{solve_parameters, ScheduleParams};

use crate::graph::{Graph, Matching, Node};
use crate::schema::Team;

/// Builds the match graph for a roster: decides between the gender-split
/// and interleaved orderings, lays the circulant edges over the resulting
/// node ids and returns the graph together with the ordered team list the
/// node ids index into.
///
/// In split mode each bracket gets its own circulant over its contiguous id
/// range, so no edge ever crosses brackets; in mixed mode a single circulant
/// spans the whole roster.
pub fn build_match_graph(teams: &[Team], matches_per_team: usize) -> (Graph, Vec<Team>) {
    let mut edges = Matching::new();
    let ordered_teams;

    if ordering::gender_split_possible(teams, matches_per_team) {
        ordered_teams = ordering::order_teams_split(teams);
        for group in ordering::split_node_groups(&ordered_teams) {
            edges.extend(circulant::circulant_edges(&group, matches_per_team));
        }
    } else {
        ordered_teams = ordering::order_teams_mixed(teams);
        let nodes: Vec<Node> = (0..ordered_teams.len()).collect();
        edges = circulant::circulant_edges(&nodes, matches_per_team);
    }

    let mut graph = Graph::new();
    for &edge in &edges {
        graph.add_edge(edge);
    }

    (graph, ordered_teams)
}
