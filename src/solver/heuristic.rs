use std::collections::HashSet;
use std::mem;

use crate::graph::{Edge, Graph, Matching, Node};

/// Greedily extracts up to `total_rounds` matchings from `graph`, consuming
/// the edges it places.
///
/// Nodes are scanned in the order given; every unplaced node is paired with
/// its first neighbor that is still free this round. A round closes when it
/// reaches the per-round cap, or early when it is the final round and the
/// graph has drained.
///
/// The extractor never fails: it may return fewer rounds than asked for, or
/// leave edges in the graph, and the caller decides whether the result is
/// good enough or the exhaustive matcher has to take over.
pub fn extract_matchings(
    graph: &mut Graph,
    scan_order: &[Node],
    avg_matching_size: f64,
    total_rounds: usize,
) -> Vec<Matching> {
    let max_per_round = avg_matching_size.ceil() as usize;

    let mut rounds: Vec<Matching> = Vec::new();
    let mut playing: HashSet<Node> = HashSet::new();
    let mut current = Matching::new();

    while rounds.len() < total_rounds {
        let mut progressed = false;

        for &node in scan_order {
            if !playing.contains(&node) {
                let partner = graph
                    .neighbors(node)
                    .into_iter()
                    .find(|p| !playing.contains(p));

                if let Some(partner) = partner {
                    progressed = true;
                    playing.insert(node);
                    playing.insert(partner);

                    let edge = Edge::new(node, partner);
                    current.insert(edge);
                    graph.remove_edge(edge);
                }
            }

            let closing_final_round = rounds.len() + 1 == total_rounds && graph.is_empty();

            if current.len() == max_per_round || closing_final_round {
                if !current.is_empty() {
                    rounds.push(mem::take(&mut current));
                    playing.clear();

                    if rounds.len() == total_rounds {
                        return rounds;
                    }
                }
            }
        }

        if !progressed {
            break;
        }
    }

    rounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::circulant::circulant_edges;

    fn six_node_graph() -> Graph {
        let nodes: Vec<Node> = (0..6).collect();
        let mut graph = Graph::new();
        for e in circulant_edges(&nodes, 3) {
            graph.add_edge(e);
        }
        graph
    }

    #[test]
    fn drains_the_six_node_circulant_into_three_rounds() {
        let mut graph = six_node_graph();
        let order: Vec<Node> = (0..6).collect();

        let rounds = extract_matchings(&mut graph, &order, 3.0, 3);

        assert_eq!(rounds.len(), 3);
        assert!(rounds.iter().all(|m| m.len() == 3));
        assert!(graph.is_empty());

        for matching in &rounds {
            let mut nodes = HashSet::new();
            for e in matching {
                assert!(nodes.insert(e.low()));
                assert!(nodes.insert(e.high()));
            }
        }
    }

    #[test]
    fn rounds_respect_the_size_cap() {
        let mut graph = six_node_graph();
        let order: Vec<Node> = (0..6).collect();

        let rounds = extract_matchings(&mut graph, &order, 2.0, 5);

        assert!(rounds.iter().all(|m| m.len() <= 2));
    }

    #[test]
    fn never_produces_more_rounds_than_requested() {
        let mut graph = six_node_graph();
        let order: Vec<Node> = (0..6).collect();

        let rounds = extract_matchings(&mut graph, &order, 1.0, 4);

        assert!(rounds.len() <= 4);
    }

    #[test]
    fn stops_without_progress_instead_of_spinning() {
        let mut graph = Graph::new();
        graph.add_edge(Edge::new(0, 1));

        // asks for more rounds than one edge can ever provide
        let rounds = extract_matchings(&mut graph, &[0, 1], 1.0, 3);

        assert_eq!(rounds.len(), 1);
        assert!(graph.is_empty());
    }
}
