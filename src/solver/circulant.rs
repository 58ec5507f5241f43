use crate::graph::{Edge, Matching, Node};

/// Edges of the k-regular circulant over `nodes`: every node is connected to
/// its `k / 2` nearest neighbors on each side of the ring, plus the
/// antipodal node when `k` is odd.
///
/// Returns an empty set when `n * k` is odd or `n <= k`, the combinations no
/// k-regular graph exists for. That same feasibility test guarantees `n` is
/// even whenever `k` is odd, so the antipodal chords land on distinct pairs.
pub fn circulant_edges(nodes: &[Node], k: usize) -> Matching {
    let n = nodes.len();

    if (n * k) % 2 != 0 || n <= k {
        return Matching::new();
    }

    if k % 2 == 0 {
        return ring_edges(nodes, k);
    }

    let mut edges = ring_edges(nodes, k - 1);
    for i in 0..n {
        let partner = (i + n / 2) % n;
        edges.insert(Edge::new(nodes[i], nodes[partner]));
    }

    edges
}

/// The even-degree part: `count` hops to the left and to the right for every
/// `count` in `1..=k/2`. Coinciding chords collapse in the set.
fn ring_edges(nodes: &[Node], k: usize) -> Matching {
    let n = nodes.len();
    let mut edges = Matching::new();

    for i in 0..n {
        for count in 1..=k / 2 {
            let left = (i + n - count) % n;
            let right = (i + count) % n;

            edges.insert(Edge::new(nodes[left], nodes[i]));
            edges.insert(Edge::new(nodes[i], nodes[right]));
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn degrees(edges: &Matching) -> HashMap<Node, usize> {
        let mut deg = HashMap::new();
        for e in edges {
            *deg.entry(e.low()).or_insert(0) += 1;
            *deg.entry(e.high()).or_insert(0) += 1;
        }
        deg
    }

    #[test]
    fn six_nodes_degree_three_is_the_known_circulant() {
        let nodes: Vec<Node> = (0..6).collect();
        let edges = circulant_edges(&nodes, 3);

        let expected: Matching = [
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 4),
            Edge::new(4, 5),
            Edge::new(0, 5),
            Edge::new(0, 3),
            Edge::new(1, 4),
            Edge::new(2, 5),
        ]
        .into_iter()
        .collect();

        assert_eq!(edges, expected);
    }

    #[test]
    fn regularity_holds_for_even_and_odd_k() {
        for (n, k) in [(8usize, 4usize), (10, 5), (12, 7), (9, 4)] {
            let nodes: Vec<Node> = (0..n).collect();
            let edges = circulant_edges(&nodes, k);

            assert_eq!(edges.len(), n * k / 2, "edge count for n={n} k={k}");
            let deg = degrees(&edges);
            assert!(
                nodes.iter().all(|v| deg[v] == k),
                "every node has degree {k} for n={n}"
            );
        }
    }

    #[test]
    fn infeasible_shapes_yield_no_edges() {
        // odd n * k
        assert!(circulant_edges(&(0..5).collect::<Vec<_>>(), 3).is_empty());
        // not enough opponents
        assert!(circulant_edges(&(0..4).collect::<Vec<_>>(), 4).is_empty());
        // empty bracket group
        assert!(circulant_edges(&[], 2).is_empty());
    }

    #[test]
    fn node_labels_are_respected() {
        // the builder works over arbitrary node ids, e.g. a bracket's slice
        let nodes: Vec<Node> = vec![10, 11, 12, 13];
        let edges = circulant_edges(&nodes, 2);

        assert!(edges.contains(&Edge::new(10, 11)));
        assert!(edges.contains(&Edge::new(10, 13)));
        assert!(edges.iter().all(|e| e.low() >= 10 && e.high() <= 13));
    }
}
