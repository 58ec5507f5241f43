use std::collections::HashSet;

use crate::error::{Result, RodeoError};
use crate::graph::{Edge, Matching, Node};
use crate::scheduler::CancelFlag;

/// Partitions the given edges into exactly `total_rounds` matchings of
/// bounded size, by exhaustive search.
///
/// Edges are placed most-constrained-first: every step scans the unplaced
/// edges, counts the buckets each could still go into, fails fast when any
/// edge has none and commits to the one with the fewest (stopping the scan
/// early at one). The search is complete: if a partition exists it is found.
/// `cancel` is polled on every recursive entry so the race driver can
/// abandon a losing attempt.
///
/// `edges` doubles as the scan order, which is what distinguishes one
/// racing attempt's search tree from another's.
pub fn partition_matchings(
    edges: Vec<Edge>,
    avg_matching_size: f64,
    total_rounds: usize,
    cancel: &CancelFlag,
) -> Result<Vec<Matching>> {
    let mut search = Search {
        order: edges,
        placed: HashSet::new(),
        buckets: vec![Matching::new(); total_rounds],
        used_nodes: vec![HashSet::new(); total_rounds],
        max_matching_size: avg_matching_size.ceil() as usize,
    };

    if search.solve(cancel)? {
        Ok(search.buckets)
    } else {
        Err(RodeoError::NoSolution)
    }
}

struct Search {
    /// All edges to place, in attempt-specific scan order
    order: Vec<Edge>,
    /// Edges already sitting in some bucket
    placed: HashSet<Edge>,
    buckets: Vec<Matching>,
    used_nodes: Vec<HashSet<Node>>,
    max_matching_size: usize,
}

impl Search {
    fn fits(&self, bucket: usize, e: Edge) -> bool {
        !self.used_nodes[bucket].contains(&e.low())
            && !self.used_nodes[bucket].contains(&e.high())
            && self.buckets[bucket].len() < self.max_matching_size
    }

    fn solve(&mut self, cancel: &CancelFlag) -> Result<bool> {
        if cancel.is_cancelled() {
            return Err(RodeoError::Cancelled);
        }

        let mut chosen = match self.order.iter().find(|&&e| !self.placed.contains(&e)) {
            Some(&first) => first,
            None => return Ok(true),
        };

        // Most-constrained edge first. If any edge has nowhere to go the
        // whole branch is dead; an edge with a single option ends the scan.
        let mut min_options = self.buckets.len() + 1;
        for &e in &self.order {
            if self.placed.contains(&e) {
                continue;
            }

            let options = (0..self.buckets.len()).filter(|&b| self.fits(b, e)).count();
            if options == 0 {
                return Ok(false);
            }
            if options < min_options {
                min_options = options;
                chosen = e;
            }
            if min_options == 1 {
                break;
            }
        }

        for bucket in 0..self.buckets.len() {
            if !self.fits(bucket, chosen) {
                continue;
            }

            self.buckets[bucket].insert(chosen);
            self.used_nodes[bucket].insert(chosen.low());
            self.used_nodes[bucket].insert(chosen.high());
            self.placed.insert(chosen);

            if self.solve(cancel)? {
                return Ok(true);
            }

            self.placed.remove(&chosen);
            self.buckets[bucket].remove(&chosen);
            self.used_nodes[bucket].remove(&chosen.low());
            self.used_nodes[bucket].remove(&chosen.high());
        }

        Ok(false)
    }
}
