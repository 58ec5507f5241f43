use chrono::{DateTime, Utc};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::task;
use tokio::time::Duration;

use crate::error::{Result, RodeoError};
use crate::graph::Matching;
use crate::schema::{Match, MatchStatus, Round, Team, Tournament};
use crate::solver::{backtracking, build_match_graph, heuristic, validation};
use crate::solver::{solve_parameters, ScheduleParams};

use super::cancel::CancelFlag;
use super::config::SchedulerConfig;

/// Schedules rodeo tournaments for a fixed venue configuration
#[derive(Debug, Clone, Copy)]
pub struct RodeoScheduler {
    config: SchedulerConfig,
}

impl RodeoScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Runs a single scheduling attempt with the default seed; see
    /// [`Self::make_tournament_with_seed`].
    pub fn make_tournament(
        &self,
        teams: &[Team],
        date_start: DateTime<Utc>,
        cancel: &CancelFlag,
    ) -> Result<Tournament> {
        self.make_tournament_with_seed(teams, date_start, cancel, 0)
    }

    /// Runs one scheduling attempt end to end: derive the shape parameters,
    /// build the match graph, extract matchings (greedy first, exhaustive
    /// fallback on the untouched graph), validate, and assemble the
    /// tournament.
    ///
    /// The seed fixes the node and edge scan orders, making the result
    /// reproducible; racing workers pass distinct seeds so their searches
    /// explore distinct trees.
    pub fn make_tournament_with_seed(
        &self,
        teams: &[Team],
        date_start: DateTime<Utc>,
        cancel: &CancelFlag,
        seed: u64,
    ) -> Result<Tournament> {
        let params = self.feasible_parameters(teams)?;
        let rounds_number = self.effective_rounds(&params);

        let (graph, ordered_teams) = build_match_graph(teams, params.matches_per_team);

        let mut rng = StdRng::seed_from_u64(seed);

        let mut scan_order = graph.node_ids();
        scan_order.shuffle(&mut rng);

        let mut working = graph.clone();
        let mut matchings = heuristic::extract_matchings(
            &mut working,
            &scan_order,
            params.matches_per_round,
            rounds_number,
        );

        let any_round_empty = matchings.iter().any(|m| m.is_empty());
        if matchings.len() != rounds_number || any_round_empty {
            let mut edges = graph.edges();
            edges.sort_unstable();
            edges.shuffle(&mut rng);

            matchings = backtracking::partition_matchings(
                edges,
                params.matches_per_round,
                rounds_number,
                cancel,
            )?;
        }

        validation::validate_matchings(&matchings, &ordered_teams, rounds_number, &params)?;

        let rounds = to_rounds(&matchings, &ordered_teams);
        Ok(Tournament::new("Rodeo", date_start, ordered_teams, rounds))
    }

    /// Races `attempts` independent scheduling attempts and returns the
    /// first tournament that validates, cancelling the rest.
    ///
    /// Attempts run on blocking worker threads, each with its own seed and
    /// deep copies of all working state; the only thing they share is the
    /// cancellation flag. When the deadline passes, or every attempt fails
    /// first, the driver reports [`RodeoError::Timeout`].
    pub async fn first_valid_tournament(
        &self,
        timeout: Duration,
        attempts: usize,
        teams: &[Team],
        date_start: DateTime<Utc>,
    ) -> Result<Tournament> {
        // A roster with no feasible parameters fails every attempt the same
        // way; surface that before spinning up workers.
        self.feasible_parameters(teams)?;

        let cancel = CancelFlag::new();
        let (tx, mut rx) = mpsc::channel(attempts.max(1));

        for seed in 0..attempts as u64 {
            let scheduler = *self;
            let teams = teams.to_vec();
            let cancel = cancel.clone();
            let tx = tx.clone();

            task::spawn_blocking(move || {
                match scheduler.make_tournament_with_seed(&teams, date_start, &cancel, seed) {
                    Ok(tournament) => {
                        let _ = tx.blocking_send(tournament);
                    }
                    Err(err) => debug!("scheduling attempt {seed} failed: {err}"),
                }
            });
        }
        drop(tx);

        let winner = tokio::time::timeout(timeout, rx.recv()).await;
        cancel.cancel();

        match winner {
            Ok(Some(tournament)) => Ok(tournament),
            // either every worker gave up early, or the deadline hit with
            // the backtracking searches still running
            Ok(None) | Err(_) => Err(RodeoError::Timeout(timeout)),
        }
    }

    fn feasible_parameters(&self, teams: &[Team]) -> Result<ScheduleParams> {
        solve_parameters(
            teams.len(),
            self.config.max_rounds,
            self.config.available_courts,
        )
        .ok_or(RodeoError::InfeasibleParameters {
            teams: teams.len(),
            max_rounds: self.config.max_rounds,
            courts: self.config.available_courts,
        })
    }

    /// Drops one round when `max_rounds` rounds cannot all be filled: if
    /// even one match short of `ceil(r)` per round overshoots the total,
    /// the last round would come out empty.
    fn effective_rounds(&self, params: &ScheduleParams) -> usize {
        let max_rounds = self.config.max_rounds;
        let filled = params.matches_per_round.ceil() * max_rounds as f64 - 1.0;

        if filled > params.total_matches as f64 {
            max_rounds - 1
        } else {
            max_rounds
        }
    }
}

/// Turns matchings into rounds of court-assigned matches. Court ids count
/// from 1 within each round; edges are laid out in canonical order so a
/// given matching always produces the same court sheet.
fn to_rounds(matchings: &[Matching], teams: &[Team]) -> Vec<Round> {
    matchings
        .iter()
        .map(|matching| {
            let mut edges: Vec<_> = matching.iter().copied().collect();
            edges.sort_unstable();

            let matches = edges
                .into_iter()
                .zip(1..)
                .map(|(edge, court_id)| Match {
                    team_a: teams[edge.low()].clone(),
                    team_b: teams[edge.high()].clone(),
                    court_id,
                    status: MatchStatus::Scheduled,
                })
                .collect();

            Round { matches }
        })
        .collect()
}
