//! RodeoForge
//!
//! A scheduling engine for "Rodeo" padel tournaments: every doubles team
//! plays a fixed number of matches against distinct opponents across a fixed
//! number of rounds, with several matches running in parallel on numbered
//! courts. Teams of the same gender bracket are paired with each other
//! whenever the roster allows it.
//!
//! The scheduler derives feasible shape parameters, builds a k-regular
//! match graph over the roster, partitions its edges into rounds with a
//! greedy matcher (falling back to a complete backtracking search), and
//! validates the result before returning it. A parallel race driver runs
//! several independent attempts and hands back the first valid schedule.
//!
//! # Quick Start
//!
//! ```rust
//! use rodeoforge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let teams: Vec<Team> = (0..8)
//!         .map(|i| {
//!             Team::new(
//!                 Person::new(format!("Player {}", 2 * i)),
//!                 Person::new(format!("Player {}", 2 * i + 1)),
//!                 Gender::Male,
//!             )
//!         })
//!         .collect();
//!
//!     let scheduler = RodeoScheduler::new(SchedulerConfig::new(8, 5));
//!     let tournament = scheduler
//!         .first_valid_tournament(Duration::from_secs(5), 4, &teams, Utc::now())
//!         .await?;
//!
//!     println!("{}", tournament.to_csv());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graph;
pub mod schema;
pub mod scheduler;
pub mod solver;

// Re-export commonly used types
pub use error::{Result, RodeoError};
pub use schema::{Gender, Match, MatchStatus, Person, Round, Team, Tournament, TournamentKind};
pub use scheduler::{
    make_rodeo, schedule, CancelFlag, RodeoScheduler, ScheduleRequest, SchedulerConfig,
};
pub use solver::{solve_parameters, ScheduleParams};

/// Prelude module for convenient imports
pub mod prelude;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
