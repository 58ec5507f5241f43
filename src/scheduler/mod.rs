pub mod cancel;
pub mod config;
pub mod driver;

pub use cancel::CancelFlag;
pub use config::{ScheduleRequest, SchedulerConfig};
pub use driver::RodeoScheduler;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::schema::{Team, Tournament};

/// Schedules a rodeo tournament in a single deterministic attempt.
///
/// This is the synchronous entry point for callers that do not need the
/// parallel race; it is equivalent to [`RodeoScheduler::make_tournament`]
/// with a fresh, never-fired cancellation flag.
pub fn make_rodeo(
    teams: &[Team],
    date_start: DateTime<Utc>,
    config: SchedulerConfig,
) -> Result<Tournament> {
    RodeoScheduler::new(config).make_tournament(teams, date_start, &CancelFlag::new())
}

/// Runs a full request: races `request.attempts` independent schedulers and
/// returns the first tournament that validates.
pub async fn schedule(request: &ScheduleRequest) -> Result<Tournament> {
    let config = SchedulerConfig::new(request.max_rounds, request.available_courts);

    RodeoScheduler::new(config)
        .first_valid_tournament(
            request.timeout,
            request.attempts,
            &request.teams,
            request.date_start,
        )
        .await
}
