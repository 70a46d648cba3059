//! # League Sim
//!
//! A Rust crate for simulating round-robin football leagues with concurrent match resolution.
//!
//! It provides:
//! - Roster building from plain name lists (or the matching files)
//! - Round-robin schedule generation via the circle method ([`schedule`])
//! - One thread per match within a fixture, with a hard barrier between fixtures
//! - Standings recomputed after every fixture ([`standings`])
//! - Read-only per-fixture snapshots for any display layer ([`report`])
//!
//! Every team plays every other team exactly once. Matches inside a fixture are
//! resolved concurrently, each task with its own seeded RNG; fixtures themselves
//! are strictly sequential, so the standings only ever reflect whole fixtures.
//!
//! # Documentation Overview
//!
//! - For league creation, the season loop and the query surface, see [`League`](crate::league::League).
//! - For simulation knobs (fixture size, squad size, seed, pacing, logging), see
//!   [`LeagueConfig`](crate::configuration::LeagueConfig).
//! - For the display seam, see [`LeagueObserver`](crate::report::LeagueObserver)
//!   and [`FixtureReport`](crate::report::FixtureReport).
//!
//! # Usage Example
//!
//! ```no_run
//! use league_sim::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LeagueConfig::new()
//!         .with_matches_per_fixture(5)
//!         .with_seed(42); // omit for a different season every run
//!
//!     let team_names = vec!["Arsenal".to_owned(), "Chelsea".to_owned(),
//!                           "Leeds".to_owned(), "Everton".to_owned()];
//!     let first_names = vec!["Jo".to_owned(), "Sam".to_owned(), "Kim".to_owned()];
//!     let last_names = vec!["Reed".to_owned(), "Stone".to_owned(), "Vale".to_owned()];
//!
//!     let mut league = League::new(config, team_names, first_names, last_names)?;
//!
//!     // Print each fixture's results and the table as the season unfolds.
//!     let mut printer = ConsolePrinter::new();
//!     league.play(&mut printer)?;
//!
//!     for row in league.standings() {
//!         println!("{}\t{}", row.name, row.points);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Name files work too: `League::from_files(config, "teams.txt", "first.txt",
//! "last.txt")` reads one team per line (name in the first comma-delimited
//! field) and one player name per line.
#![warn(missing_docs)]

pub use anyhow;
pub mod configuration;
mod fixture_runner;
pub mod league;
mod logger;
pub mod match_resolver;
pub mod report;
pub mod roster;
pub mod schedule;
pub mod standings;
pub mod team;

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use league_sim::prelude::*;
/// ```
///
/// Includes:
/// - [`League`](crate::league::League) and [`LeagueConfig`](crate::configuration::LeagueConfig)
/// - the roster and schedule data types
/// - the reporting types and bundled observers
pub mod prelude {
    pub use crate::configuration::LeagueConfig;
    pub use crate::league::League;
    pub use crate::report::{ConsolePrinter, FixtureReport, LeagueObserver, NullObserver};
    pub use crate::schedule::{Goal, Match, MatchId, Outcome, Score};
    pub use crate::standings::TableRow;
    pub use crate::team::{Player, PlayerId, Team, TeamId};
}
