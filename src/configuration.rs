//! Config for the league simulation behaviors.
//!
//! Configuration can be created programmatically using [`LeagueConfig::new()`]
//! or by reading environment variables using [`LeagueConfig::from_env()`].
//!
//! # Environment Variables
//!
//! All values are optional; an unset or unparsable variable falls back to its
//! default.
//!
//! - `LEAGUE_MATCHES_PER_FIXTURE` (usize) — matches resolved concurrently per
//!   fixture (default: `5`)
//! - `LEAGUE_PLAYERS_PER_TEAM` (usize) — generated squad size (default: `15`)
//! - `LEAGUE_SEED` (u64) — base seed for the team shuffle and every match task
//!   (default: drawn from entropy)
//! - `LEAGUE_FIXTURE_INTERVAL_SECS` (u64) — pause between fixtures (default: `0`)
//! - `LEAGUE_LOG` — set to `"true"` to enable logging to a file (default: `false`)

use std::env;
use std::time::Duration;

use anyhow::bail;

use crate::roster::DEFAULT_PLAYERS_PER_TEAM;

/// Default number of matches resolved concurrently per fixture.
pub const DEFAULT_MATCHES_PER_FIXTURE: usize = 5;

/// Configuration for a league simulation.
#[derive(Debug, Clone, Copy)]
pub struct LeagueConfig {
    pub(crate) matches_per_fixture: usize,
    pub(crate) players_per_team: usize,
    pub(crate) seed: Option<u64>,
    pub(crate) fixture_interval: Duration,
    pub(crate) log: bool,
}

impl LeagueConfig {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Fixtures hold 5 matches.
    /// - Squads hold 15 generated players.
    /// - The base seed is drawn from entropy (every run differs).
    /// - There is no pause between fixtures.
    /// - Logging to file is disabled.
    pub fn new() -> Self {
        Self {
            matches_per_fixture: DEFAULT_MATCHES_PER_FIXTURE,
            players_per_team: DEFAULT_PLAYERS_PER_TEAM,
            seed: None,
            fixture_interval: Duration::ZERO,
            log: false,
        }
    }

    /// Create configuration from environment variables (see module docs for the
    /// recognized variables). Any other value (including unset) results in the
    /// default for that field.
    pub fn from_env() -> Self {
        fn parse_usize(var: &str, default: usize) -> usize {
            env::var(var)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        fn parse_u64(var: &str) -> Option<u64> {
            env::var(var).ok()?.parse().ok()
        }

        fn get_env_flag(var: &str, default: bool) -> bool {
            match env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        Self {
            matches_per_fixture: parse_usize(
                "LEAGUE_MATCHES_PER_FIXTURE",
                DEFAULT_MATCHES_PER_FIXTURE,
            ),
            players_per_team: parse_usize("LEAGUE_PLAYERS_PER_TEAM", DEFAULT_PLAYERS_PER_TEAM),
            seed: parse_u64("LEAGUE_SEED"),
            fixture_interval: Duration::from_secs(
                parse_u64("LEAGUE_FIXTURE_INTERVAL_SECS").unwrap_or(0),
            ),
            log: get_env_flag("LEAGUE_LOG", false),
        }
    }

    /// Set how many matches run concurrently per fixture.
    pub fn with_matches_per_fixture(mut self, value: usize) -> Self {
        self.matches_per_fixture = value;
        self
    }

    /// Set the generated squad size.
    pub fn with_players_per_team(mut self, value: usize) -> Self {
        self.players_per_team = value;
        self
    }

    /// Fix the base seed, making the schedule and every match reproducible.
    pub fn with_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Set the pause inserted between fixtures.
    pub fn with_fixture_interval(mut self, value: Duration) -> Self {
        self.fixture_interval = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        if self.matches_per_fixture == 0 {
            bail!("matches_per_fixture must be at least 1");
        }
        if self.players_per_team == 0 {
            bail!("players_per_team must be at least 1");
        }
        Ok(())
    }
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains() {
        let config = LeagueConfig::new()
            .with_matches_per_fixture(3)
            .with_players_per_team(7)
            .with_seed(42)
            .with_fixture_interval(Duration::from_millis(5))
            .with_log(false);
        assert_eq!(config.matches_per_fixture, 3);
        assert_eq!(config.players_per_team, 7);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.fixture_interval, Duration::from_millis(5));
        assert!(!config.log);
    }

    #[test]
    fn zero_values_are_rejected() {
        assert!(LeagueConfig::new()
            .with_matches_per_fixture(0)
            .validate()
            .is_err());
        assert!(LeagueConfig::new()
            .with_players_per_team(0)
            .validate()
            .is_err());
        assert!(LeagueConfig::new().validate().is_ok());
    }
}
