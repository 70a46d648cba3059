//! Roster building: turning name lists into teams with generated squads.
//!
//! File parsing is peripheral: the loaders below produce plain string lists, and
//! everything downstream only ever sees those lists. Team name files carry one
//! team per line with the name in the first comma-delimited field; player name
//! files carry one name per line.

use std::path::Path;

use anyhow::{bail, Context};
use rand::Rng;
use tracing::{info, instrument};

use crate::team::{Player, PlayerId, Team, TeamId, TeamRegistry};

/// Default squad size.
pub const DEFAULT_PLAYERS_PER_TEAM: usize = 15;

/// Loads a line-oriented name list. Lines are trimmed; blank lines are skipped.
pub fn load_names(path: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read name list '{}'", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Loads team names: the first comma-delimited field of each non-blank line.
pub fn load_team_names(path: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read team list '{}'", path.display()))?;
    Ok(content
        .lines()
        .filter_map(|line| line.split(',').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect())
}

/// Builds the team registry: one team per name, each with `players_per_team`
/// players whose first/last names are drawn uniformly from the given lists.
///
/// Team ids and per-team player ids are 1-based in input order.
///
/// # Errors
/// Fails when fewer than two teams are named, when either name list is empty, or
/// when `players_per_team` is zero — a league cannot be created from such input.
#[instrument(skip(first_names, last_names, rng))]
pub fn build_teams<R: Rng>(
    team_names: &[String],
    first_names: &[String],
    last_names: &[String],
    players_per_team: usize,
    rng: &mut R,
) -> anyhow::Result<TeamRegistry> {
    if team_names.len() < 2 {
        bail!(
            "a league needs at least two teams, got {}",
            team_names.len()
        );
    }
    if first_names.is_empty() {
        bail!("first-name list is empty");
    }
    if last_names.is_empty() {
        bail!("last-name list is empty");
    }
    if players_per_team == 0 {
        bail!("players_per_team must be at least 1");
    }

    let mut teams = Vec::with_capacity(team_names.len());
    for (index, name) in team_names.iter().enumerate() {
        let players = (0..players_per_team)
            .map(|p| {
                let first = &first_names[rng.gen_range(0..first_names.len())];
                let last = &last_names[rng.gen_range(0..last_names.len())];
                Player::new(PlayerId(p as u32 + 1), first.clone(), last.clone())
            })
            .collect();
        teams.push(Team::new(TeamId(index as u32 + 1), name.clone(), players));
    }
    info!(teams = teams.len(), players_per_team, "rosters built");
    Ok(TeamRegistry::new(teams))
}
