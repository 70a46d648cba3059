//! League orchestration: creation, the fixture loop and the query surface.
//!
//! A [`League`] owns the team registry, the season schedule and the latest
//! standings. [`League::play`] drives the season: fixtures run strictly in
//! order, the matches inside a fixture run concurrently, and the standings are
//! recomputed on the orchestrating thread only after the fixture barrier — so
//! no observer ever sees a table built from a half-finished fixture. Any match
//! failure halts the season; there is no retry and no partially-scored fixture.

use std::mem;
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument, trace};

use crate::configuration::LeagueConfig;
use crate::fixture_runner::run_fixture;
use crate::logger::init_logger;
use crate::report::{pairing, FixtureReport, LeagueObserver, Pairing, ResultLine};
use crate::roster;
use crate::schedule::{self, fixture_of, Match};
use crate::standings::{compute_standings, TableRow};
use crate::team::{Player, Team, TeamId, TeamRegistry};

/// A single round-robin league season.
#[derive(Debug)]
pub struct League {
    config: LeagueConfig,
    registry: TeamRegistry,
    pending: Vec<Match>,
    completed: Vec<Match>,
    table: Vec<TableRow>,
    base_seed: u64,
    next_fixture: usize,
}

impl League {
    /// Creates a league from already-parsed name lists.
    ///
    /// Builds the rosters and the full round-robin schedule up front; no match
    /// is resolved yet.
    ///
    /// # Errors
    /// Fails on configuration errors: fewer than two team names, empty player
    /// name lists, or zero-valued sizes. Nothing is simulated in that case.
    #[instrument(skip_all)]
    pub fn new(
        config: LeagueConfig,
        team_names: Vec<String>,
        first_names: Vec<String>,
        last_names: Vec<String>,
    ) -> anyhow::Result<League> {
        if config.log {
            init_logger();
        }
        config.validate()?;

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
        let registry = roster::build_teams(
            &team_names,
            &first_names,
            &last_names,
            config.players_per_team,
            &mut rng,
        )?;
        let pending = schedule::generate_schedule(&registry, &mut rng);
        let table = compute_standings(&registry, &[]);
        info!(
            teams = registry.len(),
            matches = pending.len(),
            base_seed,
            "league created"
        );

        Ok(League {
            config,
            registry,
            pending,
            completed: Vec::new(),
            table,
            base_seed,
            next_fixture: 0,
        })
    }

    /// Creates a league by loading the three name files.
    ///
    /// The team file carries one team per line, name in the first
    /// comma-delimited field; the player name files carry one name per line.
    pub fn from_files(
        config: LeagueConfig,
        teams_path: impl AsRef<std::path::Path>,
        first_names_path: impl AsRef<std::path::Path>,
        last_names_path: impl AsRef<std::path::Path>,
    ) -> anyhow::Result<League> {
        let team_names = roster::load_team_names(teams_path).context("loading team names")?;
        let first_names = roster::load_names(first_names_path).context("loading first names")?;
        let last_names = roster::load_names(last_names_path).context("loading last names")?;
        Self::new(config, team_names, first_names, last_names)
    }

    /// Plays the whole season, fixture by fixture.
    ///
    /// After each fixture barrier the standings are recomputed and the observer
    /// receives that fixture's [`FixtureReport`]. The configured fixture
    /// interval, if any, is slept between fixtures (never after the last one).
    ///
    /// # Errors
    /// Stops at the first failed fixture; completed fixtures keep their points,
    /// the failed fixture contributes nothing.
    pub fn play(&mut self, observer: &mut impl LeagueObserver) -> anyhow::Result<()> {
        while !self.is_finished() {
            if let Some(report) = self.play_next_fixture()? {
                observer.on_fixture_complete(&report);
                if !self.is_finished() && !self.config.fixture_interval.is_zero() {
                    thread::sleep(self.config.fixture_interval);
                }
            }
        }
        Ok(())
    }

    /// Runs the next fixture to completion and updates the standings.
    ///
    /// Returns `None` for a fixture index with no matches (fixture 0 is empty
    /// when `matches_per_fixture` is 1, ids being 1-based); the season simply
    /// moves on to the next index.
    pub fn play_next_fixture(&mut self) -> anyhow::Result<Option<FixtureReport>> {
        let f = self.next_fixture;
        self.next_fixture += 1;

        let per_fixture = self.config.matches_per_fixture;
        let (mut fixture, rest): (Vec<_>, Vec<_>) = mem::take(&mut self.pending)
            .into_iter()
            .partition(|m| fixture_of(m.id, per_fixture) == f);
        self.pending = rest;

        if fixture.is_empty() {
            trace!(fixture = f, "fixture holds no matches");
            return Ok(None);
        }
        fixture.sort_by_key(|m| m.id);
        info!(fixture = f, matches = fixture.len(), "running fixture");

        let resolved = run_fixture(&self.registry, fixture, self.base_seed)
            .with_context(|| format!("fixture {f} failed"))?;

        self.completed.extend(resolved.iter().cloned());
        self.table = compute_standings(&self.registry, &self.completed);
        let report = FixtureReport::new(f, &self.registry, &resolved, self.table.clone());
        info!(fixture = f, "fixture complete");
        Ok(Some(report))
    }

    /// True once every scheduled match has been resolved.
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// All teams, in registry order.
    pub fn teams(&self) -> &[Arc<Team>] {
        self.registry.teams()
    }

    /// Current standings, best team first.
    pub fn standings(&self) -> &[TableRow] {
        &self.table
    }

    /// Matches resolved so far, in id order.
    pub fn completed_matches(&self) -> &[Match] {
        &self.completed
    }

    /// Matches not yet played, in id order.
    pub fn remaining_matches(&self) -> &[Match] {
        &self.pending
    }

    /// Matchups of fixture `f`, played or not.
    pub fn fixture_pairings(&self, f: usize) -> Vec<Pairing> {
        let per_fixture = self.config.matches_per_fixture;
        self.completed
            .iter()
            .chain(self.pending.iter())
            .filter(|m| fixture_of(m.id, per_fixture) == f)
            .map(|m| pairing(&self.registry, m))
            .collect()
    }

    /// Results of the most recently completed fixture, if any.
    pub fn latest_results(&self) -> Vec<ResultLine> {
        let per_fixture = self.config.matches_per_fixture;
        let Some(last) = self
            .completed
            .iter()
            .map(|m| fixture_of(m.id, per_fixture))
            .max()
        else {
            return Vec::new();
        };
        self.completed
            .iter()
            .filter(|m| fixture_of(m.id, per_fixture) == last)
            .filter_map(|m| {
                m.score.map(|score| ResultLine {
                    match_id: m.id,
                    home: self.registry.name(m.home).to_owned(),
                    away: self.registry.name(m.away).to_owned(),
                    score,
                })
            })
            .collect()
    }

    /// Every match (played or scheduled) involving `team`.
    pub fn matches_by_team(&self, team: TeamId) -> Vec<&Match> {
        self.completed
            .iter()
            .chain(self.pending.iter())
            .filter(|m| m.involves(team))
            .collect()
    }

    /// The `n` teams with the most goals scored so far, ties in registry order.
    pub fn top_scoring_teams(&self, n: usize) -> Vec<Arc<Team>> {
        let mut scored: Vec<(usize, &Arc<Team>)> = self
            .registry
            .teams()
            .iter()
            .map(|team| {
                let goals = self
                    .completed
                    .iter()
                    .map(|m| m.goals_for(team.id))
                    .sum::<usize>();
                (goals, team)
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(n).map(|(_, t)| t.clone()).collect()
    }

    /// Players who scored at least `n` goals so far, grouped by team then
    /// player id.
    pub fn players_with_at_least_n_goals(&self, n: usize) -> Vec<&Player> {
        let mut counts = std::collections::HashMap::new();
        for goal in self.completed.iter().flat_map(|m| m.goals.iter()) {
            *counts.entry((goal.team, goal.scorer)).or_insert(0usize) += 1;
        }
        let mut keys: Vec<_> = counts
            .into_iter()
            .filter(|&(_, count)| count >= n)
            .map(|(key, _)| key)
            .collect();
        keys.sort();
        keys.into_iter()
            .filter_map(|(team, player)| self.registry.get(team)?.player(player))
            .collect()
    }

    /// Team at 1-based `position` in the current standings.
    pub fn team_by_position(&self, position: usize) -> Option<Arc<Team>> {
        let row = self.table.get(position.checked_sub(1)?)?;
        self.registry.get(row.team).cloned()
    }
}
