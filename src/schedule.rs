//! Season schedule: matches, goals and round-robin fixture generation.
//!
//! The generator uses the circle method: the team in slot 0 stays fixed while the
//! remaining slots rotate one position per round, and round `r` pairs slot `i`
//! with slot `N-1-i`. Every unordered team pair appears exactly once, so a league
//! of `N` teams always yields `N * (N - 1) / 2` matches. For an odd team count a
//! phantom bye slot is appended and pairings against it are skipped.
//!
//! Match ids are assigned once, sequentially from 1 in generation order, and are
//! never rewritten afterwards. Fixtures are not stored: they are the computed
//! partition `id / matches_per_fixture`, which leaves fixture 0 one match short
//! because ids start at 1.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::team::{PlayerId, TeamId, TeamRegistry};

/// Unique identifier of a match within a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(pub u32);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final goal counts of a resolved match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Goals scored by the home side.
    pub home: u8,
    /// Goals scored by the away side.
    pub away: u8,
}

/// Result of a resolved match, from the home side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Home side scored strictly more goals.
    HomeWin,
    /// Away side scored strictly more goals.
    AwayWin,
    /// Both sides scored the same number of goals.
    Draw,
}

impl Score {
    /// Outcome encoded by these goal counts.
    pub fn outcome(&self) -> Outcome {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// A single goal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    /// Match the goal was scored in.
    pub match_id: MatchId,
    /// Minute of play, in `1..=90`.
    pub minute: u8,
    /// Side the goal counts for.
    pub team: TeamId,
    /// Scorer; must belong to the roster of `team`.
    pub scorer: PlayerId,
}

/// A scheduled (and possibly resolved) match between two teams.
///
/// Goals and score are written exactly once per simulation run, by the match
/// resolver; re-simulating a match overwrites both.
#[derive(Debug, Clone)]
pub struct Match {
    /// Identifier, assigned at schedule generation and stable thereafter.
    pub id: MatchId,
    /// Home side.
    pub home: TeamId,
    /// Away side.
    pub away: TeamId,
    /// Goal events, home goals first.
    pub goals: Vec<Goal>,
    /// Final score, `None` until resolved.
    pub score: Option<Score>,
}

impl Match {
    /// Creates an unresolved match.
    pub fn new(id: MatchId, home: TeamId, away: TeamId) -> Self {
        Match {
            id,
            home,
            away,
            goals: Vec::new(),
            score: None,
        }
    }

    /// True once the resolver has produced a score.
    pub fn is_resolved(&self) -> bool {
        self.score.is_some()
    }

    /// Number of goal events attributed to `team`.
    pub fn goals_for(&self, team: TeamId) -> usize {
        self.goals.iter().filter(|g| g.team == team).count()
    }

    /// Outcome of the match, `None` until resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        self.score.map(|s| s.outcome())
    }

    /// True if `team` plays in this match on either side.
    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }
}

/// Index of the fixture a match belongs to.
pub fn fixture_of(id: MatchId, matches_per_fixture: usize) -> usize {
    id.0 as usize / matches_per_fixture
}

/// Generates the full single round-robin season for the registered teams.
///
/// The team order is shuffled once up front, so the pairing structure is
/// deterministic for a given shuffled order while the concrete matchups vary
/// with the seed.
pub fn generate_schedule<R: Rng>(registry: &TeamRegistry, rng: &mut R) -> Vec<Match> {
    let mut order: Vec<TeamId> = registry.teams().iter().map(|t| t.id).collect();
    order.shuffle(rng);
    trace!(?order, "shuffled team order");
    round_robin(&order)
}

/// Circle-method pairing over an already-ordered team list.
fn round_robin(order: &[TeamId]) -> Vec<Match> {
    let mut slots: Vec<Option<TeamId>> = order.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None); // bye
    }
    let n = slots.len();
    if n < 2 {
        return Vec::new();
    }

    let fixed = slots[0];
    let mut rest: Vec<Option<TeamId>> = slots[1..].to_vec();
    let mut schedule = Vec::with_capacity(order.len() * order.len().saturating_sub(1) / 2);
    let mut next_id = 1u32;

    for _round in 0..n - 1 {
        let mut row = Vec::with_capacity(n);
        row.push(fixed);
        row.extend(rest.iter().copied());
        for i in 0..n / 2 {
            if let (Some(home), Some(away)) = (row[i], row[n - 1 - i]) {
                schedule.push(Match::new(MatchId(next_id), home, away));
                next_id += 1;
            }
        }
        rest.rotate_right(1);
    }
    schedule
}
