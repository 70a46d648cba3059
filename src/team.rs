//! Teams, players and the team registry.
//!
//! Teams are immutable once the league is created and are shared between the
//! orchestrator and concurrent match tasks as [`Arc<Team>`]. Matches never hold a
//! team directly; they hold a [`TeamId`] resolved through the [`TeamRegistry`].
//! Cumulative points are *not* part of a team — they only exist in the standings
//! table, which is recomputed by a single thread after each fixture barrier.

use std::fmt;
use std::sync::Arc;

/// Unique, stable identifier of a team within a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a player, unique within its team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A squad member. Immutable after creation, owned by exactly one [`Team`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Identifier, unique within the owning team.
    pub id: PlayerId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Player {
    /// Creates a player.
    pub fn new(id: PlayerId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Player {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last" form used by reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A team with its ordered roster.
#[derive(Debug)]
pub struct Team {
    /// Unique, stable identifier.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Ordered roster; player ids are 1-based within the team.
    pub players: Vec<Player>,
}

impl Team {
    /// Creates a team owning `players`.
    pub fn new(id: TeamId, name: impl Into<String>, players: Vec<Player>) -> Self {
        Team {
            id,
            name: name.into(),
            players,
        }
    }

    /// Looks up a squad member by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Team: {} ID: {}", self.name, self.id)?;
        write!(f, "Squad:")?;
        for player in &self.players {
            write!(f, "\n{}", player.full_name())?;
        }
        Ok(())
    }
}

/// Ordered id -> team map. Insertion order is the tie-break order everywhere a
/// stable ordering is required (standings, top-scorer lists).
#[derive(Debug, Default)]
pub struct TeamRegistry {
    teams: Vec<Arc<Team>>,
}

impl TeamRegistry {
    /// Builds a registry from teams in their creation order.
    pub fn new(teams: Vec<Team>) -> Self {
        TeamRegistry {
            teams: teams.into_iter().map(Arc::new).collect(),
        }
    }

    /// Looks up a team by id.
    pub fn get(&self, id: TeamId) -> Option<&Arc<Team>> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Display name of a team, or "?" for an unknown id.
    pub fn name(&self, id: TeamId) -> &str {
        self.get(id).map(|t| t.name.as_str()).unwrap_or("?")
    }

    /// All teams, in insertion order.
    pub fn teams(&self) -> &[Arc<Team>] {
        &self.teams
    }

    /// Number of registered teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// True when no team is registered.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_team() -> Team {
        Team::new(
            TeamId(1),
            "Red Star",
            vec![
                Player::new(PlayerId(1), "Ada", "Lovelace"),
                Player::new(PlayerId(2), "Alan", "Turing"),
            ],
        )
    }

    #[test]
    fn player_lookup_and_full_name() {
        let team = sample_team();
        assert_eq!(team.player(PlayerId(2)).unwrap().full_name(), "Alan Turing");
        assert!(team.player(PlayerId(99)).is_none());
    }

    #[test]
    fn registry_preserves_insertion_order() {
        let registry = TeamRegistry::new(vec![
            Team::new(TeamId(1), "A", vec![]),
            Team::new(TeamId(2), "B", vec![]),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.teams()[0].name, "A");
        assert_eq!(registry.name(TeamId(2)), "B");
        assert_eq!(registry.name(TeamId(7)), "?");
    }

    #[test]
    fn team_display_lists_squad() {
        let rendered = sample_team().to_string();
        assert!(rendered.starts_with("Team: Red Star ID: 1"));
        assert!(rendered.contains("Ada Lovelace"));
    }
}
