//! The league table: cumulative points folded from completed matches.

use std::collections::HashMap;

use crate::schedule::{Match, Outcome};
use crate::team::{TeamId, TeamRegistry};

/// Points awarded for a win.
pub const POINTS_WIN: u32 = 3;
/// Points awarded to each side for a draw.
pub const POINTS_DRAW: u32 = 1;

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Team this row belongs to.
    pub team: TeamId,
    /// Team display name, denormalized for rendering.
    pub name: String,
    /// Cumulative points over all completed matches.
    pub points: u32,
}

/// Recomputes the standings from scratch over `matches`.
///
/// Only matches with a recorded score contribute; each awards win/draw points
/// exactly once per computation. Because the fold always starts from zero,
/// calling this any number of times over the same match set yields identical
/// totals — there is no running state to double-count into. Rows are sorted
/// descending by points; ties keep registry insertion order (stable sort).
pub fn compute_standings(registry: &TeamRegistry, matches: &[Match]) -> Vec<TableRow> {
    let mut points: HashMap<TeamId, u32> =
        registry.teams().iter().map(|t| (t.id, 0)).collect();

    for m in matches {
        let Some(score) = m.score else { continue };
        match score.outcome() {
            Outcome::HomeWin => {
                *points.entry(m.home).or_default() += POINTS_WIN;
            }
            Outcome::AwayWin => {
                *points.entry(m.away).or_default() += POINTS_WIN;
            }
            Outcome::Draw => {
                *points.entry(m.home).or_default() += POINTS_DRAW;
                *points.entry(m.away).or_default() += POINTS_DRAW;
            }
        }
    }

    let mut rows: Vec<TableRow> = registry
        .teams()
        .iter()
        .map(|t| TableRow {
            team: t.id,
            name: t.name.clone(),
            points: points.get(&t.id).copied().unwrap_or(0),
        })
        .collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Match, MatchId, Score};
    use crate::team::Team;

    fn registry_of(n: u32) -> TeamRegistry {
        TeamRegistry::new(
            (1..=n)
                .map(|i| Team::new(TeamId(i), format!("T{i}"), vec![]))
                .collect(),
        )
    }

    fn scored(id: u32, home: u32, away: u32, score: (u8, u8)) -> Match {
        let mut m = Match::new(MatchId(id), TeamId(home), TeamId(away));
        m.score = Some(Score {
            home: score.0,
            away: score.1,
        });
        m
    }

    #[test]
    fn points_law() {
        let registry = registry_of(2);

        let table = compute_standings(&registry, &[scored(1, 1, 2, (3, 1))]);
        assert_eq!(table[0].team, TeamId(1));
        assert_eq!(table[0].points, 3);
        assert_eq!(table[1].points, 0);

        let table = compute_standings(&registry, &[scored(1, 1, 2, (2, 2))]);
        assert_eq!(table[0].points, 1);
        assert_eq!(table[1].points, 1);

        let table = compute_standings(&registry, &[scored(1, 1, 2, (0, 4))]);
        assert_eq!(table[0].team, TeamId(2));
        assert_eq!(table[0].points, 3);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let registry = registry_of(4);
        let matches = vec![
            scored(1, 1, 2, (1, 0)),
            scored(2, 3, 4, (2, 2)),
            scored(3, 1, 3, (0, 3)),
        ];
        let once = compute_standings(&registry, &matches);
        let twice = compute_standings(&registry, &matches);
        assert_eq!(once, twice);
    }

    #[test]
    fn unresolved_matches_do_not_score() {
        let registry = registry_of(2);
        let table = compute_standings(&registry, &[Match::new(MatchId(1), TeamId(1), TeamId(2))]);
        assert!(table.iter().all(|row| row.points == 0));
    }

    #[test]
    fn ties_keep_registry_order() {
        let registry = registry_of(3);
        // T2 beats T3; T1 and T3 tied on zero points -> T1 before T3.
        let table = compute_standings(&registry, &[scored(1, 2, 3, (1, 0))]);
        let order: Vec<TeamId> = table.iter().map(|r| r.team).collect();
        assert_eq!(order, vec![TeamId(2), TeamId(1), TeamId(3)]);
    }
}
