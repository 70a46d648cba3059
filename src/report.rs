//! Per-fixture snapshots handed to the display layer.
//!
//! The core never renders anything itself: after each fixture barrier it builds
//! a [`FixtureReport`] — the fixture's pairings, its results with an outcome
//! label, and the standings at that point — and hands it to whatever implements
//! [`LeagueObserver`]. A GUI, a web view or the bundled [`ConsolePrinter`] are
//! all interchangeable behind that seam.

use std::fmt;

use crate::schedule::{Match, MatchId, Outcome, Score};
use crate::standings::TableRow;
use crate::team::TeamRegistry;

/// An upcoming or just-played matchup, by team names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Match identifier.
    pub match_id: MatchId,
    /// Home team name.
    pub home: String,
    /// Away team name.
    pub away: String,
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match {}: {} vs. {}", self.match_id, self.home, self.away)
    }
}

/// A completed match with its score and outcome label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    /// Match identifier.
    pub match_id: MatchId,
    /// Home team name.
    pub home: String,
    /// Away team name.
    pub away: String,
    /// Final score.
    pub score: Score,
}

impl ResultLine {
    /// `"<Team> wins"` or `"Draw"`.
    pub fn label(&self) -> String {
        match self.score.outcome() {
            Outcome::HomeWin => format!("{} wins", self.home),
            Outcome::AwayWin => format!("{} wins", self.away),
            Outcome::Draw => "Draw".to_owned(),
        }
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Match {}: {} {} - {} {} ({})",
            self.match_id,
            self.home,
            self.score.home,
            self.score.away,
            self.away,
            self.label()
        )
    }
}

/// Read-only snapshot of one completed fixture.
#[derive(Debug, Clone)]
pub struct FixtureReport {
    /// Zero-based fixture index.
    pub fixture: usize,
    /// The fixture's matchups.
    pub pairings: Vec<Pairing>,
    /// The fixture's results, in match-id order.
    pub results: Vec<ResultLine>,
    /// Standings after this fixture.
    pub standings: Vec<TableRow>,
}

impl FixtureReport {
    pub(crate) fn new(fixture: usize, registry: &TeamRegistry, resolved: &[Match], standings: Vec<TableRow>) -> Self {
        let pairings = resolved.iter().map(|m| pairing(registry, m)).collect();
        let results = resolved
            .iter()
            .filter_map(|m| {
                m.score.map(|score| ResultLine {
                    match_id: m.id,
                    home: registry.name(m.home).to_owned(),
                    away: registry.name(m.away).to_owned(),
                    score,
                })
            })
            .collect();
        FixtureReport {
            fixture,
            pairings,
            results,
            standings,
        }
    }

    /// Matchup list, one line per match.
    pub fn pairings_text(&self) -> String {
        self.pairings
            .iter()
            .map(Pairing::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Result list, one line per match.
    pub fn results_text(&self) -> String {
        self.results
            .iter()
            .map(ResultLine::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Standings table with the `Team\tPoints` header.
    pub fn table_text(&self) -> String {
        let rows = self
            .standings
            .iter()
            .map(|row| format!("{}\t{}", row.name, row.points))
            .collect::<Vec<_>>()
            .join("\n");
        format!("League Table:\n\nTeam\tPoints\n{rows}")
    }
}

impl fmt::Display for FixtureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fixture {}", self.fixture)?;
        writeln!(f, "{}", self.results_text())?;
        write!(f, "{}", self.table_text())
    }
}

pub(crate) fn pairing(registry: &TeamRegistry, m: &Match) -> Pairing {
    Pairing {
        match_id: m.id,
        home: registry.name(m.home).to_owned(),
        away: registry.name(m.away).to_owned(),
    }
}

/// Callback seam for the display layer.
///
/// Invoked by [`League::play`](crate::league::League::play) after every fixture
/// barrier, on the orchestrating thread. The default implementation ignores the
/// report, so a headless run needs no observer logic at all.
pub trait LeagueObserver {
    /// Called once per completed fixture, after standings are updated.
    fn on_fixture_complete(&mut self, report: &FixtureReport) {
        let _ = report;
    }
}

/// Observer that ignores every report.
#[derive(Debug, Default)]
pub struct NullObserver;

impl LeagueObserver for NullObserver {}

/// Observer printing fixtures to stdout with a little ANSI color.
#[derive(Debug, Default)]
pub struct ConsolePrinter;

impl ConsolePrinter {
    /// Creates a console printer.
    pub fn new() -> Self {
        ConsolePrinter
    }
}

impl LeagueObserver for ConsolePrinter {
    fn on_fixture_complete(&mut self, report: &FixtureReport) {
        const GREEN: &str = "\x1b[32m";
        const RESET: &str = "\x1b[0m";
        println!("{GREEN}Fixture {}{RESET}", report.fixture);
        println!("{}", report.results_text());
        println!();
        println!("{}", report.table_text());
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Score;
    use crate::team::TeamId;

    fn line(home: &str, away: &str, h: u8, a: u8) -> ResultLine {
        ResultLine {
            match_id: MatchId(3),
            home: home.to_owned(),
            away: away.to_owned(),
            score: Score { home: h, away: a },
        }
    }

    #[test]
    fn result_line_format() {
        assert_eq!(
            line("Arsenal", "Leeds", 2, 1).to_string(),
            "Match 3: Arsenal 2 - 1 Leeds (Arsenal wins)"
        );
        assert_eq!(
            line("Arsenal", "Leeds", 0, 2).to_string(),
            "Match 3: Arsenal 0 - 2 Leeds (Leeds wins)"
        );
        assert_eq!(
            line("Arsenal", "Leeds", 1, 1).to_string(),
            "Match 3: Arsenal 1 - 1 Leeds (Draw)"
        );
    }

    #[test]
    fn pairing_format() {
        let p = Pairing {
            match_id: MatchId(1),
            home: "A".to_owned(),
            away: "B".to_owned(),
        };
        assert_eq!(p.to_string(), "Match 1: A vs. B");
    }

    #[test]
    fn table_text_has_header_and_rows() {
        let report = FixtureReport {
            fixture: 0,
            pairings: vec![],
            results: vec![],
            standings: vec![
                TableRow {
                    team: TeamId(1),
                    name: "A".to_owned(),
                    points: 3,
                },
                TableRow {
                    team: TeamId(2),
                    name: "B".to_owned(),
                    points: 0,
                },
            ],
        };
        assert_eq!(report.table_text(), "League Table:\n\nTeam\tPoints\nA\t3\nB\t0");
    }
}
