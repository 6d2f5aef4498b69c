//! Plain-text rendering of assignments and standings.

use crate::domain::model::{AssignmentOutcome, CounterRecord, Leaderboard, RankingPolicy};
use std::fmt;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub const NO_DATA_NOTICE: &str =
    "No data available yet.\nAssign positions first to see the leaderboard.";

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`, ...
pub fn ordinal(position: usize) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", position, suffix)
}

fn write_banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", RULE)?;
    writeln!(f, "{:^26}", title)?;
    writeln!(f, "{}\n", RULE)
}

fn stats_line(record: &CounterRecord) -> String {
    match record.points {
        Some(points) => format!(
            "🥇 1st: {} | 🥈 2nd: {} | ⭐ {} pts",
            record.first, record.second, points
        ),
        None => format!("🥇 1st: {} | 🥈 2nd: {}", record.first, record.second),
    }
}

/// Positions handed out by one assignment, then every known name's counters.
pub struct AssignmentReport<'a> {
    pub outcome: &'a AssignmentOutcome,
}

impl fmt::Display for AssignmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, "ASSIGNED POSITIONS")?;

        for placement in &self.outcome.assignment.placements {
            let position = ordinal(placement.position);
            match placement.points_awarded {
                Some(points) => writeln!(
                    f,
                    "  {:<5} ➤  {}  (+{} pts)",
                    position, placement.name, points
                )?,
                None => writeln!(f, "  {:<5} ➤  {}", position, placement.name)?,
            }
        }

        writeln!(f)?;
        write_banner(f, "STATISTICS")?;

        for (name, record) in self.outcome.counters.iter() {
            writeln!(f, "{}", name)?;
            writeln!(f, "   {}\n", stats_line(record))?;
        }
        Ok(())
    }
}

pub struct LeaderboardReport<'a> {
    pub board: &'a Leaderboard,
    pub policy: RankingPolicy,
}

impl fmt::Display for LeaderboardReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let standings = match self.board {
            Leaderboard::NoData => return f.write_str(NO_DATA_NOTICE),
            Leaderboard::Standings(standings) => standings,
        };

        write_banner(f, "🏆 LEADERBOARD 🏆")?;

        for standing in standings {
            match standing.prize {
                Some(prize) => writeln!(f, "{} {}", prize.medal(), standing.name)?,
                None => writeln!(f, "  {}. {}", standing.rank, standing.name)?,
            }

            let record = &standing.record;
            match self.policy {
                RankingPolicy::LeastUsedFirst => writeln!(
                    f,
                    "      1st: {} | 2nd: {}\n",
                    record.first, record.second
                )?,
                RankingPolicy::InputOrderPoints => writeln!(
                    f,
                    "      {} pts | 1st: {} | 2nd: {}\n",
                    record.points_or_zero(),
                    record.first,
                    record.second
                )?,
            }
        }
        Ok(())
    }
}

pub fn render_assignment(outcome: &AssignmentOutcome) -> String {
    AssignmentReport { outcome }.to_string()
}

pub fn render_leaderboard(board: &Leaderboard, policy: RankingPolicy) -> String {
    LeaderboardReport { board, policy }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        CountersStore, Name, Placement, PositionAssignment, Prize, Standing,
    };

    #[test]
    fn test_ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101, 111]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            got,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st", "111th"]
        );
    }

    #[test]
    fn test_render_no_data() {
        let text = render_leaderboard(&Leaderboard::NoData, RankingPolicy::LeastUsedFirst);
        assert_eq!(text, NO_DATA_NOTICE);
    }

    #[test]
    fn test_render_assignment_with_points() {
        let mut counters = CountersStore::new();
        counters.insert(
            Name::from("Amit"),
            CounterRecord {
                first: 1,
                second: 0,
                points: Some(12),
            },
        );
        let outcome = AssignmentOutcome {
            assignment: PositionAssignment {
                policy: RankingPolicy::InputOrderPoints,
                placements: vec![Placement {
                    position: 1,
                    name: Name::from("Amit"),
                    points_awarded: Some(12),
                }],
            },
            counters,
        };

        let text = render_assignment(&outcome);
        assert!(text.contains("ASSIGNED POSITIONS"));
        assert!(text.contains("1st   ➤  Amit  (+12 pts)"));
        assert!(text.contains("🥇 1st: 1 | 🥈 2nd: 0 | ⭐ 12 pts"));
    }

    #[test]
    fn test_render_leaderboard_medals() {
        let standings = ["Amit", "Bela", "Cara", "Dev"]
            .iter()
            .enumerate()
            .map(|(i, name)| Standing {
                rank: i + 1,
                name: Name::from(*name),
                record: CounterRecord::default(),
                prize: Prize::for_rank(i + 1),
            })
            .collect();

        let text = render_leaderboard(
            &Leaderboard::Standings(standings),
            RankingPolicy::LeastUsedFirst,
        );
        assert!(text.contains("🥇 Amit"));
        assert!(text.contains("🥉 Cara"));
        assert!(text.contains("  4. Dev"));
        assert!(text.contains("1st: 0 | 2nd: 0"));
    }

    #[test]
    fn test_points_leaderboard_shows_totals() {
        let board = Leaderboard::Standings(vec![Standing {
            rank: 1,
            name: Name::from("Kiran"),
            record: CounterRecord {
                first: 2,
                second: 0,
                points: Some(24),
            },
            prize: Prize::for_rank(1),
        }]);

        let report = LeaderboardReport {
            board: &board,
            policy: RankingPolicy::InputOrderPoints,
        };
        let text = format!("{}", report);
        assert!(text.starts_with(RULE));
        assert!(text.contains("🥇 Kiran\n      24 pts | 1st: 2 | 2nd: 0"));
        assert_eq!(text, render_leaderboard(&board, RankingPolicy::InputOrderPoints));
    }
}
