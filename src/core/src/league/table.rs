use crate::r#match::MatchResult;
use crate::team::Team;
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl LeagueTableRow {
    pub fn new(team_id: u32) -> Self {
        LeagueTableRow {
            team_id,
            ..Default::default()
        }
    }

    pub fn points(&self) -> u32 {
        self.won * 3 + self.drawn
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored as u32;
        self.goals_against += conceded as u32;

        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => self.won += 1,
            std::cmp::Ordering::Less => self.lost += 1,
            std::cmp::Ordering::Equal => self.drawn += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn new(teams: &[Team]) -> Self {
        LeagueTable {
            rows: teams.iter().map(|t| LeagueTableRow::new(t.id)).collect(),
        }
    }

    /// Zeroes every row, keeping one per team.
    pub fn reset(&mut self, teams: &[Team]) {
        *self = LeagueTable::new(teams);
    }

    pub fn row(&self, team_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|r| r.team_id == team_id)
    }

    /// Folds one fixture into both rows. Fixtures naming a team without a row
    /// leave the table untouched.
    pub fn apply_result(&mut self, result: &MatchResult) -> bool {
        let home_idx = self.rows.iter().position(|r| r.team_id == result.home_team_id);
        let away_idx = self.rows.iter().position(|r| r.team_id == result.away_team_id);

        let (Some(home_idx), Some(away_idx)) = (home_idx, away_idx) else {
            warn!(
                "league table: no row for fixture {} ({} vs {})",
                result.id, result.home_team_id, result.away_team_id
            );
            return false;
        };

        self.rows[home_idx].record(result.home_score, result.away_score);
        self.rows[away_idx].record(result.away_score, result.home_score);

        true
    }

    /// Points, then goal difference, then goals scored.
    pub fn sorted_rows(&self) -> Vec<&LeagueTableRow> {
        self.rows
            .iter()
            .sorted_by_key(|r| Reverse((r.points(), r.goal_difference(), r.goals_for)))
            .collect()
    }

    pub fn total_played(&self) -> u32 {
        self.rows.iter().map(|r| r.played).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<Team> {
        (1..=3)
            .map(|id| Team::new(id, format!("Team {}", id), 1_000_000, 5))
            .collect()
    }

    #[test]
    fn apply_result_updates_both_rows() {
        let mut table = LeagueTable::new(&teams());

        assert!(table.apply_result(&MatchResult::new(1, 1, 2, 3, 1)));

        let home = table.row(1).unwrap();
        let away = table.row(2).unwrap();

        assert_eq!((home.played, home.won, home.points()), (1, 1, 3));
        assert_eq!((away.played, away.lost, away.goal_difference()), (1, 1, -2));
    }

    #[test]
    fn unknown_team_is_ignored() {
        let mut table = LeagueTable::new(&teams());

        assert!(!table.apply_result(&MatchResult::new(1, 1, 99, 1, 0)));
        assert_eq!(table.total_played(), 0);
    }

    #[test]
    fn sorted_by_points_then_difference_then_goals() {
        let mut table = LeagueTable::new(&teams());

        table.apply_result(&MatchResult::new(1, 1, 2, 1, 1));
        table.apply_result(&MatchResult::new(2, 3, 2, 2, 0));
        table.apply_result(&MatchResult::new(3, 1, 2, 4, 2));

        let order: Vec<u32> = table.sorted_rows().iter().map(|r| r.team_id).collect();

        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn reset_zeroes_rows() {
        let mut table = LeagueTable::new(&teams());
        table.apply_result(&MatchResult::new(1, 1, 2, 2, 2));

        table.reset(&teams());

        assert!(table.rows.iter().all(|r| *r == LeagueTableRow::new(r.team_id)));
    }
}
