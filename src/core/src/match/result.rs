use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_score: u8,
    pub away_score: u8,
}

impl MatchResult {
    pub fn new(id: u32, home_team_id: u32, away_team_id: u32, home_score: u8, away_score: u8) -> Self {
        MatchResult {
            id,
            home_team_id,
            away_team_id,
            home_score,
            away_score,
        }
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team_id, self.home_score, self.away_score, self.away_team_id
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerMatchRating {
    pub player_id: u32,
    pub rating: f32,
}

/// Engine output before the fixture is assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResultRaw {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_score: u8,
    pub away_score: u8,
    pub ratings: Vec<PlayerMatchRating>,
}

impl MatchResultRaw {
    pub fn into_result(self, id: u32) -> (MatchResult, Vec<PlayerMatchRating>) {
        (
            MatchResult::new(id, self.home_team_id, self.away_team_id, self.home_score, self.away_score),
            self.ratings,
        )
    }
}
