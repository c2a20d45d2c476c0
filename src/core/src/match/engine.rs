use crate::r#match::{MatchPlayer, MatchResultRaw, MatchSquad, PlayerMatchRating};
use crate::utils::SimulationRng;

pub const HOME_ADVANTAGE: f64 = 1.1;
pub const SCORING_TRIALS: usize = 6;
pub const HOME_DRAW_CEILING: f64 = 2.5;
pub const AWAY_DRAW_CEILING: f64 = 3.0;

pub const BASE_RATING: f64 = 6.0;
pub const MIN_RATING: f64 = 4.0;
pub const MAX_RATING: f64 = 10.0;

/// Probabilistic fixture simulation. Reads two squads, writes nothing.
pub struct MatchEngine;

impl MatchEngine {
    pub fn play(home: &MatchSquad, away: &MatchSquad, rng: &mut SimulationRng) -> MatchResultRaw {
        let home_intensity = home.attack() as f64 * HOME_ADVANTAGE / (away.defense().max(1) as f64);
        let away_intensity = away.attack() as f64 / (home.defense().max(1) as f64);

        let mut home_score = 0u8;
        let mut away_score = 0u8;

        for _ in 0..SCORING_TRIALS {
            if rng.uniform(0.0, HOME_DRAW_CEILING) < home_intensity {
                home_score += 1;
            }
            if rng.uniform(0.0, AWAY_DRAW_CEILING) < away_intensity {
                away_score += 1;
            }
        }

        let average_ability = Self::average_ability(home, away);

        let ratings = home
            .players
            .iter()
            .map(|p| Self::rate(p, average_ability, home_score, away_score))
            .chain(
                away.players
                    .iter()
                    .map(|p| Self::rate(p, average_ability, away_score, home_score)),
            )
            .collect();

        MatchResultRaw {
            home_team_id: home.team_id,
            away_team_id: away.team_id,
            home_score,
            away_score,
            ratings,
        }
    }

    /// Integer mean over everyone on the pitch.
    fn average_ability(home: &MatchSquad, away: &MatchSquad) -> i32 {
        let count = (home.players.len() + away.players.len()).max(1) as i32;
        let total: i32 = home
            .players
            .iter()
            .chain(away.players.iter())
            .map(|p| p.ability as i32)
            .sum();

        total / count
    }

    fn rate(player: &MatchPlayer, average_ability: i32, goals_for: u8, goals_against: u8) -> PlayerMatchRating {
        PlayerMatchRating {
            player_id: player.player_id,
            rating: Self::rating(player, average_ability, goals_for, goals_against) as f32,
        }
    }

    pub fn rating(player: &MatchPlayer, average_ability: i32, goals_for: u8, goals_against: u8) -> f64 {
        let gf = goals_for as f64;
        let ga = goals_against as f64;

        let mut rating = BASE_RATING + (player.ability as i32 - average_ability) as f64 / 15.0;

        if player.position.is_attacking() {
            rating += gf * 0.4 - ga * 0.1;
        } else {
            rating -= ga * 0.3 + gf * 0.1;
        }

        rating += match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => 0.5,
            std::cmp::Ordering::Less => -0.3,
            std::cmp::Ordering::Equal => 0.1,
        };

        rating.clamp(MIN_RATING, MAX_RATING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{PlayerPosition, PlayerSkills};

    fn match_player(id: u32, position: PlayerPosition, value: u8) -> MatchPlayer {
        let skills = PlayerSkills::new(value, value, value, value);
        MatchPlayer {
            player_id: id,
            position,
            skills,
            ability: skills.ability(position),
        }
    }

    #[test]
    fn empty_squads_play_goalless() {
        let mut rng = SimulationRng::from_seed(5);
        let home = MatchSquad::new(1, Vec::new());
        let away = MatchSquad::new(2, Vec::new());

        let result = MatchEngine::play(&home, &away, &mut rng);

        assert_eq!((result.home_score, result.away_score), (0, 0));
        assert!(result.ratings.is_empty());
    }

    #[test]
    fn scores_are_bounded_by_trials() {
        let mut rng = SimulationRng::from_seed(6);
        let home = MatchSquad::new(1, (1..=6).map(|id| match_player(id, PlayerPosition::Forward, 99)).collect());
        let away = MatchSquad::new(2, vec![match_player(10, PlayerPosition::Goalkeeper, 10)]);

        let result = MatchEngine::play(&home, &away, &mut rng);

        assert_eq!(result.home_score as usize, SCORING_TRIALS);
        assert_eq!(result.away_score, 0);
        assert_eq!(result.ratings.len(), 7);
    }

    #[test]
    fn ratings_stay_in_range() {
        let forward = match_player(1, PlayerPosition::Forward, 99);
        let keeper = match_player(2, PlayerPosition::Goalkeeper, 20);

        assert_eq!(MatchEngine::rating(&forward, 20, 6, 0), MAX_RATING);
        assert_eq!(MatchEngine::rating(&keeper, 99, 0, 6), MIN_RATING);
    }

    #[test]
    fn draw_rating_for_average_defender() {
        let defender = match_player(1, PlayerPosition::Defender, 60);
        let rating = MatchEngine::rating(&defender, 60, 1, 1);

        assert!((rating - (6.0 - 0.3 - 0.1 + 0.1)).abs() < 1e-9);
    }
}
