use crate::league::LeagueRoundResult;
use crate::player::Player;
use crate::r#match::{MatchEngine, MatchSquad};
use crate::team::Team;
use crate::utils::SimulationRng;
use log::debug;

/// Monthly round: every team plays at most once.
pub struct LeagueRound;

impl LeagueRound {
    /// Shuffles team ids and pairs them in order. With an odd count the last
    /// team sits the round out.
    pub fn fixtures(teams: &[Team], rng: &mut SimulationRng) -> Vec<(u32, u32)> {
        let mut team_ids: Vec<u32> = teams.iter().map(|t| t.id).collect();
        rng.shuffle(&mut team_ids);

        team_ids
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    pub fn simulate(teams: &[Team], players: &[Player], rng: &mut SimulationRng) -> LeagueRoundResult {
        let fixtures = Self::fixtures(teams, rng);

        let matches = fixtures
            .into_iter()
            .map(|(home_id, away_id)| {
                let home = MatchSquad::select(home_id, players);
                let away = MatchSquad::select(away_id, players);

                let result = MatchEngine::play(&home, &away, rng);

                debug!(
                    "fixture {} vs {}: {}-{}",
                    home_id, away_id, result.home_score, result.away_score
                );

                result
            })
            .collect();

        LeagueRoundResult::new(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn teams(count: u32) -> Vec<Team> {
        (1..=count)
            .map(|id| Team::new(id, format!("Team {}", id), 1_000_000, 5))
            .collect()
    }

    #[test]
    fn every_team_plays_once() {
        let mut rng = SimulationRng::from_seed(8);
        let fixtures = LeagueRound::fixtures(&teams(12), &mut rng);

        let ids: HashSet<u32> = fixtures.iter().flat_map(|(h, a)| [*h, *a]).collect();

        assert_eq!(fixtures.len(), 6);
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn odd_team_sits_out() {
        let mut rng = SimulationRng::from_seed(9);
        let fixtures = LeagueRound::fixtures(&teams(5), &mut rng);

        assert_eq!(fixtures.len(), 2);
    }

    #[test]
    fn single_team_has_no_fixture() {
        let mut rng = SimulationRng::from_seed(10);
        assert!(LeagueRound::fixtures(&teams(1), &mut rng).is_empty());
    }
}
