use crate::r#match::MatchResultRaw;
use crate::simulator::{SimulationResult, SimulatorData};

pub struct LeagueRoundResult {
    pub matches: Vec<MatchResultRaw>,
}

impl LeagueRoundResult {
    pub fn new(matches: Vec<MatchResultRaw>) -> Self {
        LeagueRoundResult { matches }
    }

    /// Stores results and ratings, folds scores into the table and replaces
    /// `recent_results` with this round.
    pub fn process(self, data: &mut SimulatorData, result: &mut SimulationResult) {
        data.recent_results.clear();

        for raw in self.matches {
            let id = data.ids.next_match_result();
            let (match_result, ratings) = raw.into_result(id);

            data.table.apply_result(&match_result);

            for rating in ratings {
                if let Some(player) = data.player_mut(rating.player_id) {
                    player.last_match_rating = Some(rating.rating);
                }
            }

            data.recent_results.push(match_result.clone());
            result.match_results.push(match_result);
        }
    }
}
