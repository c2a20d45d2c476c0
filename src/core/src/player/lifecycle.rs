use crate::config::TrainingCampCatalog;
use crate::news::{NewsCategory, NewsDraft};
use crate::player::{ActiveTraining, Injury, Player, PlayerStatus};
use crate::utils::SimulationRng;
use log::{debug, warn};

/// Monthly chance of a new injury, per mille.
pub const INJURY_CHANCE_PER_MILLE: i32 = 15;
pub const INJURY_MIN_MONTHS: i32 = 1;
pub const INJURY_MAX_MONTHS: i32 = 6;

pub struct PlayerLifecycleResult {
    pub players: Vec<Player>,
    pub news: Vec<NewsDraft>,
}

pub struct PlayerLifecycle;

impl PlayerLifecycle {
    /// Training, injury recovery and new injuries. The first branch that applies
    /// to a player is the only one processed for them this month.
    pub fn process_month(
        players: &[Player],
        camps: &TrainingCampCatalog,
        rng: &mut SimulationRng,
    ) -> PlayerLifecycleResult {
        let mut news = Vec::new();

        let players = players
            .iter()
            .map(|player| {
                let mut player = player.clone();

                if let Some(draft) = Self::process_player(&mut player, camps, rng) {
                    news.push(draft);
                }

                player
            })
            .collect();

        PlayerLifecycleResult { players, news }
    }

    pub fn age_all(players: &[Player]) -> Vec<Player> {
        players
            .iter()
            .map(|player| {
                let mut player = player.clone();
                player.age = player.age.saturating_add(1);
                player
            })
            .collect()
    }

    fn process_player(
        player: &mut Player,
        camps: &TrainingCampCatalog,
        rng: &mut SimulationRng,
    ) -> Option<NewsDraft> {
        match player.status {
            PlayerStatus::Training(training) => Self::process_training(player, training, camps),
            PlayerStatus::Injured(injury) => Self::process_injury(player, injury),
            PlayerStatus::Available => Self::roll_injury(player, rng),
        }
    }

    fn process_training(
        player: &mut Player,
        training: ActiveTraining,
        camps: &TrainingCampCatalog,
    ) -> Option<NewsDraft> {
        let months_remaining = training.months_remaining.saturating_sub(1);

        if months_remaining > 0 {
            player.status = PlayerStatus::Training(ActiveTraining::new(training.camp_id, months_remaining));
            return None;
        }

        player.status = PlayerStatus::Available;

        let Some(camp) = camps.find(training.camp_id) else {
            warn!("player {}: training camp {} no longer exists", player.id, training.camp_id);
            return None;
        };

        let gained = player.skills.improve(camp.target, camp.bonus, player.potential);

        debug!("player {}: finished {} (+{} {})", player.id, camp.name, gained, camp.target);

        Some(NewsDraft::new(
            NewsCategory::Training,
            "Training Completed",
            format!(
                "{} completed the {} and gained {} {}.",
                player.full_name, camp.name, gained, camp.target
            ),
        ))
    }

    fn process_injury(player: &mut Player, injury: Injury) -> Option<NewsDraft> {
        let months_remaining = injury.months_remaining.saturating_sub(1);

        if months_remaining > 0 {
            player.status = PlayerStatus::Injured(Injury::new(months_remaining));
            return None;
        }

        player.status = PlayerStatus::Available;

        Some(NewsDraft::new(
            NewsCategory::Success,
            "Back From Injury",
            format!("{} has recovered and is ready to play again.", player.full_name),
        ))
    }

    fn roll_injury(player: &mut Player, rng: &mut SimulationRng) -> Option<NewsDraft> {
        if !rng.roll_per_mille(INJURY_CHANCE_PER_MILLE) {
            return None;
        }

        let months = rng.range(INJURY_MIN_MONTHS, INJURY_MAX_MONTHS) as u8;
        player.status = PlayerStatus::Injured(Injury::new(months));

        Some(NewsDraft::new(
            NewsCategory::Injury,
            "Injury Blow",
            format!(
                "{} got injured in training and will be out for {} month(s).",
                player.full_name, months
            ),
        ))
    }
}
