use crate::player::{Player, PlayerValueCalculator, SkillType, SKILL_DECLINE_FLOOR};
use crate::utils::SimulationRng;
use log::debug;

/// Players improve until this age and decline after it.
pub const PEAK_AGE: u8 = 28;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DevelopmentModifiers {
    /// Added to the monthly growth probability (hired coach).
    pub coach_bonus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillDrift {
    Improved(SkillType),
    Declined(SkillType),
}

pub struct PlayerDevelopment;

impl PlayerDevelopment {
    /// Monthly attribute drift followed by revaluation, for every player.
    pub fn process(
        players: &[Player],
        modifiers: &DevelopmentModifiers,
        rng: &mut SimulationRng,
    ) -> Vec<Player> {
        players
            .iter()
            .map(|player| {
                let mut player = player.clone();

                if let Some(drift) = Self::drift(&mut player, modifiers, rng) {
                    debug!("player {}: drift {:?}", player.id, drift);
                }

                player.market_value = PlayerValueCalculator::calculate(&player);
                player
            })
            .collect()
    }

    pub fn drift(
        player: &mut Player,
        modifiers: &DevelopmentModifiers,
        rng: &mut SimulationRng,
    ) -> Option<SkillDrift> {
        let gap = player.potential_gap();

        if player.age < PEAK_AGE && gap > 0 {
            let probability = 0.5 + gap as f64 / 50.0 + modifiers.coach_bonus;
            if !rng.chance(probability) {
                return None;
            }

            let skill = Self::random_skill(rng);
            let gained = player.skills.improve(skill, 1, player.potential);

            (gained > 0).then_some(SkillDrift::Improved(skill))
        } else if player.age > PEAK_AGE {
            let probability = 0.3 + (player.age - PEAK_AGE) as f64 / 20.0;
            if !rng.chance(probability) {
                return None;
            }

            let skill = Self::random_skill(rng);
            let lost = player.skills.decline(skill, 1, SKILL_DECLINE_FLOOR);

            (lost > 0).then_some(SkillDrift::Declined(skill))
        } else {
            None
        }
    }

    fn random_skill(rng: &mut SimulationRng) -> SkillType {
        SkillType::ALL[rng.index(SkillType::ALL.len())]
    }
}
