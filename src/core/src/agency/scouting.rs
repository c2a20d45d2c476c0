use crate::agency::StaffEffects;
use crate::config::{OfficeTier, PeopleNameGeneratorData};
use crate::player::{Player, PlayerGenerator};
use crate::utils::{IdSequence, SimulationRng};

pub struct ScoutingPool;

impl ScoutingPool {
    /// A fresh pool drawn from the tier's potential band, widened upward by a
    /// hired scout.
    pub fn generate(
        tier: &OfficeTier,
        effects: &StaffEffects,
        size: usize,
        names: &PeopleNameGeneratorData,
        ids: &mut IdSequence,
        rng: &mut SimulationRng,
    ) -> Vec<Player> {
        let (min, max) = effects.scouting_band(tier.min_scouting_potential, tier.max_scouting_potential);
        let generator = PlayerGenerator::with_people_names(names);

        (0..size)
            .map(|_| generator.generate_scouted(min, max, ids, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OfficeTierTable;

    #[test]
    fn pool_follows_tier_band() {
        let tiers = OfficeTierTable::default();
        let tier = tiers.get(3).unwrap();
        let names = PeopleNameGeneratorData::default();
        let mut ids = IdSequence::new();
        let mut rng = SimulationRng::from_seed(41);

        let pool = ScoutingPool::generate(tier, &StaffEffects::default(), 3, &names, &mut ids, &mut rng);

        assert_eq!(pool.len(), 3);
        assert!(pool.iter().all(|p| (75..=90).contains(&p.potential)));
    }
}
