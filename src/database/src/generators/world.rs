use crate::loaders::TeamEntity;
use core::agency::{ManagerProfile, StaffEffects, StaffMarket, ScoutingPool};
use core::config::GameConfig;
use core::player::PlayerGenerator;
use core::simulator::{ActionError, SimulationDate, SimulatorData};
use core::team::Team;
use core::utils::SimulationRng;
use log::info;

pub const MIN_TEAM_BUDGET: i32 = 20_000_000;
pub const MAX_TEAM_BUDGET: i32 = 80_000_000;

pub struct WorldGenerator;

impl WorldGenerator {
    /// A new career: the league clubs with full squads, a starting manager,
    /// the first scouting pool and a stocked staff market.
    pub fn generate(
        config: &GameConfig,
        teams: &[TeamEntity],
        rng: &mut SimulationRng,
    ) -> Result<SimulatorData, ActionError> {
        let economy = &config.economy;

        let date = SimulationDate::from_year_month(economy.start_year, economy.start_month)
            .ok_or(ActionError::CalendarOverflow)?;

        let manager = ManagerProfile::new(economy.starting_cash, economy.starting_reputation);
        let mut data = SimulatorData::new(date, manager, Vec::new(), Vec::new());

        let generator = PlayerGenerator::with_people_names(&config.names);

        for entity in teams {
            let team_id = data.ids.next_team();
            let budget = rng.range(MIN_TEAM_BUDGET, MAX_TEAM_BUDGET) as i64;

            data.teams.push(Team::new(team_id, entity.name.clone(), budget, entity.prestige));

            for _ in 0..economy.squad_size {
                let player = generator.generate_for_team(team_id, date.year(), &mut data.ids, rng);
                data.players.push(player);
            }
        }

        data.table.reset(&data.teams);

        let tier = config
            .office_tiers
            .get(1)
            .ok_or(ActionError::OfficeTierMissing(1))?;

        data.scouting_pool = ScoutingPool::generate(
            tier,
            &StaffEffects::default(),
            economy.scouting_pool_size,
            &config.names,
            &mut data.ids,
            rng,
        );
        data.staff_market = StaffMarket::generate(&config.names, &mut data.ids, rng);

        info!(
            "world generated: {} teams, {} players, starting {}",
            data.teams.len(),
            data.players.len(),
            data.date
        );

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::TeamLoader;

    #[test]
    fn generates_full_league() {
        let config = GameConfig::default();
        let teams = TeamLoader::load().unwrap();
        let mut rng = SimulationRng::from_seed(1);

        let data = WorldGenerator::generate(&config, &teams, &mut rng).unwrap();

        assert_eq!(data.teams.len(), 12);
        assert_eq!(data.players.len(), 12 * 22);
        assert_eq!(data.table.rows.len(), 12);
        assert_eq!(data.scouting_pool.len(), 3);
        assert_eq!(data.staff_market.len(), 6);
        assert_eq!((data.date.year(), data.date.month()), (2025, 7));

        let manager = data.manager.as_ref().unwrap();
        assert_eq!(manager.cash, 500_000);
        assert_eq!(manager.reputation, 10);
        assert_eq!(manager.office_tier, 1);

        assert!(data
            .teams
            .iter()
            .all(|t| (20_000_000..=80_000_000).contains(&t.budget)));
    }
}
