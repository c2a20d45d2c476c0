use crate::config::PeopleNameGeneratorData;
use crate::player::{Player, PlayerPosition, PlayerSkills, PlayerValueCalculator};
use crate::shared::FullName;
use crate::utils::{IdSequence, SimulationRng};

pub const SCOUTED_MIN_AGE: i32 = 16;
pub const SCOUTED_MAX_AGE: i32 = 19;
pub const SQUAD_MIN_AGE: i32 = 17;
pub const SQUAD_MAX_AGE: i32 = 34;
pub const SQUAD_MIN_POTENTIAL: u8 = 55;
pub const SQUAD_MAX_POTENTIAL: u8 = 85;

const ATTRIBUTE_FLOOR: i32 = 40;

pub struct PlayerGenerator<'n> {
    people_names_data: &'n PeopleNameGeneratorData,
}

impl<'n> PlayerGenerator<'n> {
    pub fn with_people_names(people_names: &'n PeopleNameGeneratorData) -> Self {
        PlayerGenerator {
            people_names_data: people_names,
        }
    }

    /// A clubless youngster for the scouting pool, potential drawn from `[min, max]`.
    pub fn generate_scouted(
        &self,
        min_potential: u8,
        max_potential: u8,
        ids: &mut IdSequence,
        rng: &mut SimulationRng,
    ) -> Player {
        let age = rng.range(SCOUTED_MIN_AGE, SCOUTED_MAX_AGE);
        let potential = rng.range(min_potential as i32, max_potential as i32);

        self.generate(age, potential, None, ids, rng)
    }

    /// A contracted squad member for `team_id`.
    pub fn generate_for_team(
        &self,
        team_id: u32,
        current_year: i32,
        ids: &mut IdSequence,
        rng: &mut SimulationRng,
    ) -> Player {
        let age = rng.range(SQUAD_MIN_AGE, SQUAD_MAX_AGE);
        let potential = rng.range(SQUAD_MIN_POTENTIAL as i32, SQUAD_MAX_POTENTIAL as i32);

        let mut player = self.generate(age, potential, Some(team_id), ids, rng);

        player.salary = player.current_ability() as i64 * 100 + rng.range(100, 1000) as i64;
        player.contract_expiry_year = current_year + rng.range(1, 4);
        player
    }

    fn generate(
        &self,
        age: i32,
        potential: i32,
        team_id: Option<u32>,
        ids: &mut IdSequence,
        rng: &mut SimulationRng,
    ) -> Player {
        let position = PlayerPosition::ALL[rng.index(PlayerPosition::ALL.len())];
        let skills = Self::generate_skills(age, potential, rng);

        let mut player = Player {
            id: ids.next_player(),
            full_name: FullName::new(self.generate_first_name(rng), self.generate_last_name(rng)),
            age: age as u8,
            position,
            skills,
            potential: potential as u8,
            market_value: 0,
            team_id,
            contract_expiry_year: 0,
            salary: 0,
            is_managed: false,
            salary_commission: None,
            transfer_commission: None,
            status: Default::default(),
            is_transfer_listed: false,
            last_match_rating: None,
        };

        player.market_value = PlayerValueCalculator::calculate(&player);
        player
    }

    fn generate_skills(age: i32, potential: i32, rng: &mut SimulationRng) -> PlayerSkills {
        let age_penalty = (25 - age).max(0);

        let mut attribute = || {
            let value = potential - rng.range(0, age_penalty) - rng.range(0, 25);
            value.max(ATTRIBUTE_FLOOR).min(potential) as u8
        };

        PlayerSkills {
            pace: attribute(),
            shooting: attribute(),
            passing: attribute(),
            defending: attribute(),
        }
    }

    fn generate_first_name(&self, rng: &mut SimulationRng) -> String {
        rng.choose(&self.people_names_data.first_names)
            .cloned()
            .unwrap_or_else(|| "Player".to_string())
    }

    fn generate_last_name(&self, rng: &mut SimulationRng) -> String {
        rng.choose(&self.people_names_data.last_names)
            .cloned()
            .unwrap_or_default()
    }
}
