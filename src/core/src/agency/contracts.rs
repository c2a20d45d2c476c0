use crate::news::{NewsCategory, NewsDraft};
use crate::player::Player;
use crate::shared::Money;
use crate::simulator::{ActionError, ActionResult, SimulatorData};
use crate::utils::SimulationRng;
use log::info;

pub const SIGNING_REPUTATION_BONUS: i32 = 5;
pub const RENEWAL_REPUTATION_BONUS: i32 = 3;
pub const RENEWAL_REPUTATION_PENALTY: i32 = 2;

pub struct ContractTerms;

impl ContractTerms {
    pub fn signing_chance(reputation: i32, player: &Player) -> i32 {
        50 + reputation + player.potential as i32 / 5 - player.current_ability() as i32 / 4
    }

    pub fn signing_salary(player: &Player) -> Money {
        player.current_ability() as Money * 150 + player.potential as Money * 100
    }

    pub fn signing_years(player: &Player) -> i32 {
        if player.age < 18 { 5 } else { 3 }
    }

    pub fn renewal_chance(reputation: i32, player: &Player) -> i32 {
        80 + reputation - player.current_ability() as i32 / 10
    }

    pub fn renewal_salary(player: &Player) -> Money {
        let base = player.current_ability() as Money * 150 + player.potential as Money * 50;
        (base as f64 * 1.2).floor() as Money
    }

    pub fn renewal_years(player: &Player) -> i32 {
        match player.age {
            0..=23 => 4,
            24..=28 => 3,
            _ => 2,
        }
    }
}

pub struct ContractDesk;

impl ContractDesk {
    /// First professional contract for a represented, clubless player.
    pub fn sign_with_club(
        data: &mut SimulatorData,
        player_id: u32,
        team_id: u32,
        rng: &mut SimulationRng,
    ) -> Result<ActionResult, ActionError> {
        let reputation = data.manager()?.reputation;

        let team_name = data
            .team(team_id)
            .map(|t| t.name.clone())
            .ok_or(ActionError::TeamNotFound(team_id))?;

        let player = data.player(player_id).ok_or(ActionError::PlayerNotFound(player_id))?;
        if !player.is_managed {
            return Err(ActionError::NotRepresented(player_id));
        }
        if player.team_id.is_some() {
            return Err(ActionError::PlayerAlreadyHasClub(player_id));
        }

        let chance = ContractTerms::signing_chance(reputation, player);
        let salary = ContractTerms::signing_salary(player);
        let years = ContractTerms::signing_years(player);
        let player_name = player.full_name.to_string();

        if !rng.roll_percent(chance) {
            let message = format!("{} decided not to invest in {}.", team_name, player_name);
            data.publish(NewsDraft::new(NewsCategory::Failure, "No Agreement", message.clone()));
            return Ok(ActionResult::failure(message));
        }

        let year = data.date.year();

        if let Some(player) = data.player_mut(player_id) {
            player.team_id = Some(team_id);
            player.salary = salary;
            player.contract_expiry_year = year + years;
        }
        data.manager_mut()?.adjust_reputation(SIGNING_REPUTATION_BONUS);

        info!("player {} signed with team {} until {}", player_id, team_id, year + years);

        let message = format!(
            "{} signed a first professional contract with {}! (+{} reputation)",
            player_name, team_name, SIGNING_REPUTATION_BONUS
        );
        data.publish(NewsDraft::new(NewsCategory::Contract, "First Professional Contract", message.clone()));

        Ok(ActionResult::success(message))
    }

    pub fn renew_contract(
        data: &mut SimulatorData,
        player_id: u32,
        rng: &mut SimulationRng,
    ) -> Result<ActionResult, ActionError> {
        let reputation = data.manager()?.reputation;

        let player = data.player(player_id).ok_or(ActionError::PlayerNotFound(player_id))?;
        if !player.is_managed {
            return Err(ActionError::NotRepresented(player_id));
        }
        let team_id = player.team_id.ok_or(ActionError::PlayerHasNoClub(player_id))?;
        let team = data.team(team_id).ok_or(ActionError::TeamNotFound(team_id))?;

        let salary = ContractTerms::renewal_salary(player);
        let years = ContractTerms::renewal_years(player);
        let chance = ContractTerms::renewal_chance(reputation, player);
        let player_name = player.full_name.to_string();
        let team_name = team.name.clone();

        if !team.can_afford(salary * 12 * years as Money) {
            let message = format!("{} cannot fit the new contract into their budget.", team_name);
            data.publish(NewsDraft::new(NewsCategory::Failure, "Contract Rejected", message.clone()));
            return Ok(ActionResult::failure(message));
        }

        if !rng.roll_percent(chance) {
            data.manager_mut()?.adjust_reputation(-RENEWAL_REPUTATION_PENALTY);

            let message = format!(
                "{} found the new contract offer insufficient. (-{} reputation)",
                player_name, RENEWAL_REPUTATION_PENALTY
            );
            data.publish(NewsDraft::new(NewsCategory::Failure, "Offer Rejected", message.clone()));
            return Ok(ActionResult::failure(message));
        }

        let year = data.date.year();

        if let Some(player) = data.player_mut(player_id) {
            player.salary = salary;
            player.contract_expiry_year = year + years;
        }
        data.manager_mut()?.adjust_reputation(RENEWAL_REPUTATION_BONUS);

        let message = format!(
            "{} extended the contract with {} by {} years! (+{} reputation)",
            player_name, team_name, years, RENEWAL_REPUTATION_BONUS
        );
        data.publish(NewsDraft::new(NewsCategory::Contract, "Contract Renewed", message.clone()));

        Ok(ActionResult::success(message))
    }
}
