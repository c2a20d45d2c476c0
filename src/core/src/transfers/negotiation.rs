use crate::news::{NewsCategory, NewsDraft};
use crate::shared::{CurrencyUtils, Money};
use crate::simulator::{ActionError, ActionResult, SimulatorData};
use crate::transfers::TransferOffer;
use crate::utils::SimulationRng;
use log::info;

pub const DEFAULT_TRANSFER_COMMISSION: f64 = 0.05;
pub const TRANSFER_REPUTATION_BONUS: i32 = 10;
pub const NEW_CONTRACT_YEARS: i32 = 3;
/// Salary months a bidder must be able to fund on top of the fee.
pub const COUNTER_SALARY_MONTHS: Money = 12 * 3;

pub struct CounterOfferOdds;

impl CounterOfferOdds {
    /// Percent chance that the bidder accepts the counter terms. Raises against
    /// the original bid are weighed against the club's budget, salary raises
    /// five times as heavily as the fee.
    pub fn success_chance(offer: &TransferOffer, fee: Money, salary: Money, team_budget: Money, reputation: i32) -> i32 {
        let budget = team_budget.max(1) as f64;

        let fee_penalty = ((fee - offer.fee) as f64 / budget * 100.0).max(0.0);
        let salary_penalty =
            ((salary - offer.proposed_salary) as f64 * COUNTER_SALARY_MONTHS as f64 / budget * 100.0).max(0.0) * 5.0;

        let chance = 95.0 - fee_penalty - salary_penalty + reputation as f64;

        chance.clamp(5.0, 100.0) as i32
    }
}

pub struct TransferNegotiation;

impl TransferNegotiation {
    pub fn accept(data: &mut SimulatorData, offer_id: u32) -> Result<ActionResult, ActionError> {
        let offer = data.offer(offer_id).cloned().ok_or(ActionError::OfferNotFound(offer_id))?;

        Self::complete(data, offer)
    }

    /// Unknown ids are treated as already rejected.
    pub fn reject(data: &mut SimulatorData, offer_id: u32) -> ActionResult {
        match data.remove_offer(offer_id) {
            Some(offer) => {
                info!("offer {} for player {} rejected", offer.id, offer.player_id);
                ActionResult::success("Offer rejected.")
            }
            None => ActionResult::success("Offer was already withdrawn."),
        }
    }

    pub fn counter(
        data: &mut SimulatorData,
        offer_id: u32,
        fee: Money,
        salary: Money,
        success_chance: i32,
        rng: &mut SimulationRng,
    ) -> Result<ActionResult, ActionError> {
        let offer = data.offer(offer_id).cloned().ok_or(ActionError::OfferNotFound(offer_id))?;
        data.manager()?;

        if fee <= 0 || salary <= 0 {
            return Err(ActionError::InvalidTerms { fee, salary });
        }

        let team = data.team(offer.team_id).ok_or(ActionError::TeamNotFound(offer.team_id))?;
        let team_name = team.name.clone();
        let team_budget = team.budget;

        let player_name = data
            .player(offer.player_id)
            .map(|p| p.full_name.to_string())
            .ok_or(ActionError::PlayerNotFound(offer.player_id))?;

        let date = data.date;

        if !Self::can_fund(team_budget, fee, salary) {
            data.remove_offer(offer_id);
            data.bid_cooldowns.add(offer.player_id, offer.team_id, date);

            let message = format!("{} cannot afford those terms and walked away from {}.", team_name, player_name);
            data.publish(NewsDraft::new(NewsCategory::Failure, "Negotiation Collapsed", message.clone()));

            return Ok(ActionResult::failure(message));
        }

        if rng.roll_percent(success_chance) {
            return Self::complete(data, offer.with_terms(fee, salary));
        }

        data.remove_offer(offer_id);
        data.bid_cooldowns.add(offer.player_id, offer.team_id, date);
        data.manager_mut()?.adjust_reputation(-1);

        let message = format!("{} rejected your counter offer for {}. (-1 reputation)", team_name, player_name);
        data.publish(NewsDraft::new(NewsCategory::Failure, "Counter Offer Rejected", message.clone()));

        Ok(ActionResult::failure(message))
    }

    /// Overflowing totals are never affordable.
    fn can_fund(budget: Money, fee: Money, salary: Money) -> bool {
        salary
            .checked_mul(COUNTER_SALARY_MONTHS)
            .and_then(|wages| wages.checked_add(fee))
            .is_some_and(|required| budget >= required)
    }

    /// Moves the player to the bidder, settles money and clears the player's
    /// remaining offers.
    fn complete(data: &mut SimulatorData, offer: TransferOffer) -> Result<ActionResult, ActionError> {
        data.manager()?;

        let team = data.team(offer.team_id).ok_or(ActionError::TeamNotFound(offer.team_id))?;
        if !team.can_afford(offer.fee) {
            return Err(ActionError::BudgetTooSmall);
        }
        let team_name = team.name.clone();

        let year = data.date.year();

        let player = data
            .player_mut(offer.player_id)
            .ok_or(ActionError::PlayerNotFound(offer.player_id))?;

        let rate = player.transfer_commission.unwrap_or(DEFAULT_TRANSFER_COMMISSION);
        let commission = CurrencyUtils::apply_rate(offer.fee, rate);

        player.team_id = Some(offer.team_id);
        player.is_transfer_listed = false;
        player.salary = offer.proposed_salary;
        player.contract_expiry_year = year + NEW_CONTRACT_YEARS;
        let player_name = player.full_name.to_string();

        if let Some(team) = data.team_mut(offer.team_id) {
            team.spend(offer.fee);
        }

        let manager = data.manager_mut()?;
        manager.cash += commission;
        manager.adjust_reputation(TRANSFER_REPUTATION_BONUS);

        let stale: Vec<u32> = data
            .offers
            .iter()
            .filter(|o| o.player_id == offer.player_id)
            .map(|o| o.id)
            .collect();
        for id in stale {
            data.remove_offer(id);
        }

        info!(
            "player {} moved to team {} for {} (commission {})",
            offer.player_id, offer.team_id, offer.fee, commission
        );

        let message = format!(
            "{} joined {} for {}. You earned {} in commission. (+{} reputation)",
            player_name, team_name, offer.fee, commission, TRANSFER_REPUTATION_BONUS
        );
        data.publish(NewsDraft::new(NewsCategory::Success, "Transfer Completed", message.clone()));

        Ok(ActionResult::success(message))
    }
}
