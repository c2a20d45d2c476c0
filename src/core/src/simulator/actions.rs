use crate::agency::{ContractDesk, OfficeUpgrade, Representation, StaffMarket, TrainingBooking};
use crate::config::GameConfig;
use crate::shared::Money;
use crate::simulator::{ActionError, ActionResult, CareerSimulator, SimulatorData};
use crate::transfers::{TransferListing, TransferNegotiation};
use crate::utils::SimulationRng;

/// User-triggered operations. Validation errors come back as failed results
/// with nothing mutated.
impl CareerSimulator {
    pub fn attempt_representation(
        data: &mut SimulatorData,
        config: &GameConfig,
        rng: &mut SimulationRng,
        player_id: u32,
        salary_percent: f64,
        transfer_percent: f64,
        success_chance: i32,
    ) -> ActionResult {
        Representation::attempt(
            data,
            &config.office_tiers,
            player_id,
            salary_percent,
            transfer_percent,
            success_chance,
            rng,
        )
        .into()
    }

    pub fn send_to_training(data: &mut SimulatorData, config: &GameConfig, player_id: u32, camp_id: u32) -> ActionResult {
        TrainingBooking::send(data, &config.training_camps, player_id, camp_id).into()
    }

    pub fn toggle_transfer_listing(data: &mut SimulatorData, player_id: u32) -> ActionResult {
        TransferListing::toggle(data, player_id).into()
    }

    pub fn accept_offer(data: &mut SimulatorData, offer_id: u32) -> ActionResult {
        TransferNegotiation::accept(data, offer_id).into()
    }

    pub fn reject_offer(data: &mut SimulatorData, offer_id: u32) -> ActionResult {
        TransferNegotiation::reject(data, offer_id)
    }

    pub fn counter_offer(
        data: &mut SimulatorData,
        rng: &mut SimulationRng,
        offer_id: u32,
        fee: Money,
        salary: Money,
        success_chance: i32,
    ) -> ActionResult {
        TransferNegotiation::counter(data, offer_id, fee, salary, success_chance, rng).into()
    }

    pub fn upgrade_office(data: &mut SimulatorData, config: &GameConfig) -> ActionResult {
        OfficeUpgrade::upgrade(data, &config.office_tiers).into()
    }

    pub fn hire_staff(data: &mut SimulatorData, candidate_id: u32) -> ActionResult {
        StaffMarket::hire(data, candidate_id).into()
    }

    pub fn sign_with_club(data: &mut SimulatorData, rng: &mut SimulationRng, player_id: u32, team_id: u32) -> ActionResult {
        ContractDesk::sign_with_club(data, player_id, team_id, rng).into()
    }

    pub fn renew_contract(data: &mut SimulatorData, rng: &mut SimulationRng, player_id: u32) -> ActionResult {
        ContractDesk::renew_contract(data, player_id, rng).into()
    }

    pub fn mark_news_read(data: &mut SimulatorData, news_id: u32) -> ActionResult {
        if data.news.mark_read(news_id) {
            ActionResult::success("Marked as read.")
        } else {
            ActionResult::failure(format!("News item {} not found", news_id))
        }
    }
}
