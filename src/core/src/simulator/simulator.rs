use crate::agency::{FinanceSettlement, ScoutingPool, StaffEffects, StaffMarket};
use crate::config::GameConfig;
use crate::league::LeagueRound;
use crate::news::{NewsCategory, NewsDraft};
use crate::player::{DevelopmentModifiers, PlayerDevelopment, PlayerLifecycle};
use crate::simulator::{ActionError, SimulationResult, SimulatorData};
use crate::transfers::TransferMarket;
use crate::utils::SimulationRng;
use log::{debug, info, warn};

pub struct CareerSimulator;

impl CareerSimulator {
    /// Runs one month tick. The world is only replaced when every step
    /// succeeded; on failure `data` is left exactly as it was.
    pub fn advance_month(data: &mut SimulatorData, config: &GameConfig, rng: &mut SimulationRng) -> SimulationResult {
        if let Err(err) = Self::check_preconditions(data, config) {
            warn!("month tick rejected: {}", err);
            return SimulationResult::failed(err.to_string());
        }

        let mut working = data.clone();
        let mut result = SimulationResult::new();
        let first_news_id = working.ids.news;

        if let Err(err) = Self::simulate(&mut working, config, rng, &mut result) {
            warn!("month tick aborted: {}", err);
            return SimulationResult::failed(err.to_string());
        }

        result.success = true;
        result.news_published = (working.ids.news - first_news_id) as usize;
        result.advanced_to = Some(working.date);
        result.message = format!("Advanced to {}.", working.date);

        *data = working;

        info!(
            "month advanced to {}: {} matches, {} news, net {}",
            data.date,
            result.matches_played(),
            result.news_published,
            result.net()
        );

        result
    }

    fn check_preconditions(data: &SimulatorData, config: &GameConfig) -> Result<(), ActionError> {
        let manager = data.manager()?;

        config
            .office_tiers
            .get(manager.office_tier)
            .map(|_| ())
            .ok_or(ActionError::OfficeTierMissing(manager.office_tier))
    }

    fn simulate(
        data: &mut SimulatorData,
        config: &GameConfig,
        rng: &mut SimulationRng,
        result: &mut SimulationResult,
    ) -> Result<(), ActionError> {
        // 1. league round
        LeagueRound::simulate(&data.teams, &data.players, rng).process(data, result);

        // 2. calendar
        Self::advance_calendar(data, config, rng)?;

        // 3. progression
        let effects = StaffEffects::from_staff(&data.manager()?.staff);
        let modifiers = DevelopmentModifiers {
            coach_bonus: effects.coach_bonus,
        };

        let developed = PlayerDevelopment::process(&data.players, &modifiers, rng);
        let lifecycle = PlayerLifecycle::process_month(&developed, &config.training_camps, rng);

        data.players = lifecycle.players;
        for draft in lifecycle.news {
            data.publish(draft);
        }

        // 4. scouting pool
        let manager = data.manager()?;
        let tier = config
            .office_tiers
            .get(manager.office_tier)
            .ok_or(ActionError::OfficeTierMissing(manager.office_tier))?;

        data.scouting_pool = ScoutingPool::generate(
            tier,
            &effects,
            config.economy.scouting_pool_size,
            &config.names,
            &mut data.ids,
            rng,
        );

        // 5. inbound bids
        data.bid_cooldowns.expire(data.date);

        TransferMarket::synthesize_bids(&data.players, &data.teams, &data.offers, &data.bid_cooldowns, rng)
            .process(data, result);

        // 6. finances
        FinanceSettlement::calculate(
            data.manager()?,
            &data.players,
            data.date.year(),
            config.economy.monthly_overhead,
        )
        .process(data, result);

        Ok(())
    }

    /// Moves to the next month. January opens a new season: everyone ages,
    /// the table is cleared and the staff market restocked.
    fn advance_calendar(data: &mut SimulatorData, config: &GameConfig, rng: &mut SimulationRng) -> Result<(), ActionError> {
        data.date = data.date.next_month().ok_or(ActionError::CalendarOverflow)?;

        if !data.date.is_season_start() {
            return Ok(());
        }

        debug!("season rollover into {}", data.date.year());

        data.players = PlayerLifecycle::age_all(&data.players);
        data.table.reset(&data.teams);
        data.staff_market = StaffMarket::generate(&config.names, &mut data.ids, rng);

        data.publish(NewsDraft::new(
            NewsCategory::League,
            "New Season Started",
            format!(
                "The {} season is under way and every club's points have been reset.",
                data.date.year()
            ),
        ));

        Ok(())
    }
}
