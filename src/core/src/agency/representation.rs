use crate::config::OfficeTierTable;
use crate::news::{NewsCategory, NewsDraft};
use crate::simulator::{ActionError, ActionResult, SimulatorData};
use crate::utils::SimulationRng;
use log::{debug, info};

pub struct RepresentationOdds;

impl RepresentationOdds {
    /// Percent chance that a scouted player signs with the agency on the
    /// requested commission rates (given in percent).
    pub fn success_chance(reputation: i32, potential: u8, salary_percent: f64, transfer_percent: f64) -> i32 {
        let chance = 50.0 + reputation as f64 - potential as f64 / 3.0 - salary_percent * 1.5 - transfer_percent * 0.75;

        chance.clamp(5.0, 95.0) as i32
    }
}

pub struct Representation;

impl Representation {
    pub fn attempt(
        data: &mut SimulatorData,
        tiers: &OfficeTierTable,
        player_id: u32,
        salary_percent: f64,
        transfer_percent: f64,
        success_chance: i32,
        rng: &mut SimulationRng,
    ) -> Result<ActionResult, ActionError> {
        let manager = data.manager()?;
        let tier = tiers
            .get(manager.office_tier)
            .ok_or(ActionError::OfficeTierMissing(manager.office_tier))?;

        if manager.represented_count() >= tier.max_players {
            return Err(ActionError::CapacityExceeded {
                limit: tier.max_players,
            });
        }

        let pool_idx = data
            .scouting_pool
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(ActionError::PlayerNotFound(player_id))?;

        if !rng.roll_percent(success_chance) {
            data.manager_mut()?.adjust_reputation(-1);

            let name = data.scouting_pool[pool_idx].full_name.to_string();
            let message = format!("{} and their family turned down your offer. (-1 reputation)", name);
            data.publish(NewsDraft::new(NewsCategory::Failure, "Negotiation Failed", message.clone()));

            debug!("representation of player {} refused", player_id);
            return Ok(ActionResult::failure(message));
        }

        let mut player = data.scouting_pool.remove(pool_idx);
        player.is_managed = true;
        player.salary_commission = Some(salary_percent / 100.0);
        player.transfer_commission = Some(transfer_percent / 100.0);

        let bonus = player.potential as i32 / 30;
        let message = format!("Congratulations! {} signed with your agency. (+{} reputation)", player.full_name, bonus);

        let manager = data.manager_mut()?;
        manager.represented.push(player.id);
        manager.adjust_reputation(bonus);

        info!("now representing player {} ({})", player.id, player.full_name);

        data.players.push(player);
        data.publish(NewsDraft::new(NewsCategory::Signature, "New Talent Signed", message.clone()));

        Ok(ActionResult::success(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odds_are_clamped() {
        assert_eq!(RepresentationOdds::success_chance(200, 60, 0.0, 0.0), 95);
        assert_eq!(RepresentationOdds::success_chance(1, 95, 30.0, 30.0), 5);
    }

    #[test]
    fn odds_drop_with_commission() {
        // 50 + 10 - 20 - 15 - 7.5
        assert_eq!(RepresentationOdds::success_chance(10, 60, 10.0, 10.0), 17);
        assert!(
            RepresentationOdds::success_chance(10, 60, 5.0, 5.0)
                > RepresentationOdds::success_chance(10, 60, 15.0, 5.0)
        );
    }
}
