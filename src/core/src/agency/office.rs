use crate::config::OfficeTierTable;
use crate::news::{NewsCategory, NewsDraft};
use crate::simulator::{ActionError, ActionResult, SimulatorData};
use log::info;

pub struct OfficeUpgrade;

impl OfficeUpgrade {
    pub fn upgrade(data: &mut SimulatorData, tiers: &OfficeTierTable) -> Result<ActionResult, ActionError> {
        let manager = data.manager()?;

        let current = tiers
            .get(manager.office_tier)
            .ok_or(ActionError::OfficeTierMissing(manager.office_tier))?;

        let (Some(cost), Some(next)) = (current.upgrade_cost, tiers.next(manager.office_tier)) else {
            return Err(ActionError::AlreadyAtMaxTier);
        };

        if manager.cash < cost {
            return Err(ActionError::InsufficientFunds {
                required: cost,
                available: manager.cash,
            });
        }

        let next_level = next.level;
        let max_players = next.max_players;

        let manager = data.manager_mut()?;
        manager.cash -= cost;
        manager.office_tier = next_level;

        info!("office upgraded to tier {}", next_level);

        let message = format!(
            "Your office is now tier {}. You can represent up to {} players.",
            next_level, max_players
        );
        data.publish(NewsDraft::new(NewsCategory::Upgrade, "Office Upgraded", message.clone()));

        Ok(ActionResult::success(message))
    }
}
