use crate::news::{NewsCategory, NewsDraft};
use crate::simulator::{ActionError, ActionResult, SimulatorData};
use log::debug;

pub struct TransferListing;

impl TransferListing {
    pub fn toggle(data: &mut SimulatorData, player_id: u32) -> Result<ActionResult, ActionError> {
        let listed = data
            .player(player_id)
            .map(|p| p.is_transfer_listed)
            .ok_or(ActionError::PlayerNotFound(player_id))?;

        Self::set(data, player_id, !listed)
    }

    /// Only represented players with a club can be listed. Unlisting withdraws
    /// every pending offer for the player.
    pub fn set(data: &mut SimulatorData, player_id: u32, listed: bool) -> Result<ActionResult, ActionError> {
        data.manager()?;

        let player = data.player(player_id).ok_or(ActionError::PlayerNotFound(player_id))?;
        if !player.is_managed {
            return Err(ActionError::NotRepresented(player_id));
        }
        if player.team_id.is_none() {
            return Err(ActionError::PlayerHasNoClub(player_id));
        }

        let name = player.full_name.to_string();

        if let Some(player) = data.player_mut(player_id) {
            player.is_transfer_listed = listed;
        }

        let (title, message) = if listed {
            (
                "Transfer Listed",
                format!("{} is now on the transfer list. Waiting for offers from interested clubs.", name),
            )
        } else {
            let withdrawn: Vec<u32> = data
                .offers
                .iter()
                .filter(|o| o.player_id == player_id)
                .map(|o| o.id)
                .collect();

            debug!("unlisting player {} withdraws {} offer(s)", player_id, withdrawn.len());

            for offer_id in withdrawn {
                data.remove_offer(offer_id);
            }

            ("Removed From List", format!("{} has been taken off the transfer list.", name))
        };

        data.publish(NewsDraft::new(NewsCategory::Transfer, title, message.clone()));

        Ok(ActionResult::success(message))
    }
}
