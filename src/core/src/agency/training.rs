use crate::config::TrainingCampCatalog;
use crate::news::{NewsCategory, NewsDraft};
use crate::player::{ActiveTraining, PlayerStatus};
use crate::simulator::{ActionError, ActionResult, SimulatorData};
use log::info;

pub struct TrainingBooking;

impl TrainingBooking {
    /// Pays for a camp and sends an available represented player to it.
    pub fn send(
        data: &mut SimulatorData,
        camps: &TrainingCampCatalog,
        player_id: u32,
        camp_id: u32,
    ) -> Result<ActionResult, ActionError> {
        let cash = data.manager()?.cash;
        let camp = camps.find(camp_id).ok_or(ActionError::CampNotFound(camp_id))?;

        let player = data.player(player_id).ok_or(ActionError::PlayerNotFound(player_id))?;
        if !player.is_managed {
            return Err(ActionError::NotRepresented(player_id));
        }
        if !player.is_available() {
            return Err(ActionError::PlayerBusy(player_id));
        }
        if cash < camp.cost {
            return Err(ActionError::InsufficientFunds {
                required: camp.cost,
                available: cash,
            });
        }

        data.manager_mut()?.cash -= camp.cost;

        let message = match data.player_mut(player_id) {
            Some(player) => {
                player.status = PlayerStatus::Training(ActiveTraining::new(camp.id, camp.duration_months));
                format!("{} has been sent to the {}.", player.full_name, camp.name)
            }
            None => return Err(ActionError::PlayerNotFound(player_id)),
        };

        info!("player {} booked into camp {}", player_id, camp.id);
        data.publish(NewsDraft::new(NewsCategory::Training, "Training Started", message.clone()));

        Ok(ActionResult::success(message))
    }
}
