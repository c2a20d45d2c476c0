use crate::simulator::SimulationDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Months a club stays away from a player after a failed counter negotiation.
pub const BID_COOLDOWN_MONTHS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidCooldown {
    pub player_id: u32,
    pub team_id: u32,
    /// Last month in which the club may not bid.
    pub until: SimulationDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidCooldowns {
    pub items: Vec<BidCooldown>,
}

impl BidCooldowns {
    pub fn new() -> Self {
        BidCooldowns::default()
    }

    /// Blocks `team_id` from bidding on `player_id` for the next
    /// [`BID_COOLDOWN_MONTHS`] ticks.
    pub fn add(&mut self, player_id: u32, team_id: u32, now: SimulationDate) {
        let until = now.add_months(BID_COOLDOWN_MONTHS).unwrap_or(now);

        self.items.retain(|c| !(c.player_id == player_id && c.team_id == team_id));
        self.items.push(BidCooldown {
            player_id,
            team_id,
            until,
        });
    }

    pub fn is_active(&self, player_id: u32, team_id: u32) -> bool {
        self.items
            .iter()
            .any(|c| c.player_id == player_id && c.team_id == team_id)
    }

    /// Drops every cooldown whose window ended before `now`.
    pub fn expire(&mut self, now: SimulationDate) {
        let before = self.items.len();
        self.items.retain(|c| c.until >= now);

        let expired = before - self.items.len();
        if expired > 0 {
            debug!("expired {} bid cooldown(s)", expired);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
