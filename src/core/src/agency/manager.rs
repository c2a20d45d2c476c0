use crate::agency::{StaffMember, StaffRole};
use crate::shared::Money;
use serde::{Deserialize, Serialize};

pub const MIN_REPUTATION: i32 = 1;

/// The agent the user plays as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerProfile {
    pub cash: Money,
    pub reputation: i32,
    pub office_tier: u8,
    pub represented: Vec<u32>,
    pub staff: Vec<StaffMember>,
}

impl ManagerProfile {
    pub fn new(cash: Money, reputation: i32) -> Self {
        ManagerProfile {
            cash,
            reputation: reputation.max(MIN_REPUTATION),
            office_tier: 1,
            represented: Vec::new(),
            staff: Vec::new(),
        }
    }

    /// Applies `delta`, never dropping below the floor.
    pub fn adjust_reputation(&mut self, delta: i32) {
        self.reputation = (self.reputation + delta).max(MIN_REPUTATION);
    }

    pub fn represents(&self, player_id: u32) -> bool {
        self.represented.contains(&player_id)
    }

    pub fn represented_count(&self) -> usize {
        self.represented.len()
    }

    pub fn staff_in(&self, role: StaffRole) -> Option<&StaffMember> {
        self.staff.iter().find(|s| s.role == role)
    }

    pub fn staff_wages(&self) -> Money {
        self.staff.iter().map(|s| s.monthly_wage).sum()
    }
}
