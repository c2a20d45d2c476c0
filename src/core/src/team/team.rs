use crate::shared::Money;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const MIN_PRESTIGE: u8 = 1;
pub const MAX_PRESTIGE: u8 = 10;

/// A league club. Squad membership lives on `Player::team_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub budget: Money,
    pub prestige: u8,
}

impl Team {
    pub fn new(id: u32, name: String, budget: Money, prestige: u8) -> Self {
        Team {
            id,
            name,
            budget,
            prestige: prestige.clamp(MIN_PRESTIGE, MAX_PRESTIGE),
        }
    }

    pub fn can_afford(&self, amount: Money) -> bool {
        self.budget >= amount
    }

    pub fn spend(&mut self, amount: Money) {
        self.budget -= amount;
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prestige_is_clamped() {
        assert_eq!(Team::new(1, "A".to_string(), 0, 0).prestige, 1);
        assert_eq!(Team::new(2, "B".to_string(), 0, 40).prestige, 10);
    }
}
