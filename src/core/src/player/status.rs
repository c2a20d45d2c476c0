use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injury {
    pub months_remaining: u8,
}

impl Injury {
    pub fn new(months_remaining: u8) -> Self {
        Injury { months_remaining }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTraining {
    pub camp_id: u32,
    pub months_remaining: u8,
}

impl ActiveTraining {
    pub fn new(camp_id: u32, months_remaining: u8) -> Self {
        ActiveTraining {
            camp_id,
            months_remaining,
        }
    }
}

/// Injury and training are both "busy" states, so a player holds at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[default]
    Available,
    Injured(Injury),
    Training(ActiveTraining),
}

impl PlayerStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, PlayerStatus::Available)
    }

    pub fn injury(&self) -> Option<&Injury> {
        match self {
            PlayerStatus::Injured(injury) => Some(injury),
            _ => None,
        }
    }

    pub fn training(&self) -> Option<&ActiveTraining> {
        match self {
            PlayerStatus::Training(training) => Some(training),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    Expiring,
    Expired,
}
