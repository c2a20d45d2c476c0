use crate::shared::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomySettings {
    pub monthly_overhead: Money,
    pub starting_cash: Money,
    pub starting_reputation: i32,
    pub start_year: i32,
    pub start_month: u32,
    pub scouting_pool_size: usize,
    pub squad_size: usize,
}

impl Default for EconomySettings {
    fn default() -> Self {
        EconomySettings {
            monthly_overhead: 25_000,
            starting_cash: 500_000,
            starting_reputation: 10,
            start_year: 2025,
            start_month: 7,
            scouting_pool_size: 3,
            squad_size: 22,
        }
    }
}
