use crate::shared::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeTier {
    pub level: u8,
    pub max_players: usize,
    /// Cost of moving to the next tier; `None` on the last tier.
    pub upgrade_cost: Option<Money>,
    pub min_scouting_potential: u8,
    pub max_scouting_potential: u8,
}

impl OfficeTier {
    pub fn new(
        level: u8,
        max_players: usize,
        upgrade_cost: Option<Money>,
        min_scouting_potential: u8,
        max_scouting_potential: u8,
    ) -> Self {
        OfficeTier {
            level,
            max_players,
            upgrade_cost,
            min_scouting_potential,
            max_scouting_potential,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeTierTable {
    pub tiers: Vec<OfficeTier>,
}

impl OfficeTierTable {
    pub fn new(tiers: Vec<OfficeTier>) -> Self {
        OfficeTierTable { tiers }
    }

    pub fn get(&self, level: u8) -> Option<&OfficeTier> {
        self.tiers.iter().find(|t| t.level == level)
    }

    pub fn next(&self, level: u8) -> Option<&OfficeTier> {
        level.checked_add(1).and_then(|next| self.get(next))
    }
}

impl Default for OfficeTierTable {
    fn default() -> Self {
        OfficeTierTable::new(vec![
            OfficeTier::new(1, 1, Some(500_000), 55, 70),
            OfficeTier::new(2, 3, Some(2_000_000), 65, 80),
            OfficeTier::new(3, 5, Some(10_000_000), 75, 90),
            OfficeTier::new(4, 8, None, 80, 95),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_lookup() {
        let table = OfficeTierTable::default();

        assert_eq!(table.get(1).map(|t| t.max_players), Some(1));
        assert_eq!(table.next(1).map(|t| t.level), Some(2));
        assert!(table.next(4).is_none());
        assert!(table.get(9).is_none());
    }
}
