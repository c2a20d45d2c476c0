use crate::player::{
    ActiveTraining, ContractStatus, Injury, PlayerBuilder, PlayerPosition, PlayerSkills,
    PlayerStatus,
};
use crate::shared::{FullName, Money};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,
    pub age: u8,
    pub position: PlayerPosition,
    pub skills: PlayerSkills,
    pub potential: u8,
    pub market_value: Money,

    // club
    pub team_id: Option<u32>,
    pub contract_expiry_year: i32,
    pub salary: Money,

    // representation
    pub is_managed: bool,
    pub salary_commission: Option<f64>,
    pub transfer_commission: Option<f64>,

    pub status: PlayerStatus,
    pub is_transfer_listed: bool,
    pub last_match_rating: Option<f32>,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// Always derived from the raw attributes; there is no cached copy to resync.
    pub fn current_ability(&self) -> u8 {
        self.skills.ability(self.position)
    }

    pub fn potential_gap(&self) -> u8 {
        self.potential.saturating_sub(self.current_ability())
    }

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    pub fn injury(&self) -> Option<&Injury> {
        self.status.injury()
    }

    pub fn training(&self) -> Option<&ActiveTraining> {
        self.status.training()
    }

    pub fn plays_for(&self, team_id: u32) -> bool {
        self.team_id == Some(team_id)
    }

    pub fn contract_status(&self, year: i32) -> ContractStatus {
        if self.team_id.is_none() || self.contract_expiry_year < year {
            ContractStatus::Expired
        } else if self.contract_expiry_year == year {
            ContractStatus::Expiring
        } else {
            ContractStatus::Active
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.full_name, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::SkillType;

    fn player() -> Player {
        Player::builder()
            .id(1)
            .full_name(FullName::new("Emre".to_string(), "Kaya".to_string()))
            .age(21)
            .position(PlayerPosition::Forward)
            .skills(PlayerSkills::new(60, 70, 50, 30))
            .potential(80)
            .build()
            .unwrap()
    }

    #[test]
    fn ability_tracks_skills_without_sync() {
        let mut p = player();
        assert_eq!(p.current_ability(), 66);

        p.skills.set(SkillType::Shooting, 80);

        assert_eq!(p.current_ability(), 73);
        assert_eq!(p.potential_gap(), 7);
    }

    #[test]
    fn contract_status_by_year() {
        let mut p = player();
        assert_eq!(p.contract_status(2025), ContractStatus::Expired);

        p.team_id = Some(3);
        p.contract_expiry_year = 2026;

        assert_eq!(p.contract_status(2025), ContractStatus::Active);
        assert_eq!(p.contract_status(2026), ContractStatus::Expiring);
        assert_eq!(p.contract_status(2027), ContractStatus::Expired);
    }

    #[test]
    fn busy_states_are_exclusive() {
        let mut p = player();
        p.status = PlayerStatus::Injured(Injury::new(2));

        assert!(p.injury().is_some());
        assert!(p.training().is_none());
        assert!(!p.is_available());
    }
}
