use crate::player::PlayerPosition;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const SKILL_MAX_VALUE: u8 = 100;

/// Lowest value an attribute can decline to through ageing.
pub const SKILL_DECLINE_FLOOR: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillType {
    Pace,
    Shooting,
    Passing,
    Defending,
}

impl SkillType {
    pub const ALL: [SkillType; 4] = [
        SkillType::Pace,
        SkillType::Shooting,
        SkillType::Passing,
        SkillType::Defending,
    ];
}

impl Display for SkillType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SkillType::Pace => write!(f, "pace"),
            SkillType::Shooting => write!(f, "shooting"),
            SkillType::Passing => write!(f, "passing"),
            SkillType::Defending => write!(f, "defending"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub defending: u8,
}

impl PlayerSkills {
    pub fn new(pace: u8, shooting: u8, passing: u8, defending: u8) -> Self {
        PlayerSkills {
            pace,
            shooting,
            passing,
            defending,
        }
    }

    pub fn get(&self, skill: SkillType) -> u8 {
        match skill {
            SkillType::Pace => self.pace,
            SkillType::Shooting => self.shooting,
            SkillType::Passing => self.passing,
            SkillType::Defending => self.defending,
        }
    }

    pub fn set(&mut self, skill: SkillType, value: u8) {
        let value = value.min(SKILL_MAX_VALUE);

        match skill {
            SkillType::Pace => self.pace = value,
            SkillType::Shooting => self.shooting = value,
            SkillType::Passing => self.passing = value,
            SkillType::Defending => self.defending = value,
        }
    }

    /// Raises `skill` by `amount` without passing `ceiling`. Returns the gain applied.
    pub fn improve(&mut self, skill: SkillType, amount: u8, ceiling: u8) -> u8 {
        let current = self.get(skill);
        if current >= ceiling {
            return 0;
        }

        let next = current.saturating_add(amount).min(ceiling);
        self.set(skill, next);

        next - current
    }

    /// Lowers `skill` by `amount` without going under `floor`. Returns the loss applied.
    pub fn decline(&mut self, skill: SkillType, amount: u8, floor: u8) -> u8 {
        let current = self.get(skill);
        if current <= floor {
            return 0;
        }

        let next = current.saturating_sub(amount).max(floor);
        self.set(skill, next);

        current - next
    }

    /// Position-weighted blend of the four attributes, truncated.
    pub fn ability(&self, position: PlayerPosition) -> u8 {
        let pace = self.pace as f64;
        let shooting = self.shooting as f64;
        let passing = self.passing as f64;
        let defending = self.defending as f64;

        let blended = match position {
            PlayerPosition::Goalkeeper => defending * 0.7 + passing * 0.2 + pace * 0.1,
            PlayerPosition::Defender => defending * 0.7 + passing * 0.15 + pace * 0.15,
            PlayerPosition::Midfielder => {
                passing * 0.6 + shooting * 0.15 + defending * 0.15 + pace * 0.1
            }
            PlayerPosition::Forward => shooting * 0.7 + pace * 0.2 + passing * 0.1,
        };

        // small epsilon so exact blends like 70.0 don't truncate to 69
        (blended + 1e-9) as u8
    }
}
