use crate::player::SkillType;
use crate::shared::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCamp {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub cost: Money,
    pub duration_months: u8,
    pub target: SkillType,
    pub bonus: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCampCatalog {
    pub camps: Vec<TrainingCamp>,
}

impl TrainingCampCatalog {
    pub fn new(camps: Vec<TrainingCamp>) -> Self {
        TrainingCampCatalog { camps }
    }

    pub fn find(&self, camp_id: u32) -> Option<&TrainingCamp> {
        self.camps.iter().find(|c| c.id == camp_id)
    }
}

impl Default for TrainingCampCatalog {
    fn default() -> Self {
        let camp = |id, name: &str, description: &str, cost, duration_months, target, bonus| {
            TrainingCamp {
                id,
                name: name.to_string(),
                description: description.to_string(),
                cost,
                duration_months,
                target,
                bonus,
            }
        };

        TrainingCampCatalog::new(vec![
            camp(1, "Speed Camp", "Improves pace and acceleration.", 100_000, 3, SkillType::Pace, 2),
            camp(2, "Finishing Clinic", "Sharpens shooting for forwards and attacking midfielders.", 150_000, 4, SkillType::Shooting, 3),
            camp(3, "Playmaking Workshop", "Improves passing and vision.", 120_000, 3, SkillType::Passing, 2),
            camp(4, "Defensive Tactics Seminar", "Improves positioning and tackling.", 100_000, 4, SkillType::Defending, 3),
        ])
    }
}
