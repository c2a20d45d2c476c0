use crate::config::PeopleNameGeneratorData;
use crate::news::{NewsCategory, NewsDraft};
use crate::shared::Money;
use crate::simulator::{ActionError, ActionResult, SimulatorData};
use crate::utils::{IdSequence, SimulationRng};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub const CANDIDATES_PER_ROLE: usize = 2;
pub const MIN_CANDIDATE_SKILL: i32 = 5;
pub const MAX_CANDIDATE_SKILL: i32 = 18;
pub const WAGE_PER_SKILL: Money = 1_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    Scout,
    Commercial,
    Coach,
}

impl StaffRole {
    pub const ALL: [StaffRole; 3] = [StaffRole::Scout, StaffRole::Commercial, StaffRole::Coach];
}

impl Display for StaffRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StaffRole::Scout => write!(f, "Scout"),
            StaffRole::Commercial => write!(f, "Commercial Director"),
            StaffRole::Coach => write!(f, "Coach"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u32,
    pub name: String,
    pub role: StaffRole,
    /// 1..=20
    pub skill: u8,
    pub monthly_wage: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffCandidate {
    pub id: u32,
    pub member: StaffMember,
}

pub struct StaffMarket;

impl StaffMarket {
    /// A fresh pool with [`CANDIDATES_PER_ROLE`] candidates for every role.
    pub fn generate(
        names: &PeopleNameGeneratorData,
        ids: &mut IdSequence,
        rng: &mut SimulationRng,
    ) -> Vec<StaffCandidate> {
        StaffRole::ALL
            .iter()
            .flat_map(|role| std::iter::repeat_n(*role, CANDIDATES_PER_ROLE))
            .map(|role| {
                let skill = rng.range(MIN_CANDIDATE_SKILL, MAX_CANDIDATE_SKILL) as u8;

                let first = rng.choose(&names.first_names).cloned().unwrap_or_default();
                let last = rng.choose(&names.last_names).cloned().unwrap_or_default();

                let member = StaffMember {
                    id: ids.next_staff(),
                    name: format!("{} {}", first, last).trim().to_string(),
                    role,
                    skill,
                    monthly_wage: skill as Money * WAGE_PER_SKILL,
                };

                StaffCandidate {
                    id: ids.next_staff(),
                    member,
                }
            })
            .collect()
    }

    /// Moves a candidate from the pool into the manager's roster.
    pub fn hire(data: &mut SimulatorData, candidate_id: u32) -> Result<ActionResult, ActionError> {
        let manager = data.manager()?;

        let idx = data
            .staff_market
            .iter()
            .position(|c| c.id == candidate_id)
            .ok_or(ActionError::CandidateNotFound(candidate_id))?;

        let role = data.staff_market[idx].member.role;
        if manager.staff_in(role).is_some() {
            return Err(ActionError::RoleAlreadyFilled);
        }

        let candidate = data.staff_market.remove(idx);
        let member = candidate.member;

        let message = format!(
            "{} joined your agency as {} (skill {}, wage {}/month).",
            member.name, member.role, member.skill, member.monthly_wage
        );

        info!("hired staff {} as {}", member.id, member.role);

        data.manager_mut()?.staff.push(member);
        data.publish(NewsDraft::new(NewsCategory::Staff, "New Staff Member", message.clone()));

        Ok(ActionResult::success(message))
    }
}

/// Aggregate bonuses from hired staff.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaffEffects {
    /// Added to both ends of the scouting potential band.
    pub scouting_bonus: u8,
    /// Percent added to commission income.
    pub commercial_bonus_percent: u8,
    /// Added to the monthly development probability.
    pub coach_bonus: f64,
}

impl StaffEffects {
    pub fn from_staff(staff: &[StaffMember]) -> Self {
        staff.iter().fold(StaffEffects::default(), |mut effects, member| {
            match member.role {
                StaffRole::Scout => effects.scouting_bonus = member.skill / 6,
                StaffRole::Commercial => effects.commercial_bonus_percent = member.skill / 2,
                StaffRole::Coach => effects.coach_bonus = member.skill as f64 / 100.0,
            }
            effects
        })
    }

    pub fn scouting_band(&self, min: u8, max: u8) -> (u8, u8) {
        let min = min.saturating_add(self.scouting_bonus).min(99);
        let max = max.saturating_add(self.scouting_bonus).min(99);
        (min, max)
    }

    pub fn commercial_multiplier(&self) -> f64 {
        1.0 + self.commercial_bonus_percent as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_has_two_candidates_per_role() {
        let names = PeopleNameGeneratorData::default();
        let mut ids = IdSequence::new();
        let mut rng = SimulationRng::from_seed(21);

        let market = StaffMarket::generate(&names, &mut ids, &mut rng);

        assert_eq!(market.len(), 6);
        for role in StaffRole::ALL {
            assert_eq!(market.iter().filter(|c| c.member.role == role).count(), 2);
        }
        assert!(market.iter().all(|c| (5..=18).contains(&c.member.skill)));
        assert!(market.iter().all(|c| c.member.monthly_wage == c.member.skill as Money * 1_500));
    }

    #[test]
    fn effects_per_role() {
        let member = |role, skill| StaffMember {
            id: 1,
            name: "Hasan Demir".to_string(),
            role,
            skill,
            monthly_wage: 0,
        };

        let effects = StaffEffects::from_staff(&[
            member(StaffRole::Scout, 18),
            member(StaffRole::Commercial, 11),
            member(StaffRole::Coach, 15),
        ]);

        assert_eq!(effects.scouting_bonus, 3);
        assert_eq!(effects.commercial_bonus_percent, 5);
        assert!((effects.coach_bonus - 0.15).abs() < 1e-9);
        assert_eq!(effects.scouting_band(80, 98), (83, 99));
    }

    #[test]
    fn no_staff_no_effects() {
        let effects = StaffEffects::from_staff(&[]);
        assert_eq!(effects, StaffEffects::default());
        assert_eq!(effects.commercial_multiplier(), 1.0);
    }
}
