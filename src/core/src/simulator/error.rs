use crate::shared::Money;
use std::fmt::{Display, Formatter};

/// Validation failures. Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    PlayerNotFound(u32),
    TeamNotFound(u32),
    OfferNotFound(u32),
    CampNotFound(u32),
    CandidateNotFound(u32),
    ManagerMissing,
    OfficeTierMissing(u8),
    InsufficientFunds { required: Money, available: Money },
    CapacityExceeded { limit: usize },
    PlayerBusy(u32),
    NotRepresented(u32),
    AlreadyAtMaxTier,
    RoleAlreadyFilled,
    PlayerHasNoClub(u32),
    PlayerAlreadyHasClub(u32),
    BudgetTooSmall,
    InvalidTerms { fee: Money, salary: Money },
    CalendarOverflow,
}

impl Display for ActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            ActionError::TeamNotFound(id) => write!(f, "Team {} not found", id),
            ActionError::OfferNotFound(id) => write!(f, "Transfer offer {} not found", id),
            ActionError::CampNotFound(id) => write!(f, "Training camp {} not found", id),
            ActionError::CandidateNotFound(id) => write!(f, "Staff candidate {} not found", id),
            ActionError::ManagerMissing => write!(f, "Manager profile is missing"),
            ActionError::OfficeTierMissing(tier) => {
                write!(f, "No office configuration for tier {}", tier)
            }
            ActionError::InsufficientFunds {
                required,
                available,
            } => write!(
                f,
                "Insufficient funds: {} required, {} available",
                required, available
            ),
            ActionError::CapacityExceeded { limit } => {
                write!(f, "Office capacity is full (limit: {} players)", limit)
            }
            ActionError::PlayerBusy(id) => {
                write!(f, "Player {} is injured or already in training", id)
            }
            ActionError::NotRepresented(id) => write!(f, "Player {} is not represented by you", id),
            ActionError::AlreadyAtMaxTier => write!(f, "Office is already at the top tier"),
            ActionError::RoleAlreadyFilled => write!(f, "That staff role is already filled"),
            ActionError::PlayerHasNoClub(id) => write!(f, "Player {} has no club", id),
            ActionError::PlayerAlreadyHasClub(id) => write!(f, "Player {} already has a club", id),
            ActionError::BudgetTooSmall => write!(f, "The club's budget cannot cover the contract"),
            ActionError::InvalidTerms { fee, salary } => write!(
                f,
                "Invalid terms: fee {} and salary {} must both be positive",
                fee, salary
            ),
            ActionError::CalendarOverflow => write!(f, "Calendar cannot advance further"),
        }
    }
}

impl std::error::Error for ActionError {}
