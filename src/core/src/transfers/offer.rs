use crate::shared::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferStatus {
    Pending,
    Negotiating,
}

/// An AI club's bid for a listed player. Removed once resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOffer {
    pub id: u32,
    pub player_id: u32,
    pub team_id: u32,
    pub fee: Money,
    pub proposed_salary: Money,
    pub status: OfferStatus,
}

impl TransferOffer {
    pub fn new(id: u32, player_id: u32, team_id: u32, fee: Money, proposed_salary: Money) -> Self {
        TransferOffer {
            id,
            player_id,
            team_id,
            fee,
            proposed_salary,
            status: OfferStatus::Pending,
        }
    }

    pub fn with_terms(mut self, fee: Money, proposed_salary: Money) -> Self {
        self.fee = fee;
        self.proposed_salary = proposed_salary;
        self.status = OfferStatus::Negotiating;
        self
    }

    pub fn is_for(&self, player_id: u32, team_id: u32) -> bool {
        self.player_id == player_id && self.team_id == team_id
    }
}
