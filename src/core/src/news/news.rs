use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NewsDate {
    pub year: i32,
    pub month: u32,
}

impl NewsDate {
    pub fn new(year: i32, month: u32) -> Self {
        NewsDate { year, month }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NewsCategory {
    Standard,
    League,
    Injury,
    Training,
    Transfer,
    TransferOffer,
    Contract,
    Signature,
    Success,
    Upgrade,
    Staff,
    Finance,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsEvent {
    pub id: u32,
    pub date: NewsDate,
    pub category: NewsCategory,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    /// Set on offer news; the item is removed together with the offer.
    pub offer_id: Option<u32>,
}

/// A news item produced by a simulation step, before it gets an id and a date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsDraft {
    pub category: NewsCategory,
    pub title: String,
    pub body: String,
    pub offer_id: Option<u32>,
}

impl NewsDraft {
    pub fn new(category: NewsCategory, title: impl Into<String>, body: impl Into<String>) -> Self {
        NewsDraft {
            category,
            title: title.into(),
            body: body.into(),
            offer_id: None,
        }
    }

    pub fn with_offer(mut self, offer_id: u32) -> Self {
        self.offer_id = Some(offer_id);
        self
    }
}
