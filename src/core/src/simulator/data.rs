use crate::agency::{ManagerProfile, StaffCandidate};
use crate::league::LeagueTable;
use crate::news::{NewsDate, NewsDraft, NewsFeed};
use crate::player::Player;
use crate::r#match::MatchResult;
use crate::simulator::{ActionError, SimulationDate};
use crate::team::Team;
use crate::transfers::{BidCooldowns, TransferOffer};
use crate::utils::IdSequence;
use serde::{Deserialize, Serialize};

/// The whole career world. Owned by the caller and passed to every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorData {
    pub date: SimulationDate,
    pub manager: Option<ManagerProfile>,

    pub players: Vec<Player>,
    pub scouting_pool: Vec<Player>,
    pub teams: Vec<Team>,

    pub table: LeagueTable,
    pub recent_results: Vec<MatchResult>,

    pub offers: Vec<TransferOffer>,
    pub bid_cooldowns: BidCooldowns,

    pub news: NewsFeed,
    pub staff_market: Vec<StaffCandidate>,

    pub ids: IdSequence,
}

impl SimulatorData {
    pub fn new(date: SimulationDate, manager: ManagerProfile, teams: Vec<Team>, players: Vec<Player>) -> Self {
        let table = LeagueTable::new(&teams);

        SimulatorData {
            date,
            manager: Some(manager),
            players,
            scouting_pool: Vec::new(),
            teams,
            table,
            recent_results: Vec::new(),
            offers: Vec::new(),
            bid_cooldowns: BidCooldowns::default(),
            news: NewsFeed::new(),
            staff_market: Vec::new(),
            ids: IdSequence::new(),
        }
    }

    pub fn news_date(&self) -> NewsDate {
        NewsDate::new(self.date.year(), self.date.month())
    }

    /// Stamps the draft with a fresh id and the current month.
    pub fn publish(&mut self, draft: NewsDraft) -> u32 {
        let id = self.ids.next_news();
        let date = self.news_date();
        self.news.publish(id, date, draft)
    }

    pub fn manager(&self) -> Result<&ManagerProfile, ActionError> {
        self.manager.as_ref().ok_or(ActionError::ManagerMissing)
    }

    pub fn manager_mut(&mut self) -> Result<&mut ManagerProfile, ActionError> {
        self.manager.as_mut().ok_or(ActionError::ManagerMissing)
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: u32) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn offer(&self, id: u32) -> Option<&TransferOffer> {
        self.offers.iter().find(|o| o.id == id)
    }

    /// Deletes the offer together with its inbox item.
    pub fn remove_offer(&mut self, id: u32) -> Option<TransferOffer> {
        let idx = self.offers.iter().position(|o| o.id == id)?;
        self.news.remove_for_offer(id);
        Some(self.offers.remove(idx))
    }
}
