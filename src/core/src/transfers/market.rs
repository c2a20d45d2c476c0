use crate::news::{NewsCategory, NewsDraft};
use crate::player::Player;
use crate::shared::Money;
use crate::simulator::{SimulationResult, SimulatorData};
use crate::team::Team;
use crate::transfers::{BidCooldowns, TransferOffer};
use crate::utils::SimulationRng;
use log::debug;

/// Every interested club always keeps at least this much chance of bidding.
pub const MIN_BID_INTEREST: f64 = 2.0;
pub const MIN_FEE_MULTIPLIER: f64 = 0.8;
pub const MAX_FEE_MULTIPLIER: f64 = 1.3;
pub const SALARY_PER_ABILITY: f64 = 150.0;

/// A bid produced this tick, not yet given an id.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferBid {
    pub player_id: u32,
    pub team_id: u32,
    pub fee: Money,
    pub proposed_salary: Money,
}

pub struct TransferMarketResult {
    pub bids: Vec<TransferBid>,
}

impl TransferMarketResult {
    /// Turns bids into offers and puts one inbox item per offer.
    pub fn process(self, data: &mut SimulatorData, _result: &mut SimulationResult) {
        for bid in self.bids {
            let offer_id = data.ids.next_offer();

            let team_name = data
                .team(bid.team_id)
                .map(|t| t.name.clone())
                .unwrap_or_default();
            let player_name = data
                .player(bid.player_id)
                .map(|p| p.full_name.to_string())
                .unwrap_or_default();

            data.offers.push(TransferOffer::new(
                offer_id,
                bid.player_id,
                bid.team_id,
                bid.fee,
                bid.proposed_salary,
            ));

            data.publish(
                NewsDraft::new(
                    NewsCategory::TransferOffer,
                    "Transfer Offer Received",
                    format!(
                        "{} bid {} for {} with a monthly salary of {}.",
                        team_name, bid.fee, player_name, bid.proposed_salary
                    ),
                )
                .with_offer(offer_id),
            );
        }
    }
}

pub struct TransferMarket;

impl TransferMarket {
    /// Inbound bids for every listed player who has a club.
    pub fn synthesize_bids(
        players: &[Player],
        teams: &[Team],
        offers: &[TransferOffer],
        cooldowns: &BidCooldowns,
        rng: &mut SimulationRng,
    ) -> TransferMarketResult {
        let mut bids = Vec::new();

        for player in players.iter().filter(|p| p.is_transfer_listed) {
            let Some(own_team_id) = player.team_id else {
                continue;
            };

            for team in teams {
                if !Self::is_eligible_bidder(team, own_team_id, player, offers, cooldowns) {
                    continue;
                }

                let interest = Self::interest(team, player).max(MIN_BID_INTEREST);
                if rng.uniform(0.0, 100.0) >= interest {
                    continue;
                }

                let fee = (player.market_value as f64
                    * rng.uniform(MIN_FEE_MULTIPLIER, MAX_FEE_MULTIPLIER))
                .floor() as Money;

                if !team.can_afford(fee) {
                    debug!("team {} priced out of player {} at {}", team.id, player.id, fee);
                    continue;
                }

                bids.push(TransferBid {
                    player_id: player.id,
                    team_id: team.id,
                    fee,
                    proposed_salary: Self::proposed_salary(player.current_ability(), team.prestige),
                });
            }
        }

        TransferMarketResult { bids }
    }

    pub fn is_eligible_bidder(
        team: &Team,
        own_team_id: u32,
        player: &Player,
        offers: &[TransferOffer],
        cooldowns: &BidCooldowns,
    ) -> bool {
        team.id != own_team_id
            && team.budget > player.market_value
            && !offers.iter().any(|o| o.is_for(player.id, team.id))
            && !cooldowns.is_active(player.id, team.id)
    }

    pub fn interest(team: &Team, player: &Player) -> f64 {
        team.prestige as f64 * 2.0
            + (player.current_ability() as f64 - 50.0) / 2.0
            + (player.potential as f64 - 60.0) / 4.0
    }

    pub fn proposed_salary(ability: u8, prestige: u8) -> Money {
        (ability as f64 * SALARY_PER_ABILITY * (1.0 + prestige as f64 / 10.0)).floor() as Money
    }
}
