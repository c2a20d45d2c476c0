mod common;

use common::*;
use core::player::PlayerStatus;
use core::transfers::TransferOffer;
use core::{CareerSimulator, PlayerSkills, SimulationRng};

#[test]
fn round_plays_every_club_once() {
    let config = config();
    let mut data = world();
    let mut rng = SimulationRng::from_seed(1);

    let result = CareerSimulator::advance_month(&mut data, &config, &mut rng);

    assert!(result.success, "{}", result.message);
    assert_eq!(result.matches_played(), (TEAM_COUNT / 2) as usize);
    assert_eq!(data.table.total_played(), TEAM_COUNT);
    assert_eq!(data.recent_results.len(), (TEAM_COUNT / 2) as usize);
    assert_eq!(data.date.month(), 8);
    assert_eq!(result.advanced_to, Some(data.date));

    for team in &data.teams {
        assert_eq!(data.table.row(team.id).map(|r| r.played), Some(1));
    }
}

#[test]
fn odd_league_rests_one_club_per_round() {
    let config = config();
    let mut data = league_world(5, 2025, 7);
    let mut rng = SimulationRng::from_seed(21);

    let result = CareerSimulator::advance_month(&mut data, &config, &mut rng);

    assert!(result.success, "{}", result.message);
    assert_eq!(result.matches_played(), 2);
    assert_eq!(data.table.total_played(), 2 * result.matches_played() as u32);

    let resting: Vec<u32> = data
        .table
        .rows
        .iter()
        .filter(|r| r.played == 0)
        .map(|r| r.team_id)
        .collect();
    assert_eq!(resting.len(), 1);
    assert!(result
        .match_results
        .iter()
        .all(|m| m.home_team_id != resting[0] && m.away_team_id != resting[0]));
}

#[test]
fn standings_stay_consistent_over_a_half_season() {
    let config = config();
    let mut data = world();
    let mut rng = SimulationRng::from_seed(2);

    for _ in 0..5 {
        assert!(CareerSimulator::advance_month(&mut data, &config, &mut rng).success);
    }

    let rows = data.table.sorted_rows();
    let goals_for: u32 = rows.iter().map(|r| r.goals_for).sum();
    let goals_against: u32 = rows.iter().map(|r| r.goals_against).sum();

    assert_eq!(goals_for, goals_against);
    assert_eq!(data.table.total_played(), 5 * TEAM_COUNT);

    for row in &rows {
        assert_eq!(row.won + row.drawn + row.lost, row.played);
    }
    for pair in rows.windows(2) {
        assert!(pair[0].points() >= pair[1].points());
    }
}

#[test]
fn season_rollover_resets_table_and_ages_players() {
    let config = config();
    let mut data = world_at(2025, 12);
    let mut rng = SimulationRng::from_seed(3);

    let ages: Vec<(u32, u8)> = data.players.iter().map(|p| (p.id, p.age)).collect();

    let result = CareerSimulator::advance_month(&mut data, &config, &mut rng);

    assert!(result.success, "{}", result.message);
    assert_eq!(data.date.year(), 2026);
    assert_eq!(data.date.month(), 1);
    assert_eq!(data.table.total_played(), 0);
    assert!(data.table.rows.iter().all(|r| r.points() == 0));
    assert!(!data.staff_market.is_empty());

    for (id, age) in ages {
        assert_eq!(data.player(id).map(|p| p.age), Some(age + 1));
    }

    assert!(data.news.items.iter().any(|n| n.title == "New Season Started"));
}

#[test]
fn mid_season_tick_does_not_age() {
    let config = config();
    let mut data = world_at(2025, 10);
    let mut rng = SimulationRng::from_seed(4);

    CareerSimulator::advance_month(&mut data, &config, &mut rng);

    assert!(data.players.iter().all(|p| p.age == 24));
}

#[test]
fn missing_manager_leaves_world_untouched() {
    let config = config();
    let mut data = world();
    data.manager = None;
    let before = data.clone();

    let result = CareerSimulator::advance_month(&mut data, &config, &mut SimulationRng::from_seed(5));

    assert!(!result.success);
    assert_eq!(result.matches_played(), 0);
    assert!(result.advanced_to.is_none());
    assert_eq!(data, before);
}

#[test]
fn unknown_office_tier_leaves_world_untouched() {
    let config = config();
    let mut data = world();
    data.manager.as_mut().unwrap().office_tier = 9;
    let before = data.clone();

    let result = CareerSimulator::advance_month(&mut data, &config, &mut SimulationRng::from_seed(6));

    assert!(!result.success);
    assert!(result.message.contains('9'));
    assert_eq!(data, before);
}

#[test]
fn same_seed_replays_identically() {
    let config = config();
    let mut first = world();
    let mut second = world();

    let mut rng_a = SimulationRng::from_seed(42);
    let mut rng_b = SimulationRng::from_seed(42);

    for _ in 0..8 {
        let a = CareerSimulator::advance_month(&mut first, &config, &mut rng_a);
        let b = CareerSimulator::advance_month(&mut second, &config, &mut rng_b);
        assert_eq!(a, b);
    }

    assert_eq!(first, second);
}

#[test]
fn scouting_pool_is_refreshed_within_tier_band() {
    let config = config();
    let mut data = world();
    let mut rng = SimulationRng::from_seed(7);

    CareerSimulator::advance_month(&mut data, &config, &mut rng);

    assert_eq!(data.scouting_pool.len(), config.economy.scouting_pool_size);
    for player in &data.scouting_pool {
        assert!((55..=70).contains(&player.potential));
        assert!(player.team_id.is_none());
        assert!(!player.is_managed);
        assert!(data.player(player.id).is_none());
    }
}

#[test]
fn ability_is_always_derived_from_attributes() {
    let config = config();
    let mut data = world();
    let mut rng = SimulationRng::from_seed(8);

    for _ in 0..6 {
        CareerSimulator::advance_month(&mut data, &config, &mut rng);
    }

    for player in &data.players {
        assert_eq!(player.current_ability(), player.skills.ability(player.position));
        assert!(player.current_ability() <= player.potential);
    }
}

#[test]
fn poor_clubs_never_bid() {
    let config = config();
    let mut data = world();
    let mut rng = SimulationRng::from_seed(9);

    for team in data.teams.iter_mut().skip(1) {
        team.budget = 1_000_000;
    }

    let own_team = data.teams[0].id;
    let star = represent(&mut data, Some(own_team), PlayerSkills::new(75, 75, 75, 75), 80);
    data.player_mut(star).unwrap().is_transfer_listed = true;

    for _ in 0..24 {
        assert!(CareerSimulator::advance_month(&mut data, &config, &mut rng).success);
        assert!(data.player(star).unwrap().market_value > 1_000_000);
        assert!(data.offers.is_empty());
    }
}

#[test]
fn listed_player_attracts_bids_from_rich_clubs() {
    let config = config();
    let mut data = world();
    let mut rng = SimulationRng::from_seed(10);

    let own_team = data.teams[0].id;
    let client = represent(&mut data, Some(own_team), PlayerSkills::new(70, 70, 70, 70), 85);
    data.player_mut(client).unwrap().is_transfer_listed = true;

    for _ in 0..12 {
        CareerSimulator::advance_month(&mut data, &config, &mut rng);
    }

    assert!(!data.offers.is_empty());
    for offer in &data.offers {
        assert_eq!(offer.player_id, client);
        assert_ne!(offer.team_id, own_team);
        assert!(data.news.items.iter().any(|n| n.offer_id == Some(offer.id)));
    }

    let mut bidders: Vec<u32> = data.offers.iter().map(|o| o.team_id).collect();
    bidders.sort();
    bidders.dedup();
    assert_eq!(bidders.len(), data.offers.len());
}

#[test]
fn cooldown_blocks_bids_for_three_months() {
    let config = config();
    let mut data = world();
    let mut rng = SimulationRng::from_seed(11);

    let own_team = data.teams[0].id;
    let client = represent(&mut data, Some(own_team), PlayerSkills::new(70, 70, 70, 70), 85);
    data.player_mut(client).unwrap().is_transfer_listed = true;

    let now = data.date;
    let others: Vec<u32> = data.teams.iter().skip(1).map(|t| t.id).collect();
    for team_id in &others {
        data.bid_cooldowns.add(client, *team_id, now);
    }

    for _ in 0..3 {
        CareerSimulator::advance_month(&mut data, &config, &mut rng);
        assert!(data.offers.is_empty());
    }

    assert_eq!(data.date, now.add_months(3).unwrap());
    assert!(others.iter().all(|t| data.bid_cooldowns.is_active(client, *t)));

    CareerSimulator::advance_month(&mut data, &config, &mut rng);
    assert!(data.bid_cooldowns.is_empty());
}

#[test]
fn training_camp_completes_and_raises_target_skill() {
    let config = config();
    let mut data = world();
    let mut rng = SimulationRng::from_seed(12);

    let client = represent(&mut data, None, PlayerSkills::new(50, 50, 50, 50), 90);
    let camp = config.training_camps.find(1).unwrap().clone();

    let result = CareerSimulator::send_to_training(&mut data, &config, client, camp.id);
    assert!(result.success, "{}", result.message);
    assert_eq!(data.manager.as_ref().unwrap().cash, 500_000 - camp.cost);

    let busy = CareerSimulator::send_to_training(&mut data, &config, client, 2);
    assert!(!busy.success);

    for _ in 0..camp.duration_months {
        assert!(data.player(client).unwrap().training().is_some());
        CareerSimulator::advance_month(&mut data, &config, &mut rng);
    }

    let player = data.player(client).unwrap();
    assert_eq!(player.status, PlayerStatus::Available);
    assert!(player.skills.get(camp.target) >= 50 + camp.bonus);
    assert!(data.news.items.iter().any(|n| n.title == "Training Completed"));
}

#[test]
fn accepted_offer_is_gone_after_the_next_tick() {
    let config = config();
    let mut data = world();
    let mut rng = SimulationRng::from_seed(13);

    let seller = data.teams[0].id;
    let buyer = data.teams[1].id;
    let client = represent(&mut data, Some(seller), PlayerSkills::new(70, 70, 70, 70), 85);

    let offer_id = data.ids.next_offer();
    data.offers.push(TransferOffer::new(offer_id, client, buyer, 2_000_000, 20_000));

    assert!(CareerSimulator::accept_offer(&mut data, offer_id).success);
    CareerSimulator::advance_month(&mut data, &config, &mut rng);

    assert!(data.offer(offer_id).is_none());
    assert!(data.player(client).unwrap().plays_for(buyer));
}
