#![allow(dead_code)]

use core::agency::ManagerProfile;
use core::player::PlayerPosition;
use core::shared::FullName;
use core::{GameConfig, IdSequence, Player, PlayerSkills, SimulationDate, SimulatorData, Team};

pub const TEAM_COUNT: u32 = 4;
pub const SQUAD_SIZE: usize = 11;

const SQUAD_POSITIONS: [PlayerPosition; 4] = [
    PlayerPosition::Goalkeeper,
    PlayerPosition::Defender,
    PlayerPosition::Midfielder,
    PlayerPosition::Forward,
];

pub fn config() -> GameConfig {
    GameConfig::default()
}

pub fn squad_player(ids: &mut IdSequence, team_id: u32, index: usize) -> Player {
    Player::builder()
        .id(ids.next_player())
        .full_name(FullName::new("Squad".to_string(), format!("Player {}", index)))
        .age(24)
        .position(SQUAD_POSITIONS[index % SQUAD_POSITIONS.len()])
        .skills(PlayerSkills::new(60, 60, 60, 60))
        .potential(70)
        .market_value(900_000)
        .team_id(team_id)
        .contract_expiry_year(2028)
        .salary(8_000)
        .build()
        .unwrap()
}

/// Four clubs with eleven players each and a fresh tier 1 agency.
pub fn world_at(year: i32, month: u32) -> SimulatorData {
    league_world(TEAM_COUNT, year, month)
}

pub fn league_world(team_count: u32, year: i32, month: u32) -> SimulatorData {
    let mut ids = IdSequence::new();
    let mut teams = Vec::new();
    let mut players = Vec::new();

    for n in 0..team_count {
        let team_id = ids.next_team();
        teams.push(Team::new(team_id, format!("Club {}", n + 1), 40_000_000, 5));

        for index in 0..SQUAD_SIZE {
            players.push(squad_player(&mut ids, team_id, index));
        }
    }

    let date = SimulationDate::from_year_month(year, month).unwrap();
    let mut data = SimulatorData::new(date, ManagerProfile::new(500_000, 10), teams, players);
    data.ids = ids;
    data
}

pub fn world() -> SimulatorData {
    world_at(2025, 7)
}

/// Adds a represented player to `team_id` (or clubless) and returns the id.
pub fn represent(data: &mut SimulatorData, team_id: Option<u32>, skills: PlayerSkills, potential: u8) -> u32 {
    let id = data.ids.next_player();

    let mut builder = Player::builder()
        .id(id)
        .full_name(FullName::new("Client".to_string(), format!("Number {}", id)))
        .age(20)
        .position(PlayerPosition::Forward)
        .skills(skills)
        .potential(potential)
        .salary(5_000)
        .contract_expiry_year(2028);

    if let Some(team_id) = team_id {
        builder = builder.team_id(team_id);
    }

    let mut player = builder.build().unwrap();
    player.is_managed = true;
    player.salary_commission = Some(0.1);
    player.transfer_commission = Some(0.1);

    data.players.push(player);
    data.manager.as_mut().unwrap().represented.push(id);

    id
}
