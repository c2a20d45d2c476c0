use crate::player::{Player, PlayerPosition, PlayerSkills};

/// One player's match-day view: the attributes the engine reads, snapshotted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPlayer {
    pub player_id: u32,
    pub position: PlayerPosition,
    pub skills: PlayerSkills,
    pub ability: u8,
}

impl MatchPlayer {
    pub fn from_player(player: &Player) -> Self {
        MatchPlayer {
            player_id: player.id,
            position: player.position,
            skills: player.skills,
            ability: player.current_ability(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSquad {
    pub team_id: u32,
    pub players: Vec<MatchPlayer>,
}

impl MatchSquad {
    pub fn new(team_id: u32, players: Vec<MatchPlayer>) -> Self {
        MatchSquad { team_id, players }
    }

    /// Every available player registered to `team_id`. Injured players and those
    /// away at a training camp are left out.
    pub fn select(team_id: u32, players: &[Player]) -> Self {
        let squad = players
            .iter()
            .filter(|p| p.plays_for(team_id) && p.is_available())
            .map(MatchPlayer::from_player)
            .collect();

        MatchSquad::new(team_id, squad)
    }

    /// Σ(shooting + pace/2) over forwards and midfielders.
    pub fn attack(&self) -> u32 {
        self.players
            .iter()
            .filter(|p| p.position.is_attacking())
            .map(|p| p.skills.shooting as u32 + p.skills.pace as u32 / 2)
            .sum()
    }

    /// Σ(defending + passing/4) over defenders and goalkeepers.
    pub fn defense(&self) -> u32 {
        self.players
            .iter()
            .filter(|p| p.position.is_defensive())
            .map(|p| p.skills.defending as u32 + p.skills.passing as u32 / 4)
            .sum()
    }
}
