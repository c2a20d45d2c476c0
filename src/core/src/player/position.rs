use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 4] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::Defender,
        PlayerPosition::Midfielder,
        PlayerPosition::Forward,
    ];

    /// Forwards and midfielders make up the attack group in a match.
    pub fn is_attacking(&self) -> bool {
        matches!(self, PlayerPosition::Forward | PlayerPosition::Midfielder)
    }

    pub fn is_defensive(&self) -> bool {
        !self.is_attacking()
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PlayerPosition::Goalkeeper => write!(f, "Goalkeeper"),
            PlayerPosition::Defender => write!(f, "Defender"),
            PlayerPosition::Midfielder => write!(f, "Midfielder"),
            PlayerPosition::Forward => write!(f, "Forward"),
        }
    }
}
