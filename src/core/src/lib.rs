pub mod simulator;
pub use simulator::*;

pub mod agency;
pub mod config;
pub mod league;
pub mod r#match;
pub mod news;
pub mod player;
pub mod team;
pub mod transfers;

pub mod shared;
pub mod utils;

pub use config::GameConfig;
pub use player::{Player, PlayerPosition, PlayerSkills, SkillType};
pub use team::Team;
pub use utils::*;
