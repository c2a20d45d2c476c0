use crate::DatabaseError;
use crate::loaders::load_json;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntity {
    pub name: String,
    pub prestige: u8,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> Result<Vec<TeamEntity>, DatabaseError> {
        load_json("teams.json")
    }
}
