use crate::DatabaseError;
use crate::loaders::load_json;
use core::config::{
    EconomySettings, GameConfig, OfficeTier, OfficeTierTable, PeopleNameGeneratorData, TrainingCamp,
    TrainingCampCatalog,
};
use core::SkillType;
use core::shared::Money;
use log::debug;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct OfficeTierEntity {
    pub level: u8,
    pub max_players: usize,
    pub upgrade_cost: Option<Money>,
    pub min_scouting_potential: u8,
    pub max_scouting_potential: u8,
}

#[derive(Deserialize)]
pub struct TrainingCampEntity {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub cost: Money,
    pub duration_months: u8,
    pub target: String,
    pub bonus: u8,
}

#[derive(Deserialize)]
pub struct NamesEntity {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load() -> Result<GameConfig, DatabaseError> {
        let office_tiers = Self::office_tiers(load_json("office_tiers.json")?)?;
        let training_camps = Self::training_camps(load_json("training_camps.json")?)?;
        let economy: EconomySettings = load_json("economy.json")?;
        let names: NamesEntity = load_json("names.json")?;

        debug!(
            "config loaded: {} office tiers, {} training camps",
            office_tiers.tiers.len(),
            training_camps.camps.len()
        );

        Ok(GameConfig::new(
            office_tiers,
            training_camps,
            economy,
            PeopleNameGeneratorData::new(names.first_names, names.last_names),
        ))
    }

    fn office_tiers(entities: Vec<OfficeTierEntity>) -> Result<OfficeTierTable, DatabaseError> {
        if entities.is_empty() {
            return Err(DatabaseError::InvalidData("office tier table is empty".to_string()));
        }

        if let Some(bad) = entities
            .iter()
            .find(|t| t.min_scouting_potential > t.max_scouting_potential)
        {
            return Err(DatabaseError::InvalidData(format!(
                "office tier {} has an inverted scouting band",
                bad.level
            )));
        }

        Ok(OfficeTierTable::new(
            entities
                .into_iter()
                .map(|t| {
                    OfficeTier::new(
                        t.level,
                        t.max_players,
                        t.upgrade_cost,
                        t.min_scouting_potential,
                        t.max_scouting_potential,
                    )
                })
                .collect(),
        ))
    }

    fn training_camps(entities: Vec<TrainingCampEntity>) -> Result<TrainingCampCatalog, DatabaseError> {
        let camps = entities
            .into_iter()
            .map(|camp| {
                Ok(TrainingCamp {
                    id: camp.id,
                    target: Self::skill_type(&camp.target)?,
                    name: camp.name,
                    description: camp.description,
                    cost: camp.cost,
                    duration_months: camp.duration_months,
                    bonus: camp.bonus,
                })
            })
            .collect::<Result<Vec<_>, DatabaseError>>()?;

        Ok(TrainingCampCatalog::new(camps))
    }

    fn skill_type(value: &str) -> Result<SkillType, DatabaseError> {
        match value {
            "pace" => Ok(SkillType::Pace),
            "shooting" => Ok(SkillType::Shooting),
            "passing" => Ok(SkillType::Passing),
            "defending" => Ok(SkillType::Defending),
            other => Err(DatabaseError::InvalidData(format!(
                "unknown training target '{}'",
                other
            ))),
        }
    }
}
