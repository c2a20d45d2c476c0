pub mod economy;
pub mod names;
pub mod office;
pub mod training;

pub use economy::*;
pub use names::*;
pub use office::*;
pub use training::*;

use serde::{Deserialize, Serialize};

/// Read-only tables the engine consults; loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub office_tiers: OfficeTierTable,
    pub training_camps: TrainingCampCatalog,
    pub economy: EconomySettings,
    pub names: PeopleNameGeneratorData,
}

impl GameConfig {
    pub fn new(
        office_tiers: OfficeTierTable,
        training_camps: TrainingCampCatalog,
        economy: EconomySettings,
        names: PeopleNameGeneratorData,
    ) -> Self {
        GameConfig {
            office_tiers,
            training_camps,
            economy,
            names,
        }
    }
}
