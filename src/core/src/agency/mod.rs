pub mod contracts;
pub mod finance;
pub mod manager;
pub mod office;
pub mod representation;
pub mod scouting;
pub mod staff;
pub mod training;

pub use contracts::*;
pub use finance::*;
pub use manager::*;
pub use office::*;
pub use representation::*;
pub use scouting::*;
pub use staff::*;
pub use training::*;
