pub mod builder;
pub mod calculators;
pub mod development;
pub mod generator;
pub mod lifecycle;
pub mod player;
pub mod position;
pub mod skills;
pub mod status;

pub use builder::*;
pub use calculators::*;
pub use development::*;
pub use generator::*;
pub use lifecycle::*;
pub use player::*;
pub use position::*;
pub use skills::*;
pub use status::*;
