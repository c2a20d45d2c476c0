pub mod cooldown;
pub mod listing;
pub mod market;
pub mod negotiation;
pub mod offer;

pub use cooldown::*;
pub use listing::*;
pub use market::*;
pub use negotiation::*;
pub use offer::*;
