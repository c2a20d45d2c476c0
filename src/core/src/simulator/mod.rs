pub mod actions;
pub mod data;
pub mod date;
pub mod error;
pub mod result;
pub mod simulator;

pub use data::*;
pub use date::*;
pub use error::*;
pub use result::*;
pub use simulator::*;
