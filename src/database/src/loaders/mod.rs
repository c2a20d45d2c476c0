pub mod config;
pub mod data;
pub mod teams;

pub use config::*;
pub use data::*;
pub use teams::*;
