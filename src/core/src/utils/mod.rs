pub mod id;
pub mod rng;
pub mod time;

pub use id::*;
pub use rng::*;
pub use time::*;
