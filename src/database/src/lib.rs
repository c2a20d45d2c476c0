mod error;
pub mod generators;
pub mod loaders;
mod snapshot;

pub use error::*;
pub use generators::*;
pub use loaders::*;
pub use snapshot::*;
