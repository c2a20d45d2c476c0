pub mod feed;
pub mod news;

pub use feed::*;
pub use news::*;
