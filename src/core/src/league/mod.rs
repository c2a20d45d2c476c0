pub mod result;
pub mod scheduler;
pub mod table;

pub use result::*;
pub use scheduler::*;
pub use table::*;
