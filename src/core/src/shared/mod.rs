pub mod currency;
pub mod fullname;

pub use currency::*;
pub use fullname::*;
