pub mod card;
pub mod filename;

pub use card::*;
pub use filename::*;
