pub mod initialize;
pub mod provision;
pub mod mint;

pub use initialize::*;
pub use provision::*;
pub use mint::*;
