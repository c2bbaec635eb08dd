pub mod consts;
pub mod program;
pub mod utils;

pub use program::*;
pub use utils::*;
