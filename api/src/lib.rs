#![allow(unexpected_cfgs)]

pub mod consts;
pub mod error;
pub mod instruction;
pub mod state;
pub mod pda;
pub mod cpis;
pub mod utils;

#[cfg(not(target_os = "solana"))]
pub mod sdk;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::instruction::*;
    pub use crate::state::*;
    pub use crate::pda::*;
    pub use crate::cpis::*;
    pub use crate::utils::*;

    #[cfg(not(target_os = "solana"))]
    pub use crate::sdk::*;
}

use steel::*;

declare_id!("MinTer5LmWvWRe8dRTkYfuJq3qZ2zQGQd8HxJpF1bUs");
