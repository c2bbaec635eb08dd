pub mod init;
pub mod mint;

pub use init::*;
pub use mint::*;
