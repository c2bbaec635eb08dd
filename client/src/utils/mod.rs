mod account;
mod rpc;
mod retry;

pub use account::*;
pub use rpc::*;
pub use retry::*;
