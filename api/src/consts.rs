pub const MINT: &[u8]           = b"mint";
pub const METADATA: &[u8]       = b"metadata";

// Field limits enforced by the token metadata program.
pub use mpl_token_metadata::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH};

/// Upper bound on the size of a token metadata account.
pub const MAX_METADATA_LEN: usize = 679;

pub const DEFAULT_DECIMALS: u8  = 9;
