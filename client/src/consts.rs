pub const MAX_RETRIES: u32        = 30;
pub const RETRY_DELAY_MS: u64     = 500;
pub const LAMPORTS_PER_TX: u64    = 5000;

pub const INIT_COMPUTE_UNITS: u32 = 150_000;
pub const MINT_COMPUTE_UNITS: u32 = 80_000;
