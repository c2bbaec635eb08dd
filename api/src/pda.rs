use steel::*;
use crate::consts::*;

/// The single mint of this deployment. The mint is also its own mint authority.
pub fn find_mint_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT], &crate::id())
}

pub fn find_metadata_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA, mpl_token_metadata::ID.as_ref(), mint.as_ref()],
        &mpl_token_metadata::ID,
    )
}

/// Canonical holding account for `owner`, keyed by (owner, token program, mint)
/// under the associated token account program.
pub fn find_holding_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(owner, mint)
}
