#![cfg(test)]
use litesvm::LiteSVM;
use solana_sdk::{account::Account, program_option::COption, program_pack::Pack, pubkey::Pubkey};
use spl_minter_api::prelude::*;

pub fn get_mint_record(svm: &LiteSVM) -> Option<MintRecord> {
    let (mint, _) = find_mint_pda();
    let account = svm.get_account(&mint)?;
    MintRecord::unpack(&account.data).ok()
}

pub fn get_metadata_record(svm: &LiteSVM) -> Option<MetadataRecord> {
    let (mint, _) = find_mint_pda();
    let (metadata, _) = find_metadata_pda(&mint);
    let account = svm.get_account(&metadata)?;
    MetadataRecord::unpack(&account.data).ok()
}

pub fn get_holding(svm: &LiteSVM, owner: &Pubkey) -> Option<HoldingAccount> {
    let (mint, _) = find_mint_pda();
    let account = svm.get_account(&find_holding_account(owner, &mint))?;
    if account.data.is_empty() {
        return None;
    }
    HoldingAccount::unpack(&account.data).ok()
}

/// Writes a mint record straight into the mint PDA, bypassing initialization.
pub fn write_mint(svm: &mut LiteSVM, mint_authority: Pubkey, supply: u64, decimals: u8) {
    let (mint, _) = find_mint_pda();

    let state = spl_token::state::Mint {
        mint_authority: COption::Some(mint_authority),
        supply,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Mint::LEN];
    spl_token::state::Mint::pack(state, &mut data).unwrap();

    let lamports = svm.minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN);
    svm.set_account(
        mint,
        Account {
            lamports,
            data,
            owner: spl_token::id(),
            executable: false,
            rent_epoch: 0,
        },
    )
    .unwrap();
}

/// A mint at the PDA with the program as its authority, as initialization leaves it.
pub fn write_program_mint(svm: &mut LiteSVM, supply: u64) {
    let (mint, _) = find_mint_pda();
    write_mint(svm, mint, supply, DEFAULT_DECIMALS);
}
