use steel::*;
use solana_program::{program_pack::Pack, rent::Rent, sysvar::Sysvar};
use spl_minter_api::prelude::*;

pub fn process_provision_account(accounts: &[AccountInfo], _data: &[u8]) -> ProgramResult {
    let [
        payer_info,
        owner_info,
        mint_info,
        holding_info,

        token_program_info,
        associated_token_program_info,
        system_program_info,
    ] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(payer_info)?;
    check_mut(holding_info)?;

    check_program(token_program_info, &spl_token::id())?;
    check_program(associated_token_program_info, &spl_associated_token_account::id())?;
    check_program(system_program_info, &system_program::id())?;

    let (mint_address, _) = find_mint_pda();
    mint_info
        .has_address(&mint_address)?
        .has_owner(&spl_token::id())?;

    holding_info.has_address(&find_holding_account(owner_info.key, mint_info.key))?;

    if !holding_info.data_is_empty() {
        let holding = HoldingAccount::unpack(&holding_info.try_borrow_data()?)?;

        check_condition(
            holding.owner.eq(owner_info.key) && holding.mint.eq(mint_info.key),
            "Holding account does not belong to owner and mint"
        )?;

        solana_program::msg!("Holding account {} already provisioned", holding_info.key);
        return Ok(());
    }

    let rent = Rent::get()?;
    let holding_rent = rent.minimum_balance(spl_token::state::Account::LEN);

    if payer_info.lamports() < holding_rent {
        solana_program::msg!(
            "Payer has {} lamports, holding account requires {}",
            payer_info.lamports(),
            holding_rent
        );
        return Err(SplMinterError::InsufficientFunds.into());
    }

    solana_program::msg!("Creating holding account {}", holding_info.key);

    create_holding_account(
        payer_info,
        owner_info,
        mint_info,
        holding_info,
        token_program_info,
        associated_token_program_info,
        system_program_info,
    )
}
