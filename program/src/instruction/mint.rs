use steel::*;
use spl_minter_api::prelude::*;

pub fn process_mint_tokens(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let raw_args = MintTokensIx::try_from_bytes(data)?;
    let args = raw_args.to_struct();

    let [
        payer_info,
        owner_info,
        mint_info,
        destination_info,

        token_program_info,
    ] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    solana_program::msg!("Args: {:?}", args);

    payer_info.is_signer()?;
    check_mut(mint_info)?;
    check_mut(destination_info)?;
    check_program(token_program_info, &spl_token::id())?;

    let (mint_address, mint_bump) = find_mint_pda();
    mint_info
        .has_address(&mint_address)?
        .has_owner(&spl_token::id())?;

    if args.amount == 0 {
        return Err(SplMinterError::InvalidAmount.into());
    }

    destination_info.has_address(&find_holding_account(owner_info.key, mint_info.key))?;

    if destination_info.data_is_empty() {
        solana_program::msg!("Destination {} does not exist", destination_info.key);
        return Err(SplMinterError::AccountNotFound.into());
    }

    let mint = MintRecord::unpack(&mint_info.try_borrow_data()?)?;
    let destination = HoldingAccount::unpack(&destination_info.try_borrow_data()?)?;

    if !mint.has_mint_authority(mint_info.key) {
        solana_program::msg!("Mint authority is {:?}", mint.mint_authority);
        return Err(SplMinterError::UnauthorizedMinter.into());
    }

    let new_supply = mint.supply
        .checked_add(args.amount)
        .ok_or(SplMinterError::Overflow)?;
    let new_balance = destination.amount
        .checked_add(args.amount)
        .ok_or(SplMinterError::Overflow)?;

    mint_to_holding_signed(
        mint_info,
        destination_info,
        mint_info, // mint_authority
        token_program_info,
        args.amount,
        &[ MINT, &[mint_bump] ],
    )?;

    solana_program::msg!("supply: {}", new_supply);
    solana_program::msg!("balance: {}", new_balance);

    Ok(())
}
