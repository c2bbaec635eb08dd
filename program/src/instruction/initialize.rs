use steel::*;
use solana_program::{program_pack::Pack, rent::Rent, sysvar::Sysvar};
use spl_minter_api::prelude::*;

pub fn process_initialize_token(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let raw_args = InitializeTokenIx::try_from_bytes(data)?;
    let args = raw_args.to_struct()?;

    let [
        payer_info,
        mint_info,
        metadata_info,

        token_program_info,
        metadata_program_info,
        system_program_info,
        rent_sysvar_info,
    ] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    solana_program::msg!("Args: {:?}", args);

    check_signer(payer_info)?;
    check_mut(mint_info)?;
    check_mut(metadata_info)?;

    check_program(token_program_info, &spl_token::id())?;
    check_program(metadata_program_info, &mpl_token_metadata::ID)?;
    check_program(system_program_info, &system_program::id())?;
    check_sysvar(rent_sysvar_info, &sysvar::rent::id())?;

    let (mint_address, mint_bump) = find_mint_pda();
    mint_info.has_address(&mint_address)?;

    check_condition(
        args.mint_bump == mint_bump,
        "Mint bump is not canonical"
    )?;

    let (metadata_address, _metadata_bump) = find_metadata_pda(mint_info.key);
    metadata_info.has_address(&metadata_address)?;

    if !mint_info.data_is_empty() || !mint_info.owner.eq(&system_program::ID) {
        solana_program::msg!("Mint {} already holds a record", mint_info.key);
        return Err(SplMinterError::AlreadyInitialized.into());
    }

    check_metadata_fields(&args.name, &args.symbol, &args.uri)?;

    let rent = Rent::get()?;
    let mint_rent = rent
        .minimum_balance(spl_token::state::Mint::LEN)
        .saturating_sub(mint_info.lamports());
    let metadata_rent = rent
        .minimum_balance(MAX_METADATA_LEN)
        .saturating_sub(metadata_info.lamports());
    let required = mint_rent.saturating_add(metadata_rent);

    if payer_info.lamports() < required {
        solana_program::msg!(
            "Payer has {} lamports, mint and metadata require {}",
            payer_info.lamports(),
            required
        );
        return Err(SplMinterError::InsufficientFunds.into());
    }

    let bump = [mint_bump];
    let mint_seeds: &[&[u8]] = &[ MINT, &bump ];

    solana_program::msg!("Creating mint");

    create_mint_account(
        mint_info,
        mint_info.key,  // mint_authority
        None,           // freeze_authority
        args.decimals,
        mint_seeds,
        payer_info,
        system_program_info,
        rent_sysvar_info,
    )?;

    solana_program::msg!("Creating metadata");

    create_metadata_account(
        metadata_info,
        mint_info,
        payer_info,
        metadata_program_info,
        system_program_info,
        rent_sysvar_info,
        TokenMetadataArgs {
            name: &args.name,
            symbol: &args.symbol,
            uri: &args.uri,
        },
        mint_seeds,
    )?;

    Ok(())
}
