use solana_program::{
    program::{invoke, invoke_signed},
    program_pack::Pack,
    rent::Rent,
    system_instruction,
    sysvar::Sysvar,
};
use steel::*;

pub struct TokenMetadataArgs<'a> {
    pub name: &'a str,
    pub symbol: &'a str,
    pub uri: &'a str,
}

pub fn create_mint_account<'info>(
    mint: &AccountInfo<'info>,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
    seeds: &[&[u8]],
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent_sysvar: &AccountInfo<'info>,
) -> ProgramResult {
    let rent = Rent::get()?;
    let required_lamports = rent
        .minimum_balance(spl_token::state::Mint::LEN)
        .saturating_sub(mint.lamports());

    // The mint address may have been pre-funded; top it up instead of failing.
    if mint.lamports() > 0 {
        if required_lamports > 0 {
            invoke(
                &system_instruction::transfer(payer.key, mint.key, required_lamports),
                &[payer.clone(), mint.clone(), system_program.clone()],
            )?;
        }
        invoke_signed(
            &system_instruction::allocate(mint.key, spl_token::state::Mint::LEN as u64),
            &[mint.clone(), system_program.clone()],
            &[seeds],
        )?;
        invoke_signed(
            &system_instruction::assign(mint.key, &spl_token::id()),
            &[mint.clone(), system_program.clone()],
            &[seeds],
        )?;
    } else {
        invoke_signed(
            &system_instruction::create_account(
                payer.key,
                mint.key,
                required_lamports,
                spl_token::state::Mint::LEN as u64,
                &spl_token::id(),
            ),
            &[
                payer.clone(),
                mint.clone(),
                system_program.clone(),
            ],
            &[seeds],
        )?;
    }

    invoke(
        &spl_token::instruction::initialize_mint(
            &spl_token::id(),
            mint.key,
            mint_authority,
            freeze_authority,
            decimals,
        )?,
        &[
            mint.clone(),
            rent_sysvar.clone(),
        ],
    )?;

    Ok(())
}

/// Registers the metadata record for `mint`. The mint PDA signs as both
/// mint authority and update authority.
pub fn create_metadata_account<'info>(
    metadata: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    metadata_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent_sysvar: &AccountInfo<'info>,
    args: TokenMetadataArgs,
    mint_seeds: &[&[u8]],
) -> ProgramResult {
    mpl_token_metadata::instructions::CreateMetadataAccountV3Cpi {
        __program: metadata_program,
        metadata,
        mint,
        mint_authority: mint,
        payer,
        update_authority: (mint, true),
        system_program,
        rent: Some(rent_sysvar),
        __args: mpl_token_metadata::instructions::CreateMetadataAccountV3InstructionArgs {
            data: mpl_token_metadata::types::DataV2 {
                name: args.name.to_string(),
                symbol: args.symbol.to_string(),
                uri: args.uri.to_string(),
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            is_mutable: false,
            collection_details: None,
        },
    }
    .invoke_signed(&[mint_seeds])
}

/// Creates the associated token account of (owner, mint) unless it already exists.
pub fn create_holding_account<'info>(
    payer: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    holding: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    associated_token_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> ProgramResult {
    invoke(
        &spl_associated_token_account::instruction::create_associated_token_account_idempotent(
            payer.key,
            owner.key,
            mint.key,
            &spl_token::id(),
        ),
        &[
            payer.clone(),
            holding.clone(),
            owner.clone(),
            mint.clone(),
            system_program.clone(),
            token_program.clone(),
            associated_token_program.clone(),
        ],
    )
}

pub fn mint_to_holding_signed<'info>(
    mint: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    amount: u64,
    authority_seeds: &[&[u8]],
) -> ProgramResult {
    invoke_signed(
        &spl_token::instruction::mint_to(
            &spl_token::id(),
            mint.key,
            destination.key,
            authority.key,
            &[],
            amount,
        )?,
        &[
            mint.clone(),
            destination.clone(),
            authority.clone(),
            token_program.clone(),
        ],
        &[authority_seeds],
    )
}
