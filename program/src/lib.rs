#![allow(unexpected_cfgs)]
use steel::*;
use spl_minter_api::prelude::*;

pub mod instruction;
use instruction::*;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let (ix, data) = parse_instruction(&spl_minter_api::ID, program_id, data)?;

    match ix {
        InstructionType::Unknown => return Err(ProgramError::InvalidInstructionData),

        InstructionType::InitializeTokenIx => process_initialize_token(accounts, data)?,
        InstructionType::ProvisionAccountIx => process_provision_account(accounts, data)?,
        InstructionType::MintTokensIx => process_mint_tokens(accounts, data)?,
    }

    Ok(())
}

#[cfg(not(feature = "no-entrypoint"))]
entrypoint!(process_instruction);

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "SPL Minter",
    project_url: "https://github.com/spl-minter/spl-minter",
    contacts: "email:security@spl-minter.dev",
    policy: "https://github.com/spl-minter/spl-minter/blob/main/SECURITY.md",
    source_code: "https://github.com/spl-minter/spl-minter"
}
