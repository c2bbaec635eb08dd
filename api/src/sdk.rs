use steel::*;
use crate::prelude::*;

pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
}

pub fn build_initialize_token_ix(
    payer: Pubkey,
    metadata: TokenMetadata,
) -> Result<Instruction, ProgramError> {
    let (mint_pda, mint_bump) = find_mint_pda();
    let (metadata_pda, _) = find_metadata_pda(&mint_pda);

    Ok(Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new(mint_pda, false),
            AccountMeta::new(metadata_pda, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(mpl_token_metadata::ID, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: InitializeTokenIx::from_struct(
            ParsedInitializeTokenIx {
                name: metadata.name,
                symbol: metadata.symbol,
                uri: metadata.uri,
                decimals: metadata.decimals,
                mint_bump,
            }
        )?.to_bytes(),
    })
}

pub fn build_provision_account_ix(
    payer: Pubkey,
    owner: Pubkey,
) -> Instruction {
    let (mint_pda, _) = find_mint_pda();
    let holding = find_holding_account(&owner, &mint_pda);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(owner, false),
            AccountMeta::new_readonly(mint_pda, false),
            AccountMeta::new(holding, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(spl_associated_token_account::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: ProvisionAccountIx {}.to_bytes(),
    }
}

pub fn build_mint_tokens_ix(
    payer: Pubkey,
    owner: Pubkey,
    amount: u64,
) -> Instruction {
    let (mint_pda, _) = find_mint_pda();
    let destination = find_holding_account(&owner, &mint_pda);

    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(owner, false),
            AccountMeta::new(mint_pda, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: MintTokensIx::from_struct(ParsedMintTokensIx { amount }).to_bytes(),
    }
}
