use solana_program::program_pack::Pack;
use steel::*;

/// Supply control record of the program mint, read from the SPL Token mint layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintRecord {
    pub supply: u64,
    pub decimals: u8,
    pub mint_authority: Option<Pubkey>,
    pub freeze_authority: Option<Pubkey>,
}

impl MintRecord {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let mint = spl_token::state::Mint::unpack(data)?;
        Ok(Self {
            supply: mint.supply,
            decimals: mint.decimals,
            mint_authority: mint.mint_authority.into(),
            freeze_authority: mint.freeze_authority.into(),
        })
    }

    pub fn has_mint_authority(&self, authority: &Pubkey) -> bool {
        self.mint_authority.as_ref() == Some(authority)
    }
}

/// One owner's balance of the program mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoldingAccount {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

impl HoldingAccount {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let account = spl_token::state::Account::unpack(data)?;
        Ok(Self {
            owner: account.owner,
            mint: account.mint,
            amount: account.amount,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataRecord {
    pub mint: Pubkey,
    pub update_authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub is_mutable: bool,
}

impl MetadataRecord {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let metadata = mpl_token_metadata::accounts::Metadata::from_bytes(data)
            .map_err(|_| ProgramError::InvalidAccountData)?;

        // The registrar pads stored strings with zeros.
        let trim = |s: &str| s.trim_end_matches('\0').to_string();

        Ok(Self {
            mint: metadata.mint,
            update_authority: metadata.update_authority,
            name: trim(&metadata.name),
            symbol: trim(&metadata.symbol),
            uri: trim(&metadata.uri),
            is_mutable: metadata.is_mutable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::program_option::COption;

    #[test]
    fn mint_record_reads_spl_layout() {
        let authority = Pubkey::new_unique();
        let mint = spl_token::state::Mint {
            mint_authority: COption::Some(authority),
            supply: 20_000_000_000,
            decimals: 9,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        let mut data = vec![0u8; spl_token::state::Mint::LEN];
        spl_token::state::Mint::pack(mint, &mut data).unwrap();

        let record = MintRecord::unpack(&data).unwrap();
        assert_eq!(record.supply, 20_000_000_000);
        assert_eq!(record.decimals, 9);
        assert!(record.has_mint_authority(&authority));
        assert!(!record.has_mint_authority(&Pubkey::new_unique()));
        assert_eq!(record.freeze_authority, None);
    }

    #[test]
    fn uninitialized_mint_is_rejected() {
        let data = vec![0u8; spl_token::state::Mint::LEN];
        assert!(MintRecord::unpack(&data).is_err());
    }
}
