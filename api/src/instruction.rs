use steel::*;
use crate::consts::*;
use crate::utils::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum InstructionType {
    Unknown = 0,

    /// Creates the program mint and attaches its metadata.
    /// 0. `payer` (writable, signer): Pays rent for the mint and metadata
    /// 1. `mint` (writable): Mint PDA, seeds ["mint"]
    /// 2. `metadata` (writable): Token metadata PDA for the mint
    /// 3. `token_program`: SPL Token program
    /// 4. `token_metadata_program`: Token metadata program
    /// 5. `system_program`: System program
    /// 6. `rent`: Rent sysvar
    InitializeTokenIx,

    /// Ensures the owner's holding account for the mint exists.
    /// 0. `payer` (writable, signer): Pays rent when the account is created
    /// 1. `owner`: Owner of the holding account
    /// 2. `mint`: Mint PDA
    /// 3. `holding` (writable): Associated token account of (owner, mint)
    /// 4. `token_program`: SPL Token program
    /// 5. `associated_token_program`: Associated token account program
    /// 6. `system_program`: System program
    ProvisionAccountIx,

    /// Issues tokens into an existing holding account.
    /// 0. `payer` (signer): Transaction fee payer
    /// 1. `owner`: Owner of the destination account
    /// 2. `mint` (writable): Mint PDA
    /// 3. `destination` (writable): Associated token account of (owner, mint)
    /// 4. `token_program`: SPL Token program
    MintTokensIx,
}

instruction!(InstructionType, InitializeTokenIx);
instruction!(InstructionType, ProvisionAccountIx);
instruction!(InstructionType, MintTokensIx);

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInitializeTokenIx {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,

    pub mint_bump: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct InitializeTokenIx {
    pub name: [u8; MAX_NAME_LENGTH],
    pub symbol: [u8; MAX_SYMBOL_LENGTH],
    pub uri: [u8; MAX_URI_LENGTH],
    pub decimals: u8,

    pub mint_bump: u8,
}

impl InitializeTokenIx {
    pub fn from_struct(parsed: ParsedInitializeTokenIx) -> Result<Self, ProgramError> {
        Ok(Self {
            name: to_fixed(&parsed.name)?,
            symbol: to_fixed(&parsed.symbol)?,
            uri: to_fixed(&parsed.uri)?,
            decimals: parsed.decimals,

            mint_bump: parsed.mint_bump,
        })
    }

    pub fn to_struct(&self) -> Result<ParsedInitializeTokenIx, ProgramError> {
        Ok(ParsedInitializeTokenIx {
            name: from_fixed(&self.name)?,
            symbol: from_fixed(&self.symbol)?,
            uri: from_fixed(&self.uri)?,
            decimals: self.decimals,

            mint_bump: self.mint_bump,
        })
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ProvisionAccountIx {}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMintTokensIx {
    pub amount: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MintTokensIx {
    pub amount: [u8; 8],
}

impl MintTokensIx {
    pub fn from_struct(parsed: ParsedMintTokensIx) -> Self {
        Self {
            amount: parsed.amount.to_le_bytes(),
        }
    }

    pub fn to_struct(&self) -> ParsedMintTokensIx {
        ParsedMintTokensIx {
            amount: u64::from_le_bytes(self.amount),
        }
    }
}
