use num_enum::{IntoPrimitive, TryFromPrimitive};
use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Errors returned by the minter program as `ProgramError::Custom(code)`.
///
/// Codes are part of the public interface; append new variants only. They start
/// at 6000 so they never collide with custom codes raised by the System, SPL
/// Token or ATA programs inside a CPI.
#[repr(u32)]
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum SplMinterError {
    #[error("Mint is already initialized")]
    AlreadyInitialized = 6000,

    #[error("Destination holding account does not exist")]
    AccountNotFound,

    #[error("Payer cannot cover the rent for the new account")]
    InsufficientFunds,

    #[error("Supply or balance would overflow")]
    Overflow,

    #[error("Mint authority is not the program derived authority")]
    UnauthorizedMinter,

    #[error("Metadata registrar rejected the supplied fields")]
    RegistrarRejected,

    #[error("Mint amount must be greater than zero")]
    InvalidAmount,
}

impl SplMinterError {
    pub fn code(self) -> u32 {
        self.into()
    }

    /// Maps a `Custom` error code from a failed transaction back to the variant.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

impl From<SplMinterError> for ProgramError {
    fn from(e: SplMinterError) -> Self {
        ProgramError::Custom(e.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(SplMinterError::AlreadyInitialized.code(), 6000);
        assert_eq!(SplMinterError::AccountNotFound.code(), 6001);
        assert_eq!(SplMinterError::InsufficientFunds.code(), 6002);
        assert_eq!(SplMinterError::Overflow.code(), 6003);
        assert_eq!(SplMinterError::UnauthorizedMinter.code(), 6004);
        assert_eq!(SplMinterError::RegistrarRejected.code(), 6005);
        assert_eq!(SplMinterError::InvalidAmount.code(), 6006);
    }

    #[test]
    fn converts_to_custom_program_error() {
        let err: ProgramError = SplMinterError::UnauthorizedMinter.into();
        assert_eq!(err, ProgramError::Custom(6004));
    }

    #[test]
    fn from_code_round_trips_known_codes_only() {
        assert_eq!(SplMinterError::from_code(6003), Some(SplMinterError::Overflow));
        assert_eq!(SplMinterError::from_code(6099), None);
    }

    #[test]
    fn foreign_custom_codes_are_not_minter_errors() {
        // System and SPL Token custom codes.
        for code in 0..100 {
            assert_eq!(SplMinterError::from_code(code), None);
        }
    }
}
