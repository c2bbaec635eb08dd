use steel::*;
use solana_program::msg;
use crate::consts::*;
use crate::error::SplMinterError;

pub fn check_condition(condition: bool, message: &str) -> ProgramResult {
    if !condition {
        msg!("Failed condition: {}", message);
        return Err(ProgramError::InvalidArgument);
    }
    Ok(())
}

pub fn check_signer(account: &AccountInfo) -> ProgramResult {
    account.is_signer()?.is_writable()?;
    Ok(())
}

pub fn check_mut(account: &AccountInfo) -> ProgramResult {
    account.is_writable()?;
    Ok(())
}

pub fn check_program(account: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
    account.is_program(program_id)?;
    Ok(())
}

pub fn check_sysvar(account: &AccountInfo, sysvar_id: &Pubkey) -> ProgramResult {
    account.is_sysvar(sysvar_id)?;
    Ok(())
}

/// Rejects metadata fields the registrar would refuse, before any account is created.
pub fn check_metadata_fields(name: &str, symbol: &str, uri: &str) -> ProgramResult {
    for (field, value, max) in [
        ("name", name, MAX_NAME_LENGTH),
        ("symbol", symbol, MAX_SYMBOL_LENGTH),
        ("uri", uri, MAX_URI_LENGTH),
    ] {
        if value.len() > max {
            msg!("Registrar rejected {}: {} bytes (max {})", field, value.len(), max);
            return Err(SplMinterError::RegistrarRejected.into());
        }
        if value.contains('\0') {
            msg!("Registrar rejected {}: contains a NUL byte", field);
            return Err(SplMinterError::RegistrarRejected.into());
        }
    }
    Ok(())
}

/// Zero-padded fixed width encoding of a UTF-8 string.
pub fn to_fixed<const N: usize>(val: &str) -> Result<[u8; N], ProgramError> {
    if val.len() > N || val.contains('\0') {
        return Err(SplMinterError::RegistrarRejected.into());
    }

    let mut bytes = [0u8; N];
    bytes[..val.len()].copy_from_slice(val.as_bytes());
    Ok(bytes)
}

/// Inverse of `to_fixed`. Padding must be all zeros and the content valid UTF-8.
pub fn from_fixed(val: &[u8]) -> Result<String, ProgramError> {
    let end = val.iter().position(|&b| b == 0).unwrap_or(val.len());

    if val[end..].iter().any(|&b| b != 0) {
        msg!("Fixed string has data after its terminator");
        return Err(SplMinterError::RegistrarRejected.into());
    }

    match std::str::from_utf8(&val[..end]) {
        Ok(s) => Ok(s.to_string()),
        Err(_) => {
            msg!("Fixed string is not valid UTF-8");
            Err(SplMinterError::RegistrarRejected.into())
        }
    }
}

/// Whole tokens to smallest units (e.g., 10 with 9 decimals -> 10_000_000_000).
pub fn to_base_units(whole: u64, decimal_places: u8) -> Option<u64> {
    10u64
        .checked_pow(decimal_places as u32)
        .and_then(|scale| whole.checked_mul(scale))
}

/// Exact decimal string to smallest units (e.g., "10.5" with 9 decimals -> 10_500_000_000).
pub fn parse_base_units(value: &str, decimal_places: u8) -> Option<u64> {
    let (whole, frac) = value.split_once('.').unwrap_or((value, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty())
        || !is_digits(whole)
        || !is_digits(frac)
        || frac.len() > decimal_places as usize
    {
        return None;
    }

    let whole = if whole.is_empty() { 0 } else { whole.parse::<u64>().ok()? };
    let frac = if frac.is_empty() {
        0
    } else {
        let padding = 10u64.checked_pow((decimal_places as usize - frac.len()) as u32)?;
        frac.parse::<u64>().ok()?.checked_mul(padding)?
    };

    to_base_units(whole, decimal_places)?.checked_add(frac)
}

/// Convert to f64 whole value (e.g., 10_000_000 with 6 decimals -> 10.0)
pub fn to_decimal(amount: u64, decimal_places: u8) -> f64 {
    amount as f64 / 10f64.powi(decimal_places as i32)
}
