use std::path::PathBuf;
use anyhow::{Result, anyhow};
use solana_sdk::signature::{read_keypair_file, Keypair};

pub fn get_keypair_path(keypair: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = keypair {
        return Ok(path);
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not locate home directory"))?;
    Ok(home.join(".config").join("solana").join("id.json"))
}

pub fn get_payer(path: PathBuf) -> Result<Keypair> {
    read_keypair_file(&path)
        .map_err(|e| anyhow!("Failed to read keypair from {}: {}", path.display(), e))
}
