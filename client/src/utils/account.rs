use anyhow::{Result, anyhow};
use serde::Serialize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use spl_minter_api::prelude::*;

use crate::utils::get_account;

pub async fn get_mint_record(client: &RpcClient) -> Result<Option<MintRecord>> {
    let (mint, _) = find_mint_pda();
    let Some(account) = get_account(client, &mint).await? else {
        return Ok(None);
    };

    let record = MintRecord::unpack(&account.data)
        .map_err(|e| anyhow!("Failed to unpack mint {}: {}", mint, e))?;
    Ok(Some(record))
}

pub async fn get_metadata_record(client: &RpcClient) -> Result<Option<MetadataRecord>> {
    let (mint, _) = find_mint_pda();
    let (metadata, _) = find_metadata_pda(&mint);
    let Some(account) = get_account(client, &metadata).await? else {
        return Ok(None);
    };

    let record = MetadataRecord::unpack(&account.data)
        .map_err(|e| anyhow!("Failed to unpack metadata {}: {}", metadata, e))?;
    Ok(Some(record))
}

pub async fn get_holding_account(client: &RpcClient, owner: &Pubkey) -> Result<Option<HoldingAccount>> {
    let (mint, _) = find_mint_pda();
    let address = find_holding_account(owner, &mint);
    let Some(account) = get_account(client, &address).await? else {
        return Ok(None);
    };

    let holding = HoldingAccount::unpack(&account.data)
        .map_err(|e| anyhow!("Failed to unpack holding account {}: {}", address, e))?;
    Ok(Some(holding))
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenSummary {
    pub program_id: String,
    pub mint: String,
    pub metadata: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub uri: Option<String>,
    pub decimals: u8,
    pub supply: u64,
    pub ui_supply: f64,
    pub mint_authority: Option<String>,
    pub freeze_authority: Option<String>,
}

impl TokenSummary {
    pub fn new(mint_record: &MintRecord, metadata: Option<&MetadataRecord>) -> Self {
        let (mint, _) = find_mint_pda();
        let (metadata_pda, _) = find_metadata_pda(&mint);

        Self {
            program_id: spl_minter_api::ID.to_string(),
            mint: mint.to_string(),
            metadata: metadata_pda.to_string(),
            name: metadata.map(|m| m.name.clone()),
            symbol: metadata.map(|m| m.symbol.clone()),
            uri: metadata.map(|m| m.uri.clone()),
            decimals: mint_record.decimals,
            supply: mint_record.supply,
            ui_supply: to_decimal(mint_record.supply, mint_record.decimals),
            mint_authority: mint_record.mint_authority.map(|k| k.to_string()),
            freeze_authority: mint_record.freeze_authority.map(|k| k.to_string()),
        }
    }
}

pub async fn get_token_summary(client: &RpcClient) -> Result<TokenSummary> {
    let mint_record = get_mint_record(client)
        .await?
        .ok_or_else(|| anyhow!("Mint is not initialized"))?;
    let metadata = get_metadata_record(client).await?;

    Ok(TokenSummary::new(&mint_record, metadata.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_records() {
        let (mint, _) = find_mint_pda();
        let record = MintRecord {
            supply: 20_000_000_000,
            decimals: 9,
            mint_authority: Some(mint),
            freeze_authority: None,
        };
        let metadata = MetadataRecord {
            mint,
            update_authority: mint,
            name: "Just a Test Token".to_string(),
            symbol: "TEST".to_string(),
            uri: "https://example".to_string(),
            is_mutable: false,
        };

        let summary = TokenSummary::new(&record, Some(&metadata));
        assert_eq!(summary.mint, mint.to_string());
        assert_eq!(summary.mint_authority, Some(mint.to_string()));
        assert_eq!(summary.ui_supply, 20.0);
        assert_eq!(summary.symbol.as_deref(), Some("TEST"));
        assert_eq!(summary.freeze_authority, None);
    }
}
