use anyhow::{Result, anyhow};
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use spl_minter_api::prelude::*;

use crate::consts::*;
use crate::utils::*;

/// Creates the program mint and its metadata.
///
/// Returns `None` without sending anything when the mint already exists.
pub async fn initialize(
    client: &RpcClient,
    signer: &Keypair,
    metadata: TokenMetadata,
) -> Result<Option<Signature>> {
    check_metadata_fields(&metadata.name, &metadata.symbol, &metadata.uri)
        .map_err(|_| anyhow!(
            "Metadata rejected: name, symbol and uri must fit {}, {} and {} bytes without NUL characters",
            MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH
        ))?;

    let payer = signer.pubkey();
    let (mint_pda, _) = find_mint_pda();
    let (metadata_pda, _) = find_metadata_pda(&mint_pda);

    if get_account(client, &mint_pda).await?.is_some() {
        log::info!("Mint {} already initialized, skipping", mint_pda);
        return Ok(None);
    }

    log::info!("Mint not found. Initializing {} with metadata {}", mint_pda, metadata_pda);

    let compute_budget_ix = ComputeBudgetInstruction::set_compute_unit_limit(INIT_COMPUTE_UNITS);
    let init_ix = build_initialize_token_ix(payer, metadata)
        .map_err(|e| anyhow!("Failed to build initialize instruction: {}", e))?;

    let recent_blockhash = get_latest_blockhash(client).await?;
    let tx = Transaction::new_signed_with_payer(
        &[compute_budget_ix, init_ix],
        Some(&payer),
        &[signer],
        recent_blockhash,
    );

    let signature = send_and_confirm_transaction(client, &tx)
        .await
        .map_err(|e| anyhow!("Failed to initialize mint: {}", e))?;

    log::info!("Mint initialized with signature: {}", signature);
    Ok(Some(signature))
}
