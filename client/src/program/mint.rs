use anyhow::{Result, anyhow};
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use spl_minter_api::prelude::*;

use crate::consts::*;
use crate::utils::*;

async fn send(client: &RpcClient, signer: &Keypair, ixs: &[Instruction]) -> Result<Signature> {
    let payer = signer.pubkey();
    let recent_blockhash = get_latest_blockhash(client).await?;
    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer), &[signer], recent_blockhash);
    send_and_confirm_transaction(client, &tx).await
}

/// Ensures `owner` has a holding account for the program mint.
pub async fn provision_account(
    client: &RpcClient,
    signer: &Keypair,
    owner: Pubkey,
) -> Result<Signature> {
    let provision_ix = build_provision_account_ix(signer.pubkey(), owner);

    send(client, signer, &[provision_ix])
        .await
        .map_err(|e| anyhow!("Failed to provision holding account: {}", e))
}

/// Mints `amount` smallest units to `owner`, creating the holding account first
/// if needed. Both steps land in the same transaction.
pub async fn mint_tokens(
    client: &RpcClient,
    signer: &Keypair,
    owner: Pubkey,
    amount: u64,
) -> Result<Signature> {
    if amount == 0 {
        return Err(anyhow!("Amount must be greater than zero"));
    }

    let mint_record = get_mint_record(client)
        .await?
        .ok_or_else(|| anyhow!("Mint is not initialized; run init first"))?;

    if mint_record.supply.checked_add(amount).is_none() {
        return Err(anyhow!("Minting {} would overflow supply {}", amount, mint_record.supply));
    }

    let payer = signer.pubkey();
    let (mint_pda, _) = find_mint_pda();
    let destination = find_holding_account(&owner, &mint_pda);

    log::info!("Destination is: {}", destination);

    let ixs = [
        ComputeBudgetInstruction::set_compute_unit_limit(MINT_COMPUTE_UNITS),
        build_provision_account_ix(payer, owner),
        build_mint_tokens_ix(payer, owner, amount),
    ];

    let signature = send(client, signer, &ixs)
        .await
        .map_err(|e| anyhow!("Failed to mint tokens: {}", e))?;

    log::info!(
        "Minted {} ({} tokens) to {}. Signature: {}",
        amount,
        to_decimal(amount, mint_record.decimals),
        destination,
        signature
    );

    Ok(signature)
}
