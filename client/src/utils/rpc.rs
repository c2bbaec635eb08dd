use anyhow::{Result, anyhow};
use solana_client::{client_error::ClientError, nonblocking::rpc_client::RpcClient};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    instruction::InstructionError,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};
use spl_minter_api::prelude::SplMinterError;

use crate::utils::poll_until;

pub async fn get_latest_blockhash(client: &RpcClient) -> Result<Hash> {
    client
        .get_latest_blockhash()
        .await
        .map_err(|e| anyhow!("Failed to get latest blockhash: {}", e))
}

/// Returns `None` when no account exists at `address`.
pub async fn get_account(client: &RpcClient, address: &Pubkey) -> Result<Option<Account>> {
    let res = client
        .get_account_with_commitment(address, CommitmentConfig::confirmed())
        .await
        .map_err(|e| anyhow!("Failed to fetch account {}: {}", address, e))?;
    Ok(res.value)
}

/// Renders program errors by name instead of by custom code.
pub fn describe_transaction_error(err: &TransactionError) -> String {
    match err {
        TransactionError::InstructionError(index, InstructionError::Custom(code)) => {
            match SplMinterError::from_code(*code) {
                Some(e) => format!("instruction {}: {:?} ({})", index, e, e),
                None => format!("instruction {}: custom error {}", index, code),
            }
        }
        other => other.to_string(),
    }
}

fn describe_client_error(err: &ClientError) -> String {
    match err.get_transaction_error() {
        Some(tx_err) => describe_transaction_error(&tx_err),
        None => err.to_string(),
    }
}

pub async fn send_and_confirm_transaction(client: &RpcClient, tx: &Transaction) -> Result<Signature> {
    let signature = client
        .send_transaction(tx)
        .await
        .map_err(|e| anyhow!("{}", describe_client_error(&e)))?;

    log::debug!("Sent transaction {}", signature);

    poll_until("confirm transaction", move || async move {
        let status = client
            .get_signature_status(&signature)
            .await
            .map_err(|e| anyhow!("Failed to get status of {}: {}", signature, e))?;

        match status {
            Some(Ok(())) => Ok(Some(signature)),
            Some(Err(e)) => Err(anyhow!("Transaction {} failed: {}", signature, describe_transaction_error(&e))),
            None => Ok(None),
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_minter_errors() {
        let err = TransactionError::InstructionError(1, InstructionError::Custom(6001));
        assert_eq!(
            describe_transaction_error(&err),
            "instruction 1: AccountNotFound (Destination holding account does not exist)"
        );
    }

    #[test]
    fn keeps_unknown_codes() {
        let err = TransactionError::InstructionError(0, InstructionError::Custom(7000));
        assert_eq!(describe_transaction_error(&err), "instruction 0: custom error 7000");
    }

    #[test]
    fn does_not_claim_system_errors() {
        // ResultWithNegativeLamports raised by the System program during a CPI.
        let err = TransactionError::InstructionError(1, InstructionError::Custom(1));
        assert_eq!(describe_transaction_error(&err), "instruction 1: custom error 1");
    }
}
