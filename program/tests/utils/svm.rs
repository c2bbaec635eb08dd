#![cfg(test)]
use std::path::PathBuf;
use solana_sdk::{
    instruction::{Instruction, InstructionError},
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};
use litesvm::{types::TransactionResult, LiteSVM};
use spl_minter_api::prelude::SplMinterError;
use super::print_tx;

fn read_artifact(relative: &str, hint: &str) -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(relative);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {} ({})", path.display(), e, hint))
}

pub fn program_bytes() -> Vec<u8> {
    read_artifact("../target/deploy/spl_minter.so", "run `cargo build-sbf` first")
}

pub fn metadata_program_bytes() -> Vec<u8> {
    read_artifact(
        "tests/fixtures/mpl_token_metadata.so",
        "dump it with `solana program dump -um metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s tests/fixtures/mpl_token_metadata.so`",
    )
}

pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    svm.add_program(spl_minter_api::ID, &program_bytes());
    svm
}

pub fn setup_svm_with_metadata() -> LiteSVM {
    let mut svm = setup_svm();
    svm.add_program(mpl_token_metadata::ID, &metadata_program_bytes());
    svm
}

pub fn send_tx(svm: &mut LiteSVM, tx: Transaction) -> TransactionResult {
    let res = svm.send_transaction(tx.clone());

    let meta = match res.as_ref() {
        Ok(v) => v.clone(),
        Err(v) => v.meta.clone()
    };

    print_tx(meta, tx);

    if let Err(e) = res.as_ref() {
        println!("error:\t{:?}", e.err);
    }

    res
}

/// Signs `ixs` with `payer` against a fresh blockhash so repeated identical
/// transactions are not rejected as duplicates.
pub fn send_ixs(svm: &mut LiteSVM, payer: &Keypair, ixs: &[Instruction]) -> TransactionResult {
    svm.expire_blockhash();
    let blockhash = svm.latest_blockhash();
    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), &[payer], blockhash);
    send_tx(svm, tx)
}

pub fn assert_minter_error(res: &TransactionResult, expected: SplMinterError) {
    match res {
        Ok(_) => panic!("expected {:?}, transaction succeeded", expected),
        Err(e) => match &e.err {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
                assert_eq!(SplMinterError::from_code(*code), Some(expected));
            }
            other => panic!("expected {:?}, got {:?}", expected, other),
        },
    }
}

pub fn create_payer(svm: &mut LiteSVM) -> Keypair {
    create_payer_with(svm, 10_000_000_000)
}

pub fn create_payer_with(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let payer_kp = Keypair::new();
    let payer_pk = payer_kp.pubkey();
    svm.airdrop(&payer_pk, lamports).unwrap();
    payer_kp
}

pub fn create_keypair() -> Keypair {
    Keypair::new()
}
