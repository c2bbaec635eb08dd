#![cfg(test)]
use spl_minter_api::prelude::InstructionType;
use litesvm::types::TransactionMetadata;
use solana_sdk::transaction::Transaction;
use pretty_hex::*;

pub fn print_tx(meta: TransactionMetadata, tx: Transaction) {
    let msg = tx.message().serialize();

    println!("\n");
    println!("--------------------------------------------------------------------------------");
    println!("sig:\t{:?}", meta.signature);
    println!("len:\t{:?}", msg.len());

    for ix in &tx.message.instructions {
        let program_id = tx.message.account_keys[ix.program_id_index as usize];
        if program_id != spl_minter_api::ID {
            continue;
        }

        match ix.data.first().map(|d| InstructionType::try_from(*d)) {
            Some(Ok(ix_type)) => println!("\nix:\t{:?} ({})", ix_type, ix.data[0]),
            _ => println!("\nix:\tunknown"),
        }

        println!("accounts:");
        for key in &ix.accounts {
            println!("\t{}: {:?}", key, tx.message.account_keys[*key as usize]);
        }

        println!("\n\n{}\n", pretty_hex(&ix.data))
    }

    println!();
    println!("cu:\t{:?}", meta.compute_units_consumed);
    println!("logs:");
    for log in &meta.logs {
        println!("\t{:?}", log);
    }
    println!();
}
