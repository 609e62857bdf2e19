mod cli;

use clap::Parser;
use eyre::WrapErr;

use txlens_core::{Transaction, TxReport};

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let tx = Transaction::from_hex(args.tx_hex.trim()).wrap_err("decode raw transaction")?;

    tracing::debug!(
        version = tx.version,
        segwit = tx.is_segwit(),
        vin = tx.vin.len(),
        vout = tx.vout.len(),
        locktime = tx.locktime,
        "decoded transaction"
    );

    let report = TxReport::from(&tx);
    let rendered = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .wrap_err("render report")?;
    println!("{rendered}");

    Ok(())
}
