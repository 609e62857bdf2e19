use clap::Parser;

/// Txlens — offline decoder for raw Bitcoin transactions.
///
/// Takes the hex of a raw transaction and prints its decoded structure as
/// JSON, without talking to a node. No validation is performed; scripts and
/// witness data are surfaced as opaque hex.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Raw transaction bytes as a hex string (case-insensitive).
    pub tx_hex: String,

    /// Print compact single-line JSON instead of pretty-printed output.
    #[arg(long)]
    pub compact: bool,
}
