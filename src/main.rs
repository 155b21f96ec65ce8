//! # Asset Image Optimizer - Main Entry Point
//!
//! Questo è il punto di ingresso dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing` (su stderr)
//! - Costruzione della lista fissa di richieste e avvio del driver
//! - Una riga di report per richiesta su stdout (testo o JSON)
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (base dir, max width, quality, json, verbose)
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose)
//! 3. Esegue ogni richiesta; un fallimento non interrompe il run
//! 4. Stampa il riepilogo finale
//!
//! ## Esempio di utilizzo:
//! ```bash
//! optimize-images public --quality 85 --max-width 1600
//! ```

use anyhow::Result;
use asset_image_optimizer::config::{DEFAULT_MAX_WIDTH, DEFAULT_QUALITY};
use asset_image_optimizer::json_output::JsonMessage;
use asset_image_optimizer::{default_requests, run_requests};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "optimize-images")]
#[command(about = "Downscale and re-encode the bundled image assets as JPEG")]
struct Args {
    /// Directory containing the assets
    #[arg(default_value = "public")]
    base_dir: PathBuf,

    /// Images wider than this are downscaled
    #[arg(short, long, default_value_t = DEFAULT_MAX_WIDTH)]
    max_width: u32,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY)]
    quality: u8,

    /// Output outcomes as JSON lines for programmatic use
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let requests = default_requests(&args.base_dir, args.max_width, args.quality);
    let total = requests.len();

    let (_, summary) = run_requests(&requests, |index, outcome| {
        if args.json {
            JsonMessage::outcome(index + 1, total, outcome).emit();
        } else {
            println!("{}", outcome.report_line());
        }
    });

    if args.json {
        JsonMessage::summary(&summary).emit();
    } else {
        println!("{}", summary.format_summary());
    }

    Ok(())
}
