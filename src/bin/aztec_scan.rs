use std::path::PathBuf;
use std::process::ExitCode;

use aztec_scan::{decode_image, ScanOptions};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aztec-scan",
    version,
    about = "Decode Aztec barcodes from image files"
)]
struct Cli {
    /// Path to the image file
    image: PathBuf,
    /// Print verbose diagnostic output
    #[arg(short, long)]
    verbose: bool,
    /// Output raw bytes as hex instead of text
    #[arg(long)]
    raw: bool,
    /// Output result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.image.exists() {
        eprintln!("Error: File not found: {}", cli.image.display());
        return ExitCode::FAILURE;
    }

    let outcome = decode_image(&cli.image, ScanOptions::verbose(cli.verbose));

    if cli.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: failed to serialize result: {err}");
                return ExitCode::FAILURE;
            }
        }
        return exit_for(outcome.success);
    }

    if outcome.success {
        let hex = outcome.bytes_hex().filter(|hex| !hex.is_empty());
        match (cli.raw, hex) {
            (true, Some(hex)) => println!("Bytes: {hex}"),
            _ => println!("{}", outcome.text.as_deref().unwrap_or_default()),
        }
        ExitCode::SUCCESS
    } else {
        eprintln!(
            "Error: {}",
            outcome.error.as_deref().unwrap_or("unknown error")
        );
        ExitCode::FAILURE
    }
}

fn exit_for(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
