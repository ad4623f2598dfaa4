//! folio - digitized book normalizer

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Normalize digitized HTML books into structured JSON", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio extracted/ json/          Normalize every book under extracted/
    RUST_LOG=info folio in/ out/    Also log a line per written artifact")]
struct Cli {
    /// Directory tree containing digitized books (.html/.htm)
    #[arg(value_name = "INPUT_DIR")]
    input: PathBuf,

    /// Directory where normalized JSON documents are written
    #[arg(value_name = "OUTPUT_DIR")]
    output: PathBuf,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match folio::driver::run(&cli.input, &cli.output) {
        Ok(stats) => {
            if !cli.quiet {
                eprintln!(
                    "normalized {} documents, rejected {}",
                    stats.written, stats.rejected
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
