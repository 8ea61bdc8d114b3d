//! Entry point for the `isleroute` binary.
#![forbid(unsafe_code)]

use isleroute_cli::CliError;

fn main() {
    match isleroute_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("isleroute: {err}");
            std::process::exit(1);
        }
    }
}
