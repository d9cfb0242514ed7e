//! Encrypt a string with a GitHub organization's public key.

use clap::Parser;

use org_secrets::cli::{self, generate, GenerateArgs};

fn main() {
    let args = GenerateArgs::parse();
    cli::init_logging(args.verbose);

    if let Err(e) = generate::execute(&args) {
        cli::report(&e);
        std::process::exit(1);
    }
}
