//! Add or update GitHub organization secrets from a CSV file.

use clap::Parser;

use org_secrets::cli::{self, add, AddArgs};

fn main() {
    let args = AddArgs::parse();
    cli::init_logging(args.verbose);

    if let Err(e) = add::execute(&args) {
        cli::report(&e);
        std::process::exit(1);
    }
}
