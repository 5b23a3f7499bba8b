use clap::Parser;
use listkeep::cli::commands::ContactsCli;
use listkeep::cli::{handlers, init_logging};

fn main() {
    init_logging();
    let cli = ContactsCli::parse();
    if let Err(e) = handlers::run_contacts(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
