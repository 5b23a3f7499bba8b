use clap::Parser;
use listkeep::cli::commands::TodoCli;
use listkeep::cli::{handlers, init_logging};

fn main() {
    init_logging();
    let cli = TodoCli::parse();
    if let Err(e) = handlers::run_todo(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
