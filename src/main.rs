mod adapters;
mod cli;
mod config;
mod core;
mod logging;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    logging::init(args.verbose);
    cli::output::set_quiet(args.quiet);
    cli::context::init(args.dir.as_deref(), args.max_entries);

    let result = match &args.command {
        Commands::Init => cli::commands::init::execute(args.verbose),
        Commands::Add { name, at } => cli::commands::add::execute(name, at.as_deref()),
        Commands::Log {
            visitor,
            since,
            last,
            json,
        } => cli::commands::log::execute(visitor.as_deref(), since.as_deref(), *last, *json),
        Commands::Status => cli::commands::status::execute(),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
