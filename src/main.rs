//! extpack - repackage installed CMS extensions
//!
//! Command line entry point. See the library crate for the resolver itself.

use clap::Parser;

use extpack::cli::{Cli, Commands};
use extpack::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let task_file = cli.config.as_deref();
    let result = match cli.command {
        Commands::Package(args) => commands::package::run(task_file, cli.quiet, args),
        Commands::Plan(args) => commands::plan::run(task_file, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
