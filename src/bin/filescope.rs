use clap::Parser;
use colored::Colorize;
use filescope_core::cli::{self, Cli};
use filescope_core::exit::FilescopeExit;

fn main() -> FilescopeExit {
    let cli = Cli::parse();

    cli::logging::init(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match cli::handlers::resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return if e.is_invalid_input() {
                FilescopeExit::InvalidInput
            } else {
                FilescopeExit::Error
            };
        }
    };
    if !config.report.color {
        colored::control::set_override(false);
    }

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, &config)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(FilescopeExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            FilescopeExit::Error
        }
    }
}
