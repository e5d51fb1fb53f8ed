use clap::Parser;
use tick::cli::commands::Cli;
use tick::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let store_dir = handlers::resolve_store_dir(cli.store_dir.as_deref());
            if let Err(e) = tick::tui::run(&store_dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
