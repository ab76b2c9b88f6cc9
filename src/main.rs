mod cli;
mod init;
mod list_cmd;
mod record_cmd;
mod select_cmd;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut settings = ajo::load_settings();
    cli.global.apply(&mut settings);
    if settings.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Jump => select_cmd::run_jump(&settings),
        Commands::Recent => select_cmd::run_recent(&settings),
        Commands::Record(args) => record_cmd::record(args, &settings),
        Commands::Forget(args) => record_cmd::forget(args, &settings),
        Commands::Dirs(args) => list_cmd::dirs(args, &settings),
        Commands::List(args) => list_cmd::list(args, &settings),
        Commands::Init(args) => init::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
