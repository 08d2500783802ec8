//! Yule CLI - draw a family gift exchange from the command line.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use yule_cli::cli::DrawArgs;
use yule_cli::commands;
use yule_cli::config::OutputFormat;
use yule_cli::{Cli, Command, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let errors = Formatter::new(OutputFormat::Quiet, !cli.no_color);

    if let Err(e) = run(cli) {
        eprintln!("{}", errors.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("YULE_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    // Log to stderr so stdout stays clean for --format json
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> yule_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command.unwrap_or_else(|| Command::Draw(DrawArgs::default())) {
        Command::Draw(args) => commands::execute_draw(args, &config, &formatter),
        Command::People(args) => commands::execute_people(args, &config, &formatter),
        Command::History(args) => commands::execute_history(args, &config, &formatter),
    }
}
