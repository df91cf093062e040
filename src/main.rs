use std::path::PathBuf;

use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use clitube::{
    cli::{self, Command},
    config::{self, Config},
    error, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  after_help="Have fun tubing!",
  styles=styles(),
)]
struct Cli {
    /// The search string (artist & title) you are looking for
    #[clap(value_name = "SEARCHTERM")]
    search: Vec<String>,

    /// Download the current YouTube playlist script into the VLC installation
    #[clap(long, conflicts_with = "search")]
    update: bool,

    /// Player executable to launch instead of CLITUBE_PLAYER
    #[clap(long, value_name = "PATH")]
    player: Option<PathBuf>,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    match Command::from_args(&cli.search, cli.update) {
        Command::Usage => {
            if let Err(e) = Cli::command().print_help() {
                warning!("Cannot print help. Err: {}", e);
            }
        }
        Command::Update => cli::update(&load_config(cli.player)),
        Command::Play(query) => cli::play(&load_config(cli.player), query),
    }
}

fn load_config(player: Option<PathBuf>) -> Config {
    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    match Config::from_env() {
        Ok(c) => c.with_player(player),
        Err(e) => error!("{}", e),
    }
}
