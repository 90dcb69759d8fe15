//! Terminal front ends for Office Escape.

mod commands;
mod logging;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "office-escape",
    about = "Office Escape: get through the Irish immigration office",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand that touches a game.
#[derive(Args, Debug, Clone)]
struct GameArgs {
    /// Save file to use instead of the platform default
    #[arg(long, global = true)]
    save_file: Option<PathBuf>,

    /// Do not write the save file on room changes
    #[arg(long, global = true)]
    no_save: bool,

    /// Start with every interview document in your pocket
    #[arg(long, global = true)]
    starter_kit: bool,

    /// Player name
    #[arg(long, global = true)]
    name: Option<String>,

    /// Speed of the security guard's head turning (0.25-4.0)
    #[arg(long, global = true)]
    guard_speed: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal UI
    Play {
        /// Ignore any save and start over
        #[arg(long)]
        new: bool,
    },

    /// Play line by line, reading commands from a file or stdin
    Script {
        /// Command file (default: stdin)
        file: Option<PathBuf>,

        /// Ignore any save and start over
        #[arg(long)]
        new: bool,

        /// Print each command before its response
        #[arg(long)]
        echo: bool,
    },

    /// List the rooms and what it takes to enter them
    Rooms {
        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Delete the save file
    Reset,
}

fn main() {
    let cli = Cli::parse();
    let config = commands::game_config(&cli.game);

    let result = match cli.command {
        Commands::Play { new } => logging::init_file(cli.verbose)
            .and_then(|()| commands::play::run(config, new)),
        Commands::Script { file, new, echo } => {
            logging::init_stderr(cli.verbose);
            commands::script::run(config, file.as_deref(), new, echo)
        }
        Commands::Rooms { format } => {
            logging::init_stderr(cli.verbose);
            commands::rooms::run(&format)
        }
        Commands::Reset => {
            logging::init_stderr(cli.verbose);
            commands::reset::run(&config)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
