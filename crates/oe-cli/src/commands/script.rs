use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use colored::Colorize;
use oe_game::GameConfig;
use tracing::info;

/// Play line by line. Reads from `file`, or stdin when it is `None`.
pub fn run(config: GameConfig, file: Option<&Path>, fresh: bool, echo: bool) -> Result<(), String> {
    let mut reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let interactive = file.is_none() && !echo;

    let mut session = super::open_session(config, fresh);
    let intro = session
        .start()
        .map_err(|e| format!("failed to start game: {e}"))?;
    println!("{intro}\n");
    if interactive {
        println!("  Type 'help' for commands, 'quit' to exit.\n");
    }

    let mut stdout = io::stdout();
    let mut line = String::new();
    while !session.is_over() {
        if interactive {
            print!("> ");
            stdout.flush().map_err(|e| e.to_string())?;
        }

        line.clear();
        if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            break;
        }
        let input = line.trim();
        // Blank lines and '#' comments are skipped in scripts
        if input.is_empty() || input.starts_with('#') {
            continue;
        }
        if echo {
            println!("{}", format!("> {input}").bold());
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    if session.game().is_finished() {
        info!("game finished");
        println!("{}", "*** You escaped the office! ***".green().bold());
    }
    Ok(())
}
