//! Command parsing for typed input.

use oe_core::Direction;

/// A parsed player command. Numbers are converted to 0-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Walk through an exit.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Describe the room, or the open puzzle.
    Look,
    /// List what the player carries.
    Inventory,
    /// Click a hotspot.
    Click {
        /// Hotspot id.
        hotspot: String,
    },
    /// Examine a hotspot.
    Examine {
        /// Hotspot id.
        hotspot: String,
    },
    /// Pick an item up from the room.
    Take {
        /// The item name.
        item: String,
    },
    /// Put an item down in the room.
    Drop {
        /// The item name.
        item: String,
    },
    /// Answer the current question.
    Answer {
        /// 0-based option index.
        index: usize,
        /// Document shown with the answer.
        document: Option<String>,
    },
    /// Next question.
    Next,
    /// Ask for the verdict.
    Complete,
    /// Start the open puzzle over.
    Reset,
    /// Pick a dialogue option.
    Option {
        /// 0-based index into the options on screen.
        index: usize,
    },
    /// Throw an item through the metal detector.
    Throw,
    /// Let time pass.
    Wait {
        /// Seconds to wait.
        seconds: f64,
    },
    /// Close the open puzzle.
    Close,
    /// Show help.
    Help,
    /// Quit the game.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "move", "walk"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const CLICK_VERBS: &[&str] = &["click", "use", "talk", "press"];
const EXAMINE_VERBS: &[&str] = &["examine", "x", "inspect"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab", "pick"];
const DROP_VERBS: &[&str] = &["drop", "put"];
const ANSWER_VERBS: &[&str] = &["answer", "a"];
const OPTION_VERBS: &[&str] = &["option", "say", "o"];
const THROW_VERBS: &[&str] = &["throw", "t"];
const WAIT_VERBS: &[&str] = &["wait", "w"];
const CLOSE_VERBS: &[&str] = &["close", "cancel"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q"];

/// Parse a line of input into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let verb = verb.as_str();
    let rest = words.get(1..).unwrap_or(&[]);

    if let Some(direction) = Direction::parse(verb) {
        return Command::Move { direction };
    }

    match verb {
        "next" | "n" => return Command::Next,
        "complete" | "done" => return Command::Complete,
        "reset" | "retry" => return Command::Reset,
        _ => {}
    }

    if MOVE_VERBS.contains(&verb) {
        return parse_move(rest);
    }
    if LOOK_VERBS.contains(&verb) {
        return Command::Look;
    }
    if INVENTORY_VERBS.contains(&verb) {
        return Command::Inventory;
    }
    if CLICK_VERBS.contains(&verb) {
        return parse_target(rest, "click what?", |hotspot| Command::Click { hotspot });
    }
    if EXAMINE_VERBS.contains(&verb) {
        return parse_target(rest, "examine what?", |hotspot| Command::Examine { hotspot });
    }
    if TAKE_VERBS.contains(&verb) {
        return parse_take(rest);
    }
    if DROP_VERBS.contains(&verb) {
        return parse_target(rest, "drop what?", |item| Command::Drop { item });
    }
    if ANSWER_VERBS.contains(&verb) {
        return parse_answer(rest);
    }
    if OPTION_VERBS.contains(&verb) {
        return match rest.first().and_then(|n| parse_ordinal(n)) {
            Some(index) => Command::Option { index },
            None => Command::Unknown {
                input: "say which option?".to_string(),
            },
        };
    }
    if THROW_VERBS.contains(&verb) {
        return Command::Throw;
    }
    if WAIT_VERBS.contains(&verb) {
        return parse_wait(rest);
    }
    if CLOSE_VERBS.contains(&verb) {
        return Command::Close;
    }
    if HELP_VERBS.contains(&verb) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

/// Parse a 1-based number into a 0-based index.
fn parse_ordinal(word: &str) -> Option<usize> {
    word.parse::<usize>().ok()?.checked_sub(1)
}

fn parse_move(rest: &[&str]) -> Command {
    match rest.first().and_then(|w| Direction::parse(w)) {
        Some(direction) => Command::Move { direction },
        None => Command::Unknown {
            input: "go where?".to_string(),
        },
    }
}

fn parse_target(rest: &[&str], missing: &str, build: impl FnOnce(String) -> Command) -> Command {
    // Skip "on", "to", or "at" if present
    let target = match rest.first() {
        Some(w) if ["on", "to", "at"].contains(&w.to_lowercase().as_str()) => &rest[1..],
        _ => rest,
    };
    if target.is_empty() {
        Command::Unknown {
            input: missing.to_string(),
        }
    } else {
        build(target.join(" "))
    }
}

fn parse_take(rest: &[&str]) -> Command {
    // Skip "up" if present (pick up)
    let item_words = match rest.first() {
        Some(w) if w.eq_ignore_ascii_case("up") => &rest[1..],
        _ => rest,
    };
    parse_target(item_words, "take what?", |item| Command::Take { item })
}

fn parse_answer(rest: &[&str]) -> Command {
    let Some(index) = rest.first().and_then(|n| parse_ordinal(n)) else {
        return Command::Unknown {
            input: "answer which option?".to_string(),
        };
    };
    // "answer 1 passport" and "answer 1 with passport" both show a document
    let document = match rest.get(1..).unwrap_or(&[]) {
        [] => None,
        [w, doc @ ..] if w.eq_ignore_ascii_case("with") && !doc.is_empty() => Some(doc.join(" ")),
        doc => Some(doc.join(" ")),
    };
    Command::Answer { index, document }
}

fn parse_wait(rest: &[&str]) -> Command {
    let seconds = match rest.first() {
        None => Some(1.0),
        Some(w) => w.parse::<f64>().ok().filter(|s| s.is_finite() && *s >= 0.0),
    };
    match seconds {
        Some(seconds) => Command::Wait { seconds },
        None => Command::Unknown {
            input: "wait how long?".to_string(),
        },
    }
}
