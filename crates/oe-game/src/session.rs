//! Line-oriented text sessions.
//!
//! A [`TextSession`] drives a [`GameController`] with typed commands and
//! turns everything the controller tells its presenter into plain text.

use std::time::Duration;

use oe_core::{RoomId, ViewUpdate};
use oe_puzzle::{
    AnswerSelection, DialogueAction, InterviewAction, Puzzle, PuzzleAction, QuizAction,
    TimingAction,
};

use crate::controller::{ANIM_LOOKING_AWAY, ANIM_WATCHING, GameController};
use crate::error::GameResult;
use crate::parser::{Command, parse_command};
use crate::presenter::{PresenterEvent, RecordingPresenter};
use crate::save::SaveStore;

/// Time step used when waiting.
const WAIT_STEP: Duration = Duration::from_millis(100);

/// Longest single wait, in seconds.
const MAX_WAIT_SECS: f64 = 600.0;

/// A text front end over the game controller.
pub struct TextSession<S: SaveStore> {
    game: GameController<S, RecordingPresenter>,
    quit: bool,
}

impl<S: SaveStore> TextSession<S> {
    /// Wrap a controller. Call [`TextSession::start`] before sending commands.
    pub fn new(game: GameController<S, RecordingPresenter>) -> Self {
        Self { game, quit: false }
    }

    /// Show the opening room.
    pub fn start(&mut self) -> GameResult<String> {
        self.game.start()?;
        Ok(self.render_events(false))
    }

    /// The controller being driven.
    pub fn game(&self) -> &GameController<S, RecordingPresenter> {
        &self.game
    }

    /// Whether the player typed `quit`.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Whether the session should stop reading input.
    pub fn is_over(&self) -> bool {
        self.quit || self.game.is_finished()
    }

    /// Process a line of input and return the response.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        let command = parse_command(input);
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> GameResult<String> {
        let mut reprompt = false;
        match command {
            Command::Move { direction } => {
                self.game.request_move(direction)?;
            }
            Command::Look => return self.do_look(),
            Command::Inventory => return Ok(self.do_inventory()),
            Command::Click { hotspot } => {
                self.game.hotspot_clicked(&hotspot)?;
            }
            Command::Examine { hotspot } => {
                self.game.hotspot_examined(&hotspot)?;
            }
            Command::Take { item } => {
                self.game.inventory_item_moved(&item, true)?;
            }
            Command::Drop { item } => {
                self.game.inventory_item_moved(&item, false)?;
            }
            Command::Wait { seconds } => return Ok(self.do_wait(seconds)),
            Command::Help => return Ok(help_text()),
            Command::Quit => {
                self.quit = true;
                return Ok("Goodbye!".to_string());
            }
            Command::Unknown { input } => {
                return Ok(format!(
                    "I don't understand \"{input}\". Type 'help' for a list of commands."
                ));
            }
            Command::Close if !self.open_puzzle_is_dialogue() => {
                if self.game.open_puzzle().is_none() {
                    return Ok("There's nothing to close.".to_string());
                }
                self.game.close_puzzle();
                self.game.presenter_mut().take();
                return Ok("You step away.".to_string());
            }
            puzzle_command => {
                let Some(puzzle) = self.game.open_puzzle() else {
                    return Ok("You aren't in the middle of a puzzle.".to_string());
                };
                let id = puzzle.id();
                let interview = matches!(puzzle, Puzzle::Interview(_));
                reprompt = matches!(
                    puzzle_command,
                    Command::Next | Command::Reset | Command::Option { .. }
                ) || (interview && matches!(puzzle_command, Command::Answer { .. }));
                let Some(action) = puzzle_action(puzzle, puzzle_command) else {
                    return Ok("That doesn't work here.".to_string());
                };
                self.game.puzzle_action(id, action);
            }
        }
        Ok(self.render_events(reprompt))
    }

    fn do_look(&mut self) -> GameResult<String> {
        let room = self.game.player().location();
        let mut output = self.describe_room(room)?;
        if self.game.open_puzzle().is_some() {
            output.push('\n');
            output.push_str(&self.puzzle_prompt(true));
        }
        Ok(output)
    }

    fn do_inventory(&self) -> String {
        let inventory = &self.game.player().inventory;
        if inventory.is_empty() {
            return "You are carrying nothing.".to_string();
        }

        let mut output = "You are carrying:\n".to_string();
        for item in inventory.iter() {
            output.push_str(&format!("  - {} ({})\n", item.name(), item.description()));
        }
        output
    }

    /// Let real time pass, as a terminal front end does between key
    /// presses. Returns whatever changed, usually nothing.
    pub fn advance(&mut self, dt: Duration) -> String {
        self.game.tick(dt);
        self.render_events(false)
    }

    fn do_wait(&mut self, seconds: f64) -> String {
        let steps = (seconds.min(MAX_WAIT_SECS) / WAIT_STEP.as_secs_f64()).round() as u64;
        for _ in 0..steps {
            self.game.tick(WAIT_STEP);
        }
        let output = self.render_events(false);
        if output.is_empty() {
            "Time passes.".to_string()
        } else {
            output
        }
    }

    fn open_puzzle_is_dialogue(&self) -> bool {
        matches!(self.game.open_puzzle(), Some(Puzzle::Dialogue(_)))
    }

    /// Drain the presenter and render its events in order.
    fn render_events(&mut self, reprompt: bool) -> String {
        let events = self.game.presenter_mut().take();
        let mut lines: Vec<String> = Vec::new();
        let mut prompted = false;

        for event in events {
            match event {
                PresenterEvent::RoomShown { room, .. } => match self.describe_room(room) {
                    Ok(text) => lines.push(text),
                    Err(e) => lines.push(e.to_string()),
                },
                PresenterEvent::ViewUpdates(updates) => {
                    for update in updates {
                        if let ViewUpdate::PlayAnimation(name) = update {
                            match name.as_str() {
                                ANIM_LOOKING_AWAY => lines.push("The guard looks away.".to_string()),
                                ANIM_WATCHING => {
                                    lines.push("The guard turns back to watch you.".to_string())
                                }
                                _ => {}
                            }
                        }
                    }
                }
                PresenterEvent::PuzzleOpened(_) => {
                    if let Some(puzzle) = self.game.open_puzzle() {
                        lines.push(format!("[{}]", puzzle.description()));
                        lines.push(self.puzzle_prompt(true));
                        prompted = true;
                    }
                }
                PresenterEvent::Message(text) => lines.push(text),
                PresenterEvent::Saved => lines.push("(Game saved.)".to_string()),
                PresenterEvent::Inventory { .. } | PresenterEvent::PuzzleClosed => {}
            }
        }

        if reprompt && !prompted && self.game.open_puzzle().is_some() {
            lines.push(self.puzzle_prompt(false));
        }
        lines.retain(|l| !l.is_empty());
        lines.join("\n")
    }

    fn describe_room(&self, id: RoomId) -> GameResult<String> {
        let room = self.game.graph().room(id)?;
        let mut output = format!("**{}**\n", room.description());

        let hotspots: Vec<&str> = room
            .interactables()
            .filter(|h| h.enabled)
            .map(|h| h.id.as_str())
            .collect();
        if !hotspots.is_empty() {
            output.push_str(&format!("You notice: {}\n", hotspots.join(", ")));
        }

        let items: Vec<&str> = room.inventory.names().collect();
        if !items.is_empty() {
            output.push_str(&format!("Lying here: {}\n", items.join(", ")));
        }

        let exits: Vec<String> = room.exits().iter().map(|(d, _)| d.to_string()).collect();
        if exits.is_empty() {
            output.push_str("There is nowhere left to go.");
        } else {
            output.push_str(&format!("Exits: {}", exits.join(", ")));
        }
        Ok(output)
    }

    /// What the open puzzle is asking for. `full` includes what the NPC
    /// last said.
    fn puzzle_prompt(&self, full: bool) -> String {
        let Some(puzzle) = self.game.open_puzzle() else {
            return String::new();
        };
        let inventory = &self.game.player().inventory;

        match puzzle {
            Puzzle::Quiz(quiz) => match quiz.current_question() {
                Some(question) => numbered(
                    format!(
                        "Question {}/{}: {}",
                        quiz.current_index() + 1,
                        quiz.total_questions(),
                        question.prompt
                    ),
                    question.options.iter().map(String::as_str),
                ),
                None => format!(
                    "No more questions ({} correct). Type 'complete' for your result.",
                    quiz.correct_answers()
                ),
            },
            Puzzle::Dialogue(dialogue) => {
                let options = dialogue.available_options(inventory);
                let head = match dialogue.current_node() {
                    Some(node) if full => node.npc_text.clone(),
                    _ => "You can say:".to_string(),
                };
                numbered(head, options.iter().map(|o| o.text.as_str()))
            }
            Puzzle::Timing(timing) => format!(
                "Items through: {}/{}. The guard is {}.\nType 'throw' to throw an item, 'wait <seconds>' to let time pass.",
                timing.successes(),
                timing.threshold(),
                if timing.is_looking_away() {
                    "looking away"
                } else {
                    "watching you"
                }
            ),
            Puzzle::Interview(interview) => match interview.current_question() {
                Some(question) => {
                    let mut head = format!(
                        "Question {}/{}: {}",
                        interview.current_index() + 1,
                        interview.total_questions(),
                        question.prompt
                    );
                    if let Some(document) = &question.document {
                        head.push_str(&format!(" (show your {document})"));
                    }
                    numbered(head, question.options.iter().map(String::as_str))
                }
                None => "Type 'complete' to hear the verdict.".to_string(),
            },
        }
    }
}

/// Map a command onto the open puzzle's actions.
fn puzzle_action(puzzle: &Puzzle, command: Command) -> Option<PuzzleAction> {
    let action = match (puzzle, command) {
        (Puzzle::Quiz(_), Command::Answer { index, .. }) => {
            PuzzleAction::Quiz(QuizAction::Answer(index))
        }
        (Puzzle::Quiz(_), Command::Next) => PuzzleAction::Quiz(QuizAction::Next),
        (Puzzle::Quiz(_), Command::Complete) => PuzzleAction::Quiz(QuizAction::Complete),
        (Puzzle::Quiz(_), Command::Reset) => PuzzleAction::Quiz(QuizAction::Reset),
        (Puzzle::Dialogue(_), Command::Option { index }) => {
            PuzzleAction::Dialogue(DialogueAction::SelectOption(index))
        }
        (Puzzle::Dialogue(_), Command::Close) => PuzzleAction::Dialogue(DialogueAction::Close),
        (Puzzle::Timing(_), Command::Throw) => PuzzleAction::Timing(TimingAction::ThrowItem),
        (Puzzle::Timing(_), Command::Reset) => PuzzleAction::Timing(TimingAction::Reset),
        (Puzzle::Interview(_), Command::Answer { index, document }) => {
            PuzzleAction::Interview(InterviewAction::Answer(AnswerSelection { index, document }))
        }
        (Puzzle::Interview(_), Command::Complete) => {
            PuzzleAction::Interview(InterviewAction::Complete)
        }
        (Puzzle::Interview(_), Command::Reset) => PuzzleAction::Interview(InterviewAction::Reset),
        _ => return None,
    };
    Some(action)
}

fn numbered<'a>(head: String, options: impl Iterator<Item = &'a str>) -> String {
    let mut output = head;
    for (i, option) in options.enumerate() {
        output.push_str(&format!("\n  {}. {}", i + 1, option));
    }
    output
}

/// The command reference shown by `help`.
pub fn help_text() -> String {
    "**Commands**\n\
     forward (f), back (b), left, right - walk through an exit\n\
     look (l) - describe the room\n\
     inventory (i) - list what you're carrying\n\
     click <hotspot>, examine <hotspot> - use or inspect something\n\
     take <item>, drop <item> - move items between you and the room\n\
     answer <n> [document] - answer a question, optionally showing a document\n\
     next, complete, reset - step through, finish, or restart a quiz\n\
     option <n> - pick a line in a conversation\n\
     throw - throw an item through the metal detector\n\
     wait <seconds> - let time pass\n\
     close - step away from a puzzle\n\
     help - show this list\n\
     quit - leave the game"
        .to_string()
}
