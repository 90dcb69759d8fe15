//! Play screen state and drawing.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use oe_game::{Command, FileSaveStore, GameResult, TextSession, parse_command};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

/// Visual style for an output line.
#[derive(Debug, Clone, Copy)]
enum OutputStyle {
    /// A command the player entered (yellow, "> " prefix).
    Command,
    /// Normal game output.
    Result,
    /// Error output.
    Error,
    /// Intro and help text.
    System,
}

#[derive(Debug, Clone)]
struct OutputLine {
    style: OutputStyle,
    text: String,
}

/// The play screen.
pub struct PlayApp {
    session: TextSession<FileSaveStore>,
    output_lines: Vec<OutputLine>,
    /// Scroll offset from the bottom.
    output_scroll: u16,
    input_text: String,
    /// Byte offset of the cursor within `input_text`.
    input_cursor: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl PlayApp {
    /// Start the session and show the opening room.
    pub fn new(mut session: TextSession<FileSaveStore>) -> GameResult<Self> {
        let intro = session.start()?;
        let mut app = Self {
            session,
            output_lines: Vec::new(),
            output_scroll: 0,
            input_text: String::new(),
            input_cursor: 0,
            should_quit: false,
        };
        app.push_output(
            OutputStyle::System,
            "Office Escape\n\
             Get through the immigration office. Type 'help' for commands.",
        );
        app.push_output(OutputStyle::Result, &intro);
        Ok(app)
    }

    /// Let time pass.
    pub fn advance(&mut self, dt: Duration) {
        let output = self.session.advance(dt);
        if !output.is_empty() {
            self.push_output(OutputStyle::Result, &output);
        }
    }

    /// Edit the input line, or submit it on Enter.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                self.input_text.clear();
                self.input_cursor = 0;
            }
            KeyCode::Backspace => {
                if self.input_cursor > 0 {
                    let prev = self.prev_boundary();
                    self.input_text.remove(prev);
                    self.input_cursor = prev;
                }
            }
            KeyCode::Left => self.input_cursor = self.prev_boundary(),
            KeyCode::Right => {
                if self.input_cursor < self.input_text.len() {
                    self.input_cursor = self.input_text[self.input_cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.input_cursor + i)
                        .unwrap_or(self.input_text.len());
                }
            }
            KeyCode::Home => self.input_cursor = 0,
            KeyCode::End => self.input_cursor = self.input_text.len(),
            KeyCode::Up => self.output_scroll = self.output_scroll.saturating_add(1),
            KeyCode::Down => self.output_scroll = self.output_scroll.saturating_sub(1),
            KeyCode::Char(c) => {
                self.input_text.insert(self.input_cursor, c);
                self.input_cursor += c.len_utf8();
            }
            _ => {}
        }
    }

    fn prev_boundary(&self) -> usize {
        self.input_text[..self.input_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn submit_input(&mut self) {
        let input = self.input_text.trim().to_string();
        if input.is_empty() {
            return;
        }
        self.input_text.clear();
        self.input_cursor = 0;

        self.push_output(OutputStyle::Command, &input);
        let command = parse_command(&input);
        let style = if command == Command::Help {
            OutputStyle::System
        } else {
            OutputStyle::Result
        };
        match self.session.execute(command) {
            Ok(output) => {
                if !output.is_empty() {
                    self.push_output(style, &output);
                }
            }
            Err(e) => self.push_output(OutputStyle::Error, &e.to_string()),
        }

        if self.session.has_quit() {
            self.should_quit = true;
        } else if self.session.game().is_finished() {
            self.push_output(
                OutputStyle::System,
                "You made it out. Press Ctrl+C or type 'quit' to leave.",
            );
        }
    }

    fn push_output(&mut self, style: OutputStyle, text: &str) {
        for line in text.lines() {
            self.output_lines.push(OutputLine {
                style,
                text: line.to_string(),
            });
        }
        self.output_scroll = 0;
    }

    /// Draw the whole screen.
    pub fn draw(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Output and sidebar
                Constraint::Length(3), // Input
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(32)])
            .split(rows[0]);

        self.draw_output(frame, columns[0]);
        self.draw_sidebar(frame, columns[1]);
        self.draw_input(frame, rows[1]);

        let status = Paragraph::new("Enter:send  Esc:clear  \u{2191}\u{2193}:scroll  Ctrl+C:quit")
            .style(Style::default().fg(Color::Black).bg(Color::White));
        frame.render_widget(status, rows[2]);
    }

    fn draw_output(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .output_lines
            .iter()
            .map(|ol| {
                let (prefix, color, modifier) = match ol.style {
                    OutputStyle::Command => ("> ", Color::Yellow, Modifier::BOLD),
                    OutputStyle::Result => ("", Color::White, Modifier::empty()),
                    OutputStyle::Error => ("", Color::Red, Modifier::empty()),
                    OutputStyle::System => ("", Color::Cyan, Modifier::ITALIC),
                };
                Line::from(Span::styled(
                    format!("{prefix}{}", ol.text),
                    Style::default().fg(color).add_modifier(modifier),
                ))
            })
            .collect();

        let inner_width = area.width.saturating_sub(2) as usize;
        let total_wrapped: u16 = lines
            .iter()
            .map(|l| {
                if inner_width == 0 {
                    1
                } else {
                    l.width().max(1).div_ceil(inner_width) as u16
                }
            })
            .sum();
        let visible_height = area.height.saturating_sub(2);
        let max_scroll = total_wrapped.saturating_sub(visible_height);
        let scroll = max_scroll.saturating_sub(self.output_scroll);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Office Escape ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_sidebar(&self, frame: &mut Frame, area: Rect) {
        let game = self.session.game();
        let mut items: Vec<ListItem> = Vec::new();

        let heading = |text: &str| {
            ListItem::new(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(Color::Yellow).bold(),
            )))
        };

        items.push(heading("Room"));
        items.push(ListItem::new(format!("  {}", game.player().location())));
        if let Some(puzzle) = game.open_puzzle() {
            items.push(heading("Puzzle"));
            items.push(ListItem::new(format!("  {}", puzzle.description())));
        }

        items.push(heading("Carrying"));
        if game.player().inventory.is_empty() {
            items.push(ListItem::new("  (nothing)"));
        }
        for name in game.player().inventory.names() {
            items.push(ListItem::new(format!("  {name}")));
        }

        if let Ok(room) = game.current_room() {
            items.push(heading("Lying here"));
            if room.inventory.is_empty() {
                items.push(ListItem::new("  (nothing)"));
            }
            for name in room.inventory.names() {
                items.push(ListItem::new(format!("  {name}")));
            }
        }

        let list = List::new(items).block(
            Block::default()
                .title(format!(" {} ", game.player().name()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(list, area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(format!("> {}", self.input_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(input, area);

        let cursor_x = area.x + 1 + 2 + self.input_text[..self.input_cursor].chars().count() as u16;
        let cursor_y = area.y + 1;
        if cursor_x < area.x + area.width - 1 {
            frame.set_cursor_position(Position::new(cursor_x, cursor_y));
        }
    }
}
