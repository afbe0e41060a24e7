//! TUI (Terminal User Interface) front-ends for Wordle and Spelling Bee
//!
//! Both games render with Ratatui on a shared crossterm terminal.
//!
//! # Architecture
//! - `TerminalGuard`: raw mode + alternate screen, restored on drop
//! - `WordleView` / `BeeView`: plain state + rendering + key mapping, no terminal
//! - `WordleTui` / `BeeTui`: glue a view to a terminal and implement the game interfaces

use crate::cli::pattern_string;
use crate::error::{BeeError, GuessError};
use crate::game_state::{SpellingBeeInterface, UserAction, WordleInterface};
use crate::spelling_bee::{Honeycomb, SpellingBeeGame, Word};
use crate::wordle::{Feedback, GuessOutcome, MAX_GUESSES, Tile, WORD_LENGTH, WordleGame};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const MAX_BEE_INPUT: usize = 20;
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const INSTRUCTION_STYLE: Style = Style::new().fg(Color::Gray);

/// (background, foreground) for a tile or key.
fn feedback_colors(feedback: Option<Feedback>, has_letter: bool) -> (Color, Color) {
    match feedback {
        Some(Feedback::Correct) => (Color::Green, Color::Black),
        Some(Feedback::Present) => (Color::Yellow, Color::Black),
        Some(Feedback::Absent) => (Color::Gray, Color::White),
        None if has_letter => (Color::DarkGray, Color::White),
        None => (Color::Reset, Color::DarkGray),
    }
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_new_game_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('n' | 'N'))
}

/// Wait briefly for a key press.
///
/// Non-key events, key releases and the garbage characters some terminals
/// emit on focus changes are dropped.
fn next_key() -> io::Result<Option<KeyEvent>> {
    if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if let KeyCode::Char(c) = key.code
                && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
            {
                debug_log!("next_key() - Ignoring invalid character: {:?}", c);
                return Ok(None);
            }
            Ok(Some(key))
        }
        other => {
            debug_log!("next_key() - Ignoring event: {:?}", other);
            Ok(None)
        }
    }
}

/// Owns the terminal while a full-screen game is running.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TerminalGuard::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");
        Ok(Self { terminal })
    }

    fn draw<F: FnOnce(&mut Frame)>(&mut self, render: F) -> Result<(), io::Error> {
        self.terminal.draw(render)?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new(title)
        .style(HEADER_STYLE)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, area: Rect, status: &str, message: &str, error_message: &str) {
    let mut lines = Vec::new();
    if !message.is_empty() {
        lines.push(Line::from(Span::styled(message, MESSAGE_STYLE)));
    }
    if !error_message.is_empty() {
        lines.push(Line::from(Span::styled(error_message, ERROR_STYLE)));
    }
    let title = if status.is_empty() { "Status" } else { status };
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, text: &str) {
    let paragraph = Paragraph::new(text)
        .style(INSTRUCTION_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

// Wordle

/// Everything the Wordle screen shows, kept apart from the terminal.
#[derive(Debug, Default)]
struct WordleView {
    game: Option<WordleGame>,
    message: String,
    error_message: String,
    status: String,
}

impl WordleView {
    fn is_over(&self) -> bool {
        self.game.as_ref().is_some_and(|game| game.status().is_over())
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                            // Title
                Constraint::Length((MAX_GUESSES * 2 + 1) as u16), // Board
                Constraint::Length(5),                            // Keyboard
                Constraint::Min(4),                               // Messages
                Constraint::Length(3),                            // Instructions
            ])
            .split(f.area());

        render_title(f, chunks[0], "WORDLE");
        self.render_board(f, chunks[1]);
        self.render_keyboard(f, chunks[2]);
        render_messages(f, chunks[3], &self.status, &self.message, &self.error_message);
        let instructions = if self.is_over() {
            "N: New game | ESC: Quit"
        } else {
            "Type a 5-letter word | ENTER: Submit | BACKSPACE: Delete | CTRL+N: New game | ESC: Quit"
        };
        render_instructions(f, chunks[4], instructions);
    }

    fn render_board(&self, f: &mut Frame, area: Rect) {
        let empty = [[Tile::default(); WORD_LENGTH]; MAX_GUESSES];
        let grid = self.game.as_ref().map_or(&empty, WordleGame::grid);

        let mut lines = Vec::with_capacity(MAX_GUESSES * 2);
        for row in grid {
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for tile in row {
                let (bg, fg) = feedback_colors(tile.feedback, tile.letter.is_some());
                let letter = tile.letter.unwrap_or('_');
                spans.push(Span::styled(format!(" {letter} "), Style::default().fg(fg).bg(bg)));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Guesses").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_keyboard(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .chars()
                    .map(|c| {
                        let feedback = self.game.as_ref().and_then(|game| game.keyboard().get(c));
                        let (bg, fg) = feedback_colors(feedback, true);
                        Span::styled(format!(" {c} "), Style::default().fg(fg).bg(bg))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Keyboard").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn key_to_action(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        debug_log!("WordleView::key_to_action() - {:?}", key.code);

        if key.code == KeyCode::Esc {
            return Some(UserAction::Exit);
        }
        if is_new_game_chord(&key) || (self.is_over() && matches!(key.code, KeyCode::Char('n' | 'N'))) {
            return Some(UserAction::NewGame);
        }
        if has_modifier_keys(&key) || self.is_over() {
            return None;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(UserAction::Letter(c)),
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            KeyCode::Backspace => Some(UserAction::Backspace),
            KeyCode::Enter => Some(UserAction::Submit),
            _ => None,
        }
    }
}

/// Full-screen Wordle front-end.
pub struct WordleTui {
    terminal: TerminalGuard,
    view: WordleView,
}

impl WordleTui {
    pub fn new() -> Result<Self, io::Error> {
        Ok(Self {
            terminal: TerminalGuard::new()?,
            view: WordleView::default(),
        })
    }

    fn draw_or_log(&mut self) {
        let view = &self.view;
        if let Err(e) = self.terminal.draw(|f| view.render(f)) {
            debug_log!("Draw error: {}", e);
        }
    }
}

impl WordleInterface for WordleTui {
    fn display_board(&mut self, game: &WordleGame) {
        self.view.status = format!("Guess {} of {MAX_GUESSES}", game.current_row() + 1);
        self.view.game = Some(game.clone());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            self.draw_or_log();
            match next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.view.key_to_action(key) {
                        info_log!("WordleTui::read_action() - {:?}", action);
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("WordleTui::read_action() - input error {}, exiting", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_rejection(&mut self, error: &GuessError) {
        self.view.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_outcome(&mut self, game: &WordleGame, outcome: &GuessOutcome) {
        self.view.message = format!("{}  {}", outcome.guess, pattern_string(&outcome.feedback));
        self.display_board(game);
    }

    fn display_game_over(&mut self, game: &WordleGame, message: &str) {
        self.view.game = Some(game.clone());
        self.view.message = message.to_string();
        self.view.status = "Game over".to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self) {
        self.view.message = "New game started.".to_string();
        self.view.error_message.clear();
    }

    fn display_exit_message(&mut self) {
        self.view.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

// Spelling Bee

/// Everything the Spelling Bee screen shows, kept apart from the terminal.
#[derive(Debug, Default)]
struct BeeView {
    honeycomb: Option<Honeycomb>,
    found: Vec<Word>,
    total_words: usize,
    total_pangrams: usize,
    input: String,
    message: String,
    error_message: String,
    status: String,
}

impl BeeView {
    fn sync(&mut self, game: &SpellingBeeGame) {
        self.honeycomb = Some(game.honeycomb().clone());
        self.found = game.found_words().to_vec();
        self.total_words = game.total_words();
        self.total_pangrams = game.total_pangrams();
        self.status = format!("Score: {}", game.score());
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(7), // Honeycomb
                Constraint::Length(3), // Entry
                Constraint::Min(6),    // Found words
                Constraint::Length(4), // Messages
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        render_title(f, chunks[0], "SPELLING BEE");
        self.render_honeycomb(f, chunks[1]);

        let entry = Paragraph::new(Line::from(vec![
            Span::raw("> "),
            Span::styled(self.input.to_uppercase(), SUCCESS_STYLE),
            Span::raw("_"),
        ]))
        .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(entry, chunks[2]);

        self.render_found(f, chunks[3]);
        render_messages(f, chunks[4], &self.status, &self.message, &self.error_message);
        render_instructions(
            f,
            chunks[5],
            "Type a word | ENTER: Submit | SPACE: Shuffle | CTRL+N: New puzzle | ESC: Quit",
        );
    }

    fn render_honeycomb(&self, f: &mut Frame, area: Rect) {
        let outer_style = Style::default().fg(Color::Black).bg(Color::Gray);
        let center_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let lines = match &self.honeycomb {
            Some(honeycomb) => {
                let cell = |c: char, style: Style| {
                    Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
                };
                let outer = honeycomb.outer();
                vec![
                    Line::from(vec![cell(outer[0], outer_style), Span::raw("   "), cell(outer[1], outer_style)]),
                    Line::from(""),
                    Line::from(vec![
                        cell(outer[2], outer_style),
                        Span::raw("   "),
                        cell(honeycomb.center(), center_style),
                        Span::raw("   "),
                        cell(outer[3], outer_style),
                    ]),
                    Line::from(""),
                    Line::from(vec![cell(outer[4], outer_style), Span::raw("   "), cell(outer[5], outer_style)]),
                ]
            }
            None => Vec::new(),
        };

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Honeycomb").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_found(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            format!(
                "You have found {} of {} words ({} pangrams)",
                self.found.len(),
                self.total_words,
                self.total_pangrams
            ),
            HEADER_STYLE,
        ))];
        for word in &self.found {
            let style = if word.is_pangram() {
                SUCCESS_STYLE
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(format!("  {word}"), style)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Found words").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn key_to_action(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        debug_log!("BeeView::key_to_action() - {:?}", key.code);

        if key.code == KeyCode::Esc {
            return Some(UserAction::Exit);
        }
        if is_new_game_chord(&key) {
            return Some(UserAction::NewGame);
        }
        if has_modifier_keys(&key) {
            return None;
        }

        match key.code {
            KeyCode::Enter => Some(UserAction::Guess(std::mem::take(&mut self.input))),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(' ') | KeyCode::Tab => Some(UserAction::Shuffle),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input.len() < MAX_BEE_INPUT {
                    self.input.push(c.to_ascii_lowercase());
                }
                None
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            _ => None,
        }
    }
}

/// Full-screen Spelling Bee front-end.
pub struct BeeTui {
    terminal: TerminalGuard,
    view: BeeView,
}

impl BeeTui {
    pub fn new() -> Result<Self, io::Error> {
        Ok(Self {
            terminal: TerminalGuard::new()?,
            view: BeeView::default(),
        })
    }

    fn draw_or_log(&mut self) {
        let view = &self.view;
        if let Err(e) = self.terminal.draw(|f| view.render(f)) {
            debug_log!("Draw error: {}", e);
        }
    }
}

impl SpellingBeeInterface for BeeTui {
    fn display_honeycomb(&mut self, game: &SpellingBeeGame) {
        self.view.sync(game);
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            self.draw_or_log();
            match next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.view.key_to_action(key) {
                        info_log!("BeeTui::read_action() - {:?}", action);
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("BeeTui::read_action() - input error {}, exiting", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_rejection(&mut self, error: &BeeError) {
        self.view.message.clear();
        self.view.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_accepted(&mut self, word: &Word, game: &SpellingBeeGame) {
        self.view.sync(game);
        self.view.message = if word.is_pangram() {
            format!("Pangram! {}", word.text().to_uppercase())
        } else {
            format!("Nice! {}", word.text().to_uppercase())
        };
        if game.is_complete() {
            self.view.message.push_str(" You found every word!");
        }
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, game: &SpellingBeeGame) {
        self.view.input.clear();
        self.view.error_message.clear();
        self.view.message = format!(
            "New puzzle: {} words to find, {} of them pangrams.",
            game.total_words(),
            game.total_pangrams()
        );
    }

    fn display_exit_message(&mut self) {
        self.view.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}
