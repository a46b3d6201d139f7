//! TUI application state and logic

use crate::game::{Game, GameStatus, Input, InputOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub share_text: Option<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        let config = game.config();
        Self {
            game,
            messages: vec![
                Message {
                    text: format!(
                        "Guess the {}-letter word in {} tries.",
                        config.word_length, config.max_guesses
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Esc to quit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            share_text: None,
            should_quit: false,
        }
    }

    /// React to a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.share(),
            KeyCode::Char(c) => {
                self.apply(Input::Letter(c));
            }
            KeyCode::Backspace => {
                self.apply(Input::Backspace);
            }
            KeyCode::Enter => {
                self.apply(Input::Submit);
            }
            _ => {}
        }
    }

    fn apply(&mut self, input: Input) {
        match self.game.handle(input) {
            InputOutcome::Submitted { row, status, .. } => match status {
                GameStatus::Won => {
                    let guesses = row + 1;
                    let celebration = match guesses {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Solved it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press TAB to share, Esc to quit.", MessageStyle::Info);
                }
                GameStatus::Lost => {
                    let text = format!(
                        "Out of guesses! The word was {}",
                        self.game.answer().text().to_uppercase()
                    );
                    self.add_message(&text, MessageStyle::Error);
                }
                GameStatus::InProgress => {}
            },
            InputOutcome::InvalidWord(word) => {
                let text = format!("Invalid word: {}", word.text().to_uppercase());
                self.add_message(&text, MessageStyle::Error);
            }
            InputOutcome::Applied | InputOutcome::Ignored => {}
        }
    }

    /// Reveal the share summary once the puzzle is solved
    pub fn share(&mut self) {
        if let Some(summary) = self.game.share() {
            self.share_text = Some(summary.to_string());
            self.add_message("Share summary ready.", MessageStyle::Success);
        } else {
            self.add_message("Solve the puzzle first!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
