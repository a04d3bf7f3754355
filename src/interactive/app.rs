//! TUI application state and logic

use crate::game::{GameConfig, GameEngine, Phase, Rejection, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Show the secret word in clear while it is being typed
    pub reveal_secret: bool,
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
    pub fn new(config: GameConfig) -> Self {
        let mut app = Self {
            engine: GameEngine::new(config),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            reveal_secret: false,
        };
        app.add_message(
            "Player one: type the secret word and press Enter.",
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press to the game
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.engine.phase() {
            Phase::Setting => self.handle_setting_key(key.code),
            phase if phase.is_over() => self.handle_game_over_key(key.code),
            _ => self.handle_playing_key(key.code),
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
            KeyCode::Char('q' | 'Q') => self.should_quit = true,
            _ => {
                // Game over: only new game or quit
            }
        }
    }

    fn handle_setting_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                let next = format!("{}{c}", self.engine.target_word());
                // Keys outside the alphabet are filtered out, like a controlled input
                let _ = self.engine.set_target_word(&next);
            }
            KeyCode::Backspace => {
                let mut next = self.engine.target_word().to_string();
                next.pop();
                let _ = self.engine.set_target_word(&next);
            }
            KeyCode::Tab => self.reveal_secret = !self.reveal_secret,
            KeyCode::Enter => match self.engine.start_game() {
                Ok(len) => {
                    self.reveal_secret = false;
                    self.add_message(
                        &format!("Secret word locked in: {len} letters. Player two, start guessing!"),
                        MessageStyle::Success,
                    );
                }
                Err(_) => {
                    self.add_message("Type at least one letter first!", MessageStyle::Error);
                }
            },
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                let _ = self.engine.push_letter(c);
            }
            KeyCode::Backspace => {
                let _ = self.engine.backspace();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    fn submit_guess(&mut self) {
        match self.engine.submit_guess() {
            Ok(Phase::Won) => {
                let guess_count = self.engine.guesses().len();
                self.stats.record(Phase::Won, guess_count);

                let celebration = match guess_count {
                    1 => "HOLE IN ONE! Extraordinary!",
                    2 => "MAGNIFICENT! Two guesses!",
                    3 => "SPLENDID! Three guesses!",
                    4 => "GREAT JOB! Four guesses!",
                    5 => "NICE WORK! Five guesses!",
                    _ => "PHEW! Got it!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
            }
            Ok(Phase::Lost) => {
                self.stats.record(Phase::Lost, self.engine.guesses().len());
                let text = format!("Game over. The word was: {}", self.engine.target_word());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
            }
            Ok(_) => {
                let left = self.engine.remaining_guesses();
                let text = format!("{left} {} left", if left == 1 { "try" } else { "tries" });
                self.add_message(&text, MessageStyle::Info);
            }
            Err(Rejection::IncompleteGuess { have, need }) => {
                self.add_message(
                    &format!("Guess needs {need} letters (has {have})"),
                    MessageStyle::Error,
                );
            }
            Err(rejection) => debug!(%rejection, "submit ignored"),
        }
    }

    pub fn new_game(&mut self) {
        self.engine.reset();
        self.reveal_secret = false;
        self.messages.clear();
        self.add_message(
            "New game! Player one: type the secret word and press Enter.",
            MessageStyle::Info,
        );
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
pub fn run_tui(app: App) -> Result<Statistics> {
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

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
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

    Ok(app.stats)
}
