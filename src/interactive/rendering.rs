//! TUI rendering with ratatui
//!
//! Guess grid, input line and on-screen keyboard for the hotseat game.

use super::app::{App, MessageStyle};
use crate::core::{ALPHABET, LetterClass};
use crate::game::Phase;
use crate::output::formatters::masked;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Keys per on-screen keyboard row
const KEYBOARD_COLUMNS: usize = 9;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let max_guesses = app.engine.config().max_guesses as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(max_guesses + 2), // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages and stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

/// Tile style for a letter with the given classification
#[must_use]
pub fn tile_style(class: Option<LetterClass>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match class {
        Some(LetterClass::Exact) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterClass::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterClass::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White).bg(Color::Black),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HOTSEAT WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    if app.engine.phase() == Phase::Setting {
        render_setup_help(f, app, area);
        return;
    }

    let grid_height = app.engine.config().max_guesses as u16 + 2;
    let keyboard_height = ALPHABET.len().div_ceil(KEYBOARD_COLUMNS) as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(grid_height),
            Constraint::Length(keyboard_height),
            Constraint::Min(0),
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_setup_help(f: &mut Frame, app: &App, area: Rect) {
    let config = app.engine.config();
    let content = vec![
        Line::from("Player one picks the secret word."),
        Line::from(format!(
            "Up to {} letters, A-Z and Ñ. Anything else is ignored.",
            config.max_word_length
        )),
        Line::from(""),
        Line::from(format!(
            "Player two then gets {} tries to guess it.",
            config.max_guesses
        )),
        Line::from(vec![
            Span::styled(" A ", tile_style(Some(LetterClass::Exact))),
            Span::raw(" right place  "),
            Span::styled(" B ", tile_style(Some(LetterClass::Present))),
            Span::raw(" elsewhere  "),
            Span::styled(" C ", tile_style(Some(LetterClass::Absent))),
            Span::raw(" not in word"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" How to play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let word_length = engine.word_length();
    let mut rows: Vec<Line> = engine
        .history()
        .map(|(guess, feedback)| {
            let spans = guess
                .letters()
                .iter()
                .zip(feedback.classes())
                .flat_map(|(&letter, &class)| {
                    [
                        Span::styled(format!(" {letter} "), tile_style(Some(class))),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    if engine.phase() == Phase::Playing {
        let typed: Vec<char> = engine.current_guess().chars().collect();
        let spans = (0..word_length)
            .flat_map(|i| {
                let text = typed
                    .get(i)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                [Span::styled(text, tile_style(None)), Span::raw(" ")]
            })
            .collect::<Vec<_>>();
        rows.push(Line::from(spans));
    }

    while rows.len() < engine.config().max_guesses {
        let spans = (0..word_length)
            .flat_map(|_| {
                [
                    Span::styled("   ", Style::default().bg(Color::Black)),
                    Span::raw(" "),
                ]
            })
            .collect::<Vec<_>>();
        rows.push(Line::from(spans));
    }

    let grid = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guesses ({word_length} letters) "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Line> = ALPHABET
        .chunks(KEYBOARD_COLUMNS)
        .map(|row| {
            let spans = row
                .iter()
                .flat_map(|&letter| {
                    [
                        Span::styled(format!(" {letter} "), tile_style(app.engine.letter_hint(letter))),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut content = vec![
        Line::from(format!(
            "Played: {}  Won: {}  Win rate: {:.0}%",
            stats.games_played,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak: {}  Best: {}",
            stats.current_streak, stats.best_streak
        )),
    ];

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        // Scale bars to 12 cells
        let width = if most == 0 { 0 } else { count * 12 / most };
        content.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let (title, content, color) = match engine.phase() {
        Phase::Setting => {
            let shown = if app.reveal_secret {
                engine.target_word().to_string()
            } else {
                masked(engine.word_length())
            };
            (
                " Secret Word | Enter to start | TAB to show/hide ".to_string(),
                shown,
                Color::Cyan,
            )
        }
        Phase::Playing => (
            format!(
                " Guess {}/{} | Enter to submit{} ",
                engine.guesses().len() + 1,
                engine.config().max_guesses,
                if engine.config().backspace {
                    " | Backspace to delete"
                } else {
                    ""
                }
            ),
            engine.current_guess().to_string(),
            Color::Yellow,
        ),
        Phase::Won => (
            " CONGRATULATIONS! | Press 'n' for new game or Esc to quit ".to_string(),
            format!("You guessed the word: {}", engine.target_word()),
            Color::Green,
        ),
        Phase::Lost => (
            " GAME OVER | Press 'n' for new game or Esc to quit ".to_string(),
            format!("The word was: {}", engine.target_word()),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let phase = app.engine.phase();
    let mode = Paragraph::new(format!("Phase: {phase}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let tries_text = if phase == Phase::Setting {
        format!("Tries: {}", app.engine.config().max_guesses)
    } else {
        format!("Tries left: {}", app.engine.remaining_guesses())
    };
    let tries = Paragraph::new(tries_text).alignment(Alignment::Center);
    f.render_widget(tries, chunks[1]);

    let help_text = match phase {
        Phase::Setting => "Esc: Quit | Enter: Start | TAB: Show secret",
        Phase::Playing if app.engine.config().backspace => {
            "Esc: Quit | Enter: Submit | Backspace: Delete"
        }
        Phase::Playing => "Esc: Quit | Enter: Submit",
        Phase::Won | Phase::Lost => "Esc: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn setting_screen_masks_secret() {
        let mut app = App::new(GameConfig::default());
        type_str(&mut app, "raton");
        let screen = draw(&app);

        assert!(screen.contains("HOTSEAT WORDLE"));
        assert!(screen.contains("How to play"));
        assert!(screen.contains("•••••"));
        assert!(!screen.contains("RATON"));

        press(&mut app, KeyCode::Tab);
        assert!(draw(&app).contains("RATON"));
    }

    #[test]
    fn playing_screen_shows_guesses_and_keyboard() {
        let mut app = App::new(GameConfig::default());
        type_str(&mut app, "raton");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "ratas");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "pe");
        let screen = draw(&app);

        assert!(screen.contains("Guesses (5 letters)"));
        assert!(screen.contains(" R   A   T   A   S "));
        assert!(screen.contains(" P   E   _   _   _ "));
        assert!(screen.contains(" Ñ "));
        assert!(screen.contains("Guess 2/5"));
        assert!(screen.contains("Tries left: 4"));
    }

    #[test]
    fn backspace_help_follows_config() {
        let mut app = App::new(GameConfig::default());
        type_str(&mut app, "sol");
        press(&mut app, KeyCode::Enter);
        let screen = draw(&app);
        assert!(screen.contains("Enter to submit | Backspace to delete"));
        assert!(screen.contains("Backspace: Delete"));

        let mut app = App::new(GameConfig::new().with_backspace(false));
        type_str(&mut app, "sol");
        press(&mut app, KeyCode::Enter);
        let screen = draw(&app);
        assert!(screen.contains("Guess 1/5 | Enter to submit"));
        assert!(screen.contains("Esc: Quit | Enter: Submit"));
        assert!(!screen.contains("Backspace"));
    }

    #[test]
    fn won_screen_reveals_word() {
        let mut app = App::new(GameConfig::default());
        type_str(&mut app, "sol");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "sol");
        press(&mut app, KeyCode::Enter);
        let screen = draw(&app);

        assert!(screen.contains("CONGRATULATIONS!"));
        assert!(screen.contains("You guessed the word: SOL"));
        assert!(screen.contains("Played: 1  Won: 1  Win rate: 100%"));
    }

    #[test]
    fn tile_styles_by_class() {
        assert_eq!(tile_style(Some(LetterClass::Exact)).bg, Some(Color::Green));
        assert_eq!(tile_style(Some(LetterClass::Present)).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Some(LetterClass::Absent)).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(None).bg, Some(Color::Black));
    }
}
