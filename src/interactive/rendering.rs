//! TUI rendering with ratatui
//!
//! Board, lives gauge, alphabet and session panels for the game window.

use super::app::{App, MessageStyle, Screen};
use crate::core::Difficulty;
use crate::output::formatters::{ALPHABET, best_label};
use crate::round::{Round, Status};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};
use std::rc::Rc;
use std::time::Instant;

/// Letters per row of the alphabet panel
const LETTERS_PER_ROW: usize = 13;

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = root_layout(f.area());
    render_header(f, chunks[0]);

    let main_chunks = main_layout(chunks[1]);
    match (app.screen, app.round.as_ref()) {
        (Screen::Menu, _) | (_, None) => render_menu(f, app, main_chunks[0]),
        (_, Some(round)) => render_board(f, round, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn root_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(area)
}

fn main_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Session info
        ])
        .split(area)
}

fn board_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Word
            Constraint::Length(3), // Lives
            Constraint::Length(4), // Alphabet
        ])
        .split(area)
}

/// Letter drawn at a terminal cell of the board, if any
///
/// Mirrors the layout used by `ui`, so pointer clicks map to the same letters
/// the player sees.
#[must_use]
pub fn letter_at(frame: Rect, column: u16, row: u16) -> Option<u8> {
    let board = main_layout(root_layout(frame)[1])[0];
    let letters = board_layout(board)[2].inner(Margin::new(1, 1));
    if !letters.contains(Position::new(column, row)) {
        return None;
    }

    let offset = usize::from(column - letters.x);
    if offset % 2 == 1 || offset / 2 >= LETTERS_PER_ROW {
        return None;
    }

    let index = usize::from(row - letters.y) * LETTERS_PER_ROW + offset / 2;
    ALPHABET.get(index).copied()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HANGMAN - Guess the word")
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

fn render_menu<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let config = app.session.config();

    let mut lines = vec![Line::from("Choose a difficulty:"), Line::from("")];
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let selected = *difficulty == config.difficulty;
        let marker = if selected { "▶" } else { " " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("  {marker} {}. {difficulty}", i + 1),
            style,
        )));
    }

    let timer = config.time_limit.map_or_else(
        || "off".to_string(),
        |limit| format!("{}s", limit.as_secs()),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(format!("  Timer: {timer}  (t to toggle)")));
    lines.push(Line::from(format!("  Max penalty: {}", config.max_penalty)));

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" New Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_board(f: &mut Frame, round: &Round, area: Rect) {
    let chunks = board_layout(area);

    render_word(f, round, chunks[0]);
    render_lives(f, round, chunks[1]);
    render_alphabet(f, round, chunks[2]);
}

fn render_word(f: &mut Frame, round: &Round, area: Rect) {
    let (text, color) = match round.status() {
        Status::InProgress => (round.masked(), Color::White),
        Status::Won => (spaced(round.secret().text()), Color::Green),
        Status::Lost => (spaced(round.secret().text()), Color::Red),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            text.to_uppercase(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} letters", round.secret().len())),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn spaced(word: &str) -> String {
    word.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_lives(f: &mut Frame, round: &Round, area: Rect) {
    let remaining = round.remaining_lives();
    let max = round.max_penalty().max(1);
    let percent = u16::try_from(u64::from(remaining) * 100 / u64::from(max)).unwrap_or(100);

    let color = match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent.min(100))
        .label(format!(
            "{remaining}/{} | penalty {}",
            round.max_penalty(),
            round.penalty()
        ));
    f.render_widget(gauge, area);
}

fn render_alphabet(f: &mut Frame, round: &Round, area: Rect) {
    let lines: Vec<Line> = ALPHABET
        .chunks(LETTERS_PER_ROW)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&letter| {
                    let style = if !round.has_used(letter) {
                        Style::default().fg(Color::White)
                    } else if round.secret().has_letter(letter) {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    };
                    Span::styled(
                        format!("{} ", char::from(letter).to_ascii_uppercase()),
                        style,
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters (click to guess) ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Round stats
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let attempts = app.round.as_ref().map_or(0, Round::attempts);
    let time = app
        .time_left(Instant::now())
        .map_or_else(|| "-".to_string(), |left| format!("{}s", left.as_secs()));

    let content = vec![
        Line::from(vec![
            Span::raw("Attempts:   "),
            Span::styled(
                attempts.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Best:       {}", best_label(app.best))),
        Line::from(format!("Difficulty: {}", app.session.config().difficulty)),
        Line::from(format!("Time left:  {time}")),
        Line::from(format!(
            "Won:        {}/{}",
            app.session.stats().rounds_won,
            app.session.stats().rounds_played
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
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

    let block = Block::default().title(" Messages ").borders(Borders::ALL);
    let messages_list = List::new(messages).block(block);
    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, content, color) = match app.screen {
        Screen::Menu => (" Press Enter to start ", "", Color::Cyan),
        Screen::Playing => (
            " Enter a letter or a word | ? for a hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        Screen::Finished => (
            " Enter: new round | m: menu | q: quit ",
            "",
            Color::Green,
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

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.screen {
        Screen::Menu => "Mode: Menu",
        Screen::Playing => "Mode: Playing",
        Screen::Finished => "Mode: Round over",
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!("Win Rate: {:.0}%", app.session.stats().win_rate());
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.screen {
        Screen::Menu => "1-3/e/m/h: Difficulty | t: Timer | Enter: Start | q: Quit",
        Screen::Playing => "Enter: Submit | ?: Hint | Esc: Quit",
        Screen::Finished => "Enter: Again | m: Menu | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
