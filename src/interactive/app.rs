//! TUI application state and logic

use super::rendering::letter_at;
use crate::core::Difficulty;
use crate::ledger::RecordOutcome;
use crate::round::{DEFAULT_TIME_LIMIT, Outcome, Round, Session, Status};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How often the event loop wakes up to refresh the timer
const TICK_RATE: Duration = Duration::from_millis(200);

const MAX_MESSAGES: usize = 5;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Finished,
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

impl MessageStyle {
    const fn for_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::LetterFound { .. } | Outcome::WordFound | Outcome::HintRevealed { .. } => {
                Self::Success
            }
            Outcome::WrongLetter { .. } | Outcome::WrongWord { .. } | Outcome::TimeExpired => {
                Self::Error
            }
            Outcome::InvalidInput | Outcome::RoundFinished | Outcome::AlreadyTried(_) => Self::Info,
        }
    }
}

/// Application state
pub struct App<R: Rng> {
    pub session: Session<R>,
    pub screen: Screen,
    pub round: Option<Round>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub started: Option<Instant>,
    pub last_record: Option<RecordOutcome>,
    pub best: Option<u32>,
    pub should_quit: bool,
}

impl<R: Rng> App<R> {
    /// Create the app on the menu screen
    ///
    /// # Errors
    ///
    /// Returns an error if the score ledger cannot be read.
    pub fn new(session: Session<R>) -> Result<Self> {
        let best = session
            .best_attempts()
            .context("failed to read the score ledger")?;

        let mut app = Self {
            session,
            screen: Screen::Menu,
            round: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            started: None,
            last_record: None,
            best,
            should_quit: false,
        };
        app.add_message(
            "Welcome! Pick a difficulty and press Enter.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Time left in the current round, `None` without a time limit
    #[must_use]
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        let limit = self.session.config().time_limit?;
        let started = self.started?;
        Some(limit.saturating_sub(now.saturating_duration_since(started)))
    }

    /// Draw a secret and switch to the playing screen
    ///
    /// # Errors
    ///
    /// Returns an error if no word can be drawn.
    pub fn start_round(&mut self) -> Result<()> {
        let round = self.session.new_round()?;
        let text = format!(
            "New round: {} letters ({} difficulty)",
            round.secret().len(),
            self.session.config().difficulty
        );

        self.round = Some(round);
        self.started = Some(Instant::now());
        self.last_record = None;
        self.input_buffer.clear();
        self.screen = Screen::Playing;
        self.add_message(&text, MessageStyle::Info);
        Ok(())
    }

    /// Enforce the time limit
    ///
    /// # Errors
    ///
    /// Returns an error if the lost round cannot be settled.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if self.screen != Screen::Playing || self.time_left(now) != Some(Duration::ZERO) {
            return Ok(());
        }

        if let Some(round) = self.round.as_mut() {
            let outcome = round.force_loss();
            self.report(&outcome);
        }
        self.finish_round()
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a round cannot be started or the ledger update fails.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(code),
            Screen::Playing => self.handle_playing_key(code),
            Screen::Finished => self.handle_finished_key(code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => {
                let limit = match self.session.config().time_limit {
                    Some(_) => None,
                    None => Some(DEFAULT_TIME_LIMIT),
                };
                self.session.set_time_limit(limit);
                let text = match limit {
                    Some(limit) => format!("Timer on: {}s per round", limit.as_secs()),
                    None => "Timer off".to_string(),
                };
                self.add_message(&text, MessageStyle::Info);
            }
            KeyCode::Char(c) => {
                if let Some(difficulty) = Difficulty::from_name(&c.to_string()) {
                    self.session.set_difficulty(difficulty);
                    self.add_message(&format!("Difficulty: {difficulty}"), MessageStyle::Info);
                }
            }
            KeyCode::Enter => self.start_round()?,
            _ => {}
        }
        Ok(())
    }

    fn handle_playing_key(&mut self, code: KeyCode) -> Result<()> {
        // Input arriving after the deadline is not applied
        self.tick(Instant::now())?;
        if self.screen != Screen::Playing {
            return Ok(());
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => {
                if let Some(round) = self.round.as_mut() {
                    let outcome = self.session.hint(round);
                    self.report(&outcome);
                }
                self.finish_if_over()?;
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.input_buffer.push(c.to_ascii_lowercase());
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input_buffer);
                self.submit(&input)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a left click at a terminal cell
    ///
    /// Clicking a letter on the board guesses it, like typing it and pressing Enter.
    /// A click anywhere on the finished screen starts the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round cannot be started or the ledger update fails.
    pub fn handle_click(&mut self, column: u16, row: u16, frame: Rect) -> Result<()> {
        match self.screen {
            Screen::Menu => return Ok(()),
            Screen::Finished => return self.start_round(),
            Screen::Playing => {}
        }
        let Some(letter) = letter_at(frame, column, row) else {
            return Ok(());
        };

        self.tick(Instant::now())?;
        if self.screen != Screen::Playing {
            return Ok(());
        }
        self.submit(&char::from(letter).to_string())
    }

    fn submit(&mut self, input: &str) -> Result<()> {
        if let Some(round) = self.round.as_mut() {
            let outcome = round.submit_guess(input);
            debug!(?outcome, "guess submitted");
            self.report(&outcome);
        }
        self.finish_if_over()
    }

    fn handle_finished_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('m') => {
                self.screen = Screen::Menu;
                self.add_message(
                    "Pick a difficulty and press Enter.",
                    MessageStyle::Info,
                );
            }
            KeyCode::Enter | KeyCode::Char('n') => self.start_round()?,
            _ => {}
        }
        Ok(())
    }

    fn report(&mut self, outcome: &Outcome) {
        self.add_message(&outcome.to_string(), MessageStyle::for_outcome(outcome));
    }

    fn finish_if_over(&mut self) -> Result<()> {
        if self.round.as_ref().is_some_and(Round::is_finished) {
            self.finish_round()?;
        }
        Ok(())
    }

    fn finish_round(&mut self) -> Result<()> {
        let Some(round) = self.round.as_ref() else {
            return Ok(());
        };

        let record = self
            .session
            .settle(round)
            .context("failed to update the score ledger")?;

        let (text, style) = match (round.status(), record) {
            (Status::Won, Some(RecordOutcome::NewBest { .. })) => (
                format!("🏆 Best ever! {} attempts", round.attempts()),
                MessageStyle::Success,
            ),
            (Status::Won, _) => (
                format!("🎉 You win! {} attempts", round.attempts()),
                MessageStyle::Success,
            ),
            _ => (
                format!("Game over! The word was '{}'", round.secret()),
                MessageStyle::Error,
            ),
        };

        self.last_record = record;
        self.best = self.session.best_attempts()?;
        self.screen = Screen::Finished;
        self.started = None;
        self.add_message(&text, style);
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code, key.modifiers)?;
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let frame = Rect::new(0, 0, size.width, size.height);
                    app.handle_click(mouse.column, mouse.row, frame)?;
                }
                _ => {}
            }
        }

        app.tick(Instant::now())?;

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ScoreLedger;
    use crate::round::RoundConfig;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn app(config: RoundConfig) -> (TempDir, App<StdRng>) {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new(
            words_from_slice(&["cat"]),
            config,
            ScoreLedger::new(dir.path().join("best_scores")),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        (dir, App::new(session).unwrap())
    }

    fn press(app: &mut App<StdRng>, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE).unwrap();
    }

    fn type_line(app: &mut App<StdRng>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn menu_selects_difficulty_and_timer() {
        let (_dir, mut app) = app(RoundConfig::default());

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.config().difficulty, Difficulty::Hard);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.session.config().difficulty, Difficulty::Easy);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session.config().time_limit, Some(DEFAULT_TIME_LIMIT));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session.config().time_limit, None);
        assert_eq!(app.screen, Screen::Menu);
    }

    #[test]
    fn winning_round_moves_to_finished() {
        let (_dir, mut app) = app(RoundConfig::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Playing);

        type_line(&mut app, "z");
        type_line(&mut app, "cat");

        assert_eq!(app.screen, Screen::Finished);
        assert_eq!(
            app.last_record,
            Some(RecordOutcome::NewBest { previous: None })
        );
        assert_eq!(app.best, Some(2));
        assert!(app.messages.iter().any(|m| m.text.contains("Best ever!")));
    }

    #[test]
    fn buffer_takes_letters_only() {
        let (_dir, mut app) = app(RoundConfig::default());
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_buffer, "ca");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "c");
    }

    #[test]
    fn empty_submission_is_invalid() {
        let (_dir, mut app) = app(RoundConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Please enter letters only.");
        assert_eq!(app.round.as_ref().unwrap().attempts(), 0);
    }

    #[test]
    fn hint_key_costs_attempts() {
        let (_dir, mut app) = app(RoundConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('?'));

        let round = app.round.as_ref().unwrap();
        assert_eq!(round.attempts(), 2);
        assert_eq!(round.unrevealed_positions().len(), 2);
    }

    #[test]
    fn loss_offers_menu_and_replay() {
        let (_dir, mut app) = app(RoundConfig::default().with_max_penalty(5));
        press(&mut app, KeyCode::Enter);
        type_line(&mut app, "dog");

        assert_eq!(app.screen, Screen::Finished);
        assert_eq!(app.last_record, None);
        assert_eq!(app.best, None);

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.screen, Screen::Menu);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.round.as_ref().unwrap().attempts(), 0);
    }

    #[test]
    fn expired_timer_ends_round() {
        let config = RoundConfig::default().with_time_limit(Some(Duration::ZERO));
        let (_dir, mut app) = app(config);
        press(&mut app, KeyCode::Enter);
        app.tick(Instant::now()).unwrap();

        assert_eq!(app.screen, Screen::Finished);
        assert_eq!(app.round.as_ref().unwrap().status(), Status::Lost);
        assert!(app.messages.iter().any(|m| m.text == "Time's up!"));
    }

    #[test]
    fn late_input_is_ignored() {
        let config = RoundConfig::default().with_time_limit(Some(Duration::ZERO));
        let (_dir, mut app) = app(config);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));

        assert_eq!(app.screen, Screen::Finished);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.round.as_ref().unwrap().status(), Status::Lost);
    }

    #[test]
    fn clicking_a_letter_guesses_it() {
        let (_dir, mut app) = app(RoundConfig::default());
        let frame = Rect::new(0, 0, 100, 30);

        let (column, row) = (0..frame.height)
            .flat_map(|row| (0..frame.width).map(move |column| (column, row)))
            .find(|&(column, row)| letter_at(frame, column, row) == Some(b'z'))
            .unwrap();

        app.handle_click(column, row, frame).unwrap();
        assert!(app.round.is_none());

        press(&mut app, KeyCode::Enter);
        app.handle_click(column, row, frame).unwrap();
        let round = app.round.as_ref().unwrap();
        assert!(round.has_used(b'z'));
        assert_eq!(round.penalty(), 1);

        app.handle_click(0, 0, frame).unwrap();
        assert_eq!(app.round.as_ref().unwrap().attempts(), 1);
    }

    #[test]
    fn click_after_round_starts_next() {
        let (_dir, mut app) = app(RoundConfig::default());
        let frame = Rect::new(0, 0, 100, 30);
        press(&mut app, KeyCode::Enter);
        type_line(&mut app, "cat");
        assert_eq!(app.screen, Screen::Finished);

        app.handle_click(0, 0, frame).unwrap();
        assert_eq!(app.screen, Screen::Playing);
        let round = app.round.as_ref().unwrap();
        assert_eq!(round.attempts(), 0);
        assert!(!round.is_finished());
        assert_eq!(app.session.stats().rounds_played, 1);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let (_dir, mut app) = app(RoundConfig::default());
        press(&mut app, KeyCode::Enter);
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let (_dir, mut app) = app(RoundConfig::default());
        for i in 0..8 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "m3");
    }
}
