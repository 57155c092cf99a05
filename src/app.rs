use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::game::Game;
use crate::highscore::HighScoreFile;
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use std::collections::VecDeque;
use std::io;
use std::time::Instant;

#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    high_score_file: HighScoreFile,
    /// Errors to show to the user, one at a time.  The game is paused while
    /// any are pending.
    warnings: VecDeque<Warning>,
    next_tick: Option<Instant>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    /// Set up a new game, loading the high score from the file named in
    /// `config`.  A high score that cannot be loaded counts as zero, and the
    /// error is queued for display.
    pub(crate) fn new(config: &Config, rng: R, mut warnings: VecDeque<Warning>) -> App<R> {
        let high_score_file = config.high_score_file();
        let high_score = high_score_file.load().unwrap_or_else(|e| {
            warnings.push_back(Warning::from(e));
            0
        });
        App {
            game: Game::new(high_score, rng),
            high_score_file,
            warnings,
            next_tick: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either the next tick or the next input event, whichever comes
    /// first, and handle it.  Once the game is over or a warning is showing,
    /// no ticks happen, and this just waits for input.
    fn process_input(&mut self) -> io::Result<()> {
        if self.ticking() {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + consts::TICK_PERIOD);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.next_tick = None;
                self.tick();
                return Ok(());
            }
        }
        self.handle_event(read()?);
        Ok(())
    }

    fn tick(&mut self) {
        if self.game.tick() {
            if let Err(e) = self.game.finish(&self.high_score_file) {
                self.warnings.push_back(Warning::from(e));
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            self.handle_command(cmd);
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        if let Some(warning) = self.warnings.front() {
            match warning.handle_command(cmd) {
                Some(WarningOutcome::Dismissed) => {
                    self.warnings.pop_front();
                }
                Some(WarningOutcome::Quit) => self.quitting = true,
                None => (),
            }
            return;
        }
        match cmd {
            Command::Quit | Command::Q | Command::Esc => self.quitting = true,
            Command::R if !self.game.running() => {
                self.game.handle_command(cmd);
                self.next_tick = None;
            }
            _ => self.game.handle_command(cmd),
        }
    }
}

impl<R> App<R> {
    fn ticking(&self) -> bool {
        self.game.running() && self.warnings.is_empty()
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.game.render(area, buf);
        if let Some(warning) = self.warnings.front() {
            warning.render(get_display_area(area), buf);
        }
    }
}
