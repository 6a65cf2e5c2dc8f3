//! Main TUI application state and logic

use crate::algorithms::Registry;
use crate::engine::{SortDriver, StepEvent, StepResult, StepStats};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::seq::SliceRandom;
use rand::thread_rng;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    backend::Backend,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const MIN_TICK: Duration = Duration::from_millis(1);
const MAX_TICK: Duration = Duration::from_millis(1024);

/// The main application state
pub struct App {
    /// Algorithm names in menu order
    names: Vec<&'static str>,

    /// Menu cursor
    selected: usize,

    /// Number of elements in a freshly shuffled array
    size: usize,

    /// Time between auto-play steps
    tick: Duration,

    /// The idle array shown when no sort is running
    values: Vec<u32>,

    /// The in-flight sort, if any
    driver: Option<SortDriver>,

    /// Last applied step event, for bar highlighting
    last_event: Option<StepEvent>,

    /// Counters from the current or most recent sort
    last_stats: StepStats,

    /// Whether the most recent sort ran to completion
    done: bool,

    /// Whether the app should quit
    should_quit: bool,

    /// Status message to display
    status_message: String,

    /// Whether auto-play mode is active
    is_playing: bool,

    /// Last time a step was taken in play mode
    last_step_time: Instant,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app with a freshly shuffled array of `size` elements.
    pub fn new(size: usize, tick: Duration) -> Self {
        App {
            names: Registry::names().collect(),
            selected: 0,
            size,
            tick: tick.clamp(MIN_TICK, MAX_TICK),
            values: shuffled_values(size),
            driver: None,
            last_event: None,
            last_stats: StepStats::default(),
            done: false,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_step_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_step_time.elapsed() >= self.tick {
                self.step_once();
                self.last_step_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(5))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Menu and bars side by side, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(0)])
            .split(main_chunks[0]);

        let running = self.driver.as_ref().map(|d| d.algorithm());

        super::panes::render_menu_pane(frame, columns[0], &self.names, self.selected, running);

        let title = running.unwrap_or("Shuffled");
        super::panes::render_bars_pane(
            frame,
            columns[1],
            self.current_values(),
            self.last_event,
            self.done,
            title,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.last_stats,
            self.tick,
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + self.names.len() - 1) % self.names.len();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % self.names.len();
            }
            KeyCode::Enter => {
                self.start_sort();
            }
            KeyCode::Char('r') => {
                // Cancel any in-flight sort and reshuffle
                self.reshuffle();
                self.status_message = String::from("Shuffled");
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.driver.is_some() {
                        self.is_playing = !self.is_playing;
                        self.status_message = if self.is_playing {
                            String::from("Playing...")
                        } else {
                            String::from("Paused")
                        };
                    }
                }
            }
            KeyCode::Right => {
                // Single-step while paused
                if self.driver.is_some() && !self.is_playing {
                    self.step_once();
                    if self.driver.is_some() {
                        self.status_message = String::from("Stepped");
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.tick = (self.tick / 2).clamp(MIN_TICK, MAX_TICK);
            }
            KeyCode::Char('-') => {
                self.tick = (self.tick * 2).clamp(MIN_TICK, MAX_TICK);
            }
            _ => {}
        }
    }

    /// Reshuffle and start the selected algorithm
    fn start_sort(&mut self) {
        self.reshuffle();
        let name = self.names[self.selected];
        match SortDriver::start(name, self.values.clone()) {
            Ok(driver) => {
                self.driver = Some(driver);
                self.is_playing = true;
                self.last_step_time = Instant::now();
                self.status_message = format!("Sorting with {}...", name);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Apply one step of the in-flight sort
    fn step_once(&mut self) {
        let Some(driver) = self.driver.as_mut() else {
            return;
        };
        match driver.advance() {
            Ok(StepResult::Applied(event)) => {
                self.last_event = Some(event);
                self.last_stats = driver.stats();
            }
            Ok(StepResult::Finished) => {
                self.last_stats = driver.stats();
                self.values = driver.values().to_vec();
                self.driver = None;
                self.last_event = None;
                self.done = true;
                self.is_playing = false;
                self.status_message = format!(
                    "Sorted {} values in {} ticks",
                    self.values.len(),
                    self.last_stats.ticks
                );
            }
            Err(e) => {
                self.values = driver.values().to_vec();
                self.driver = None;
                self.last_event = None;
                self.is_playing = false;
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Discard any in-flight sort and randomize the array
    fn reshuffle(&mut self) {
        self.driver = None;
        self.is_playing = false;
        self.done = false;
        self.last_event = None;
        self.last_stats = StepStats::default();
        self.values = shuffled_values(self.size);
    }

    /// The live array: the driver's while a sort is running, the idle copy
    /// otherwise.
    fn current_values(&self) -> &[u32] {
        match self.driver.as_ref() {
            Some(driver) => driver.values(),
            None => &self.values,
        }
    }
}

/// Evenly spaced values in random order, like a freshly shuffled deck.
fn shuffled_values(size: usize) -> Vec<u32> {
    let mut values: Vec<u32> = (1..=size as u32).map(|v| v * 4).collect();
    values.shuffle(&mut thread_rng());
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffled_values_are_a_permutation() {
        let mut values = shuffled_values(32);
        values.sort_unstable();
        let expected: Vec<u32> = (1..=32).map(|v| v * 4).collect();
        assert_eq!(values, expected);
    }
}
