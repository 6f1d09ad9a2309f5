//! Reader runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the Elm runtime boundary. The reducer in `update` stays pure and
//! returns effects; drawing and quitting happen here.
//!
//! ## Inbox Pattern
//!
//! The fake log ticker runs as a tokio task and sends `UiEvent::FakeLine`
//! into `inbox_tx`. Each frame the runtime drains `inbox_rx`, then polls the
//! terminal, so the reducer sees one serialized event stream.
//!
//! Structure:
//! - `mod.rs`: `TuiRuntime`, event loop, effect dispatch
//! - `inbox.rs`: inbox channel types
//! - `ticker.rs`: the background fake log task

mod inbox;
mod ticker;

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
pub use ticker::{TickerInterval, spawn_ticker};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use treader_core::{Document, FakeLogGenerator, ReaderConfig};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll timeout when no events are pending.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen reader runtime.
///
/// Owns the terminal and state. The terminal is restored on drop and on
/// panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    /// Stops the ticker when the loop exits.
    shutdown: CancellationToken,
    interval: TickerInterval,
}

impl TuiRuntime {
    /// Enters TUI mode and builds the initial state.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: ReaderConfig, document: Document) -> Result<Self> {
        // Panic hook goes in before the alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(&config, document);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            shutdown: CancellationToken::new(),
            interval: TickerInterval {
                min: config.min_interval,
                max: config.max_interval,
            },
        })
    }

    /// Runs until the quit key.
    ///
    /// Must be called from within a tokio runtime; the ticker is spawned on
    /// it.
    ///
    /// # Errors
    /// Returns an error if reading terminal events or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        let ticker = spawn_ticker(
            FakeLogGenerator::new(),
            self.interval,
            self.inbox_tx.clone(),
            self.shutdown.clone(),
        );

        let result = self.event_loop();

        self.shutdown.cancel();
        ticker.abort();
        info!("reader stopped");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                let effects = update::update(&mut self.state, event);
                for effect in effects {
                    match effect {
                        UiEffect::Render => dirty = true,
                        UiEffect::Quit => {
                            debug!("quit requested");
                            self.state.should_quit = true;
                        }
                    }
                }
            }

            if dirty && !self.state.should_quit {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))
                    .context("Failed to draw frame")?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Drains the inbox, then polls the terminal.
    ///
    /// Blocks up to `IDLE_POLL_DURATION` only when the inbox was empty.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            IDLE_POLL_DURATION
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration).context("Failed to poll terminal")? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        Ok(events)
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        self.shutdown.cancel();
        let _ = terminal::restore_terminal();
    }
}
