//! Interactive parameter browser.
//!
//! The runner owns the terminal, the clipboard and a message queue. Terminal
//! events, ticks and finished background work become [`Message`]s; each one
//! goes through [`App::update`] and the returned [`Command`] is carried out
//! here.

pub mod app;
pub mod clipboard;
pub mod item;
pub mod keymap;
pub mod list;
pub mod spinner;
pub mod status;
pub mod theme;
pub mod view;

use std::collections::VecDeque;
use std::io::{stdout, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::core::constants::TICK_RATE;
use crate::core::service::ParameterService;
use crate::core::store::ParameterStore;
use crate::error::Result;

pub use app::{App, Command, Message, State};
pub use clipboard::{Clipboard, SystemClipboard};
pub use keymap::KeyMap;
pub use theme::Theme;

type Backend = CrosstermBackend<Stdout>;

struct TerminalGuard(Terminal<Backend>);

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal(&mut self.0);
    }
}

/// Run the interactive list until the user quits.
///
/// # Errors
///
/// Fails only on terminal I/O errors. Listing and clipboard failures are
/// shown inside the UI.
pub fn run<S: ParameterStore + 'static>(
    service: Arc<ParameterService<S>>,
    theme: Theme,
    keys: KeyMap,
) -> Result<()> {
    let mut guard = TerminalGuard(setup_terminal()?);
    drain_input_buffer()?;

    let size = guard.0.size()?;
    let mut runner = Runner::new(service, SystemClipboard::new(), App::new(theme, keys));
    runner.queue.push_back(Message::Resize {
        width: size.width,
        height: size.height,
    });
    runner.spawn_list()?;

    info!("interactive session started");
    let result = runner.event_loop(&mut guard.0);
    info!("interactive session ended");
    result
}

/// Everything the event loop needs besides the terminal.
struct Runner<S, C> {
    service: Arc<ParameterService<S>>,
    clipboard: C,
    app: App,
    queue: VecDeque<Message>,
    tx: Sender<Message>,
    rx: Receiver<Message>,
}

impl<S: ParameterStore + 'static, C: Clipboard> Runner<S, C> {
    fn new(service: Arc<ParameterService<S>>, clipboard: C, app: App) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            service,
            clipboard,
            app,
            queue: VecDeque::new(),
            tx,
            rx,
        }
    }

    fn event_loop(&mut self, terminal: &mut Terminal<Backend>) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| view::render(f, &mut self.app))?;

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.queue.push_back(Message::Key(key));
                    }
                    Event::Resize(width, height) => {
                        self.queue.push_back(Message::Resize { width, height });
                    }
                    _ => {}
                }
            }
            if last_tick.elapsed() >= TICK_RATE {
                self.queue.push_back(Message::Tick);
                last_tick = Instant::now();
            }

            if self.process()? {
                return Ok(());
            }
        }
    }

    /// Drain finished background work and queued messages.
    ///
    /// Returns `true` once a message asked to quit.
    fn process(&mut self) -> Result<bool> {
        while let Ok(message) = self.rx.try_recv() {
            self.queue.push_back(message);
        }

        while let Some(message) = self.queue.pop_front() {
            match self.app.update(message) {
                Command::None => {}
                Command::Quit => return Ok(true),
                Command::LoadParameters => self.spawn_list()?,
                Command::CopyToClipboard(value) => {
                    let result = self.clipboard.set_text(&value).map(|()| value);
                    self.queue.push_back(Message::CopyFinished(result));
                }
            }
        }
        Ok(false)
    }

    /// List parameters on a worker thread; the result arrives as
    /// `Message::ListResult`.
    fn spawn_list(&self) -> Result<()> {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        debug!("spawning parameter listing");

        std::thread::Builder::new()
            .name("ssm-list".into())
            .spawn(move || {
                let result = service.list();
                // The receiver is gone once the UI has quit.
                let _ = tx.send(Message::ListResult(result));
            })?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<Backend>> {
    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Discard keys typed before the UI was ready.
fn drain_input_buffer() -> Result<()> {
    while event::poll(std::time::Duration::from_millis(0))? {
        let _ = event::read()?;
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
