//! Interactive list state machine.
//!
//! Everything that happens to the UI arrives as a [`Message`] and goes
//! through [`App::update`], which mutates state and returns a [`Command`]
//! for the runner to carry out. Nothing here does I/O.

use std::time::Instant;

use crossterm::event::KeyEvent;
use tracing::{debug, warn};

use crate::core::constants::STATUS_MESSAGE_LIFETIME;
use crate::core::domain::Parameter;
use crate::error::Result;
use crate::tui::keymap::KeyMap;
use crate::tui::list::ParameterList;
use crate::tui::spinner::Spinner;
use crate::tui::status::{StatusKind, StatusMessage};
use crate::tui::theme::Theme;

/// Rows taken by the title, status and help lines around the list.
pub const LIST_CHROME_ROWS: u16 = 4;

/// Rows per list item: title, subtitle, spacer.
pub const ITEM_HEIGHT: u16 = 3;

/// UI states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Waiting for the parameter listing
    Loading,
    Ready,
    /// Editing the filter
    Filtering,
    /// Listing failed; holds the message shown to the user
    Error(String),
}

/// Input to the state machine.
#[derive(Debug)]
pub enum Message {
    Tick,
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    ListResult(Result<Vec<Parameter>>),
    CopyRequested,
    PreviewRequested,
    /// Outcome of a clipboard write, carrying the copied value
    CopyFinished(Result<String>),
}

/// Side effect requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
    LoadParameters,
    CopyToClipboard(String),
}

/// Area available to the list, after padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// The interactive list.
#[derive(Debug)]
pub struct App {
    state: State,
    list: ParameterList,
    spinner: Spinner,
    status: Option<StatusMessage>,
    viewport: Viewport,
    theme: Theme,
    keys: KeyMap,
}

impl App {
    /// A new app in the `Loading` state.
    pub fn new(theme: Theme, keys: KeyMap) -> Self {
        Self {
            state: State::Loading,
            list: ParameterList::new(),
            spinner: Spinner::default(),
            status: None,
            viewport: Viewport::default(),
            theme,
            keys,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn list(&self) -> &ParameterList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ParameterList {
        &mut self.list
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn keys(&self) -> &KeyMap {
        &self.keys
    }

    /// Items that fit on one screen.
    pub fn items_per_page(&self) -> usize {
        (self.viewport.height.saturating_sub(LIST_CHROME_ROWS) / ITEM_HEIGHT).max(1) as usize
    }

    /// Apply one message.
    pub fn update(&mut self, message: Message) -> Command {
        match message {
            Message::Tick => {
                if self.state == State::Loading {
                    self.spinner.tick();
                }
                self.expire_status(Instant::now());
                Command::None
            }
            Message::Resize { width, height } => {
                self.resize(width, height);
                Command::None
            }
            Message::ListResult(Ok(parameters)) => {
                debug!(count = parameters.len(), "parameters loaded");
                self.list.set_items(parameters);
                self.state = State::Ready;
                Command::None
            }
            Message::ListResult(Err(e)) => {
                warn!(error = %e, "listing parameters failed");
                self.state = State::Error(e.to_string());
                Command::None
            }
            Message::Key(key) => self.handle_key(key),
            Message::CopyRequested => match self.list.selected() {
                Some(param) => Command::CopyToClipboard(param.value.clone()),
                None => Command::None,
            },
            Message::PreviewRequested => {
                if let Some(param) = self.list.selected() {
                    let value = param.value.clone();
                    self.set_status(StatusKind::Peeking(value));
                }
                Command::None
            }
            Message::CopyFinished(Ok(value)) => {
                self.set_status(StatusKind::Copied(value));
                Command::None
            }
            Message::CopyFinished(Err(e)) => {
                warn!(error = %e, "clipboard write failed");
                self.set_status(StatusKind::Error(e.to_string()));
                Command::None
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        if self.keys.force_quit.matches(&key) {
            return Command::Quit;
        }

        match self.state {
            State::Loading => {
                if self.keys.quit.matches(&key) {
                    return Command::Quit;
                }
                Command::None
            }
            State::Error(_) => {
                if self.keys.quit.matches(&key) {
                    Command::Quit
                } else if self.keys.reload.matches(&key) {
                    self.start_loading()
                } else {
                    Command::None
                }
            }
            State::Filtering => self.handle_filter_key(key),
            State::Ready => self.handle_list_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Command {
        let keys = &self.keys;
        if keys.copy.matches(&key) {
            self.update(Message::CopyRequested)
        } else if keys.preview.matches(&key) {
            self.update(Message::PreviewRequested)
        } else if keys.filter.matches(&key) {
            self.state = State::Filtering;
            Command::None
        } else if keys.up.matches(&key) {
            self.list.previous();
            Command::None
        } else if keys.down.matches(&key) {
            self.list.next();
            Command::None
        } else if keys.page_up.matches(&key) {
            let per_page = self.items_per_page();
            self.list.page_up(per_page);
            Command::None
        } else if keys.page_down.matches(&key) {
            let per_page = self.items_per_page();
            self.list.page_down(per_page);
            Command::None
        } else if keys.home.matches(&key) {
            self.list.first();
            Command::None
        } else if keys.end.matches(&key) {
            self.list.last();
            Command::None
        } else if keys.reload.matches(&key) {
            self.start_loading()
        } else if keys.clear_filter.matches(&key) {
            if self.list.is_filtered() {
                self.list.clear_filter();
                Command::None
            } else {
                Command::Quit
            }
        } else if keys.quit.matches(&key) {
            Command::Quit
        } else {
            Command::None
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> Command {
        use crossterm::event::{KeyCode, KeyModifiers};

        if self.keys.clear_filter.matches(&key) {
            self.list.clear_filter();
            self.state = State::Ready;
        } else if self.keys.accept_filter.matches(&key) {
            self.state = State::Ready;
        } else {
            match key.code {
                KeyCode::Backspace => self.list.pop_filter(),
                KeyCode::Up => self.list.previous(),
                KeyCode::Down => self.list.next(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.list.push_filter(c)
                }
                _ => {}
            }
        }
        Command::None
    }

    fn start_loading(&mut self) -> Command {
        self.state = State::Loading;
        self.status = None;
        Command::LoadParameters
    }

    fn resize(&mut self, width: u16, height: u16) {
        let padding = self.theme.padding;
        self.viewport = Viewport {
            width: width.saturating_sub(padding.horizontal * 2),
            height: height.saturating_sub(padding.vertical * 2),
        };
    }

    fn set_status(&mut self, kind: StatusKind) {
        self.status = Some(StatusMessage::new(kind, STATUS_MESSAGE_LIFETIME));
    }

    fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.is_expired_at(now)) {
            self.status = None;
        }
    }
}
