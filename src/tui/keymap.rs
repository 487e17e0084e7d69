//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A set of keys triggering one action, with its help text.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    ctrl: bool,
    help_key: &'static str,
    help_desc: &'static str,
}

impl Binding {
    /// Binding for plain keys, pressed without Ctrl.
    pub fn new(keys: &[KeyCode], help_key: &'static str, help_desc: &'static str) -> Self {
        Self {
            keys: keys.to_vec(),
            ctrl: false,
            help_key,
            help_desc,
        }
    }

    /// Binding for a Ctrl chord.
    pub fn ctrl(key: char, help_key: &'static str, help_desc: &'static str) -> Self {
        Self {
            keys: vec![KeyCode::Char(key)],
            ctrl: true,
            help_key,
            help_desc,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.modifiers.contains(KeyModifiers::CONTROL) == self.ctrl
            && self.keys.contains(&event.code)
    }

    pub fn help_key(&self) -> &'static str {
        self.help_key
    }

    pub fn help_desc(&self) -> &'static str {
        self.help_desc
    }
}

/// All bindings of the list view.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub copy: Binding,
    pub preview: Binding,
    pub filter: Binding,
    pub up: Binding,
    pub down: Binding,
    pub page_up: Binding,
    pub page_down: Binding,
    pub home: Binding,
    pub end: Binding,
    pub reload: Binding,
    pub clear_filter: Binding,
    pub accept_filter: Binding,
    pub quit: Binding,
    pub force_quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            copy: Binding::new(&[KeyCode::Enter], "enter", "copy"),
            preview: Binding::new(&[KeyCode::Char(' ')], "space", "preview"),
            filter: Binding::new(&[KeyCode::Char('/')], "/", "filter"),
            up: Binding::new(&[KeyCode::Up, KeyCode::Char('k')], "↑/k", "up"),
            down: Binding::new(&[KeyCode::Down, KeyCode::Char('j')], "↓/j", "down"),
            page_up: Binding::new(&[KeyCode::PageUp, KeyCode::Left], "pgup", "prev page"),
            page_down: Binding::new(&[KeyCode::PageDown, KeyCode::Right], "pgdn", "next page"),
            home: Binding::new(&[KeyCode::Home, KeyCode::Char('g')], "g/home", "go to start"),
            end: Binding::new(&[KeyCode::End, KeyCode::Char('G')], "G/end", "go to end"),
            reload: Binding::new(&[KeyCode::Char('r')], "r", "reload"),
            clear_filter: Binding::new(&[KeyCode::Esc], "esc", "clear filter"),
            accept_filter: Binding::new(&[KeyCode::Enter, KeyCode::Tab], "enter", "apply filter"),
            quit: Binding::new(&[KeyCode::Char('q')], "q", "quit"),
            force_quit: Binding::ctrl('c', "ctrl+c", "quit"),
        }
    }
}

impl KeyMap {
    /// Bindings listed in the help line of the list view.
    pub fn list_help(&self) -> Vec<&Binding> {
        vec![
            &self.filter,
            &self.copy,
            &self.preview,
            &self.reload,
            &self.quit,
        ]
    }

    /// Bindings listed while editing the filter.
    pub fn filter_help(&self) -> Vec<&Binding> {
        vec![&self.accept_filter, &self.clear_filter]
    }

    /// Bindings listed when listing failed.
    pub fn error_help(&self) -> Vec<&Binding> {
        vec![&self.reload, &self.quit]
    }
}
