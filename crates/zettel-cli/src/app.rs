use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::path::PathBuf;
use zettel_config::{Config, DEFAULT_QUERY};
use zettel_engine::{SearchOptions, Zettel, create_zettel, load_all, search};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    /// Keys edit the query until Enter or Esc
    Search,
}

pub struct App {
    pub notes_path: PathBuf,
    pub zettels: Vec<Zettel>,
    /// Indices into `zettels` matching the current query, in display order
    pub matches: Vec<usize>,
    pub list_state: ListState,
    pub query: String,
    pub unique: bool,
    pub mode: Mode,
    /// One-line message shown in the help bar
    pub status: Option<String>,
}

impl App {
    pub fn new(notes_path: PathBuf, config: Option<&Config>) -> Result<Self> {
        let zettels = load_all(&notes_path)?;
        let mut app = Self {
            notes_path,
            zettels,
            matches: Vec::new(),
            list_state: ListState::default(),
            query: config
                .map(|config| config.default_query.clone())
                .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            unique: config.is_some_and(|config| config.unique),
            mode: Mode::Browse,
            status: None,
        };
        app.apply_search();
        Ok(app)
    }

    /// Reload every zettel from disk and rerun the query
    pub fn refresh(&mut self) -> Result<()> {
        self.zettels = load_all(&self.notes_path)?;
        self.apply_search();
        Ok(())
    }

    pub fn apply_search(&mut self) {
        self.matches = search(
            &self.query,
            &self.zettels,
            SearchOptions {
                unique: self.unique,
            },
        );
        let selection = if self.matches.is_empty() {
            None
        } else {
            Some(
                self.list_state
                    .selected()
                    .unwrap_or(0)
                    .min(self.matches.len() - 1),
            )
        };
        self.list_state.select(selection);
    }

    pub fn next(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.matches.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.matches.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn selected_zettel(&self) -> Option<&Zettel> {
        let position = self.list_state.selected()?;
        let index = *self.matches.get(position)?;
        self.zettels.get(index)
    }

    /// Create a zettel named after the query, minus any leading markers
    pub fn create_from_query(&mut self) -> Result<()> {
        let tag = self.query.trim().trim_start_matches('@');
        let file = create_zettel(&self.notes_path, tag)?;
        self.status = Some(format!("created {}", file.display_path()));
        self.refresh()?;
        if let Some(position) = self
            .matches
            .iter()
            .position(|&index| self.zettels[index].file == file)
        {
            self.list_state.select(Some(position));
        }
        Ok(())
    }

    /// Handle one key press; returns true when the app should quit.
    pub fn on_key(&mut self, code: KeyCode) -> bool {
        match self.mode {
            Mode::Search => self.on_search_key(code),
            Mode::Browse => return self.on_browse_key(code),
        }
        false
    }

    fn on_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Backspace => {
                self.query.pop();
                self.apply_search();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.apply_search();
            }
            _ => {}
        }
    }

    fn on_browse_key(&mut self, code: KeyCode) -> bool {
        self.status = None;
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('u') => {
                self.unique = !self.unique;
                self.apply_search();
            }
            KeyCode::Char('n') => {
                if let Err(err) = self.create_from_query() {
                    self.status = Some(err.to_string());
                }
            }
            KeyCode::Char('r') => {
                if let Err(err) = self.refresh() {
                    self.status = Some(err.to_string());
                }
            }
            _ => {}
        }
        false
    }
}
