// App state and main event loop.
// Manages navigation, catalog events, the snippet modal, and keyboard input.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::catalog::{
    BadgeFile, BadgeStyle, CatalogCache, badge_url, html_snippet, markdown_snippet,
};
use crate::clipboard::ClipboardService;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::state::{
    BrowseState, CatalogCommand, CatalogEvent, ViewLevel, spawn_catalog_worker,
};
use crate::ui;
use crate::ui::theme::Theme;

/// Active tab in the snippet modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnippetTab {
    #[default]
    Markdown,
    Html,
}

impl SnippetTab {
    pub const ALL: [SnippetTab; 2] = [SnippetTab::Markdown, SnippetTab::Html];

    pub fn title(&self) -> &'static str {
        match self {
            SnippetTab::Markdown => "Markdown",
            SnippetTab::Html => "HTML",
        }
    }

    /// Format-specific note shown under the snippet.
    pub fn note(&self) -> &'static str {
        match self {
            SnippetTab::Markdown => "Markdown does not support resizing images.",
            SnippetTab::Html => "Change the height attribute to resize the badge.",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SnippetTab::Markdown => SnippetTab::Html,
            SnippetTab::Html => SnippetTab::Markdown,
        }
    }
}

/// State of the open copy-snippet modal.
#[derive(Debug, Clone)]
pub struct SnippetModal {
    pub file: BadgeFile,
    /// Image URL for the style that was active when the modal opened.
    pub url: String,
    pub tab: SnippetTab,
    pub copied: bool,
}

impl SnippetModal {
    pub fn new(file: BadgeFile, style: BadgeStyle) -> Self {
        let url = badge_url(style, &file);
        Self {
            file,
            url,
            tab: SnippetTab::default(),
            copied: false,
        }
    }

    /// The embed snippet for the active tab.
    pub fn snippet(&self) -> String {
        match self.tab {
            SnippetTab::Markdown => markdown_snippet(&self.file, &self.url),
            SnippetTab::Html => html_snippet(&self.file, &self.url),
        }
    }
}

/// Main application state.
pub struct App {
    /// Active color theme.
    pub theme: Theme,
    /// Navigation and list state for the catalog.
    pub browse: BrowseState,
    /// Open snippet modal, if any.
    pub snippet: Option<SnippetModal>,
    /// Whether the app should exit.
    pub should_quit: bool,
    commands: UnboundedSender<CatalogCommand>,
    events: UnboundedReceiver<CatalogEvent>,
    clipboard: ClipboardService,
}

impl App {
    /// Create the app and spawn the catalog worker.
    pub fn new(client: GitHubClient, cache: CatalogCache) -> Self {
        let (commands, events) = spawn_catalog_worker(client, cache);
        Self {
            theme: Theme::default(),
            browse: BrowseState::default(),
            snippet: None,
            should_quit: false,
            commands,
            events,
            clipboard: ClipboardService::new(),
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.request_catalog(CatalogCommand::Load);

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.drain_catalog_events();
            self.handle_events()?;
        }
        Ok(())
    }

    /// Send a command to the catalog worker and show the loading state.
    fn request_catalog(&mut self, command: CatalogCommand) {
        self.snippet = None;
        self.browse.nav.reset();
        self.browse.categories.set_loading();
        let _ = self.commands.send(command);
    }

    /// Apply any pending events from the catalog worker.
    fn drain_catalog_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.browse.nav.reset();
            match event {
                CatalogEvent::Catalog(categories) => {
                    self.browse.categories.set_loaded(categories);
                }
                CatalogEvent::Failed(message) => {
                    self.browse.categories.set_error(message);
                }
            }
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.snippet.is_some() {
            self.handle_modal_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.theme.toggle(),
            KeyCode::Char('r') => self.request_catalog(CatalogCommand::Refresh),
            KeyCode::Left => self.browse.style = self.browse.style.prev(),
            KeyCode::Right => self.browse.style = self.browse.style.next(),
            KeyCode::Up | KeyCode::Char('k') => self.current_list_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.current_list_next(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Esc | KeyCode::Backspace => {
                self.browse.go_back();
            }
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, code: KeyCode) {
        let Some(modal) = self.snippet.as_mut() else {
            return;
        };

        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.snippet = None,
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                modal.tab = modal.tab.next();
                modal.copied = false;
            }
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => {
                self.clipboard.set_text(modal.snippet());
                modal.copied = true;
            }
            _ => {}
        }
    }

    fn current_list_prev(&mut self) {
        match self.browse.current_level() {
            ViewLevel::Categories => self.browse.categories.select_prev(),
            ViewLevel::Files { .. } => self.browse.files.select_prev(),
        }
    }

    fn current_list_next(&mut self) {
        match self.browse.current_level() {
            ViewLevel::Categories => self.browse.categories.select_next(),
            ViewLevel::Files { .. } => self.browse.files.select_next(),
        }
    }

    /// Drill into the selected category, or open the snippet modal for the
    /// selected badge.
    fn open_selected(&mut self) {
        match self.browse.current_level() {
            ViewLevel::Categories => self.browse.open_selected_category(),
            ViewLevel::Files { .. } => {
                if let Some(file) = self.browse.files.selected_item() {
                    self.snippet = Some(SnippetModal::new(file.clone(), self.browse.style));
                }
            }
        }
    }
}
