//! App state and event loop
//!
//! The `App` owns every view's state and the one background task (the hero
//! typing animation). The loop selects over terminal input, typing-text
//! updates, and settings changes; each wake handles its event fully before
//! the next draw, so no view ever renders half-updated state.

use std::io::Stdout;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{Frame, Terminal};
use tokio::sync::watch;

use folio_core::content::{all_books, all_posts, all_talks, hero_phrases, Book, Post, Talk};
use folio_core::settings::{Settings, SharedSettings};
use folio_core::typing::{TypingAnimation, TypingConfig};

use super::markdown::RenderCache;
use super::palette::{CommandAction, CommandPalette};
use super::reader::ReaderState;
use super::themes::{Theme, ThemeRegistry};
use super::views;

/// Where folio's source lives; the palette's "View Source" opens it
const SOURCE_URL: &str = "https://github.com/samokafor/folio";

/// Which screen fills the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Reader,
    Library,
    Talks,
}

/// What woke the event loop
enum Wake {
    Input(Option<std::io::Result<Event>>),
    Typing(bool),
    Settings,
}

pub struct App {
    view: View,
    posts: Vec<Post>,
    books: Vec<Book>,
    talks: Vec<Talk>,
    home_selected: usize,
    talks_selected: usize,
    reader: Option<ReaderState>,
    palette: CommandPalette,
    registry: ThemeRegistry,
    theme: Arc<Theme>,
    settings: SharedSettings,
    settings_rx: watch::Receiver<Settings>,
    typing: TypingAnimation,
    typing_rx: watch::Receiver<String>,
    typing_done: bool,
    cache: RenderCache,
    /// Main area of the last frame, fed back into reader layout
    view_area: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(theme_flag: Option<String>) -> Self {
        let registry = ThemeRegistry::new();
        let mut initial = Settings::default();
        if let Some(name) = theme_flag {
            match registry.resolve(&name) {
                Ok(_) => initial.theme = name,
                Err(e) => tracing::warn!("{e}, keeping {}", initial.theme),
            }
        }
        let theme = Arc::new(
            registry
                .resolve(&initial.theme)
                .unwrap_or_else(|_| registry.default_theme())
                .clone(),
        );
        tracing::info!("starting with theme {}", theme.name);

        let settings = SharedSettings::new(initial);
        let settings_rx = settings.subscribe();
        let typing = TypingAnimation::spawn(TypingConfig::new(hero_phrases()));
        let typing_rx = typing.subscribe();

        Self {
            view: View::Home,
            posts: all_posts(),
            books: all_books(),
            talks: all_talks(),
            home_selected: 0,
            talks_selected: 0,
            reader: None,
            palette: CommandPalette::new(),
            registry,
            theme,
            settings,
            settings_rx,
            typing,
            typing_rx,
            typing_done: false,
            cache: RenderCache::new(),
            view_area: Rect::new(0, 0, 80, 23),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut events = EventStream::new();
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            let wake = tokio::select! {
                maybe_event = events.next() => Wake::Input(maybe_event),
                changed = self.typing_rx.changed(), if !self.typing_done => {
                    Wake::Typing(changed.is_ok())
                }
                _ = self.settings_rx.changed() => Wake::Settings,
            };

            match wake {
                Wake::Input(Some(Ok(event))) => self.handle_event(event),
                Wake::Input(Some(Err(e))) => tracing::warn!("event stream error: {e}"),
                Wake::Input(None) => self.should_quit = true,
                // A typing tick just needs the redraw at the top of the loop
                Wake::Typing(alive) => self.typing_done = !alive,
                Wake::Settings => self.apply_settings(),
            }
        }
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        f.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg_color)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        self.view_area = chunks[0];
        self.sync_reader_layout();

        match self.view {
            View::Home => views::home::render(
                f,
                chunks[0],
                &self.typing.text(),
                &self.posts,
                self.home_selected,
                &self.theme,
            ),
            View::Reader => {
                if let Some(reader) = &self.reader {
                    views::reader::render(f, chunks[0], reader, &self.theme);
                }
            }
            View::Library => views::library::render(f, chunks[0], &self.books, &self.theme),
            View::Talks => views::talks::render(
                f,
                chunks[0],
                &self.talks,
                self.talks_selected,
                &self.theme,
            ),
        }

        self.render_status_bar(f, chunks[1]);

        if self.palette.visible {
            self.palette.render(f, &self.theme);
        }
    }

    /// Keep the open reader in sync with the frame layout; a no-op frame
    /// to frame thanks to the render cache
    fn sync_reader_layout(&mut self) {
        if let Some(reader) = self.reader.as_mut() {
            let (width, height) = views::reader::content_metrics(self.view_area);
            reader.relayout(&mut self.cache, width, height, &self.theme);
        }
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let highlight = Style::default()
            .fg(self.theme.accent_color)
            .add_modifier(Modifier::BOLD);
        let normal = Style::default().fg(self.theme.dim_color);

        let mut spans = Vec::new();
        for (label, view) in [
            (" 1 Home ", View::Home),
            (" 2 Library ", View::Library),
            (" 3 Talks ", View::Talks),
        ] {
            spans.push(Span::styled(
                label,
                if self.view == view { highlight } else { normal },
            ));
        }
        if self.view == View::Reader {
            spans.push(Span::styled(" Reader ", highlight));
        }
        spans.push(Span::styled(
            format!("· {} · Ctrl+K palette · q quit", self.theme.display_name),
            normal,
        ));

        let bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.status_bar_bg_color));
        f.render_widget(bar, area);
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // Resize is picked up by the next frame's layout sync
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.palette.visible {
            self.handle_palette_key(key);
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('k') {
            self.palette.open();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(':') => self.palette.open(),
            KeyCode::Char('1') => self.view = View::Home,
            KeyCode::Char('2') => self.view = View::Library,
            KeyCode::Char('3') => self.view = View::Talks,
            KeyCode::Esc => self.view = View::Home,
            _ => match self.view {
                View::Home => self.handle_home_key(key),
                View::Reader => self.handle_reader_key(key),
                View::Talks => self.handle_talks_key(key),
                View::Library => {}
            },
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('k') {
            self.palette.close();
            return;
        }
        match key.code {
            KeyCode::Esc => self.palette.close(),
            KeyCode::Enter => {
                if let Some(action) = self.palette.selected_action() {
                    self.palette.close();
                    self.apply_action(action);
                }
            }
            KeyCode::Up => self.palette.prev(),
            KeyCode::Down => self.palette.next(),
            KeyCode::Backspace => self.palette.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.palette.input_char(c)
            }
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.home_selected = self
                    .home_selected
                    .checked_sub(1)
                    .unwrap_or(self.posts.len().saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.posts.is_empty() {
                    self.home_selected = (self.home_selected + 1) % self.posts.len();
                }
            }
            KeyCode::Enter => self.open_post(self.home_selected),
            _ => {}
        }
    }

    fn handle_reader_key(&mut self, key: KeyEvent) {
        let Some(reader) = self.reader.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => reader.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => reader.scroll_by(1),
            KeyCode::PageUp => reader.page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => reader.page_down(),
            KeyCode::Char('g') => reader.to_top(),
            KeyCode::Char('G') => reader.to_bottom(),
            // The scroll-to-top affordance
            KeyCode::Char('t') => reader.to_top(),
            KeyCode::Tab | KeyCode::Char('n') => reader.toc_next(),
            KeyCode::BackTab | KeyCode::Char('p') => reader.toc_prev(),
            KeyCode::Enter => reader.jump_to_selected(),
            _ => {}
        }
    }

    fn handle_talks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.talks_selected = self
                    .talks_selected
                    .checked_sub(1)
                    .unwrap_or(self.talks.len().saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.talks.is_empty() {
                    self.talks_selected = (self.talks_selected + 1) % self.talks.len();
                }
            }
            KeyCode::Enter | KeyCode::Char('o') => {
                if let Some(talk) = self.talks.get(self.talks_selected) {
                    open_url(talk.url);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.palette.visible || self.view != View::Reader {
            return;
        }
        let Some(reader) = self.reader.as_mut() else {
            return;
        };
        match mouse.kind {
            MouseEventKind::ScrollUp => reader.scroll_by(-3),
            MouseEventKind::ScrollDown => reader.scroll_by(3),
            _ => {}
        }
    }

    fn open_post(&mut self, index: usize) {
        let Some(post) = self.posts.get(index).cloned() else {
            return;
        };
        let (width, height) = views::reader::content_metrics(self.view_area);
        self.reader = Some(ReaderState::open(
            post,
            &mut self.cache,
            width,
            height,
            &self.theme,
        ));
        self.view = View::Reader;
    }

    fn apply_action(&mut self, action: CommandAction) {
        match action {
            CommandAction::GoHome => self.view = View::Home,
            CommandAction::OpenLatestPost => self.open_post(0),
            CommandAction::OpenLibrary => self.view = View::Library,
            CommandAction::OpenTalks => self.view = View::Talks,
            CommandAction::ToggleTheme => {
                let next = self
                    .registry
                    .next_after(&self.settings.get().theme)
                    .to_string();
                self.settings.update(|s| s.theme = next);
            }
            CommandAction::OpenSource => open_url(SOURCE_URL),
            CommandAction::Quit => self.should_quit = true,
        }
    }

    /// Settings observer: swap the theme and invalidate baked-in colors
    fn apply_settings(&mut self) {
        let settings = self.settings.get();
        match self.registry.resolve(&settings.theme) {
            Ok(theme) => {
                self.theme = Arc::new(theme.clone());
                self.cache.clear();
                tracing::info!("theme switched to {}", settings.theme);
            }
            Err(e) => tracing::warn!("{e}"),
        }
    }
}

fn open_url(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        tracing::warn!("failed to open {url}: {e}");
    }
}
