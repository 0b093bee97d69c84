//! App state and core application logic
//!
//! Owns the search-and-display state machine: which view is showing, the
//! search overlay, the current movie and its recommendations, and the
//! bookkeeping for in-flight movie loads.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{Movie, MovieResponse, Recommendation};
use crate::shortcuts::{KeyBinding, ShortcutAction, Shortcuts, SubscriptionId};

/// Popular titles offered as one-keystroke searches in the overlay
pub const SUGGESTIONS: [&str; 10] = [
    "Inception",
    "The Dark Knight",
    "Interstellar",
    "The Matrix",
    "Pulp Fiction",
    "The Shawshank Redemption",
    "Oppenheimer",
    "Barbie",
    "Avatar",
    "Titanic",
];

/// Suggestion chips are laid out in this many columns
pub const SUGGESTION_COLUMNS: usize = 2;

// =============================================================================
// View Selection
// =============================================================================

/// Which main view is rendered, derived from (movie present?, loading?)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// No movie, nothing loading: full-area search box
    Landing,
    /// No movie yet, first load in flight: spinner
    Loading,
    /// A movie is displayed (possibly with another load in flight)
    Movie,
}

// =============================================================================
// Text Input
// =============================================================================

/// Single-line text input with a character-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub value: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl InputField {
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Text before and after the cursor
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_index())
    }

    /// Trimmed value, or None if only whitespace
    pub fn submission(&self) -> Option<String> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Apply a text-editing key. Returns false for keys that are not edits.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if is_plain(key.modifiers) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor_left();
                true
            }
            KeyCode::Right => {
                self.cursor_right();
                true
            }
            KeyCode::Home => {
                self.cursor_home();
                true
            }
            KeyCode::End => {
                self.cursor_end();
                true
            }
            _ => false,
        }
    }
}

/// True for keys typed without a command modifier
fn is_plain(modifiers: KeyModifiers) -> bool {
    (modifiers - KeyModifiers::SHIFT).is_empty()
}

// =============================================================================
// Search Overlay
// =============================================================================

/// Which part of the overlay receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayFocus {
    #[default]
    Input,
    Suggestions,
}

/// Search overlay state
#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    pub open: bool,
    pub input: InputField,
    pub focus: OverlayFocus,
    /// Index into `SUGGESTIONS`
    pub selected_suggestion: usize,
}

impl SearchOverlay {
    pub fn selected_title(&self) -> Option<&'static str> {
        SUGGESTIONS.get(self.selected_suggestion).copied()
    }

    fn move_suggestion(&mut self, delta: isize) {
        let target = self.selected_suggestion as isize + delta;
        if (0..SUGGESTIONS.len() as isize).contains(&target) {
            self.selected_suggestion = target as usize;
        }
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// Vertical scroll position over the rendered movie page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub offset: u16,
    pub max_offset: u16,
    /// Row where the details section starts
    pub details_anchor: u16,
}

impl Viewport {
    /// Update page geometry after layout. Clamps the offset.
    pub fn set_bounds(&mut self, page_height: u16, visible_height: u16, details_anchor: u16) {
        self.max_offset = page_height.saturating_sub(visible_height);
        self.details_anchor = details_anchor;
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.offset as i32 + delta).clamp(0, self.max_offset as i32);
        self.offset = target as u16;
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_anchor(&mut self, row: u16) {
        self.offset = row.min(self.max_offset);
    }
}

// =============================================================================
// Load Bookkeeping
// =============================================================================

/// How responses from overlapping loads are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Every response is applied; whichever resolves last is displayed
    #[default]
    LastResolvedWins,
    /// Only the most recently issued request may change the display
    DiscardStale,
}

/// A queued "load movie by title" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub seq: u64,
    pub title: String,
}

/// Result of a finished load, sent back to the event loop
#[derive(Debug)]
pub struct LoadOutcome {
    pub seq: u64,
    pub title: String,
    pub result: anyhow::Result<MovieResponse>,
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Whether a movie load is in flight
    pub loading: bool,
    /// Last load failure, shown as a popup until the next keypress
    pub error: Option<String>,

    /// Currently displayed movie
    pub movie: Option<Movie>,
    /// Recommendations for the current movie, in backend order
    pub recommendations: Vec<Recommendation>,
    /// Selected recommendation tile
    pub selected_recommendation: usize,

    pub landing: InputField,
    pub overlay: SearchOverlay,
    pub viewport: Viewport,

    pub policy: StaleResponsePolicy,
    /// Frame counter driving the spinner
    pub tick: u64,
    shortcuts: Shortcuts,
    overlay_shortcut: Option<SubscriptionId>,
    pending: Vec<LoadRequest>,
    last_issued: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::with_policy(StaleResponsePolicy::default())
    }
}

impl App {
    /// Create a new App instance with its global shortcuts mounted
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: StaleResponsePolicy) -> Self {
        let mut app = Self {
            running: true,
            loading: false,
            error: None,
            movie: None,
            recommendations: Vec::new(),
            selected_recommendation: 0,
            landing: InputField::default(),
            overlay: SearchOverlay::default(),
            viewport: Viewport::default(),
            policy,
            tick: 0,
            shortcuts: Shortcuts::new(),
            overlay_shortcut: None,
            pending: Vec::new(),
            last_issued: 0,
        };
        app.mount();
        app
    }

    /// Register global shortcuts. Idempotent.
    pub fn mount(&mut self) {
        if self.overlay_shortcut.is_none() {
            let id = self
                .shortcuts
                .subscribe(KeyBinding::command_k(), ShortcutAction::ToggleOverlay);
            self.overlay_shortcut = Some(id);
        }
    }

    /// Deregister global shortcuts
    pub fn unmount(&mut self) {
        if let Some(id) = self.overlay_shortcut.take() {
            self.shortcuts.unsubscribe(id);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.overlay_shortcut.is_some()
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Advance animation state once per event-loop tick
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Current view, selected by (movie present?, loading?)
    pub fn view(&self) -> View {
        match (&self.movie, self.loading) {
            (Some(_), _) => View::Movie,
            (None, true) => View::Loading,
            (None, false) => View::Landing,
        }
    }

    pub fn selected_recommendation(&self) -> Option<&Recommendation> {
        self.recommendations.get(self.selected_recommendation)
    }

    // -------------------------------------------------------------------------
    // Overlay
    // -------------------------------------------------------------------------

    pub fn toggle_overlay(&mut self) {
        if self.overlay.open {
            self.close_overlay();
        } else {
            self.open_overlay();
        }
    }

    pub fn open_overlay(&mut self) {
        self.overlay.open = true;
        self.overlay.focus = OverlayFocus::Input;
    }

    pub fn close_overlay(&mut self) {
        self.overlay.open = false;
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll_to_top(&mut self) {
        self.viewport.to_top();
    }

    pub fn scroll_to_details(&mut self) {
        let anchor = self.viewport.details_anchor;
        self.viewport.to_anchor(anchor);
    }

    // -------------------------------------------------------------------------
    // Movie Loading
    // -------------------------------------------------------------------------

    /// Queue a load for `title`. Returns false (and changes nothing) when
    /// the title is empty after trimming.
    pub fn load_movie(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        self.last_issued += 1;
        let seq = self.last_issued;
        tracing::info!(seq, title, "loading movie");

        self.loading = true;
        self.pending.push(LoadRequest {
            seq,
            title: title.to_string(),
        });
        true
    }

    /// Drain requests queued since the last call
    pub fn take_requests(&mut self) -> Vec<LoadRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Sequence number of the most recently issued request
    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    /// Apply a finished load
    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        let LoadOutcome { seq, title, result } = outcome;

        if self.policy == StaleResponsePolicy::DiscardStale && seq != self.last_issued {
            tracing::warn!(seq, latest = self.last_issued, title = %title, "discarding stale response");
            return;
        }

        self.loading = false;

        match result {
            Ok(response) => {
                tracing::info!(
                    seq,
                    title = %response.movie.title,
                    recommendations = response.recommendations.len(),
                    "movie loaded"
                );
                self.movie = Some(response.movie);
                self.recommendations = response.recommendations;
                self.selected_recommendation = 0;
                self.close_overlay();
                self.scroll_to_top();
            }
            Err(e) => {
                tracing::error!(seq, title = %title, error = %e, "movie load failed");
                self.error = Some(e.to_string());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        // The key that dismisses the error popup does nothing else
        if self.error.take().is_some() {
            return true;
        }

        if let Some(action) = self.shortcuts.dispatch(&key) {
            tracing::debug!(?action, "global shortcut");
            match action {
                ShortcutAction::ToggleOverlay => self.toggle_overlay(),
            }
            return true;
        }

        if self.overlay.open {
            return self.handle_overlay_key(key);
        }

        match self.view() {
            View::Landing => self.handle_landing_key(key),
            View::Loading => self.handle_loading_key(key),
            View::Movie => self.handle_movie_key(key),
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc {
            self.close_overlay();
            return true;
        }

        match self.overlay.focus {
            OverlayFocus::Input => match key.code {
                KeyCode::Enter => {
                    if let Some(title) = self.overlay.input.submission() {
                        self.load_movie(&title);
                        self.overlay.input.clear();
                        self.close_overlay();
                    }
                    true
                }
                KeyCode::Tab | KeyCode::Down => {
                    self.overlay.focus = OverlayFocus::Suggestions;
                    true
                }
                _ => self.overlay.input.handle_key(key),
            },
            OverlayFocus::Suggestions => match key.code {
                KeyCode::Enter => {
                    if let Some(title) = self.overlay.selected_title() {
                        self.load_movie(title);
                        self.overlay.input.clear();
                        self.close_overlay();
                    }
                    true
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    self.overlay.focus = OverlayFocus::Input;
                    true
                }
                KeyCode::Up => {
                    if self.overlay.selected_suggestion < SUGGESTION_COLUMNS {
                        self.overlay.focus = OverlayFocus::Input;
                    } else {
                        self.overlay.move_suggestion(-(SUGGESTION_COLUMNS as isize));
                    }
                    true
                }
                KeyCode::Down => {
                    self.overlay.move_suggestion(SUGGESTION_COLUMNS as isize);
                    true
                }
                KeyCode::Left => {
                    self.overlay.move_suggestion(-1);
                    true
                }
                KeyCode::Right => {
                    self.overlay.move_suggestion(1);
                    true
                }
                KeyCode::Char(_) if is_plain(key.modifiers) => {
                    // Typing jumps back to the input
                    self.overlay.focus = OverlayFocus::Input;
                    self.overlay.input.handle_key(key)
                }
                _ => false,
            },
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                if let Some(title) = self.landing.submission() {
                    self.load_movie(&title);
                }
                true
            }
            KeyCode::Esc => {
                self.landing.clear();
                true
            }
            _ => self.landing.handle_key(key),
        }
    }

    fn handle_loading_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                true
            }
            _ => false,
        }
    }

    fn handle_movie_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                true
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.open_overlay();
                true
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_recommendation = self.selected_recommendation.saturating_sub(1);
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_recommendation + 1 < self.recommendations.len() {
                    self.selected_recommendation += 1;
                }
                true
            }
            KeyCode::Enter => {
                if let Some(title) = self.selected_recommendation().map(|r| r.title.clone()) {
                    self.load_movie(&title);
                }
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.viewport.scroll_by(-1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.viewport.scroll_by(1);
                true
            }
            KeyCode::PageUp => {
                self.viewport.scroll_by(-10);
                true
            }
            KeyCode::PageDown => {
                self.viewport.scroll_by(10);
                true
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll_to_top();
                true
            }
            KeyCode::Char('d') => {
                self.scroll_to_details();
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    // -------------------------------------------------------------------------
    // InputField Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_input_field_editing() {
        let mut input = InputField::default();

        for c in "hello".chars() {
            input.insert(c);
        }
        assert_eq!(input.value, "hello");
        assert_eq!(input.cursor, 5);

        input.cursor_left();
        input.cursor_left();
        input.insert('X');
        assert_eq!(input.value, "helXlo");
        assert_eq!(input.split_at_cursor(), ("helX", "lo"));

        input.backspace();
        assert_eq!(input.value, "hello");

        input.cursor_home();
        input.delete();
        assert_eq!(input.value, "ello");

        input.cursor_end();
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_input_field_multibyte() {
        let mut input = InputField::default();
        for c in "Amélie".chars() {
            input.insert(c);
        }
        input.cursor_left();
        input.cursor_left();
        input.cursor_left();
        input.backspace();
        assert_eq!(input.value, "Amlie");
        assert_eq!(input.split_at_cursor(), ("Am", "lie"));
    }

    #[test]
    fn test_input_field_submission_trims() {
        let mut input = InputField::default();
        assert_eq!(input.submission(), None);

        input.value = "   \t ".into();
        assert_eq!(input.submission(), None);

        input.value = "  Inception ".into();
        assert_eq!(input.submission(), Some("Inception".into()));
    }

    // -------------------------------------------------------------------------
    // Viewport Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_viewport_clamps() {
        let mut viewport = Viewport::default();
        viewport.scroll_by(5);
        assert_eq!(viewport.offset, 0);

        viewport.set_bounds(50, 20, 16);
        viewport.scroll_by(100);
        assert_eq!(viewport.offset, 30);

        viewport.scroll_by(-7);
        assert_eq!(viewport.offset, 23);

        viewport.to_anchor(16);
        assert_eq!(viewport.offset, 16);

        // Page shrank below current offset
        viewport.set_bounds(25, 20, 16);
        assert_eq!(viewport.offset, 5);

        viewport.to_top();
        assert_eq!(viewport.offset, 0);
    }

    // -------------------------------------------------------------------------
    // View Selection Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_view_selection() {
        let mut app = App::new();
        assert_eq!(app.view(), View::Landing);

        app.loading = true;
        assert_eq!(app.view(), View::Loading);

        app.movie = Some(Movie {
            id: 1,
            title: "Inception".into(),
            overview: String::new(),
            poster: None,
            backdrop: None,
            genres: vec![],
            runtime: None,
            release_date: None,
            rating: None,
            language: String::new(),
            cast: vec![],
            trailer_url: None,
            watch_url: None,
        });
        assert_eq!(app.view(), View::Movie);

        app.loading = false;
        assert_eq!(app.view(), View::Movie);
    }

    // -------------------------------------------------------------------------
    // Key Handling Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_landing_typing_and_submit() {
        let mut app = App::new();
        type_str(&mut app, " Inception ");
        assert_eq!(app.landing.value, " Inception ");

        press(&mut app, KeyCode::Enter);
        assert!(app.loading);
        assert_eq!(
            app.take_requests(),
            vec![LoadRequest {
                seq: 1,
                title: "Inception".into()
            }]
        );
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_landing_q_is_text() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.landing.value, "q");
    }

    #[test]
    fn test_overlay_escape_closes() {
        let mut app = App::new();
        app.open_overlay();
        type_str(&mut app, "Mat");
        press(&mut app, KeyCode::Esc);
        assert!(!app.overlay.open);
        // Query survives until a search is submitted
        assert_eq!(app.overlay.input.value, "Mat");
    }

    #[test]
    fn test_overlay_suggestion_navigation() {
        let mut app = App::new();
        app.open_overlay();

        press(&mut app, KeyCode::Down);
        assert_eq!(app.overlay.focus, OverlayFocus::Suggestions);
        assert_eq!(app.overlay.selected_title(), Some("Inception"));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.overlay.selected_title(), Some("The Dark Knight"));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.overlay.selected_title(), Some("The Matrix"));

        // Past the last row stays put
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.overlay.selected_title(), Some("Titanic"));

        for _ in 0..10 {
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.overlay.focus, OverlayFocus::Input);
    }

    #[test]
    fn test_overlay_typing_from_suggestions_returns_to_input() {
        let mut app = App::new();
        app.open_overlay();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.overlay.focus, OverlayFocus::Input);
        assert_eq!(app.overlay.input.value, "x");
    }

    #[test]
    fn test_movie_view_open_overlay_with_slash() {
        let mut app = App::new();
        app.finish_load(LoadOutcome {
            seq: 0,
            title: "Inception".into(),
            result: Ok(MovieResponse {
                movie: serde_json::from_str(r#"{"id": 1, "title": "Inception"}"#).unwrap(),
                recommendations: vec![],
            }),
        });
        assert_eq!(app.view(), View::Movie);

        press(&mut app, KeyCode::Char('/'));
        assert!(app.overlay.open);
        assert_eq!(app.overlay.focus, OverlayFocus::Input);
    }

    #[test]
    fn test_error_cleared_on_keypress() {
        let mut app = App::new();
        app.error = Some("Movie not found".into());
        press(&mut app, KeyCode::Left);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut app = App::new();
        assert!(app.is_mounted());
        app.mount();
        app.unmount();
        assert!(!app.is_mounted());

        app.handle_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(!app.overlay.open);

        app.mount();
        app.handle_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(app.overlay.open);
    }
}
