//! Application state
//!
//! Owns the content catalog, the live surface document, the toggle
//! controller, the filters, and the effects engine, and exposes the
//! operations the input layer drives. All state changes happen here, on
//! the UI thread, in response to discrete events.

pub mod types;

pub use types::{AppMode, CARD_ROWS};

use crate::content::{Card, Catalog, Section};
use crate::effects::Effects;
use crate::prefs::PreferenceStore;
use crate::search::SearchFilter;
use crate::surface::{Document, SurfaceCategory};
use crate::toggle::ToggleController;
use std::time::Instant;

/// Top-level application state
pub struct App {
    pub catalog: Catalog,
    pub doc: Document,
    /// Theme toggle controller; None until installed
    toggle: Option<ToggleController>,
    pub filter: SearchFilter,
    pub effects: Effects,
    pub mode: AppMode,
    /// Index of the active section tab
    pub active_tab: usize,
    /// Selection index within the visible cards of the active section
    pub selected: usize,
    /// Scroll offset into the card list, in rows
    pub scroll: u16,
    /// Height of the card list viewport, set by the renderer
    pub viewport_rows: u16,
    pub should_quit: bool,
}

impl App {
    /// Create the app and install the theme toggle
    ///
    /// Installation replays the stored preference into the document, so
    /// the first frame already renders the persisted mode.
    pub fn new(catalog: Catalog, store: Box<dyn PreferenceStore>) -> Self {
        let doc = catalog.build_document();
        let mut app = Self {
            catalog,
            doc,
            toggle: None,
            filter: SearchFilter::new(),
            effects: Effects::new(),
            mode: AppMode::Browse,
            active_tab: 0,
            selected: 0,
            scroll: 0,
            viewport_rows: 0,
            should_quit: false,
        };
        app.install_toggle(store);
        app.restart_reveals();
        app
    }

    /// Install the toggle controller
    ///
    /// Idempotent: a second installation is a no-op rather than a
    /// duplicated affordance.
    pub fn install_toggle(&mut self, store: Box<dyn PreferenceStore>) {
        if self.toggle.is_some() {
            return;
        }
        let controller = ToggleController::install(store, &mut self.doc);
        self.toggle = Some(controller);
    }

    /// Whether the toggle affordance is installed
    pub fn toggle_installed(&self) -> bool {
        self.toggle.is_some()
    }

    /// Current affordance icon, if installed
    pub fn toggle_icon(&self) -> Option<&'static str> {
        self.toggle.as_ref().map(ToggleController::icon)
    }

    /// Whether the toggle's activation pulse is running
    pub fn toggle_feedback_active(&self) -> bool {
        self.toggle
            .as_ref()
            .is_some_and(ToggleController::feedback_active)
    }

    /// Handle activation of the theme toggle affordance
    pub fn toggle_theme(&mut self) {
        if let Some(controller) = self.toggle.as_mut() {
            controller.activate(&mut self.doc);
        }
    }

    // ==================== Sections and Cards ====================

    /// The active section, None when the catalog has no sections
    pub fn active_section(&self) -> Option<&Section> {
        self.catalog.sections.get(self.active_tab)
    }

    /// Cards of the active section that pass the filters
    pub fn visible_cards(&self) -> Vec<&Card> {
        let Some(section) = self.active_section() else {
            return Vec::new();
        };
        section
            .cards
            .iter()
            .filter(|c| self.filter.matches(c))
            .collect()
    }

    /// Document IDs of the visible cards, in display order
    ///
    /// Card elements sit under their container in catalog order, so the
    /// pairing is positional. Titles are labels only; two cards sharing a
    /// title still resolve to their own elements.
    pub fn visible_card_ids(&self) -> Vec<usize> {
        let Some(section) = self.active_section() else {
            return Vec::new();
        };
        let Some(container) = self.doc.find(SurfaceCategory::Container, &section.id) else {
            return Vec::new();
        };
        let card_elements = self
            .doc
            .children_of(container.id)
            .filter(|e| e.category == SurfaceCategory::Card)
            .map(|e| e.id);
        section
            .cards
            .iter()
            .zip(card_elements)
            .filter(|(card, _)| self.filter.matches(card))
            .map(|(_, id)| id)
            .collect()
    }

    // ==================== Tab Navigation ====================

    /// Switch to a section tab by index
    pub fn switch_to(&mut self, index: usize) {
        if index >= self.catalog.sections.len() || index == self.active_tab {
            return;
        }
        self.active_tab = index;
        self.selected = 0;
        self.scroll = 0;
        self.restart_reveals();
    }

    /// Switch to the next tab, wrapping
    pub fn next_tab(&mut self) {
        let count = self.catalog.sections.len();
        if count == 0 {
            return;
        }
        self.switch_to((self.active_tab + 1) % count);
    }

    /// Switch to the previous tab, wrapping
    pub fn prev_tab(&mut self) {
        let count = self.catalog.sections.len();
        if count == 0 {
            return;
        }
        self.switch_to((self.active_tab + count - 1) % count);
    }

    /// Hide the active section's cards so they fade in again
    fn restart_reveals(&mut self) {
        let Some(section_id) = self.active_section().map(|s| s.id.clone()) else {
            return;
        };
        if let Some(container) = self.doc.find(SurfaceCategory::Container, &section_id) {
            let container = container.id;
            self.effects.prepare_section(&mut self.doc, container);
        }
    }

    // ==================== Selection and Scrolling ====================

    /// Move the selection down one card, scrolling it into view
    pub fn select_next(&mut self) {
        let count = self.visible_cards().len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(count - 1);
        self.scroll_selection_into_view();
    }

    /// Move the selection up one card
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_selection_into_view();
    }

    fn scroll_selection_into_view(&mut self) {
        if self.viewport_rows == 0 {
            return;
        }
        let top = self.selected as u16 * CARD_ROWS;
        let bottom = top + CARD_ROWS;
        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll + self.viewport_rows {
            self.scroll = bottom - self.viewport_rows;
        }
    }

    /// Activate the selected card (decorative ripple feedback)
    pub fn activate_selected(&mut self, now: Instant) {
        let ids = self.visible_card_ids();
        if let Some(&id) = ids.get(self.selected) {
            self.effects.spawn_ripple(id, now);
        }
    }

    // ==================== Search and Filters ====================

    /// Enter search mode
    pub fn enter_search(&mut self) {
        self.mode = AppMode::Search;
    }

    /// Leave search mode, keeping the query
    pub fn exit_search(&mut self) {
        self.mode = AppMode::Browse;
        self.clamp_selection();
    }

    /// Clear the query and leave search mode
    pub fn clear_search(&mut self) {
        self.filter.clear_query();
        self.mode = AppMode::Browse;
        self.clamp_selection();
    }

    /// Advance the category filter
    pub fn cycle_filter(&mut self) {
        self.filter.cycle_category();
        self.clamp_selection();
    }

    /// Keep the selection inside the (possibly shrunk) visible list
    pub fn clamp_selection(&mut self) {
        let count = self.visible_cards().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
        self.scroll_selection_into_view();
    }

    // ==================== Tick ====================

    /// Per-frame housekeeping: queue reveals for cards inside the
    /// viewport and advance running animations.
    pub fn on_tick(&mut self, now: Instant) {
        let ids = self.visible_card_ids();
        if !ids.is_empty() && self.viewport_rows > 0 {
            let first = (self.scroll / CARD_ROWS) as usize;
            let shown = (self.viewport_rows.div_ceil(CARD_ROWS) as usize + 1).min(ids.len());
            let last = (first + shown).min(ids.len());
            if first < last {
                self.effects.reveal_visible(&ids[first..last], now);
            }
        }
        self.effects.tick(&mut self.doc, now);
    }
}
