//! Theme toggle controller
//!
//! The interactive entry point of the theme subsystem. A two-state
//! machine (light, dark) with a single transition event: activating the
//! toggle affordance. On construction it replays the stored preference so
//! the first paint already matches it; on activation it applies the next
//! mode, persists it, and updates the affordance icon, in that order. The
//! feedback pulse at the end is cosmetic only - nothing depends on it
//! running to completion.

use crate::applier;
use crate::prefs::PreferenceStore;
use crate::surface::Document;
use crate::theme::Mode;
use std::time::{Duration, Instant};

/// Moon icon shown while light mode is active (activating goes dark)
const ICON_MOON: &str = "\u{263e}";
/// Sun icon shown while dark mode is active
const ICON_SUN: &str = "\u{2600}";

/// How long the activation pulse stays visible
const FEEDBACK_DURATION: Duration = Duration::from_millis(300);

/// Controller for the theme toggle affordance
pub struct ToggleController {
    store: Box<dyn PreferenceStore>,
    mode: Mode,
    feedback_started: Option<Instant>,
}

impl ToggleController {
    /// Install the controller: load the stored preference, bring the
    /// document into a matching state, and render the icon.
    ///
    /// Applying before the first frame prevents the load-then-flip flash
    /// of the default palette.
    pub fn install(store: Box<dyn PreferenceStore>, doc: &mut Document) -> Self {
        let mode = store.load();
        applier::apply(doc, mode);
        Self {
            store,
            mode,
            feedback_started: None,
        }
    }

    /// Current controller state
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Icon for the affordance: moon in light mode, sun in dark mode
    pub fn icon(&self) -> &'static str {
        match self.mode {
            Mode::Light => ICON_MOON,
            Mode::Dark => ICON_SUN,
        }
    }

    /// Handle activation of the toggle affordance
    ///
    /// Order matters: the visual update lands first, then the state flip,
    /// then the persisted value. If the process dies in between, the
    /// worst case is one restart showing the previous mode.
    pub fn activate(&mut self, doc: &mut Document) {
        let next = self.mode.toggled();
        applier::apply(doc, next);
        self.mode = next;
        self.store.save(next);
        self.feedback_started = Some(Instant::now());
    }

    /// Whether the cosmetic activation pulse is still running
    pub fn feedback_active(&self) -> bool {
        self.feedback_started
            .is_some_and(|t| t.elapsed() < FEEDBACK_DURATION)
    }
}
