//! Cosmetic effects engine
//!
//! Scroll-triggered card reveals and activation ripples. Everything here
//! is decoration: the engine writes motion properties (`opacity`,
//! `offset_y`) and nothing else, and all animations are deadline-based
//! and fire-and-forget - if a tick never comes, nothing is left in an
//! incorrect state, just an unfinished fade.

use crate::surface::{Document, SurfaceCategory};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// How long a card takes to fade in
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
/// Stagger between neighboring cards entering together
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);
/// How long an activation ripple lives
pub const RIPPLE_DURATION: Duration = Duration::from_millis(600);
/// Starting vertical offset of a hidden card, in rows
const REVEAL_OFFSET: f32 = 30.0;

/// One in-flight card reveal
#[derive(Debug)]
struct Reveal {
    element: usize,
    starts_at: Instant,
}

/// One in-flight activation ripple on a card
#[derive(Debug)]
struct Ripple {
    element: usize,
    started: Instant,
}

/// Owner of all running cosmetic animations
#[derive(Debug, Default)]
pub struct Effects {
    reveals: Vec<Reveal>,
    ripples: Vec<Ripple>,
    /// Cards that have been revealed or queued since the last prepare
    revealed: HashSet<usize>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide every card in a container, resetting its reveal state
    ///
    /// Called when a section scrolls in fresh (startup or tab switch) so
    /// its cards fade in again.
    pub fn prepare_section(&mut self, doc: &mut Document, container: usize) {
        let card_ids: Vec<usize> = doc
            .children_of(container)
            .filter(|e| e.category == SurfaceCategory::Card)
            .map(|e| e.id)
            .collect();

        for id in card_ids {
            if let Some(card) = doc.get_mut(id) {
                card.opacity = 0.0;
                card.offset_y = REVEAL_OFFSET;
            }
            self.revealed.remove(&id);
            self.reveals.retain(|r| r.element != id);
        }
    }

    /// Queue reveals for cards that just entered the viewport
    ///
    /// Cards are staggered in the order given; a card already revealed
    /// (or queued) is skipped.
    pub fn reveal_visible(&mut self, visible: &[usize], now: Instant) {
        let mut stagger = 0u32;
        for &id in visible {
            if !self.revealed.insert(id) {
                continue;
            }
            self.reveals.push(Reveal {
                element: id,
                starts_at: now + REVEAL_STAGGER * stagger,
            });
            stagger += 1;
        }
    }

    /// Spawn an activation ripple on a card
    pub fn spawn_ripple(&mut self, card: usize, now: Instant) {
        self.ripples.push(Ripple {
            element: card,
            started: now,
        });
    }

    /// Ripple progress on a card, 0.0 to 1.0, None when no ripple runs
    pub fn ripple_progress(&self, card: usize, now: Instant) -> Option<f32> {
        self.ripples
            .iter()
            .rev()
            .find(|r| r.element == card)
            .map(|r| {
                let elapsed = now.saturating_duration_since(r.started);
                (elapsed.as_secs_f32() / RIPPLE_DURATION.as_secs_f32()).min(1.0)
            })
    }

    /// Advance all animations to `now`
    ///
    /// Writes motion properties on revealing cards and drops finished
    /// animations. Safe to call at any cadence.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        self.reveals.retain(|reveal| {
            // Not started yet (stagger delay still pending).
            let Some(elapsed) = now.checked_duration_since(reveal.starts_at) else {
                return true;
            };
            let t = (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).min(1.0);
            if let Some(card) = doc.get_mut(reveal.element) {
                card.opacity = t;
                card.offset_y = REVEAL_OFFSET * (1.0 - t);
            }
            t < 1.0
        });

        self.ripples
            .retain(|r| now.saturating_duration_since(r.started) < RIPPLE_DURATION);
    }

    /// Whether no animation is running or queued
    pub fn idle(&self) -> bool {
        self.reveals.is_empty() && self.ripples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use serial_test::serial;

    fn doc_with_cards() -> (Document, usize, Vec<usize>) {
        let doc = Catalog::builtin().build_document();
        let container = doc
            .find(SurfaceCategory::Container, "roadmap")
            .unwrap()
            .id;
        let cards: Vec<usize> = doc
            .children_of(container)
            .filter(|e| e.category == SurfaceCategory::Card)
            .map(|e| e.id)
            .collect();
        (doc, container, cards)
    }

    #[test]
    fn test_prepare_section_hides_cards() {
        let (mut doc, container, cards) = doc_with_cards();
        let mut effects = Effects::new();

        effects.prepare_section(&mut doc, container);

        for &id in &cards {
            let card = doc.get(id).unwrap();
            assert_eq!(card.opacity, 0.0);
            assert_eq!(card.offset_y, REVEAL_OFFSET);
        }
    }

    #[test]
    fn test_prepare_section_leaves_other_sections_alone() {
        let (mut doc, container, _) = doc_with_cards();
        let mut effects = Effects::new();
        effects.prepare_section(&mut doc, container);

        let other = doc.find(SurfaceCategory::Container, "tools").unwrap().id;
        let untouched: Vec<_> = doc
            .children_of(other)
            .filter(|e| e.category == SurfaceCategory::Card)
            .collect();
        assert!(!untouched.is_empty());
        for card in untouched {
            assert_eq!(card.opacity, 1.0);
        }
    }

    #[test]
    fn test_reveal_completes_after_duration() {
        let (mut doc, container, cards) = doc_with_cards();
        let mut effects = Effects::new();
        effects.prepare_section(&mut doc, container);

        let start = Instant::now();
        effects.reveal_visible(&cards[..1], start);
        effects.tick(&mut doc, start + REVEAL_DURATION + Duration::from_millis(10));

        let card = doc.get(cards[0]).unwrap();
        assert_eq!(card.opacity, 1.0);
        assert_eq!(card.offset_y, 0.0);
        assert!(effects.idle());
    }

    #[test]
    fn test_reveal_is_partial_midway() {
        let (mut doc, container, cards) = doc_with_cards();
        let mut effects = Effects::new();
        effects.prepare_section(&mut doc, container);

        let start = Instant::now();
        effects.reveal_visible(&cards[..1], start);
        effects.tick(&mut doc, start + REVEAL_DURATION / 2);

        let card = doc.get(cards[0]).unwrap();
        assert!(card.opacity > 0.0 && card.opacity < 1.0);
        assert!(card.offset_y > 0.0 && card.offset_y < REVEAL_OFFSET);
        assert!(!effects.idle());
    }

    #[test]
    fn test_stagger_delays_later_cards() {
        let (mut doc, container, cards) = doc_with_cards();
        let mut effects = Effects::new();
        effects.prepare_section(&mut doc, container);

        let start = Instant::now();
        effects.reveal_visible(&cards[..2], start);
        // First card has started, the staggered one has not.
        effects.tick(&mut doc, start + Duration::from_millis(50));

        assert!(doc.get(cards[0]).unwrap().opacity > 0.0);
        assert_eq!(doc.get(cards[1]).unwrap().opacity, 0.0);
    }

    #[test]
    fn test_reveal_visible_skips_already_revealed() {
        let (mut doc, container, cards) = doc_with_cards();
        let mut effects = Effects::new();
        effects.prepare_section(&mut doc, container);

        let start = Instant::now();
        effects.reveal_visible(&cards[..1], start);
        effects.tick(&mut doc, start + REVEAL_DURATION + Duration::from_millis(10));
        assert!(effects.idle());

        // Scrolling the same card into view again does not restart it.
        effects.reveal_visible(&cards[..1], start + Duration::from_secs(2));
        assert!(effects.idle());
        assert_eq!(doc.get(cards[0]).unwrap().opacity, 1.0);
    }

    #[test]
    #[serial]
    fn test_tick_never_touches_theme_properties() {
        let (mut doc, container, cards) = doc_with_cards();
        crate::applier::apply(&mut doc, crate::theme::Mode::Dark);
        let themed_bg = doc.get(cards[0]).unwrap().bg;

        let mut effects = Effects::new();
        effects.prepare_section(&mut doc, container);
        let start = Instant::now();
        effects.reveal_visible(&cards, start);
        effects.tick(&mut doc, start + REVEAL_DURATION);

        assert_eq!(doc.get(cards[0]).unwrap().bg, themed_bg);
    }

    #[test]
    fn test_ripple_lifecycle() {
        let (mut doc, _, cards) = doc_with_cards();
        let mut effects = Effects::new();
        let start = Instant::now();

        effects.spawn_ripple(cards[0], start);
        let mid = effects
            .ripple_progress(cards[0], start + RIPPLE_DURATION / 2)
            .unwrap();
        assert!(mid > 0.0 && mid < 1.0);

        effects.tick(&mut doc, start + RIPPLE_DURATION + Duration::from_millis(10));
        assert!(effects.ripple_progress(cards[0], start + RIPPLE_DURATION).is_none());
        assert!(effects.idle());
    }

    #[test]
    fn test_unticked_animations_are_harmless() {
        // Fire-and-forget: queued animations that never tick leave the
        // document untouched.
        let (mut doc, container, cards) = doc_with_cards();
        let mut effects = Effects::new();
        effects.prepare_section(&mut doc, container);
        effects.reveal_visible(&cards, Instant::now());
        effects.spawn_ripple(cards[0], Instant::now());

        assert_eq!(doc.get(cards[0]).unwrap().opacity, 0.0);
        assert!(!effects.idle());
    }
}
