//! Live surface document
//!
//! The document is a tree of elements tagged with structural categories:
//! the body, one container per section, the cards inside them, the text
//! blocks nested in cards, and decorative elements (particles, ripples).
//!
//! Elements carry two disjoint property groups. Theme properties (`fg`,
//! `bg`) are written only by the theme applier; motion properties
//! (`opacity`, `offset_y`) are written only by the effects engine. Keeping
//! the groups disjoint means the two subsystems never write conflicting
//! values to the same property in the same frame.

use ratatui::style::Color;

/// Structural category of a surface element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceCategory {
    /// The document body (exactly one per document)
    Body,
    /// Structural container, one per content section
    Container,
    /// Card component inside a container
    Card,
    /// Text-bearing block nested in a card
    CardText,
    /// Decorative element (particle, ripple) - never themed
    Decoration,
}

impl SurfaceCategory {
    /// Display name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceCategory::Body => "body",
            SurfaceCategory::Container => "container",
            SurfaceCategory::Card => "card",
            SurfaceCategory::CardText => "card-text",
            SurfaceCategory::Decoration => "decoration",
        }
    }
}

/// One element in the surface document
#[derive(Debug, Clone)]
pub struct Element {
    /// Stable index into the document
    pub id: usize,
    /// Structural category
    pub category: SurfaceCategory,
    /// Label tying the element back to the content it renders
    pub label: String,
    /// Parent element, None for the body
    pub parent: Option<usize>,

    // Theme properties - written by the applier only
    /// Foreground color, None until a mode has been applied
    pub fg: Option<Color>,
    /// Background color, None until a mode has been applied
    pub bg: Option<Color>,

    // Motion properties - written by the effects engine only
    /// Render opacity, 0.0 (hidden) to 1.0 (fully revealed)
    pub opacity: f32,
    /// Vertical offset in rows, drained to 0.0 by reveal animations
    pub offset_y: f32,
}

/// The live element tree
///
/// Flat arena with parent links; element IDs are indices and stay stable
/// for the lifetime of the document.
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, returning its ID
    pub fn add(
        &mut self,
        category: SurfaceCategory,
        label: impl Into<String>,
        parent: Option<usize>,
    ) -> usize {
        let id = self.elements.len();
        self.elements.push(Element {
            id,
            category,
            label: label.into(),
            parent,
            fg: None,
            bg: None,
            opacity: 1.0,
            offset_y: 0.0,
        });
        id
    }

    /// Total element count
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by ID
    pub fn get(&self, id: usize) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Get a mutable element by ID
    pub fn get_mut(&mut self, id: usize) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Iterate over all elements
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Iterate over elements of one category
    pub fn by_category(&self, category: SurfaceCategory) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.category == category)
    }

    /// Mutably iterate over elements of one category
    pub fn by_category_mut(
        &mut self,
        category: SurfaceCategory,
    ) -> impl Iterator<Item = &mut Element> {
        self.elements
            .iter_mut()
            .filter(move |e| e.category == category)
    }

    /// Count elements of one category
    pub fn count(&self, category: SurfaceCategory) -> usize {
        self.by_category(category).count()
    }

    /// Iterate over the direct children of an element
    pub fn children_of(&self, id: usize) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.parent == Some(id))
    }

    /// Find an element by category and label
    pub fn find(&self, category: SurfaceCategory, label: &str) -> Option<&Element> {
        self.by_category(category).find(|e| e.label == label)
    }
}
