//! Search and category filtering
//!
//! Composes a case-insensitive text filter over card titles and
//! descriptions with a cycling category filter. Purely functional over
//! the content catalog; filtering never touches the surface document.

use crate::content::{Card, CardCategory};

/// Category filter state, cycled from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Resources,
    Tools,
    Skills,
}

impl CategoryFilter {
    /// The next filter in the cycle
    pub fn next(&self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Resources,
            CategoryFilter::Resources => CategoryFilter::Tools,
            CategoryFilter::Tools => CategoryFilter::Skills,
            CategoryFilter::Skills => CategoryFilter::All,
        }
    }

    /// Label for the filter indicator
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Resources => "Resources",
            CategoryFilter::Tools => "Tools",
            CategoryFilter::Skills => "Skills",
        }
    }

    /// Whether a card category passes this filter
    fn admits(&self, category: CardCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Resources => category == CardCategory::Resource,
            CategoryFilter::Tools => category == CardCategory::Tool,
            CategoryFilter::Skills => category == CardCategory::Skill,
        }
    }
}

/// Combined text + category filter
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    query: String,
    pub category: CategoryFilter,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether neither filter is active
    pub fn is_passthrough(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    /// Append a typed character to the query
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character of the query
    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Clear the query text, keeping the category filter
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Advance the category filter
    pub fn cycle_category(&mut self) {
        self.category = self.category.next();
    }

    /// Whether a card passes both filters
    pub fn matches(&self, card: &Card) -> bool {
        if !self.category.admits(card.category) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        card.title.to_lowercase().contains(&needle)
            || card.description.to_lowercase().contains(&needle)
    }
}
