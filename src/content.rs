//! Content catalog
//!
//! Sections and cards for the LearnAI roadmap. A built-in catalog ships
//! inside the binary; `--content <path>` swaps in a JSON file of the same
//! shape. The catalog also knows how to populate the surface document the
//! theme applier and effects engine operate on.

use crate::surface::{Document, SurfaceCategory};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Decorative particles attached to the body surface
const PARTICLE_COUNT: usize = 3;

/// Category tag on a card, used by the category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    Resource,
    Tool,
    Skill,
}

impl CardCategory {
    /// Display name for the filter indicator
    pub fn name(&self) -> &'static str {
        match self {
            CardCategory::Resource => "Resources",
            CardCategory::Tool => "Tools",
            CardCategory::Skill => "Skills",
        }
    }
}

/// One card in a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub category: CardCategory,
}

/// One tabbed section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Stable section ID (also the container label in the document)
    pub id: String,
    /// Tab title
    pub title: String,
    pub cards: Vec<Card>,
}

/// The full content catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub title: String,
    pub sections: Vec<Section>,
}

/// Built-in catalog data
const BUILTIN_CATALOG: &str = r#"{
  "title": "LearnAI Platform",
  "sections": [
    {
      "id": "roadmap",
      "title": "AI Roadmap",
      "cards": [
        {
          "title": "Level 1: Foundations",
          "description": "Math, Python, and data handling basics",
          "category": "skill"
        },
        {
          "title": "Level 2: Machine Learning",
          "description": "Classical models, evaluation, and feature work",
          "category": "skill"
        },
        {
          "title": "Level 3: Deep Learning",
          "description": "Neural networks, training loops, and GPUs",
          "category": "skill"
        },
        {
          "title": "Level 4: Specialization",
          "description": "NLP, vision, or reinforcement learning tracks",
          "category": "skill"
        }
      ]
    },
    {
      "id": "resources",
      "title": "Resources",
      "cards": [
        {
          "title": "Fast.ai",
          "description": "Practical deep learning course, code first",
          "category": "resource"
        },
        {
          "title": "DeepLearning.AI",
          "description": "Structured specializations from the basics up",
          "category": "resource"
        },
        {
          "title": "Papers With Code",
          "description": "State of the art results with reference code",
          "category": "resource"
        },
        {
          "title": "Hugging Face Course",
          "description": "Transformers and the model hub, hands on",
          "category": "resource"
        }
      ]
    },
    {
      "id": "tools",
      "title": "Tools",
      "cards": [
        {
          "title": "PyTorch",
          "description": "The research-default deep learning framework",
          "category": "tool"
        },
        {
          "title": "Jupyter",
          "description": "Interactive notebooks for exploration",
          "category": "tool"
        },
        {
          "title": "scikit-learn",
          "description": "Classical machine learning in Python",
          "category": "tool"
        },
        {
          "title": "Weights & Biases",
          "description": "Experiment tracking and model registry",
          "category": "tool"
        }
      ]
    },
    {
      "id": "skills",
      "title": "Skills",
      "cards": [
        {
          "title": "Python",
          "description": "The lingua franca of machine learning",
          "category": "skill"
        },
        {
          "title": "Linear Algebra",
          "description": "Vectors, matrices, and decompositions",
          "category": "skill"
        },
        {
          "title": "Statistics",
          "description": "Distributions, inference, and experiment design",
          "category": "skill"
        },
        {
          "title": "Prompt Engineering",
          "description": "Getting reliable work out of language models",
          "category": "skill"
        }
      ]
    }
  ]
}"#;

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_CATALOG).expect("built-in catalog is valid JSON")
    }

    /// Load a catalog from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;

        let catalog: Catalog = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse content file: {}", path.display()))?;

        // An empty catalog has nothing to render; reject it here, before
        // the terminal is put into raw mode.
        if catalog.sections.is_empty() {
            anyhow::bail!("Content file has no sections: {}", path.display());
        }

        Ok(catalog)
    }

    /// Total number of cards across all sections
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }

    /// Populate a surface document from this catalog
    ///
    /// One body, one container per section, one card element per card with
    /// a text child for its description, plus a handful of decorative
    /// particles. This is page-content authoring; the theme core only
    /// consumes the result.
    pub fn build_document(&self) -> Document {
        let mut doc = Document::new();
        let body = doc.add(SurfaceCategory::Body, "body", None);

        for section in &self.sections {
            let container = doc.add(SurfaceCategory::Container, section.id.clone(), Some(body));
            for card in &section.cards {
                let card_el = doc.add(SurfaceCategory::Card, card.title.clone(), Some(container));
                doc.add(
                    SurfaceCategory::CardText,
                    card.description.clone(),
                    Some(card_el),
                );
            }
        }

        for i in 0..PARTICLE_COUNT {
            doc.add(SurfaceCategory::Decoration, format!("particle-{i}"), Some(body));
        }

        doc
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.title, "LearnAI Platform");
        assert_eq!(catalog.sections.len(), 4);
        assert_eq!(catalog.card_count(), 16);
    }

    #[test]
    fn test_builtin_section_ids() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["roadmap", "resources", "tools", "skills"]);
    }

    #[test]
    fn test_build_document_category_counts() {
        let catalog = Catalog::builtin();
        let doc = catalog.build_document();

        assert_eq!(doc.count(SurfaceCategory::Body), 1);
        assert_eq!(doc.count(SurfaceCategory::Container), 4);
        assert_eq!(doc.count(SurfaceCategory::Card), catalog.card_count());
        assert_eq!(doc.count(SurfaceCategory::CardText), catalog.card_count());
        assert_eq!(doc.count(SurfaceCategory::Decoration), PARTICLE_COUNT);
    }

    #[test]
    fn test_build_document_parent_links() {
        let doc = Catalog::builtin().build_document();
        let body = doc.find(SurfaceCategory::Body, "body").unwrap();
        for container in doc.by_category(SurfaceCategory::Container) {
            assert_eq!(container.parent, Some(body.id));
        }
        for card in doc.by_category(SurfaceCategory::Card) {
            let parent = doc.get(card.parent.unwrap()).unwrap();
            assert_eq!(parent.category, SurfaceCategory::Container);
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{
                "title": "Custom",
                "sections": [
                    {{
                        "id": "one",
                        "title": "One",
                        "cards": [
                            {{"title": "A", "description": "a", "category": "tool"}}
                        ]
                    }}
                ]
            }}"#
        )
        .unwrap();

        let catalog = Catalog::load_from(temp_file.path()).unwrap();
        assert_eq!(catalog.title, "Custom");
        assert_eq!(catalog.card_count(), 1);
        assert_eq!(catalog.sections[0].cards[0].category, CardCategory::Tool);
    }

    #[test]
    fn test_load_from_empty_sections_errors() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"title": "Empty", "sections": []}}"#).unwrap();

        let err = Catalog::load_from(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("no sections"));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let result = Catalog::load_from(Path::new("/nonexistent/content.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "not json").unwrap();
        assert!(Catalog::load_from(temp_file.path()).is_err());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(CardCategory::Resource.name(), "Resources");
        assert_eq!(CardCategory::Tool.name(), "Tools");
        assert_eq!(CardCategory::Skill.name(), "Skills");
    }
}
