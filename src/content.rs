//! Page copy for the landing page variants, bundled as JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tracker::{ScrollSectionTracker, TrackerConfig, TrackerError, DEFAULT_FIXED_OFFSET};

const LANDING_JSON: &str = include_str!("../assets/landing.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("landing content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no page variant named `{0}`")]
    UnknownVariant(String),
    #[error("page variant `{slug}` has an invalid section list: {source}")]
    Sections {
        slug: String,
        #[source]
        source: TrackerError,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Section {
    pub id: String,
    pub nav_label: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageVariant {
    pub slug: String,
    pub nav_label: String,
    pub headline: String,
    pub tagline: String,
    /// Height of the fixed navigation bar on this variant, in CSS pixels.
    #[serde(default = "default_nav_offset")]
    pub nav_offset: f64,
    pub sections: Vec<Section>,
}

fn default_nav_offset() -> f64 {
    DEFAULT_FIXED_OFFSET
}

impl PageVariant {
    /// Section ids in page order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.id.as_str())
    }

    /// Fresh tracker whose registry mirrors this variant's sections.
    pub fn tracker(&self) -> Result<ScrollSectionTracker, ContentError> {
        TrackerConfig::new(self.section_ids())
            .fixed_offset(self.nav_offset)
            .build()
            .map_err(|source| ContentError::Sections {
                slug: self.slug.clone(),
                source,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LandingContent {
    pub variants: Vec<PageVariant>,
}

impl LandingContent {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        // reject broken section lists up front rather than on first render
        for variant in &content.variants {
            variant.tracker()?;
        }
        Ok(content)
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(LANDING_JSON)
    }

    pub fn variant(&self, slug: &str) -> Result<&PageVariant, ContentError> {
        self.variants
            .iter()
            .find(|variant| variant.slug == slug)
            .ok_or_else(|| ContentError::UnknownVariant(slug.to_string()))
    }
}

/// Load one bundled variant by slug.
pub fn load_variant(slug: &str) -> Result<PageVariant, ContentError> {
    let content = LandingContent::bundled()?;
    content.variant(slug).cloned()
}
