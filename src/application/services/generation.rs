//! Generation ingestion: raw model output → shape-checked documents.
//!
//! The hosted model is asked for raw JSON, but answers routinely arrive
//! wrapped in Markdown code fences. Fences are stripped before parsing, and
//! shape-checking is serde deserialization only; deeper semantic validation
//! of AI output is deliberately out of scope.

use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{JourneyMap, SiteNode, SiteTree, StyleGuide};
use crate::infrastructure::traits::ContentSource;

/// Parses generation payloads into the three document types.
pub struct GenerationService {
    fence_open: Regex,
    fence_close: Regex,
}

impl Default for GenerationService {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationService {
    pub fn new() -> Self {
        Self {
            // Both regexes are literals; construction cannot fail.
            fence_open: Regex::new(r"^```(?:json)?\s*").unwrap(),
            fence_close: Regex::new(r"```\s*$").unwrap(),
        }
    }

    /// Strip a surrounding Markdown code fence, if any.
    fn clean_payload(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let opened = self.fence_open.replace(trimmed, "");
        self.fence_close.replace(&opened, "").trim().to_string()
    }

    fn parse<T: DeserializeOwned>(&self, raw: &str, document: &'static str) -> ApplicationResult<T> {
        let text = self.clean_payload(raw);
        if text.is_empty() || text == "{}" {
            return Err(ApplicationError::EmptyPayload);
        }
        debug!(document, bytes = text.len(), "parsing generation payload");
        serde_json::from_str(&text).map_err(|source| ApplicationError::MalformedPayload {
            document,
            source,
        })
    }

    /// Parse a sitemap payload and project it into an arena tree.
    pub fn sitemap(&self, raw: &str) -> ApplicationResult<SiteTree> {
        let root: SiteNode = self.parse(raw, "sitemap")?;
        Ok(SiteTree::from_node(&root))
    }

    pub fn journey_map(&self, raw: &str) -> ApplicationResult<JourneyMap> {
        self.parse(raw, "journey map")
    }

    pub fn style_guide(&self, raw: &str) -> ApplicationResult<StyleGuide> {
        self.parse(raw, "style guide")
    }

    /// Fetch from a payload source and parse as a sitemap.
    pub fn load_sitemap(&self, source: &dyn ContentSource) -> ApplicationResult<SiteTree> {
        self.sitemap(&self.fetch(source)?)
    }

    pub fn load_journey_map(&self, source: &dyn ContentSource) -> ApplicationResult<JourneyMap> {
        self.journey_map(&self.fetch(source)?)
    }

    pub fn load_style_guide(&self, source: &dyn ContentSource) -> ApplicationResult<StyleGuide> {
        self.style_guide(&self.fetch(source)?)
    }

    fn fetch(&self, source: &dyn ContentSource) -> ApplicationResult<String> {
        source
            .fetch()
            .map_err(|e| ApplicationError::OperationFailed {
                context: "fetch generation payload".to_string(),
                source: Box::new(e),
            })
    }
}
