//! Export service: renders documents and writes them through the
//! filesystem boundary.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{JourneyMap, SiteTree, StyleGuide};
use crate::infrastructure::traits::FileSystem;
use crate::layout::Layout;
use crate::render;

/// Writes rendered documents, sized exactly to their content.
pub struct ExportService {
    fs: Arc<dyn FileSystem>,
}

impl ExportService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Render a laid-out sitemap to SVG and write it.
    pub fn export_sitemap(
        &self,
        tree: &SiteTree,
        layout: &Layout,
        path: &Path,
    ) -> ApplicationResult<PathBuf> {
        self.write(path, &render::render_sitemap(tree, layout))
    }

    pub fn export_journey_map(&self, map: &JourneyMap, path: &Path) -> ApplicationResult<PathBuf> {
        self.write(path, &render::render_journey_map(map))
    }

    pub fn export_style_guide(
        &self,
        guide: &StyleGuide,
        path: &Path,
    ) -> ApplicationResult<PathBuf> {
        self.write(path, &render::render_style_guide(guide))
    }

    /// Default export path: `<dir>/<prefix>_<topic-slug>_<timestamp>.<ext>`,
    /// matching the source tool's `IA_Diagram_<topic>` stem scheme.
    pub fn default_path(
        &self,
        directory: Option<&Path>,
        prefix: &str,
        topic: &str,
        extension: &str,
    ) -> PathBuf {
        let slug = slugify(topic);
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let name = if slug.is_empty() {
            format!("{}_{}.{}", prefix, stamp, extension)
        } else {
            format!("{}_{}_{}.{}", prefix, slug, stamp, extension)
        };
        match directory {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    fn write(&self, path: &Path, content: &str) -> ApplicationResult<PathBuf> {
        self.fs
            .ensure_parent(path)
            .and_then(|_| self.fs.write(path, content))
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("write export {}", path.display()),
                source: Box::new(e),
            })?;
        debug!(path = %path.display(), bytes = content.len(), "wrote export");
        Ok(path.to_path_buf())
    }
}

fn slugify(topic: &str) -> String {
    let mut slug = String::with_capacity(topic.len());
    for ch in topic.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('_') && !slug.is_empty() {
            slug.push('_');
        }
    }
    slug.trim_end_matches('_').to_string()
}
