//! Render layer: pure projections of documents into output formats.
//!
//! SVG for the sitemap diagram, Markdown for the flat document types, and a
//! termtree outline for the terminal. No I/O here; writing belongs to the
//! export service.

pub mod markdown;
pub mod outline;
pub mod svg;

pub use markdown::{render_journey_map, render_style_guide};
pub use outline::ToOutline;
pub use svg::render_sitemap;
