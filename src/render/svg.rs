//! Standalone SVG rendering for sitemap layouts.
//!
//! The document is sized exactly to the computed canvas (plus display-mode
//! padding) so the export collaborator never has to crop or paginate.

use std::fmt::Write;

use crate::domain::SiteTree;
use crate::layout::{DisplayMode, Layout};

const EDGE_COLOR: &str = "#94a3b8";
const NODE_COLOR: &str = "#4f46e5";
const LABEL_COLOR: &str = "#334155";
const BACKGROUND: &str = "#ffffff";
const NODE_RADIUS: f64 = 6.0;
const LABEL_OFFSET: f64 = 14.0;
const PADDING_NORMAL: f64 = 16.0;
const PADDING_EXPANDED: f64 = 32.0;

fn padding(mode: DisplayMode) -> f64 {
    match mode {
        DisplayMode::Normal => PADDING_NORMAL,
        DisplayMode::Expanded => PADDING_EXPANDED,
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a laid-out sitemap as a complete SVG document.
///
/// Edges are drawn below nodes; labels get a white halo so they stay legible
/// where they cross connector curves. Internal nodes carry filled circles with
/// end-anchored labels, leaves hollow circles with start-anchored labels.
pub fn render_sitemap(tree: &SiteTree, layout: &Layout) -> String {
    let pad = padding(layout.mode);
    let width = layout.width + 2.0 * pad;
    let height = layout.height + 2.0 * pad;

    let mut svg = String::new();
    // Writing to a String cannot fail; unwraps below are on fmt::Write.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    );
    let _ = write!(
        svg,
        r#"<rect width="{width}" height="{height}" fill="{BACKGROUND}"/>"#
    );
    let _ = write!(svg, r#"<g transform="translate({pad},{pad})">"#);

    for edge in &layout.edges {
        let c = edge.curve;
        let _ = write!(
            svg,
            r#"<path d="M{:.2},{:.2} C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="none" stroke="{EDGE_COLOR}" stroke-width="2"/>"#,
            c.p0.x, c.p0.y, c.p1.x, c.p1.y, c.p2.x, c.p2.y, c.p3.x, c.p3.y
        );
    }

    for node in &layout.nodes {
        let fill = if node.is_leaf { BACKGROUND } else { NODE_COLOR };
        let _ = write!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{NODE_RADIUS}" fill="{fill}" stroke="{NODE_COLOR}" stroke-width="2"/>"#,
            node.pos.x, node.pos.y
        );

        let Some(label) = tree.get_node(node.id).map(|n| escape_text(&n.data.name)) else {
            continue;
        };
        let (x, anchor) = if node.is_leaf {
            (node.pos.x + LABEL_OFFSET, "start")
        } else {
            (node.pos.x - LABEL_OFFSET, "end")
        };
        let y = node.pos.y + 5.0;
        // Halo first, then the label itself.
        let _ = write!(
            svg,
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="{anchor}" font-size="14" font-weight="500" stroke="{BACKGROUND}" stroke-width="4" paint-order="stroke" fill="{LABEL_COLOR}">{label}</text>"#
        );
    }

    svg.push_str("</g></svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_markup_characters_when_escaping_then_entities_substituted() {
        assert_eq!(escape_text("A & B <x>"), "A &amp; B &lt;x&gt;");
    }

    #[test]
    fn given_expanded_mode_then_padding_is_wider() {
        assert!(padding(DisplayMode::Expanded) > padding(DisplayMode::Normal));
    }
}
