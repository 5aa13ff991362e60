//! Markdown rendering for the flat document types.

use std::fmt::Write;

use crate::domain::{ColorGroup, JourneyMap, StageList, StyleGuide};

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn joined(items: &[String]) -> String {
    if items.is_empty() {
        "—".to_string()
    } else {
        items.iter().map(|i| cell(i)).collect::<Vec<_>>().join("; ")
    }
}

fn emotion_stars(score: u8) -> String {
    let filled = usize::from(score.clamp(1, 5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Render a journey map as a Markdown document with one row per stage.
pub fn render_journey_map(map: &JourneyMap) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# User Journey Map\n");
    let _ = writeln!(md, "**Persona:** {}\n", cell(&map.persona));
    let _ = writeln!(md, "**Scenario:** {}\n", cell(&map.scenario));
    let _ = writeln!(
        md,
        "| Stage | Goal | Emotion | Actions | Pain Points | Opportunities |"
    );
    let _ = writeln!(md, "|---|---|---|---|---|---|");
    for stage in &map.stages {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | {} | {} |",
            cell(&stage.stage_name),
            cell(&stage.user_goal),
            emotion_stars(stage.emotion_score),
            joined(stage.list(StageList::Actions)),
            joined(stage.list(StageList::PainPoints)),
            joined(stage.list(StageList::Opportunities)),
        );
    }
    md
}

/// Render a style guide as a Markdown document: one table per palette group
/// plus the typography scale.
pub fn render_style_guide(guide: &StyleGuide) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Design System: {}\n", cell(&guide.theme_name));

    for (title, group) in [
        ("Primary Colors", ColorGroup::Primary),
        ("Secondary Colors", ColorGroup::Secondary),
        ("Neutral Colors", ColorGroup::Neutral),
    ] {
        let swatches = guide.colors(group);
        if swatches.is_empty() {
            continue;
        }
        let _ = writeln!(md, "## {}\n", title);
        let _ = writeln!(md, "| Name | Hex | Usage |");
        let _ = writeln!(md, "|---|---|---|");
        for swatch in swatches {
            let _ = writeln!(
                md,
                "| {} | `{}` | {} |",
                cell(&swatch.name),
                cell(&swatch.hex),
                cell(&swatch.usage)
            );
        }
        md.push('\n');
    }

    if !guide.typography.is_empty() {
        let _ = writeln!(md, "## Typography\n");
        let _ = writeln!(md, "| Role | Size | Weight | Usage |");
        let _ = writeln!(md, "|---|---|---|---|");
        for rule in &guide.typography {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} |",
                cell(&rule.role),
                cell(&rule.size),
                cell(&rule.weight),
                cell(&rule.usage)
            );
        }
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_score_when_rendering_stars_then_five_glyphs_total() {
        assert_eq!(emotion_stars(3), "★★★☆☆");
        assert_eq!(emotion_stars(5), "★★★★★");
    }

    #[test]
    fn given_pipe_in_text_when_rendering_cell_then_escaped() {
        assert_eq!(cell("a|b"), "a\\|b");
    }

    #[test]
    fn given_empty_list_when_joining_then_em_dash_placeholder() {
        assert_eq!(joined(&[]), "—");
    }
}
