//! Design-system style guide document and its edit operations.

use serde::{Deserialize, Serialize};

/// One named color with its usage rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSwatch {
    pub name: String,
    pub hex: String,
    pub usage: String,
}

/// One typography scale entry (H1, Body, Caption, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRule {
    pub role: String,
    pub size: String,
    pub weight: String,
    pub usage: String,
}

/// Which palette group an edit addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorGroup {
    Primary,
    Secondary,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleGuide {
    pub theme_name: String,
    pub primary_colors: Vec<ColorSwatch>,
    pub secondary_colors: Vec<ColorSwatch>,
    pub neutral_colors: Vec<ColorSwatch>,
    pub typography: Vec<TypeRule>,
}

impl StyleGuide {
    pub fn colors(&self, group: ColorGroup) -> &[ColorSwatch] {
        match group {
            ColorGroup::Primary => &self.primary_colors,
            ColorGroup::Secondary => &self.secondary_colors,
            ColorGroup::Neutral => &self.neutral_colors,
        }
    }

    pub fn colors_mut(&mut self, group: ColorGroup) -> &mut Vec<ColorSwatch> {
        match group {
            ColorGroup::Primary => &mut self.primary_colors,
            ColorGroup::Secondary => &mut self.secondary_colors,
            ColorGroup::Neutral => &mut self.neutral_colors,
        }
    }

    /// Swatch at position within a group, None when out of range.
    pub fn swatch_mut(&mut self, group: ColorGroup, index: usize) -> Option<&mut ColorSwatch> {
        self.colors_mut(group).get_mut(index)
    }

    pub fn rule_mut(&mut self, index: usize) -> Option<&mut TypeRule> {
        self.typography.get_mut(index)
    }
}
