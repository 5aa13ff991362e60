//! User journey map document and its edit operations.
//!
//! A flat data model: persona/scenario plus an ordered list of stages, each
//! carrying three editable string lists. Edits address stages by position;
//! out-of-range positions are no-ops, mirroring the rename-miss policy of the
//! sitemap editor.

use serde::{Deserialize, Serialize};

/// One stage of the journey, column-per-stage in the rendered map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStage {
    pub stage_name: String,
    pub user_goal: String,
    pub actions: Vec<String>,
    pub pain_points: Vec<String>,
    /// 1 (frustrated) to 5 (delighted)
    pub emotion_score: u8,
    pub opportunities: Vec<String>,
}

/// Which of a stage's three string lists an edit addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageList {
    Actions,
    PainPoints,
    Opportunities,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyMap {
    pub persona: String,
    pub scenario: String,
    pub stages: Vec<JourneyStage>,
}

impl JourneyStage {
    pub fn list(&self, list: StageList) -> &[String] {
        match list {
            StageList::Actions => &self.actions,
            StageList::PainPoints => &self.pain_points,
            StageList::Opportunities => &self.opportunities,
        }
    }

    fn list_mut(&mut self, list: StageList) -> &mut Vec<String> {
        match list {
            StageList::Actions => &mut self.actions,
            StageList::PainPoints => &mut self.pain_points,
            StageList::Opportunities => &mut self.opportunities,
        }
    }

    /// Scores are clamped to the 1..=5 scale.
    pub fn set_emotion_score(&mut self, score: u8) {
        self.emotion_score = score.clamp(1, 5);
    }
}

impl JourneyMap {
    pub fn set_persona(&mut self, persona: impl Into<String>) {
        self.persona = persona.into();
    }

    pub fn set_scenario(&mut self, scenario: impl Into<String>) {
        self.scenario = scenario.into();
    }

    pub fn stage_mut(&mut self, index: usize) -> Option<&mut JourneyStage> {
        self.stages.get_mut(index)
    }

    /// Replace one item of a stage list. Returns false when either index is
    /// out of range.
    pub fn update_item(
        &mut self,
        stage: usize,
        list: StageList,
        item: usize,
        value: impl Into<String>,
    ) -> bool {
        match self
            .stages
            .get_mut(stage)
            .and_then(|s| s.list_mut(list).get_mut(item))
        {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Append an item to a stage list. Returns false for an unknown stage.
    pub fn add_item(&mut self, stage: usize, list: StageList, value: impl Into<String>) -> bool {
        match self.stages.get_mut(stage) {
            Some(s) => {
                s.list_mut(list).push(value.into());
                true
            }
            None => false,
        }
    }

    /// Remove an item from a stage list. Returns false when either index is
    /// out of range.
    pub fn remove_item(&mut self, stage: usize, list: StageList, item: usize) -> bool {
        match self.stages.get_mut(stage) {
            Some(s) if item < s.list(list).len() => {
                s.list_mut(list).remove(item);
                true
            }
            _ => false,
        }
    }
}
