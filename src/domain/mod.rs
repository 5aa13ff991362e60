//! Domain layer: entities and tree logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod journey;
pub mod node;
pub mod styleguide;

pub use arena::{NodeData, SiteTree, TreeNode};
pub use error::DomainError;
pub use journey::{JourneyMap, JourneyStage, StageList};
pub use node::{NodeKind, NodeRef, SiteNode};
pub use styleguide::{ColorGroup, ColorSwatch, StyleGuide, TypeRule};
