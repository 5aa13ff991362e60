//! uxforge: turn structured generation payloads into editable, exportable
//! design artifacts.
//!
//! Three document types: an information-architecture sitemap (laid out by a
//! real tree layout engine and exported as SVG), a user journey map, and a
//! design-system style guide (both flat models exported as Markdown).
//!
//! Layering:
//! - [`domain`] — entities and pure tree logic
//! - [`layout`] — sitemap geometry
//! - [`render`] — pure projections into SVG/Markdown/terminal output
//! - [`application`] — services orchestrating domain + I/O boundaries
//! - [`infrastructure`] — boundary traits and real implementations
//! - [`cli`] — argument parsing and dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod layout;
pub mod render;
pub mod util;
