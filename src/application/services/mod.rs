//! Application services

pub mod export;
pub mod generation;

pub use export::ExportService;
pub use generation::GenerationService;
