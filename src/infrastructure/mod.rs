//! Infrastructure layer: I/O boundary traits and real implementations

pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use traits::{ContentSource, FileSource, FileSystem, RealFileSystem, StdinSource};
