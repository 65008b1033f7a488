//! Infrastructure adapters for Kindling.
//!
//! Implements the driven ports defined in `kindling_core::application::ports`
//! and provides the built-in starter blueprint.

pub mod blueprint;
pub mod filesystem;
pub mod process;
pub mod walk;

pub use blueprint::starter_blueprint;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ScriptedProcessRunner, SystemProcessRunner};
pub use walk::collect_files;
