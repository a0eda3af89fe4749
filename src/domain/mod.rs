//! Domain layer: entities and planning logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Randomness is injected by the caller.

pub mod entities;
pub mod error;
pub mod planner;

pub use entities::{compose_path, NamePool, TreeNode};
pub use error::{DomainError, DomainResult};
pub use planner::{TreePlanner, DIRS_PER_LEVEL, FILES_PER_LEVEL, SAMPLE_SIZE};
