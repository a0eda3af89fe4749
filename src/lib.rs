//! fixtree: randomized directory-tree fixtures
//!
//! Plans a randomized tree of empty files and subdirectories from a word
//! list, then materializes it on the filesystem. Optionally the access and
//! modification times of created entries are scrambled within a bounded
//! window around a startup-captured now.
//!
//! The crate follows a layered architecture:
//! - [`domain`]: pure planning logic (no I/O, randomness injected)
//! - [`application`]: services orchestrating domain logic over I/O traits
//! - [`infrastructure`]: real filesystem and dependency wiring
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
