//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the FileSystem boundary trait but are themselves
//! concrete structs, not traits.

mod materializer;
mod words;

pub use materializer::{
    MaterializeOptions, MaterializeService, TimestampJitter, DEFAULT_WINDOW_DAYS,
};
pub use words::WordSource;
