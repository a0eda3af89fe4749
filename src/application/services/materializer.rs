//! Tree materializer service
//!
//! Realizes a planned tree on the filesystem: directories and empty files,
//! created in plan order, optionally with scrambled access/modification
//! times. Creation is not transactional; on failure, entries created so
//! far stay on disk.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use rand::Rng;
use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{compose_path, TreeNode};
use crate::infrastructure::traits::FileSystem;

/// Seconds per day, for window arithmetic.
const SECS_PER_DAY: u64 = 86_400;

/// Default half-width of the timestamp window, in days.
pub const DEFAULT_WINDOW_DAYS: u64 = 1000;

/// Timestamp scrambling parameters.
///
/// `now` is captured once by the caller and shared by every entry of a
/// run; only the per-entry offset varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampJitter {
    now: SystemTime,
    window: Duration,
}

impl TimestampJitter {
    pub fn new(now: SystemTime, window: Duration) -> Self {
        Self { now, window }
    }

    /// Window spanning `days` days on either side of `now`.
    pub fn days(now: SystemTime, days: u64) -> Self {
        Self::new(now, Duration::from_secs(days.saturating_mul(SECS_PER_DAY)))
    }

    /// Half-width of the window in whole seconds.
    fn window_secs(&self) -> i64 {
        self.window.as_secs().min(i64::MAX as u64) as i64
    }

    /// Draw one timestamp: `now + offset` with the offset uniform over the
    /// integer seconds in `[-window, +window]`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SystemTime {
        let window = self.window_secs();
        let offset = rng.random_range(-window..=window);
        if offset >= 0 {
            self.now + Duration::from_secs(offset as u64)
        } else {
            self.now - Duration::from_secs(offset.unsigned_abs())
        }
    }
}

/// Materializer configuration, passed in explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterializeOptions {
    /// Scramble timestamps of created entries; `None` leaves them alone.
    pub timestamps: Option<TimestampJitter>,
}

/// Service that creates planned trees on disk.
pub struct MaterializeService {
    fs: Arc<dyn FileSystem>,
    options: MaterializeOptions,
}

impl MaterializeService {
    /// Create a new materializer.
    pub fn new(fs: Arc<dyn FileSystem>, options: MaterializeOptions) -> Self {
        Self { fs, options }
    }

    /// Create `node` under `base` (the working directory when `None`).
    ///
    /// Every target path must be vacant; an occupied path fails the run
    /// with the underlying `AlreadyExists`. A directory's timestamp is
    /// written after its children, otherwise creating the children would
    /// overwrite it.
    pub fn materialize<R: Rng + ?Sized>(
        &self,
        node: &TreeNode,
        base: Option<&Path>,
        rng: &mut R,
    ) -> ApplicationResult<()> {
        match node {
            TreeNode::File { name } => {
                let path = compose_path(base, name);
                self.fs
                    .create_file(&path)
                    .with_path_context("create file", &path)?;
                self.scramble_times(&path, rng)
            }
            TreeNode::Directory { name, children } => {
                let path = compose_path(base, name);
                debug!("materialize: mkdir {}", path.display());
                self.fs
                    .create_dir(&path)
                    .with_path_context("create directory", &path)?;
                for child in children {
                    self.materialize(child, Some(&path), rng)?;
                }
                self.scramble_times(&path, rng)
            }
        }
    }

    fn scramble_times<R: Rng + ?Sized>(&self, path: &Path, rng: &mut R) -> ApplicationResult<()> {
        if let Some(jitter) = self.options.timestamps {
            let stamp = jitter.sample(rng);
            self.fs
                .set_file_times(path, stamp, stamp)
                .with_path_context("set file times", path)?;
        }
        Ok(())
    }
}
