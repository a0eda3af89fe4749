//! Tree planner: recursive randomized tree generation
//!
//! Planning is pure. The planner reads names from a [`NamePool`] and builds
//! a [`TreeNode`] value; randomness comes from a caller-supplied generator,
//! so a seeded run is fully reproducible.

use rand::Rng;

use crate::domain::entities::{NamePool, TreeNode};
use crate::domain::error::DomainResult;

/// Names drawn per directory, without replacement.
pub const SAMPLE_SIZE: usize = 10;
/// Of each sample, how many names become files.
pub const FILES_PER_LEVEL: usize = 7;
/// Of each sample, how many names become subdirectories while depth remains.
pub const DIRS_PER_LEVEL: usize = 3;

/// Plans randomized fixture trees from a name pool.
pub struct TreePlanner<'a> {
    pool: &'a NamePool,
}

impl<'a> TreePlanner<'a> {
    pub fn new(pool: &'a NamePool) -> Self {
        Self { pool }
    }

    /// Plan one directory named `name` with `depth` levels below it.
    ///
    /// Each directory draws [`SAMPLE_SIZE`] distinct names: the first
    /// [`FILES_PER_LEVEL`] become files, the rest become subdirectories
    /// planned with `depth - 1`. At depth 0 the directory names are simply
    /// not drawn into the plan, so leaves hold files only.
    ///
    /// Names are distinct among siblings but may repeat on other levels,
    /// since every directory samples from the full pool again.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        name: &str,
        depth: u32,
        rng: &mut R,
    ) -> DomainResult<TreeNode> {
        let sample = self.pool.sample(SAMPLE_SIZE, rng)?;
        let (file_names, dir_names) = sample.split_at(FILES_PER_LEVEL);

        let mut children: Vec<TreeNode> = file_names
            .iter()
            .map(|n| TreeNode::File {
                name: (*n).to_string(),
            })
            .collect();

        if depth > 0 {
            for dir_name in dir_names {
                children.push(self.plan(dir_name, depth - 1, rng)?);
            }
        }

        Ok(TreeNode::Directory {
            name: name.to_string(),
            children,
        })
    }
}

/// Directories a plan of `depth` produces, root included.
pub fn expected_directories(depth: u32) -> u64 {
    (0..=depth)
        .map(|level| (DIRS_PER_LEVEL as u64).pow(level))
        .sum()
}

/// Files a plan of `depth` produces.
pub fn expected_files(depth: u32) -> u64 {
    FILES_PER_LEVEL as u64 * expected_directories(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_closed_form_when_evaluated_then_matches_geometric_series() {
        assert_eq!(expected_directories(0), 1);
        assert_eq!(expected_directories(1), 4);
        assert_eq!(expected_directories(3), 40);
        assert_eq!(expected_files(0), 7);
        assert_eq!(expected_files(3), 280);
    }
}
