//! Tests for TreePlanner

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

use fixtree::domain::{
    planner, DomainError, NamePool, TreeNode, TreePlanner, DIRS_PER_LEVEL, FILES_PER_LEVEL,
    SAMPLE_SIZE,
};

/// Helper to build a pool of n distinct names
fn pool_of(n: usize) -> NamePool {
    NamePool::new((0..n).map(|i| format!("word{i:02}")))
}

/// Count direct children of a directory node, split into (files, dirs)
fn count_children(node: &TreeNode) -> (usize, usize) {
    match node {
        TreeNode::Directory { children, .. } => {
            let files = children.iter().filter(|c| !c.is_dir()).count();
            let dirs = children.iter().filter(|c| c.is_dir()).count();
            (files, dirs)
        }
        TreeNode::File { .. } => panic!("expected a directory"),
    }
}

/// Assert the planned shape at every level: 7 files, and 3 subdirectories
/// while depth remains
fn assert_shape(node: &TreeNode, remaining_depth: u32) {
    let (files, dirs) = count_children(node);
    assert_eq!(files, FILES_PER_LEVEL, "files under {}", node.name());
    let expected_dirs = if remaining_depth == 0 {
        0
    } else {
        DIRS_PER_LEVEL
    };
    assert_eq!(dirs, expected_dirs, "dirs under {}", node.name());

    if let TreeNode::Directory { children, .. } = node {
        for child in children.iter().filter(|c| c.is_dir()) {
            assert_shape(child, remaining_depth - 1);
        }
    }
}

#[test]
fn given_default_depth_when_planning_then_every_level_has_seven_files_three_dirs() {
    // Arrange
    let pool = pool_of(30);
    let mut rng = StdRng::seed_from_u64(7);

    // Act
    let tree = TreePlanner::new(&pool).plan("files", 3, &mut rng).unwrap();

    // Assert
    assert_eq!(tree.name(), "files");
    assert_shape(&tree, 3);
}

#[test]
fn given_depth_zero_when_planning_then_root_holds_only_files() {
    // Arrange
    let pool = pool_of(12);
    let mut rng = StdRng::seed_from_u64(1);

    // Act
    let tree = TreePlanner::new(&pool).plan("files", 0, &mut rng).unwrap();

    // Assert
    let (files, dirs) = count_children(&tree);
    assert_eq!(files, FILES_PER_LEVEL);
    assert_eq!(dirs, 0);
}

#[test]
fn given_pool_of_nine_when_planning_then_insufficient_pool() {
    // Arrange
    let pool = pool_of(9);
    let mut rng = StdRng::seed_from_u64(1);

    // Act
    let err = TreePlanner::new(&pool)
        .plan("files", 3, &mut rng)
        .unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::InsufficientPool {
            available: 9,
            required: SAMPLE_SIZE,
        }
    );
}

#[test]
fn given_pool_of_exactly_ten_when_planning_then_succeeds() {
    // Arrange - minimal viable pool: every level draws all ten names
    let pool = pool_of(10);
    let mut rng = StdRng::seed_from_u64(5);

    // Act
    let tree = TreePlanner::new(&pool).plan("files", 2, &mut rng).unwrap();

    // Assert
    assert_shape(&tree, 2);
}

#[test]
fn given_planned_level_when_inspecting_names_then_siblings_are_distinct() {
    // Arrange
    let pool = pool_of(15);
    let mut rng = StdRng::seed_from_u64(23);

    // Act
    let tree = TreePlanner::new(&pool).plan("files", 1, &mut rng).unwrap();

    // Assert - the ten drawn names of the root level never collide
    if let TreeNode::Directory { children, .. } = &tree {
        let names: HashSet<&str> = children.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), SAMPLE_SIZE);
    } else {
        panic!("expected a directory");
    }
}

#[test]
fn given_same_seed_when_planning_twice_then_trees_are_identical() {
    // Arrange
    let pool = pool_of(30);
    let planner = TreePlanner::new(&pool);

    // Act
    let mut rng_a = StdRng::seed_from_u64(42);
    let tree_a = planner.plan("files", 3, &mut rng_a).unwrap();
    let mut rng_b = StdRng::seed_from_u64(42);
    let tree_b = planner.plan("files", 3, &mut rng_b).unwrap();

    // Assert
    assert_eq!(tree_a, tree_b);
}

#[test]
fn given_planned_tree_when_measuring_depth_then_root_adds_one_level() {
    // Arrange - depth counts directory levels, so a plan of 3 yields 4
    let pool = pool_of(30);
    let mut rng = StdRng::seed_from_u64(3);

    // Act
    let tree = TreePlanner::new(&pool).plan("files", 3, &mut rng).unwrap();

    // Assert
    assert_eq!(tree.depth(), 4);
}

// ============================================================
// Closed-form count tests
// ============================================================

#[rstest]
#[case(0, 1, 7)]
#[case(1, 4, 28)]
#[case(2, 13, 91)]
#[case(3, 40, 280)]
fn given_depth_when_counting_then_matches_closed_form(
    #[case] depth: u32,
    #[case] dirs: u64,
    #[case] files: u64,
) {
    // Arrange
    let pool = pool_of(30);
    let mut rng = StdRng::seed_from_u64(11);

    // Act
    let tree = TreePlanner::new(&pool)
        .plan("files", depth, &mut rng)
        .unwrap();

    // Assert - the realized tree matches the closed forms
    assert_eq!(tree.dir_count() as u64, dirs);
    assert_eq!(tree.file_count() as u64, files);
    assert_eq!(planner::expected_directories(depth), dirs);
    assert_eq!(planner::expected_files(depth), files);
}
