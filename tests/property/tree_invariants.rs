//! Property-based tests for create/move/delete invariants

use arbor::tree::Tree;
use proptest::prelude::*;

/// A path of 1..4 lowercase segments. The alphabet stops at `m` so tests
/// can pick segment names outside it that are guaranteed absent.
fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-m]{1,6}", 1..4).prop_map(|segments| segments.join("/"))
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
    prop::collection::vec(path_strategy(), 0..8).prop_map(|paths| {
        let mut tree = Tree::new();
        for path in &paths {
            tree.create(path);
        }
        tree
    })
}

#[test]
fn test_create_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(tree_strategy(), path_strategy()), |(mut tree, path)| {
            tree.create(&path);
            let snapshot = tree.clone();
            tree.create(&path);

            prop_assert_eq!(&tree, &snapshot);
            prop_assert_eq!(tree.list(), snapshot.list());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_create_then_delete_restores_when_prefix_existed() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(tree_strategy(), path_strategy()), |(mut tree, path)| {
            // Pre-create the prefix so only the leaf is new.
            if let Some((prefix, _)) = path.rsplit_once('/') {
                tree.create(prefix);
            }
            // Delete first in case the leaf itself already existed.
            let _ = tree.delete(&path);
            let snapshot = tree.clone();

            tree.create(&path);
            tree.delete(&path).map_err(|e| {
                proptest::test_runner::TestCaseError::fail(e.to_string())
            })?;

            prop_assert_eq!(&tree, &snapshot);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_failed_move_only_materializes_destination() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&tree_strategy(), |mut tree| {
            prop_assume!(!tree.root().is_empty());

            let parent: String = tree
                .root()
                .children()
                .map(|(name, _)| name.to_string())
                .next()
                .ok_or_else(|| proptest::test_runner::TestCaseError::reject("empty"))?;
            let snapshot = tree.clone();

            // "zz" is outside the generation alphabet, so the item cannot
            // exist; the destination segment cannot either.
            let source = format!("{parent}/zz");
            let result = tree.move_node(&source, "zzdest");
            prop_assert!(result.is_err());

            let mut expected: Vec<String> = snapshot.list();
            expected.push("zzdest".to_string());
            prop_assert_eq!(tree.list(), expected);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_move_relocates_exactly_the_source_subtree() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(path_strategy(), 1..6),
            |subtree_paths| {
                let mut tree = Tree::new();
                for path in &subtree_paths {
                    tree.create(&format!("zzsource/{path}"));
                }
                tree.create("zzdest");

                let original = tree.root().child("zzsource").cloned();

                tree.move_node("zzsource", "zzdest").map_err(|e| {
                    proptest::test_runner::TestCaseError::fail(e.to_string())
                })?;

                let relocated = tree
                    .root()
                    .child("zzdest")
                    .and_then(|d| d.child("zzsource"))
                    .cloned();
                prop_assert_eq!(relocated, original);
                prop_assert!(!tree.root().contains("zzsource"));
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_delete_of_absent_path_is_identity() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&tree_strategy(), |mut tree| {
            let snapshot = tree.clone();

            prop_assert!(tree.delete("zz/zz").is_err());
            prop_assert_eq!(&tree, &snapshot);
            prop_assert_eq!(tree.list(), snapshot.list());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_serialization_round_trip_preserves_tree_and_order() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&tree_strategy(), |tree| {
            let json = serde_json::to_string_pretty(tree.root())
                .map_err(|e| proptest::test_runner::TestCaseError::fail(e.to_string()))?;
            let root = serde_json::from_str(&json)
                .map_err(|e| proptest::test_runner::TestCaseError::fail(e.to_string()))?;
            let reloaded = Tree::from_root(root);

            prop_assert_eq!(&reloaded, &tree);
            prop_assert_eq!(reloaded.list(), tree.list());
            Ok(())
        })
        .unwrap();
}
