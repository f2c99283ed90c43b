use binary_search_tree::BinarySearchTree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and to a plain `Vec` of the same values.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, model: &mut Vec<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                model.push(v.clone());
            }
            Op::Delete(v) => {
                let found = bst.delete(v);
                match model.iter().position(|x| x == v) {
                    Some(pos) => {
                        assert!(found);
                        model.swap_remove(pos);
                    }
                    None => assert!(!found),
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    model.sort();
    tree.len() == model.len() && tree.in_order().into_iter().eq(model.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn delete_present_removes_exactly_one(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let target = xs[pick % xs.len()];
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort();
    let pos = expected.iter().position(|x| *x == target).unwrap();
    expected.remove(pos);

    tree.delete(&target) && tree.in_order().into_iter().eq(expected.iter())
}

#[quickcheck]
fn delete_missing_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    if xs.contains(&missing) {
        return true;
    }
    let mut tree: BinarySearchTree<_> = xs.into_iter().collect();
    let before = tree.clone();

    !tree.delete(&missing) && tree.root() == before.root()
}

#[quickcheck]
fn delete_everything_empties_tree(xs: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.delete(x)) && tree.is_empty() && tree.in_order().is_empty()
}

#[quickcheck]
fn minimum_and_maximum_match_sorted_values(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    tree.minimum().ok().map(|n| n.value()) == xs.iter().min()
        && tree.maximum().ok().map(|n| n.value()) == xs.iter().max()
}
