use ordered_tree::{query, Node, Tree};

fn build(xs: &[u8]) -> Tree<u8, ()> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert_key(*x);
    }

    tree
}

/// Whether two trees have the same shape with the same key in every position.
fn same_shape(a: Option<&Node<u8, ()>>, b: Option<&Node<u8, ()>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.key() == b.key()
                && same_shape(a.left(), b.left())
                && same_shape(a.right(), b.right())
        }
        _ => false,
    }
}

quickcheck::quickcheck! {
    fn same_structure_matches_built_trees(xs: Vec<u8>, ys: Vec<u8>) -> bool {
        // Small keys make equal roots (and thus interesting comparisons) likely.
        let xs: Vec<u8> = xs.into_iter().map(|x| x % 4).collect();
        let ys: Vec<u8> = ys.into_iter().map(|y| y % 4).collect();

        query::same_structure_from_sequences(&xs, &ys)
            == same_shape(build(&xs).root(), build(&ys).root())
    }

    fn height_bounds(xs: Vec<u8>) -> bool {
        let tree = build(&xs);
        let height = query::height(tree.root());

        (xs.is_empty() == (height == 0)) && height <= xs.len()
    }

    fn balanced_root_matches_subtree_heights(xs: Vec<u8>) -> bool {
        let tree = build(&xs);
        let balanced = match tree.root() {
            None => true,
            Some(root) => {
                let left = query::height(root.left()) as isize;
                let right = query::height(root.right()) as isize;
                (left - right).abs() <= 1
            }
        };

        query::is_balanced(tree.root()) == balanced
    }
}

#[test]
fn exercise_sequences() {
    assert!(query::same_structure_from_sequences(
        &[3, 5, 4, 6, 1, 0, 2],
        &[3, 1, 5, 2, 4, 6, 0]
    ));
    assert!(!query::same_structure_from_sequences(
        &[3, 2, 5, 4, 6, 1, 0],
        &[3, 1, 5, 2, 4, 6, 0]
    ));

    assert!(same_shape(
        build(&[3, 5, 4, 6, 1, 0, 2]).root(),
        build(&[3, 1, 5, 2, 4, 6, 0]).root()
    ));
}
