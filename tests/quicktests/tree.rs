use ordered_tree::{Tree, TreeError};

use std::collections::HashSet;

fn build(xs: &[i8]) -> Tree<i8, i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x, *x);
    }

    tree
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.find(x) == Ok(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x) == Err(TreeError::KeyNotFound))
    }

    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        for remove in &removes {
            // We may have inserted the same value multiple times - remove each one.
            while tree.remove(remove).is_ok() {}
        }

        let mut still_present = xs;
        for remove in &removes {
            while let Some(pos) = still_present.iter().position(|x| x == remove) {
                still_present.swap_remove(pos);
            }
        }

        tree.len() == still_present.len()
            && removes.iter().all(|x| tree.find(x).is_err())
            && still_present.iter().all(|x| tree.find(x) == Ok(x))
    }

    fn unique_keys_are_valid(xs: HashSet<i8>) -> bool {
        let xs: Vec<_> = xs.into_iter().collect();
        let tree = build(&xs);

        tree.is_valid() && tree.height() <= tree.len()
    }

    fn removing_everything_empties_the_tree(xs: HashSet<i8>) -> bool {
        let xs: Vec<_> = xs.into_iter().collect();
        let mut tree = build(&xs);
        let mut removed_values = Vec::new();
        for x in xs.iter().rev() {
            match tree.remove(x) {
                Ok(value) => removed_values.push(value),
                Err(_) => return false,
            }
            if !tree.is_valid() {
                return false;
            }
        }

        tree.is_empty() && tree.root().is_none() && removed_values.iter().rev().eq(xs.iter())
    }

    fn parents_point_back(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        for remove in &removes {
            let _ = tree.remove(remove);
        }

        tree.root().map_or(true, |root| root.parent().is_none() && children_point_back(root))
    }
}

fn children_point_back(node: &ordered_tree::Node<i8, i8>) -> bool {
    [node.left(), node.right()].iter().flatten().all(|child| {
        child.parent().map_or(false, |parent| std::ptr::eq(parent, node))
            && children_point_back(child)
    })
}
