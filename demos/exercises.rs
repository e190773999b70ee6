//! Builds the two exercise trees and prints what the query functions say about them.
//!
//! Run with `cargo run --example exercises`.

use ordered_tree::{query, Tree, TreeError};

fn main() -> Result<(), TreeError> {
    let mut numbers: Tree<i32, ()> = Tree::new();
    for key in [3, 1, 4, 6, 9, 2, 5, 7] {
        numbers.insert_key(key);
    }
    report("3 1 4 6 9 2 5 7", &numbers);

    // Repeated letters land to the right of their first occurrence.
    let mut letters: Tree<char, ()> = Tree::new();
    for key in "EASYQUESTION".chars() {
        letters.insert_key(key);
    }
    report("E A S Y Q U E S T I O N", &letters);

    numbers.remove(&4)?;
    numbers.remove(&3)?;
    println!("after removing 4 and 3: {:?}", numbers.root().map(|n| n.key()));
    report("3 1 4 6 9 2 5 7 without 3 and 4", &numbers);

    let pairs: [(&[i32], &[i32]); 2] = [
        (&[3, 5, 4, 6, 1, 0, 2], &[3, 1, 5, 2, 4, 6, 0]),
        (&[3, 2, 5, 4, 6, 1, 0], &[3, 1, 5, 2, 4, 6, 0]),
    ];
    for &(a, b) in pairs.iter() {
        println!(
            "{:?} and {:?} build the same tree: {}",
            a,
            b,
            query::same_structure_from_sequences(a, b)
        );
    }

    let mut weights = Tree::new();
    for (key, weight) in [(2, 20), (1, 10), (3, 30)] {
        weights.insert(key, weight);
    }
    println!("sum of weights: {}", query::sum_values(weights.root()));

    Ok(())
}

fn report<K>(name: &str, tree: &Tree<K, ()>)
where
    K: Ord + std::fmt::Debug,
{
    println!("tree {}", name);
    println!("  nodes:         {}", tree.len());
    println!("  height:        {}", tree.height());
    println!("  valid BST:     {}", tree.is_valid());
    println!("  root balanced: {}", tree.is_balanced());
    println!(
        "  right spine:   {:?}",
        tree.third_largest().map(|n| n.key())
    );
}
