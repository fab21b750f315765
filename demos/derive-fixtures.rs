//! Derive `Generate` for fixture types and build a keyed catalog.
//!
//! Run with `cargo run --example derive-fixtures --features derive`.

use std::collections::HashSet;

use randora::*;

#[derive(Generate, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Category {
    Books,
    Garden,
    Kitchen,
    Toys,
}

#[derive(Generate, Debug)]
struct Product {
    name: String,
    category: Category,
    price_cents: u32,
    tags: HashSet<String>,
    discontinued: Option<bool>,
}

fn main() {
    let mut rng = SplitMix::from_u64(shared_seed());
    println!("seed: {}", shared_seed());

    let catalog = unique_sorted_map(&mut rng, Category::generate, Product::generate, 10);
    for (category, product) in &catalog {
        println!("{category:?}: {product:?}");
    }
}
