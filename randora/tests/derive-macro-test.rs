#![cfg(feature = "derive")]

use std::collections::{BTreeMap, HashSet};

use randora::*;

#[derive(Generate, Debug, Clone, PartialEq)]
struct User {
    name: String,
    age: u8,
    active: bool,
    tags: HashSet<String>,
}

#[derive(Generate, Debug, Clone, PartialEq)]
struct Point(i32, i32);

#[derive(Generate, Debug, Clone, PartialEq)]
struct Unit;

#[derive(Generate, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Status {
    Active,
    Inactive,
    Suspended,
}

#[derive(Generate, Debug, Clone, PartialEq)]
enum Color {
    Red,
    Green,
    Blue,
    Custom(u8, u8, u8),
    Named { name: String, hex: u32 },
}

#[derive(Generate, Debug, Clone, PartialEq)]
struct Pair<T> {
    left: T,
    right: T,
}

#[derive(Generate, Debug, Clone, PartialEq)]
struct Account {
    owner: User,
    status: Status,
    nickname: Option<String>,
    scores: BTreeMap<u16, i64>,
}

#[test]
fn test_derive_struct_with_fields() {
    let mut rng = SplitMix::from_u64(1);
    let user = User::generate(&mut rng);

    let words = user.name.split(' ').count();
    assert!((1..10).contains(&words));
    assert!(user.tags.len() < 10);
}

#[test]
fn test_derive_is_deterministic_for_a_seed() {
    let left = Account::generate(&mut SplitMix::from_u64(42));
    let right = Account::generate(&mut SplitMix::from_u64(42));
    assert_eq!(left, right);
}

#[test]
fn test_derive_tuple_struct() {
    let mut rng = SplitMix::from_u64(2);
    let points: Vec<Point> = (0..20).map(|_| Point::generate(&mut rng)).collect();
    assert!(points.iter().any(|p| p.0 != p.1));
}

#[test]
fn test_derive_unit_struct() {
    let mut rng = SplitMix::from_u64(3);
    assert_eq!(Unit::generate(&mut rng), Unit);
}

#[test]
fn test_derive_unit_enum_reaches_every_variant() {
    let mut rng = SplitMix::from_u64(4);
    let seen = unique_sorted_set(&mut rng, Status::generate, 3);
    assert_eq!(
        seen.into_iter().collect::<Vec<_>>(),
        vec![Status::Active, Status::Inactive, Status::Suspended]
    );
}

#[test]
fn test_derive_enum_with_data() {
    let mut rng = SplitMix::from_u64(5);
    let colors: Vec<Color> = (0..200).map(|_| Color::generate(&mut rng)).collect();

    assert!(colors.iter().any(|c| matches!(c, Color::Red)));
    assert!(colors.iter().any(|c| matches!(c, Color::Custom(..))));
    assert!(colors
        .iter()
        .any(|c| matches!(c, Color::Named { name, .. } if !name.is_empty())));
}

#[test]
fn test_derive_generic_struct() {
    let mut rng = SplitMix::from_u64(6);
    let pair: Pair<u64> = Pair::generate(&mut rng);
    assert_ne!(pair.left, pair.right);
}

#[test]
fn test_derived_types_work_with_gen() {
    let mut rng = SplitMix::from_u64(7);
    let statuses = Gen::<Status>::of().set_of(10).generate(&mut rng);
    assert!(!statuses.is_empty() && statuses.len() <= 3);
}

#[test]
fn test_derived_types_work_with_attempt() {
    let mut rng = SplitMix::from_u64(8);
    let status = attempt(&mut rng, Status::generate, |s| *s != Status::Active).unwrap();
    assert_ne!(status, Status::Active);
}
