/// Waterfowl record and the query operations over a flock
///
/// The record is immutable after construction and carries a name, three
/// capability flags and a cuteness score. The operations are plain functions
/// over a slice so they compose with any collection the caller keeps.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A waterfowl with its capabilities and cuteness score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waterfowl {
    pub name: String,
    pub can_quack: bool,
    pub can_honk: bool,
    pub can_fly: bool,
    pub cuteness: f32,
}

impl Waterfowl {
    pub fn new(
        name: impl Into<String>,
        can_quack: bool,
        can_honk: bool,
        can_fly: bool,
        cuteness: f32,
    ) -> Self {
        Self {
            name: name.into(),
            can_quack,
            can_honk,
            can_fly,
            cuteness,
        }
    }

    /// The bird no real flock contains: flies, quacks, honks, and is
    /// infinitely cute. Used as the fallback when a search comes up empty.
    pub fn superpenguin() -> Self {
        Self::new("Superpenguin", true, true, true, f32::INFINITY)
    }
}

/// Scientific families, index-aligned with `sample_flock`
pub const FAMILIES: [&str; 4] = ["Anatidae", "Spheniscidae", "Larinae", "Anserinae"];

/// The fixture flock every demonstration runs against
pub fn sample_flock() -> Vec<Waterfowl> {
    vec![
        Waterfowl::new("Duck", true, false, true, 1.0),
        Waterfowl::new("Penguin", false, true, false, 999.0),
        Waterfowl::new("Gull", false, false, true, 0.1),
        Waterfowl::new("Goose", true, true, true, 1.0),
    ]
}

/// First occurrence per distinct cuteness score, in flock order.
///
/// Scores are keyed bitwise (`f32::to_bits`) since `f32` has no `Eq`/`Hash`;
/// the fixture never needs `-0.0`/`0.0` or NaN folding.
pub fn distinct_by_cuteness(flock: &[Waterfowl]) -> Vec<&Waterfowl> {
    let mut seen = HashSet::new();
    flock
        .iter()
        .filter(|bird| seen.insert(bird.cuteness.to_bits()))
        .collect()
}

/// The bird with the highest cuteness score, or `None` for an empty flock
pub fn most_cute(flock: &[Waterfowl]) -> Option<&Waterfowl> {
    flock
        .iter()
        .max_by(|a, b| a.cuteness.total_cmp(&b.cuteness))
}

/// The flock split into numbered pages of `page_size` birds.
///
/// The final page may hold fewer birds. A zero page size is treated as one.
pub fn pages<'a>(
    flock: &'a [Waterfowl],
    page_size: usize,
) -> impl Iterator<Item = (usize, &'a [Waterfowl])> + 'a {
    flock.chunks(page_size.max(1)).enumerate()
}

/// First flying bird cuter than `min_cuteness`, falling back to the
/// superpenguin when no real bird qualifies
pub fn first_flying_cuter_than(flock: &[Waterfowl], min_cuteness: f32) -> Waterfowl {
    flock
        .iter()
        .find(|bird| bird.can_fly && bird.cuteness > min_cuteness)
        .cloned()
        .unwrap_or_else(Waterfowl::superpenguin)
}

/// Pairs each bird with its scientific family as `"name: family"`.
///
/// Zip semantics: extra birds or extra families are dropped.
pub fn with_families(flock: &[Waterfowl], families: &[&str]) -> Vec<String> {
    flock
        .iter()
        .zip(families)
        .map(|(bird, family)| format!("{}: {}", bird.name, family))
        .collect()
}

/// Every bird except the last one
pub fn all_but_last(flock: &[Waterfowl]) -> &[Waterfowl] {
    &flock[..flock.len().saturating_sub(1)]
}
