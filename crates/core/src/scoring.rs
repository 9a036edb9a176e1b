//! Scoring module - category points for a hand of five dice
//!
//! Everything here is a pure function of the dice: no scorecard state, no
//! bonuses. The upper bonus, bonus Yahtzees and the joker rule are applied by
//! [`crate::scorecard::Scorecard`].

use crate::types::{
    Category, Dice, CATEGORY_COUNT, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE,
    YAHTZEE_SCORE,
};

/// Runs of four that make a small straight.
const SMALL_STRAIGHT_RUNS: [[u8; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];

/// Face counts indexed by value; index 0 is unused.
pub fn face_counts(dice: &Dice) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &d in dice {
        if let Some(c) = counts.get_mut(d as usize) {
            *c += 1;
        }
    }
    counts
}

fn sum(dice: &Dice) -> u16 {
    dice.iter().map(|&d| d as u16).sum()
}

fn has_of_a_kind(counts: &[u8; 7], n: u8) -> bool {
    counts[1..].iter().any(|&c| c >= n)
}

/// Both a pair and a triple (exact counts), so five of a kind is not a full house.
pub fn is_full_house(dice: &Dice) -> bool {
    let counts = face_counts(dice);
    counts[1..].contains(&2) && counts[1..].contains(&3)
}

pub fn is_small_straight(dice: &Dice) -> bool {
    let counts = face_counts(dice);
    SMALL_STRAIGHT_RUNS
        .iter()
        .any(|run| run.iter().all(|&v| counts[v as usize] > 0))
}

pub fn is_large_straight(dice: &Dice) -> bool {
    let mut sorted = *dice;
    sorted.sort_unstable();
    sorted == [1, 2, 3, 4, 5] || sorted == [2, 3, 4, 5, 6]
}

/// All five dice show the same face.
pub fn is_yahtzee(dice: &Dice) -> bool {
    dice.iter().all(|&d| d == dice[0])
}

/// Points `dice` would earn in `category`.
///
/// # Examples
///
/// ```
/// use tui_yahtzee_core::scoring::score;
/// use tui_yahtzee_core::types::Category;
///
/// assert_eq!(score(&[3, 3, 3, 5, 6], Category::Threes), 9);
/// assert_eq!(score(&[2, 2, 3, 3, 3], Category::FullHouse), 25);
/// assert_eq!(score(&[1, 2, 3, 4, 6], Category::LargeStraight), 0);
/// ```
pub fn score(dice: &Dice, category: Category) -> u16 {
    if let Some(face) = category.face() {
        let n = dice.iter().filter(|&&d| d == face).count() as u16;
        return face as u16 * n;
    }

    let counts = face_counts(dice);
    match category {
        Category::ThreeOfAKind if has_of_a_kind(&counts, 3) => sum(dice),
        Category::FourOfAKind if has_of_a_kind(&counts, 4) => sum(dice),
        Category::FullHouse if is_full_house(dice) => FULL_HOUSE_SCORE,
        Category::SmallStraight if is_small_straight(dice) => SMALL_STRAIGHT_SCORE,
        Category::LargeStraight if is_large_straight(dice) => LARGE_STRAIGHT_SCORE,
        Category::Yahtzee if is_yahtzee(dice) => YAHTZEE_SCORE,
        Category::Chance => sum(dice),
        _ => 0,
    }
}

/// Scores for every category, in [`Category::ALL`] order.
pub fn scores_for_dice(dice: &Dice) -> [u16; CATEGORY_COUNT] {
    let mut out = [0u16; CATEGORY_COUNT];
    for (slot, cat) in out.iter_mut().zip(Category::ALL) {
        *slot = score(dice, cat);
    }
    out
}
