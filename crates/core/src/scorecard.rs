//! Scorecard module - one player's write-once ledger
//!
//! Each category is written at most once. Writing a category also keeps the
//! subtotals, the upper bonus, the plus/minus pace indicator and the bonus
//! Yahtzee counter up to date, so every observation is valid at any point in
//! the game.

use serde::Serialize;

use crate::scoring;
use crate::types::{
    Category, Dice, CATEGORY_COUNT, UPPER_BONUS, UPPER_BONUS_THRESHOLD, YAHTZEE_BONUS,
    YAHTZEE_BONUS_INCREMENTS,
};

/// Dice a bonus Yahtzee is scored as in a joker category.
///
/// Each hand satisfies its category, so the fixed category score applies.
fn joker_dice(category: Category) -> Option<Dice> {
    if !category.is_joker() {
        return None;
    }
    Some(match category {
        Category::FullHouse => [1, 1, 2, 2, 2],
        Category::SmallStraight => [1, 2, 3, 4, 6],
        _ => [1, 2, 3, 4, 5],
    })
}

/// What a successful [`Scorecard::update_score`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub category: Category,
    /// Points written into the category (excludes bonuses).
    pub category_score: u16,
    /// A bonus Yahtzee was awarded (+100 lower).
    pub yahtzee_bonus: bool,
    /// The joker rule replaced the scoring dice.
    pub joker: bool,
    /// This write pushed the upper subtotal over the bonus threshold.
    pub upper_bonus: bool,
}

/// Per-player ledger of category scores, subtotals and bonuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    scores: [Option<u16>; CATEGORY_COUNT],
    /// Sorted dice each category was scored with (the true roll, even for jokers).
    throws: [Option<Dice>; CATEGORY_COUNT],
    /// Upper section total, including the bonus once applied.
    upper_sub: u16,
    /// Lower section total, including bonus Yahtzees.
    lower_sub: u16,
    upper_bonus: bool,
    /// Running sum of (score - par) over scored upper categories.
    plus_minus: i16,
    yahtzee_bonus: u8,
    total: u16,
}

impl Scorecard {
    pub fn new() -> Self {
        Self {
            scores: [None; CATEGORY_COUNT],
            throws: [None; CATEGORY_COUNT],
            upper_sub: 0,
            lower_sub: 0,
            upper_bonus: false,
            plus_minus: 0,
            yahtzee_bonus: 0,
            total: 0,
        }
    }

    pub fn is_used(&self, category: Category) -> bool {
        self.scores[category.index()].is_some()
    }

    /// Score `dice` into `category`.
    ///
    /// Returns `None` and changes nothing if the category is already scored;
    /// that check happens before any bonus Yahtzee or joker handling.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_yahtzee_core::Scorecard;
    /// use tui_yahtzee_core::types::Category;
    ///
    /// let mut card = Scorecard::new();
    /// card.update_score(&[6, 6, 6, 6, 6], Category::Yahtzee);
    ///
    /// // A second Yahtzee in Full House: joker score plus the 100 bonus.
    /// let result = card.update_score(&[4, 4, 4, 4, 4], Category::FullHouse).unwrap();
    /// assert_eq!(result.category_score, 25);
    /// assert!(result.yahtzee_bonus);
    /// assert_eq!(card.final_tally(), 50 + 25 + 100);
    ///
    /// // Write-once.
    /// assert!(card.update_score(&[1, 1, 2, 2, 2], Category::FullHouse).is_none());
    /// ```
    pub fn update_score(&mut self, dice: &Dice, category: Category) -> Option<ScoreResult> {
        if self.is_used(category) {
            return None;
        }

        let mut scoring_dice = *dice;
        let mut yahtzee_bonus = false;
        let mut joker = false;

        if scoring::is_yahtzee(dice) && self.scores[Category::Yahtzee.index()].unwrap_or(0) > 0 {
            yahtzee_bonus = true;
            self.yahtzee_bonus = self.yahtzee_bonus.saturating_add(YAHTZEE_BONUS_INCREMENTS);
            self.lower_sub += YAHTZEE_BONUS;
            if let Some(forced) = joker_dice(category) {
                scoring_dice = forced;
                joker = true;
            }
        }

        let slot = category.index();
        if self.throws[slot].is_none() {
            let mut sorted = *dice;
            sorted.sort_unstable();
            self.throws[slot] = Some(sorted);
        }

        let score = scoring::score(&scoring_dice, category);
        self.scores[slot] = Some(score);

        if let Some(par) = category.par() {
            self.plus_minus += score as i16 - par;
            self.upper_sub += score;
        } else {
            self.lower_sub += score;
        }

        let mut upper_bonus = false;
        if !self.upper_bonus && self.upper_sub >= UPPER_BONUS_THRESHOLD {
            self.upper_bonus = true;
            self.upper_sub += UPPER_BONUS;
            upper_bonus = true;
        }

        self.total = self.upper_sub + self.lower_sub;

        Some(ScoreResult {
            category,
            category_score: score,
            yahtzee_bonus,
            joker,
            upper_bonus,
        })
    }

    /// Current total; the final score once every category is written.
    pub fn final_tally(&self) -> u16 {
        self.total
    }

    /// Upper-section pace versus par: "even", "up N" or "down N".
    pub fn plus_minus_label(&self) -> String {
        match self.plus_minus {
            0 => "even".to_string(),
            n if n > 0 => format!("up {}", n),
            n => format!("down {}", n.unsigned_abs()),
        }
    }

    pub fn score(&self, category: Category) -> Option<u16> {
        self.scores[category.index()]
    }

    /// Sorted dice the category was scored with.
    pub fn throw(&self, category: Category) -> Option<Dice> {
        self.throws[category.index()]
    }

    pub fn upper_subtotal(&self) -> u16 {
        self.upper_sub
    }

    pub fn lower_subtotal(&self) -> u16 {
        self.lower_sub
    }

    pub fn has_upper_bonus(&self) -> bool {
        self.upper_bonus
    }

    pub fn plus_minus(&self) -> i16 {
        self.plus_minus
    }

    pub fn yahtzee_bonus_count(&self) -> u8 {
        self.yahtzee_bonus
    }

    /// Unscored categories, in scorecard order.
    pub fn unused(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| !self.is_used(*c))
    }

    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::new()
    }
}
