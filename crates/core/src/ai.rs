//! Bot module - the greedy computer player
//!
//! One fixed policy, no lookahead:
//! 1. Roll all five dice.
//! 2. While rolls remain, hold every die showing the most frequent face and
//!    reroll the rest. A frequency tie goes to the lowest face.
//! 3. Score the unused category worth the most for the final dice. A score tie
//!    goes to the category listed first on the scorecard.

use crate::rng::DieSource;
use crate::scorecard::Scorecard;
use crate::scoring::{face_counts, scores_for_dice};
use crate::turn::TurnResolver;
use crate::types::{Category, Dice};

/// Most frequent face in `dice`; the lowest face wins a tie.
pub fn most_common_value(dice: &Dice) -> u8 {
    let counts = face_counts(dice);
    let mut best = 1u8;
    for face in 2..=6u8 {
        if counts[face as usize] > counts[best as usize] {
            best = face;
        }
    }
    best
}

/// Unused category with the strictly greatest score for `dice`.
///
/// Returns `None` only when every category is already scored.
pub fn best_category(dice: &Dice, card: &Scorecard) -> Option<Category> {
    let scores = scores_for_dice(dice);
    let mut best: Option<(Category, u16)> = None;
    for cat in card.unused() {
        let s = scores[cat.index()];
        match best {
            Some((_, top)) if s <= top => {}
            _ => best = Some((cat, s)),
        }
    }
    best.map(|(cat, _)| cat)
}

/// The bot's turn policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiStrategy;

impl AiStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Play a whole turn on `turn` (which should be fresh) and score it on `card`.
    ///
    /// Returns the chosen category, or `None` if nothing could be scored.
    pub fn play_turn<S: DieSource + ?Sized>(
        &self,
        turn: &mut TurnResolver,
        card: &mut Scorecard,
        source: &mut S,
    ) -> Option<Category> {
        let mut hand = turn.roll(source).ok()?;

        while turn.can_roll() {
            let keep = most_common_value(&hand);
            for (i, &d) in hand.iter().enumerate() {
                turn.set_hold(i, d == keep);
            }
            hand = turn.roll(source).ok()?;
        }

        let category = best_category(&hand, card)?;
        match turn.choose(card, category) {
            Ok(result) => {
                log::debug!(
                    "bot scored {:?} with {:?} for {}",
                    category,
                    hand,
                    result.category_score
                );
                Some(category)
            }
            Err(err) => {
                log::warn!("bot could not score {:?}: {}", category, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RandomDice, ScriptedDice};
    use crate::turn::TurnPhase;

    #[test]
    fn test_most_common_value() {
        assert_eq!(most_common_value(&[3, 3, 5, 5, 5]), 5);
        assert_eq!(most_common_value(&[6, 2, 6, 1, 4]), 6);
    }

    #[test]
    fn test_most_common_value_tie_goes_to_lowest_face() {
        assert_eq!(most_common_value(&[5, 5, 2, 2, 6]), 2);
        assert_eq!(most_common_value(&[6, 5, 4, 3, 2]), 2);
        assert_eq!(most_common_value(&[6, 6, 1, 1, 3]), 1);
    }

    #[test]
    fn test_best_category_picks_highest() {
        let card = Scorecard::new();
        assert_eq!(
            best_category(&[2, 3, 4, 5, 6], &card),
            Some(Category::LargeStraight)
        );
        assert_eq!(
            best_category(&[4, 4, 4, 4, 4], &card),
            Some(Category::Yahtzee)
        );
    }

    #[test]
    fn test_best_category_tie_goes_to_first_listed() {
        let card = Scorecard::new();
        // 3K, 4K and Chance all score 26; Sixes is 24.
        assert_eq!(
            best_category(&[6, 6, 6, 6, 2], &card),
            Some(Category::ThreeOfAKind)
        );

        let mut card = Scorecard::new();
        card.update_score(&[1, 1, 1, 1, 1], Category::ThreeOfAKind);
        assert_eq!(
            best_category(&[6, 6, 6, 6, 2], &card),
            Some(Category::FourOfAKind)
        );
        card.update_score(&[1, 1, 1, 1, 1], Category::FourOfAKind);
        assert_eq!(
            best_category(&[6, 6, 6, 6, 2], &card),
            Some(Category::Chance)
        );
    }

    #[test]
    fn test_best_category_skips_used_and_zero_scores() {
        let mut card = Scorecard::new();
        for cat in Category::ALL {
            if cat != Category::Yahtzee {
                card.update_score(&[1, 2, 3, 4, 6], cat);
            }
        }
        // Only Yahtzee is left, and it scores 0 for this hand.
        assert_eq!(
            best_category(&[1, 2, 3, 4, 6], &card),
            Some(Category::Yahtzee)
        );

        card.update_score(&[1, 2, 3, 4, 6], Category::Yahtzee);
        assert_eq!(best_category(&[1, 2, 3, 4, 6], &card), None);
    }

    #[test]
    fn test_play_turn_uses_every_roll_and_holds_the_mode() {
        let ai = AiStrategy::new();
        let mut turn = TurnResolver::new();
        let mut card = Scorecard::new();
        // Roll 1: [3,3,1,2,6] -> hold 3s; roll 2 redraws three dice: [3,5,4];
        // now [3,3,3,5,4] -> hold 3s; roll 3 redraws two: [3,3].
        let mut source = ScriptedDice::new([3, 3, 1, 2, 6, 3, 5, 4, 3, 3]);

        let chosen = ai.play_turn(&mut turn, &mut card, &mut source);

        assert_eq!(turn.phase(), TurnPhase::Done);
        assert_eq!(turn.rolls_left(), 0);
        assert_eq!(turn.dice().hand(), Some([3, 3, 3, 3, 3]));
        assert_eq!(chosen, Some(Category::Yahtzee));
        assert_eq!(card.score(Category::Yahtzee), Some(50));
        assert_eq!(source.draws(), 10);
    }

    #[test]
    fn test_play_turn_is_deterministic_for_a_seed() {
        let ai = AiStrategy::new();
        let play = |seed| {
            let mut card = Scorecard::new();
            let mut dice = RandomDice::seeded(seed);
            let mut turn = TurnResolver::new();
            let mut picks = Vec::new();
            for _ in 0..13 {
                turn.begin();
                picks.push(ai.play_turn(&mut turn, &mut card, &mut dice));
            }
            (picks, card)
        };

        let (picks_a, card_a) = play(99);
        let (picks_b, card_b) = play(99);
        assert_eq!(picks_a, picks_b);
        assert_eq!(card_a, card_b);
        assert!(card_a.is_complete());
        assert!(picks_a.iter().all(Option::is_some));
    }
}
